use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::domain::core::DisplayBounds;
use crate::domain::region::Radius;

/// Straight (non-premultiplied) RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Surface size, scale and drawing style
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Pixels per graph unit
    pub scale: f64,
    pub axis_color: RgbaColor,
    pub axis_width: f32,
    pub region_color: RgbaColor,
    pub hit_color: RgbaColor,
    pub miss_color: RgbaColor,
    pub point_radius: f32,
    pub mark_length: f32,
    pub arrow_size: f32,
    pub font_size: f32,
    /// TrueType/OpenType font used for labels; labels are only laid out when absent
    pub font_path: Option<PathBuf>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            scale: 40.0,
            axis_color: RgbaColor::rgb(0x34, 0x36, 0x3d),
            axis_width: 2.0,
            region_color: RgbaColor::rgba(100, 149, 237, 128),
            hit_color: RgbaColor::rgb(0, 128, 0),
            miss_color: RgbaColor::rgb(255, 0, 0),
            point_radius: 5.0,
            mark_length: 10.0,
            arrow_size: 10.0,
            font_size: 20.0,
            font_path: None,
        }
    }
}

/// Accepted ranges for the form fields and the radius set
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub radii: Vec<Radius>,
}

impl ValidationConfig {
    pub fn display_bounds(&self) -> DisplayBounds {
        DisplayBounds {
            x_min: self.x_min,
            x_max: self.x_max,
            y_min: self.y_min,
            y_max: self.y_max,
        }
    }

    /// Radius selected when the plane is first shown
    pub fn initial_radius(&self) -> Radius {
        self.radii.first().copied().unwrap_or(Radius::One)
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            x_min: -2.0,
            x_max: 2.0,
            y_min: -5.0,
            y_max: 5.0,
            radii: Radius::ALL.to_vec(),
        }
    }
}

/// Fixed user-facing strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiText {
    pub x_axis: String,
    pub y_axis: String,
    pub number_required: String,
    pub range_required: String,
    pub field_required: String,
    pub server_error: String,
    pub invalid_data: String,
}

impl Default for UiText {
    fn default() -> Self {
        Self {
            x_axis: "X".to_owned(),
            y_axis: "Y".to_owned(),
            number_required: "Y should be a number".to_owned(),
            range_required: "Y must be strictly within (-5; 5)".to_owned(),
            field_required: "Y field cannot be empty".to_owned(),
            server_error: "Server error".to_owned(),
            invalid_data: "Invalid data, check your input.".to_owned(),
        }
    }
}

/// Delays driving debounced validation and popup lifecycles, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    pub tooltip_show_ms: u64,
    pub tooltip_hide_ms: u64,
    pub fade_out_ms: u64,
    pub notification_ms: u64,
    pub debounce_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tooltip_show_ms: 10,
            tooltip_hide_ms: 3000,
            fade_out_ms: 300,
            notification_ms: 4000,
            debounce_ms: 300,
        }
    }
}

/// Location of the hit-check service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_owned(),
            endpoint: "/hitcheck".to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Immutable configuration shared by every component
///
/// Built once at startup, validated, then handed to components by `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaneConfig {
    pub canvas: CanvasConfig,
    pub validation: ValidationConfig,
    pub text: UiText,
    pub timing: TimingConfig,
    pub api: ApiConfig,
}

impl PlaneConfig {
    pub const MAX_CANVAS_SIDE: u32 = 4096;
    /// Smallest accepted scale, at most one tick per pixel
    pub const MIN_SCALE: f64 = 1.0;

    /// Reference configuration pointed at a specific service
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.api.base_url = base_url.into();
        config
    }

    /// Checks that the configuration can drive a plane
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas = &self.canvas;
        if canvas.width == 0
            || canvas.height == 0
            || canvas.width > Self::MAX_CANVAS_SIDE
            || canvas.height > Self::MAX_CANVAS_SIDE
        {
            return Err(ConfigError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }

        if !canvas.scale.is_finite() || canvas.scale < Self::MIN_SCALE {
            return Err(ConfigError::InvalidScale(canvas.scale));
        }

        let validation = &self.validation;
        if validation.x_min > validation.x_max {
            return Err(ConfigError::InvertedRange {
                field: "x",
                min: validation.x_min,
                max: validation.x_max,
            });
        }
        if validation.y_min >= validation.y_max {
            return Err(ConfigError::InvertedRange {
                field: "y",
                min: validation.y_min,
                max: validation.y_max,
            });
        }

        if validation.radii.is_empty() {
            return Err(ConfigError::NoRadii);
        }

        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Canvas size {width}x{height} is not usable")]
    InvalidCanvas { width: u32, height: u32 },
    #[error("Scale must be at least one pixel per unit, got {0}")]
    InvalidScale(f64),
    #[error("Range for {field} is inverted: [{min}, {max}]")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("At least one radius must be selectable")]
    NoRadii,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_configuration() {
        let config = PlaneConfig::default();
        assert_eq!(config.canvas.width, 400);
        assert_eq!(config.canvas.height, 400);
        assert_eq!(config.canvas.scale, 40.0);
        assert_eq!(config.validation.radii.len(), 5);
        assert_eq!(config.validation.initial_radius(), Radius::One);
        assert_eq!(config.timing.debounce_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn url_joins_base_and_endpoint() {
        let config = PlaneConfig::with_base_url("http://example.test/app/");
        assert_eq!(config.api.url(), "http://example.test/app/hitcheck");
    }

    #[test]
    fn rejects_unusable_canvas() {
        let mut config = PlaneConfig::default();
        config.canvas.width = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidCanvas {
                width: 0,
                height: 400
            })
        );
    }

    #[test]
    fn rejects_non_positive_scale() {
        let mut config = PlaneConfig::default();
        config.canvas.scale = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScale(_))));
    }

    #[test]
    fn rejects_sub_pixel_scale() {
        let mut config = PlaneConfig::default();
        for scale in [0.01, 1e-9, 0.999] {
            config.canvas.scale = scale;
            assert_eq!(config.validate(), Err(ConfigError::InvalidScale(scale)));
        }

        config.canvas.scale = PlaneConfig::MIN_SCALE;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_y_range_and_missing_radii() {
        let mut config = PlaneConfig::default();
        config.validation.y_min = 5.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { field: "y", .. })
        ));

        let mut config = PlaneConfig::default();
        config.validation.radii.clear();
        assert_eq!(config.validate(), Err(ConfigError::NoRadii));
    }
}
