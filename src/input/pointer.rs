//! Pointer input on the coordinate plane
//!
//! The surface may be displayed at a different size than its pixel
//! dimensions, so clicks arrive in client coordinates and are scaled back
//! into surface pixels before the graph transform is applied.

use crate::domain::core::ScreenPoint;

/// Pointer events the plane reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button click at client coordinates
    Click { client_x: f64, client_y: f64 },
}

/// Where and how large the surface is displayed in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceViewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceViewport {
    /// Viewport showing a surface at its native size at the client origin
    pub fn native(surface_width: u32, surface_height: u32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: f64::from(surface_width),
            height: f64::from(surface_height),
        }
    }

    /// Maps a client position into surface pixels
    ///
    /// Returns `None` while the surface is collapsed to zero size.
    pub fn to_surface(
        &self,
        client_x: f64,
        client_y: f64,
        surface_width: u32,
        surface_height: u32,
    ) -> Option<ScreenPoint> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }

        let scale_x = f64::from(surface_width) / self.width;
        let scale_y = f64::from(surface_height) / self.height;
        Some(ScreenPoint::new(
            (client_x - self.left) * scale_x,
            (client_y - self.top) * scale_y,
        ))
    }
}
