//! Configuration module for hitplane
//!
//! Sizes, colours, ranges, strings and timings live in one immutable
//! value constructed at startup and passed to each component.

pub mod plane;

pub use plane::{
    ApiConfig, CanvasConfig, ConfigError, PlaneConfig, RgbaColor, TimingConfig, UiText,
    ValidationConfig,
};
