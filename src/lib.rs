//! Hitplane: coordinate-plane engine for the point-in-region exercise
//!
//! Maps clicks and typed coordinates into graph space, validates the Y
//! field, renders axes, the region and the submission history onto a
//! tiny-skia surface, and serialises submissions to the remote
//! hit-check service.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod platform;
pub mod ui;
