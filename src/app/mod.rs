//! Application orchestration layer
//!
//! This module coordinates between input, domain, UI, and platform layers.
//! It owns the plane state, the timers and the submission flow.

pub mod controller;
pub mod state;
pub mod timers;

pub use controller::{AppError, PlaneController, SubmitError};
pub use state::{AppEvent, FormState, SubmissionPhase, TimerEvent};
