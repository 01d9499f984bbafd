//! External collaborators
//!
//! This module encapsulates all interaction with systems outside the
//! process and exposes them to the rest of the crate behind traits.

pub mod hitcheck;

pub use hitcheck::{HitCheckError, HitCheckService, HitRequest, HttpHitCheck};
