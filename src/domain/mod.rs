//! Domain logic and core data structures
//!
//! This module contains pure logic that is independent of the rendering
//! surface, the form controls and the network.

pub mod core;
pub mod history;
pub mod region;
pub mod validation;
