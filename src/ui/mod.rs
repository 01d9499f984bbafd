//! Drawing and transient feedback
//!
//! Rendering of the coordinate plane onto a tiny-skia surface plus the
//! popup slots used for the field tooltip and server notifications.

pub mod label;
pub mod popup;
pub mod renderer;

pub use label::{Label, LabelPainter};
pub use popup::{PopupSlot, PopupTiming};
pub use renderer::{PlaneLayout, PlaneRenderer, RendererError};
