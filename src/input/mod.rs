pub mod pointer;

pub use pointer::{PointerEvent, SurfaceViewport};
