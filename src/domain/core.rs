//! Core domain types and operations
//!
//! This module defines the two coordinate spaces of the plane and the
//! affine map between them. Everything here is pure and has no knowledge
//! of the rendering surface or of the form controls.

/// Point in Cartesian graph space (x right, y up, origin at the centre)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
}

impl GraphPoint {
    pub const ORIGIN: GraphPoint = GraphPoint { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point in surface pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub px: f64,
    pub py: f64,
}

impl ScreenPoint {
    pub fn new(px: f64, py: f64) -> Self {
        Self { px, py }
    }
}

/// Scale, reflect and translate between screen and graph space
///
/// `scale` is in pixels per graph unit. The y axis is reflected so that
/// graph y grows upwards while screen y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    center_x: f64,
    center_y: f64,
    scale: f64,
}

impl Transform {
    /// Creates a transform centred at the given pixel
    pub fn new(center_x: f64, center_y: f64, scale: f64) -> Self {
        Self {
            center_x,
            center_y,
            scale,
        }
    }

    /// Transform with the graph origin at the centre of a `width` x `height` surface
    pub fn centered(width: u32, height: u32, scale: f64) -> Self {
        Self::new(f64::from(width) / 2.0, f64::from(height) / 2.0, scale)
    }

    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Surface position of the graph origin
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.center_x, self.center_y)
    }

    pub fn to_graph(&self, screen: ScreenPoint) -> GraphPoint {
        GraphPoint {
            x: (screen.px - self.center_x) / self.scale,
            y: (self.center_y - screen.py) / self.scale,
        }
    }

    pub fn to_screen(&self, graph: GraphPoint) -> ScreenPoint {
        ScreenPoint {
            px: self.center_x + graph.x * self.scale,
            py: self.center_y - graph.y * self.scale,
        }
    }

    /// Converts a graph-space length into pixels
    pub fn length_to_pixels(&self, length: f64) -> f64 {
        length * self.scale
    }
}

/// Rounds to the nearest multiple of 0.5, ties rounding up
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0 + 0.5).floor() / 2.0
}

/// Ranges a click may write into the form fields
///
/// X is inclusive on both ends, Y is exclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DisplayBounds {
    pub fn accepts_x(&self, x: f64) -> bool {
        x >= self.x_min && x <= self.x_max
    }

    pub fn accepts_y(&self, y: f64) -> bool {
        y > self.y_min && y < self.y_max
    }
}

/// Field values proposed by a click; `None` leaves the field untouched
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldCandidates {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Splits a clicked graph point into candidate X and Y field values
///
/// X is snapped to the half-unit grid before the range check; Y is kept raw.
pub fn clamp_to_display_field(point: GraphPoint, bounds: &DisplayBounds) -> FieldCandidates {
    let rounded_x = round_to_half(point.x);
    FieldCandidates {
        x: bounds.accepts_x(rounded_x).then_some(rounded_x),
        y: bounds.accepts_y(point.y).then_some(point.y),
    }
}

/// Axis-aligned box in graph space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphRect {
    pub min: GraphPoint,
    pub max: GraphPoint,
}

impl GraphRect {
    /// Smallest box containing every given point
    pub fn enclosing(points: &[GraphPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut rect = GraphRect {
            min: *first,
            max: *first,
        };
        for point in rest {
            rect.min.x = rect.min.x.min(point.x);
            rect.min.y = rect.min.y.min(point.y);
            rect.max.x = rect.max.x.max(point.x);
            rect.max.y = rect.max.y.max(point.y);
        }
        Some(rect)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the bounding box that contains both boxes
    pub fn union(&self, other: &GraphRect) -> GraphRect {
        GraphRect {
            min: GraphPoint::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: GraphPoint::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}
