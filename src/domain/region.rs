//! Radius selection and the composite region geometry
//!
//! The region is the union of a triangle, a rectangle and a quarter-disk
//! that all touch the graph origin. This module only describes their
//! boundaries; membership is decided by the remote hit-check service and
//! the renderer draws exactly these descriptions so both agree.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use crate::domain::core::{GraphPoint, GraphRect};

/// Selectable radius values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radius {
    One,
    OneAndHalf,
    Two,
    TwoAndHalf,
    Three,
}

impl Radius {
    pub const ALL: [Radius; 5] = [
        Radius::One,
        Radius::OneAndHalf,
        Radius::Two,
        Radius::TwoAndHalf,
        Radius::Three,
    ];

    pub fn value(self) -> f64 {
        match self {
            Radius::One => 1.0,
            Radius::OneAndHalf => 1.5,
            Radius::Two => 2.0,
            Radius::TwoAndHalf => 2.5,
            Radius::Three => 3.0,
        }
    }

    /// Maps a numeric radius back onto the enumerated set
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|radius| (radius.value() - value).abs() < Self::MATCH_EPSILON)
    }

    /// Whether a radius reported by the service is this one
    pub fn matches(self, value: f64) -> bool {
        (self.value() - value).abs() < Self::MATCH_EPSILON
    }

    const MATCH_EPSILON: f64 = 1e-9;
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Right triangle in the first quadrant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [GraphPoint; 3],
}

/// Axis-aligned rectangle in the second quadrant, listed as a closed outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub corners: [GraphPoint; 4],
}

/// Quarter of a disk centred at the origin
///
/// Angles are graph-space radians measured counter-clockwise from +x;
/// the sector sweeps counter-clockwise from `start_angle` by `sweep`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterDisk {
    pub center: GraphPoint,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl QuarterDisk {
    /// Point on the arc at the given graph-space angle
    pub fn point_at(&self, angle: f64) -> GraphPoint {
        GraphPoint::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn arc_start(&self) -> GraphPoint {
        self.point_at(self.start_angle)
    }

    pub fn arc_end(&self) -> GraphPoint {
        self.point_at(self.start_angle + self.sweep)
    }

    pub fn bounds(&self) -> GraphRect {
        let start = self.arc_start();
        let end = self.arc_end();
        // A quarter sector's box is spanned by its centre and both arc ends.
        GraphRect::enclosing(&[self.center, start, end]).unwrap_or(GraphRect {
            min: self.center,
            max: self.center,
        })
    }
}

/// One of the three pieces of the region
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubShape {
    Triangle(Triangle),
    Rectangle(Rectangle),
    QuarterDisk(QuarterDisk),
}

impl SubShape {
    pub fn bounds(&self) -> GraphRect {
        match self {
            SubShape::Triangle(triangle) => enclosing_or_origin(&triangle.vertices),
            SubShape::Rectangle(rectangle) => enclosing_or_origin(&rectangle.corners),
            SubShape::QuarterDisk(disk) => disk.bounds(),
        }
    }
}

fn enclosing_or_origin(points: &[GraphPoint]) -> GraphRect {
    GraphRect::enclosing(points).unwrap_or(GraphRect {
        min: GraphPoint::ORIGIN,
        max: GraphPoint::ORIGIN,
    })
}

/// Boundary description of the region for one radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionShape {
    radius: Radius,
    triangle: Triangle,
    rectangle: Rectangle,
    quarter_disk: QuarterDisk,
}

impl RegionShape {
    /// Builds the three sub-shapes scaled by `radius`
    pub fn new(radius: Radius) -> Self {
        let r = radius.value();
        let half = r / 2.0;

        let triangle = Triangle {
            vertices: [
                GraphPoint::ORIGIN,
                GraphPoint::new(half, 0.0),
                GraphPoint::new(0.0, half),
            ],
        };

        let rectangle = Rectangle {
            corners: [
                GraphPoint::ORIGIN,
                GraphPoint::new(-r, 0.0),
                GraphPoint::new(-r, half),
                GraphPoint::new(0.0, half),
            ],
        };

        let quarter_disk = QuarterDisk {
            center: GraphPoint::ORIGIN,
            radius: r,
            start_angle: PI,
            sweep: FRAC_PI_2,
        };

        Self {
            radius,
            triangle,
            rectangle,
            quarter_disk,
        }
    }

    pub fn radius(&self) -> Radius {
        self.radius
    }

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    pub fn quarter_disk(&self) -> &QuarterDisk {
        &self.quarter_disk
    }

    /// Sub-shapes in drawing order
    pub fn sub_shapes(&self) -> [SubShape; 3] {
        [
            SubShape::Triangle(self.triangle),
            SubShape::Rectangle(self.rectangle),
            SubShape::QuarterDisk(self.quarter_disk),
        ]
    }

    /// Bounding box of the whole region
    pub fn bounds(&self) -> GraphRect {
        let [first, rest @ ..] = self.sub_shapes();
        rest.iter()
            .fold(first.bounds(), |acc, shape| acc.union(&shape.bounds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(actual: GraphPoint, expected: GraphPoint) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn radius_values_round_trip() {
        for radius in Radius::ALL {
            assert_eq!(Radius::from_value(radius.value()), Some(radius));
            assert!(radius.matches(radius.value()));
        }
        assert_eq!(Radius::from_value(4.0), None);
        assert_eq!(Radius::OneAndHalf.to_string(), "1.5");
        assert_eq!(Radius::Two.to_string(), "2");
    }

    #[test]
    fn sub_shapes_match_definitions_for_every_radius() {
        for radius in Radius::ALL {
            let r = radius.value();
            let shape = RegionShape::new(radius);

            assert_eq!(
                shape.triangle().vertices,
                [
                    GraphPoint::new(0.0, 0.0),
                    GraphPoint::new(r / 2.0, 0.0),
                    GraphPoint::new(0.0, r / 2.0)
                ]
            );
            assert_eq!(
                shape.rectangle().corners,
                [
                    GraphPoint::new(0.0, 0.0),
                    GraphPoint::new(-r, 0.0),
                    GraphPoint::new(-r, r / 2.0),
                    GraphPoint::new(0.0, r / 2.0)
                ]
            );

            let disk = shape.quarter_disk();
            assert_eq!(disk.center, GraphPoint::ORIGIN);
            assert_eq!(disk.radius, r);
            assert_close(disk.arc_start(), GraphPoint::new(-r, 0.0));
            assert_close(disk.arc_end(), GraphPoint::new(0.0, -r));
        }
    }

    #[test]
    fn region_bounds_cover_all_three_pieces() {
        let shape = RegionShape::new(Radius::Two);
        let bounds = shape.bounds();
        assert!((bounds.min.x + 2.0).abs() < EPSILON);
        assert!((bounds.min.y + 2.0).abs() < EPSILON);
        assert!((bounds.max.x - 1.0).abs() < EPSILON);
        assert!((bounds.max.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn geometry_is_stable_across_rebuilds() {
        for radius in Radius::ALL {
            assert_eq!(RegionShape::new(radius), RegionShape::new(radius));
        }
    }

    #[test]
    fn quarter_disk_lies_in_third_quadrant() {
        let bounds = SubShape::QuarterDisk(*RegionShape::new(Radius::Three).quarter_disk()).bounds();
        assert!(bounds.max.x.abs() < EPSILON);
        assert!(bounds.max.y.abs() < EPSILON);
        assert!((bounds.min.x + 3.0).abs() < EPSILON);
        assert!((bounds.min.y + 3.0).abs() < EPSILON);
    }
}
