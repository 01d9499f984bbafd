//! Coordinate plane rendering
//!
//! Draws the axes, tick marks, the region for the selected radius and the
//! history markers using tiny-skia. Layout calculation is separated from
//! rasterisation so the geometry can be tested without inspecting pixels.

use std::f64::consts::FRAC_PI_2;
use std::path::PathBuf;
use std::sync::Arc;

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Point, Stroke};

use crate::config::{CanvasConfig, PlaneConfig, RgbaColor, UiText};
use crate::domain::core::{GraphPoint, Transform};
use crate::domain::history::History;
use crate::domain::region::{QuarterDisk, Radius, RegionShape, SubShape};
use crate::ui::label::{Label, LabelPainter};

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("Failed to create {width}x{height} surface for rendering")]
    SurfaceCreationFailed { width: u32, height: u32 },

    #[error("Failed to read font {path:?}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Font data is not a usable TrueType/OpenType font")]
    InvalidFont,
}

// Offsets of the text labels from the point they annotate.
const X_LABEL_OFFSET: (f32, f32) = (-20.0, -10.0);
const Y_LABEL_OFFSET: (f32, f32) = (10.0, 20.0);
const X_TICK_LABEL_DROP: f32 = 20.0;
const Y_TICK_LABEL_INDENT: f32 = 15.0;

/// A single stroked line segment
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub width: f32,
    pub color: Color,
}

/// One cubic Bézier piece of an arc, starting where the previous one ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

/// Screen-space outline of one sub-shape of the region
#[derive(Debug, Clone, PartialEq)]
pub enum RegionOutline {
    Polygon(Vec<Point>),
    /// Pie slice: arc from `start` along `arc`, then straight back to `center`
    Sector {
        center: Point,
        start: Point,
        arc: Vec<CubicSegment>,
    },
}

/// Filled circle marking one history entry
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub hit: bool,
    pub color: Color,
}

/// Pre-calculated layout of one frame
#[derive(Debug, Clone)]
pub struct PlaneLayout {
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Horizontal then vertical axis
    pub axes: Vec<Line>,
    /// Arrowheads at the positive ends, up then right
    pub arrows: Vec<[Point; 3]>,
    pub axis_labels: Vec<Label>,
    pub ticks: Vec<Line>,
    pub tick_labels: Vec<Label>,

    pub region: Vec<RegionOutline>,
    pub region_color: Color,

    /// In history order
    pub markers: Vec<Marker>,
}

impl PlaneLayout {
    /// Lays out a full frame for `radius` on a `width` x `height` surface
    pub fn build(
        style: &CanvasConfig,
        text: &UiText,
        width: u32,
        height: u32,
        transform: &Transform,
        radius: Radius,
        history: &History,
    ) -> Self {
        let mut layout = Self {
            canvas_width: width as f32,
            canvas_height: height as f32,
            axes: Vec::with_capacity(2),
            arrows: Vec::with_capacity(2),
            axis_labels: Vec::with_capacity(2),
            ticks: Vec::new(),
            tick_labels: Vec::new(),
            region: Vec::with_capacity(3),
            region_color: to_color(style.region_color),
            markers: Vec::new(),
        };

        layout.calculate_axes(style, text, transform);
        layout.calculate_ticks(style, transform);
        layout.calculate_region(transform, radius);
        layout.calculate_markers(style, transform, radius, history);

        layout
    }

    fn calculate_axes(&mut self, style: &CanvasConfig, text: &UiText, transform: &Transform) {
        let color = to_color(style.axis_color);
        let cx = transform.center_x() as f32;
        let cy = transform.center_y() as f32;
        let w = self.canvas_width;
        let h = self.canvas_height;

        self.axes.push(Line {
            x1: 0.0,
            y1: cy,
            x2: w,
            y2: cy,
            width: style.axis_width,
            color,
        });
        self.axes.push(Line {
            x1: cx,
            y1: 0.0,
            x2: cx,
            y2: h,
            width: style.axis_width,
            color,
        });

        let size = style.arrow_size;
        self.arrows.push([
            Point::from_xy(cx, 0.0),
            Point::from_xy(cx - size / 2.0, size),
            Point::from_xy(cx + size / 2.0, size),
        ]);
        self.arrows.push([
            Point::from_xy(w, cy),
            Point::from_xy(w - size, cy - size / 2.0),
            Point::from_xy(w - size, cy + size / 2.0),
        ]);

        self.axis_labels.push(Label {
            text: text.x_axis.clone(),
            x: w + X_LABEL_OFFSET.0,
            y: cy + X_LABEL_OFFSET.1,
            font_size: style.font_size,
            color,
        });
        self.axis_labels.push(Label {
            text: text.y_axis.clone(),
            x: cx + Y_LABEL_OFFSET.0,
            y: Y_LABEL_OFFSET.1,
            font_size: style.font_size,
            color,
        });
    }

    /// Ticks every `scale` pixels from the surface edge, labelled on half units
    fn calculate_ticks(&mut self, style: &CanvasConfig, transform: &Transform) {
        let color = to_color(style.axis_color);
        let scale = transform.scale();
        let cx = transform.center_x();
        let cy = transform.center_y();
        let half = style.mark_length / 2.0;

        for i in tick_positions(f64::from(self.canvas_width), scale) {
            let x = i as f32;
            self.ticks.push(Line {
                x1: x,
                y1: cy as f32 - half,
                x2: x,
                y2: cy as f32 + half,
                width: style.axis_width,
                color,
            });
            if i != cx {
                if let Some(text) = tick_text((i - cx) / scale) {
                    self.tick_labels.push(Label {
                        text,
                        x,
                        y: cy as f32 + X_TICK_LABEL_DROP,
                        font_size: style.font_size,
                        color,
                    });
                }
            }
        }

        for i in tick_positions(f64::from(self.canvas_height), scale) {
            let y = i as f32;
            self.ticks.push(Line {
                x1: cx as f32 - half,
                y1: y,
                x2: cx as f32 + half,
                y2: y,
                width: style.axis_width,
                color,
            });
            if i != cy {
                if let Some(text) = tick_text((cy - i) / scale) {
                    self.tick_labels.push(Label {
                        text,
                        x: cx as f32 + Y_TICK_LABEL_INDENT,
                        y,
                        font_size: style.font_size,
                        color,
                    });
                }
            }
        }
    }

    fn calculate_region(&mut self, transform: &Transform, radius: Radius) {
        let shape = RegionShape::new(radius);
        for sub_shape in shape.sub_shapes() {
            let outline = match sub_shape {
                SubShape::Triangle(triangle) => RegionOutline::Polygon(
                    triangle
                        .vertices
                        .iter()
                        .map(|v| to_point(transform, *v))
                        .collect(),
                ),
                SubShape::Rectangle(rectangle) => RegionOutline::Polygon(
                    rectangle
                        .corners
                        .iter()
                        .map(|c| to_point(transform, *c))
                        .collect(),
                ),
                SubShape::QuarterDisk(disk) => RegionOutline::Sector {
                    center: to_point(transform, disk.center),
                    start: to_point(transform, disk.arc_start()),
                    arc: arc_segments(&disk, transform),
                },
            };
            self.region.push(outline);
        }
    }

    fn calculate_markers(
        &mut self,
        style: &CanvasConfig,
        transform: &Transform,
        radius: Radius,
        history: &History,
    ) {
        let hit_color = to_color(style.hit_color);
        let miss_color = to_color(style.miss_color);

        self.markers = history
            .for_radius(radius)
            .map(|entry| {
                let at = to_point(transform, entry.point());
                Marker {
                    x: at.x,
                    y: at.y,
                    radius: style.point_radius,
                    hit: entry.hit,
                    color: if entry.hit { hit_color } else { miss_color },
                }
            })
            .collect();
    }
}

fn tick_positions(extent: f64, step: f64) -> impl Iterator<Item = f64> {
    (0u32..)
        .map(move |k| f64::from(k) * step)
        .take_while(move |&i| step > 0.0 && i <= extent)
}

fn tick_text(value: f64) -> Option<String> {
    (value.abs() % 0.5 == 0.0).then(|| format!("{value:.1}"))
}

fn to_color(color: RgbaColor) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn to_point(transform: &Transform, point: GraphPoint) -> Point {
    let screen = transform.to_screen(point);
    Point::from_xy(screen.px as f32, screen.py as f32)
}

/// Cubic approximation of the disk's arc, one piece per quarter turn
///
/// Control points are placed in graph space and mapped afterwards; the map
/// is affine so the curve stays exact under it.
fn arc_segments(disk: &QuarterDisk, transform: &Transform) -> Vec<CubicSegment> {
    let pieces = (disk.sweep.abs() / FRAC_PI_2).ceil().max(1.0) as u32;
    let step = disk.sweep / f64::from(pieces);
    let k = disk.radius * 4.0 / 3.0 * (step / 4.0).tan();

    (0..pieces)
        .map(|piece| {
            let a0 = disk.start_angle + step * f64::from(piece);
            let a1 = a0 + step;
            let p0 = disk.point_at(a0);
            let p3 = disk.point_at(a1);
            let c1 = GraphPoint::new(p0.x - k * a0.sin(), p0.y + k * a0.cos());
            let c2 = GraphPoint::new(p3.x + k * a1.sin(), p3.y - k * a1.cos());
            CubicSegment {
                ctrl1: to_point(transform, c1),
                ctrl2: to_point(transform, c2),
                to: to_point(transform, p3),
            }
        })
        .collect()
}

/// Plane renderer backed by tiny-skia
#[derive(Debug)]
pub struct PlaneRenderer {
    config: Arc<PlaneConfig>,
    labels: LabelPainter,
    frames_rendered: u64,
}

impl PlaneRenderer {
    /// Creates a renderer, loading the label font if one is configured
    pub fn new(config: Arc<PlaneConfig>) -> Result<Self, RendererError> {
        let labels = match config.canvas.font_path.as_deref() {
            Some(path) => LabelPainter::from_file(path)?,
            None => {
                log::debug!("No label font configured; labels are laid out only");
                LabelPainter::without_font()
            }
        };
        Ok(Self::with_labels(config, labels))
    }

    pub fn with_labels(config: Arc<PlaneConfig>, labels: LabelPainter) -> Self {
        Self {
            config,
            labels,
            frames_rendered: 0,
        }
    }

    /// Allocates a surface of the configured canvas size
    pub fn create_surface(&self) -> Result<Pixmap, RendererError> {
        let width = self.config.canvas.width;
        let height = self.config.canvas.height;
        Pixmap::new(width, height).ok_or(RendererError::SurfaceCreationFailed { width, height })
    }

    pub fn layout(
        &self,
        width: u32,
        height: u32,
        transform: &Transform,
        radius: Radius,
        history: &History,
    ) -> PlaneLayout {
        PlaneLayout::build(
            &self.config.canvas,
            &self.config.text,
            width,
            height,
            transform,
            radius,
            history,
        )
    }

    /// Redraws the whole surface for `radius` and the matching history entries
    pub fn render(
        &mut self,
        surface: &mut Pixmap,
        transform: &Transform,
        radius: Radius,
        history: &History,
    ) {
        let layout = self.layout(surface.width(), surface.height(), transform, radius, history);

        surface.fill(Color::TRANSPARENT);

        render_lines(surface, &layout.axes);
        render_arrows(surface, &layout.arrows, layout.axes.first().map(|a| a.color));
        for label in &layout.axis_labels {
            self.labels.draw(surface, label);
        }
        render_lines(surface, &layout.ticks);
        for label in &layout.tick_labels {
            self.labels.draw(surface, label);
        }
        render_region(surface, &layout.region, layout.region_color);
        render_markers(surface, &layout.markers);

        self.frames_rendered += 1;
        log::debug!(
            "Rendered frame {} for r={} with {} markers",
            self.frames_rendered,
            radius,
            layout.markers.len()
        );
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn has_label_font(&self) -> bool {
        self.labels.has_font()
    }
}

fn fill_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

fn render_lines(pixmap: &mut Pixmap, lines: &[Line]) {
    for line in lines {
        let mut path_builder = PathBuilder::new();
        path_builder.move_to(line.x1, line.y1);
        path_builder.line_to(line.x2, line.y2);

        if let Some(path) = path_builder.finish() {
            let stroke = Stroke {
                width: line.width,
                ..Stroke::default()
            };
            pixmap.stroke_path(
                &path,
                &fill_paint(line.color),
                &stroke,
                tiny_skia::Transform::identity(),
                None,
            );
        }
    }
}

fn render_arrows(pixmap: &mut Pixmap, arrows: &[[Point; 3]], color: Option<Color>) {
    let Some(color) = color else {
        return;
    };
    let paint = fill_paint(color);
    for [tip, left, right] in arrows {
        let mut path_builder = PathBuilder::new();
        path_builder.move_to(tip.x, tip.y);
        path_builder.line_to(left.x, left.y);
        path_builder.line_to(right.x, right.y);
        path_builder.close();
        if let Some(path) = path_builder.finish() {
            pixmap.fill_path(
                &path,
                &paint,
                FillRule::Winding,
                tiny_skia::Transform::identity(),
                None,
            );
        }
    }
}

/// Fills each sub-shape on its own so overlaps compose translucently
fn render_region(pixmap: &mut Pixmap, region: &[RegionOutline], color: Color) {
    let paint = fill_paint(color);
    for outline in region {
        let mut path_builder = PathBuilder::new();
        match outline {
            RegionOutline::Polygon(points) => {
                let [first, rest @ ..] = points.as_slice() else {
                    continue;
                };
                path_builder.move_to(first.x, first.y);
                for point in rest {
                    path_builder.line_to(point.x, point.y);
                }
            }
            RegionOutline::Sector { center, start, arc } => {
                path_builder.move_to(start.x, start.y);
                for segment in arc {
                    path_builder.cubic_to(
                        segment.ctrl1.x,
                        segment.ctrl1.y,
                        segment.ctrl2.x,
                        segment.ctrl2.y,
                        segment.to.x,
                        segment.to.y,
                    );
                }
                path_builder.line_to(center.x, center.y);
            }
        }
        path_builder.close();

        if let Some(path) = path_builder.finish() {
            pixmap.fill_path(
                &path,
                &paint,
                FillRule::Winding,
                tiny_skia::Transform::identity(),
                None,
            );
        }
    }
}

fn render_markers(pixmap: &mut Pixmap, markers: &[Marker]) {
    for marker in markers {
        if let Some(path) = PathBuilder::from_circle(marker.x, marker.y, marker.radius) {
            pixmap.fill_path(
                &path,
                &fill_paint(marker.color),
                FillRule::Winding,
                tiny_skia::Transform::identity(),
                None,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::SubmissionResult;
    use chrono::NaiveDate;

    fn entry(x: f64, y: f64, r: f64, hit: bool) -> SubmissionResult {
        SubmissionResult {
            x,
            y,
            r,
            hit,
            timestamp: NaiveDate::from_ymd_opt(2024, 10, 19)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            exec_time_nanos: 1500,
        }
    }

    fn history(entries: Vec<SubmissionResult>) -> History {
        let mut history = History::new();
        history.replace(entries);
        history
    }

    fn reference_layout(radius: Radius, history: &History) -> PlaneLayout {
        let config = PlaneConfig::default();
        PlaneLayout::build(
            &config.canvas,
            &config.text,
            400,
            400,
            &Transform::centered(400, 400, 40.0),
            radius,
            history,
        )
    }

    fn renderer() -> PlaneRenderer {
        PlaneRenderer::new(Arc::new(PlaneConfig::default())).unwrap()
    }

    fn pixel(surface: &Pixmap, x: u32, y: u32) -> tiny_skia::ColorU8 {
        surface.pixel(x, y).unwrap().demultiply()
    }

    #[test]
    fn axes_run_through_the_centre_across_the_surface() {
        let layout = reference_layout(Radius::One, &History::new());

        assert_eq!(layout.axes.len(), 2);
        let horizontal = &layout.axes[0];
        assert_eq!((horizontal.x1, horizontal.y1), (0.0, 200.0));
        assert_eq!((horizontal.x2, horizontal.y2), (400.0, 200.0));
        let vertical = &layout.axes[1];
        assert_eq!((vertical.x1, vertical.y1), (200.0, 0.0));
        assert_eq!((vertical.x2, vertical.y2), (200.0, 400.0));

        assert_eq!(layout.arrows[0][0], Point::from_xy(200.0, 0.0));
        assert_eq!(layout.arrows[1][0], Point::from_xy(400.0, 200.0));

        let labels: Vec<_> = layout.axis_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, ["X", "Y"]);
        assert_eq!((layout.axis_labels[0].x, layout.axis_labels[0].y), (380.0, 190.0));
        assert_eq!((layout.axis_labels[1].x, layout.axis_labels[1].y), (210.0, 20.0));
    }

    #[test]
    fn ticks_every_unit_with_half_unit_labels() {
        let layout = reference_layout(Radius::One, &History::new());

        // 0, 40, ..., 400 on each axis
        assert_eq!(layout.ticks.len(), 22);
        // Every tick but the origin is a whole unit
        assert_eq!(layout.tick_labels.len(), 20);

        let texts: Vec<_> = layout.tick_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts[0], "-5.0");
        assert_eq!(texts[9], "5.0");
        assert!(texts.contains(&"1.0"));
        assert!(!texts.contains(&"0.0"));

        let first_y = &layout.tick_labels[10];
        assert_eq!((first_y.x, first_y.y, first_y.text.as_str()), (215.0, 0.0, "5.0"));
    }

    #[test]
    fn ticks_off_the_half_unit_grid_are_unlabelled() {
        let config = PlaneConfig::default();
        let layout = PlaneLayout::build(
            &config.canvas,
            &config.text,
            400,
            400,
            &Transform::centered(400, 400, 30.0),
            Radius::One,
            &History::new(),
        );

        assert_eq!(layout.ticks.len(), 28);
        assert!(layout.tick_labels.is_empty());
    }

    #[test]
    fn region_outline_matches_domain_shapes_for_every_radius() {
        let transform = Transform::centered(400, 400, 40.0);
        for radius in Radius::ALL {
            let layout = reference_layout(radius, &History::new());
            let shape = RegionShape::new(radius);
            assert_eq!(layout.region.len(), 3);

            let triangle: Vec<_> = shape
                .triangle()
                .vertices
                .iter()
                .map(|v| to_point(&transform, *v))
                .collect();
            assert_eq!(layout.region[0], RegionOutline::Polygon(triangle));

            let rectangle: Vec<_> = shape
                .rectangle()
                .corners
                .iter()
                .map(|c| to_point(&transform, *c))
                .collect();
            assert_eq!(layout.region[1], RegionOutline::Polygon(rectangle));

            let RegionOutline::Sector { center, start, arc } = &layout.region[2] else {
                panic!("quarter disk should be a sector");
            };
            let disk = shape.quarter_disk();
            assert_eq!(*center, Point::from_xy(200.0, 200.0));
            assert_eq!(*start, to_point(&transform, disk.arc_start()));
            let end = arc.last().unwrap().to;
            let expected = to_point(&transform, disk.arc_end());
            assert!((end.x - expected.x).abs() < 1e-3 && (end.y - expected.y).abs() < 1e-3);
        }
    }

    #[test]
    fn sector_spans_left_and_below_on_screen() {
        let layout = reference_layout(Radius::Two, &History::new());
        let RegionOutline::Sector { start, arc, .. } = &layout.region[2] else {
            panic!("quarter disk should be a sector");
        };
        // Graph angle pi is left of the centre, 3pi/2 is below it.
        assert_eq!(*start, Point::from_xy(120.0, 200.0));
        let end = arc[0].to;
        assert!((end.x - 200.0).abs() < 1e-3 && (end.y - 280.0).abs() < 1e-3);
    }

    #[test]
    fn markers_follow_history_for_selected_radius_only() {
        let history = history(vec![
            entry(1.0, 2.0, 2.0, true),
            entry(0.5, -1.0, 1.0, false),
            entry(-1.0, 0.5, 2.0, false),
        ]);
        let layout = reference_layout(Radius::Two, &history);

        assert_eq!(layout.markers.len(), 2);
        assert_eq!((layout.markers[0].x, layout.markers[0].y), (240.0, 120.0));
        assert!(layout.markers[0].hit);
        assert_eq!(layout.markers[0].color, Color::from_rgba8(0, 128, 0, 255));
        assert_eq!((layout.markers[1].x, layout.markers[1].y), (160.0, 180.0));
        assert_eq!(layout.markers[1].color, Color::from_rgba8(255, 0, 0, 255));
    }

    #[test]
    fn renders_region_and_clears_it_on_radius_change() {
        let mut renderer = renderer();
        let mut surface = renderer.create_surface().unwrap();
        let transform = Transform::centered(400, 400, 40.0);

        renderer.render(&mut surface, &transform, Radius::Two, &History::new());
        // Graph (-1.5, 0.25) lies in the rectangle for r = 2
        let inside = pixel(&surface, 140, 190);
        assert_eq!(inside.alpha(), 128);
        assert!(inside.blue() > inside.green() && inside.green() > inside.red());
        // Graph (-1, -1) lies in the quarter disk
        assert_eq!(pixel(&surface, 160, 240).alpha(), 128);

        renderer.render(&mut surface, &transform, Radius::One, &History::new());
        assert_eq!(pixel(&surface, 140, 190).alpha(), 0);
        assert_eq!(renderer.frames_rendered(), 2);
    }

    #[test]
    fn hit_marker_is_drawn_in_hit_colour() {
        let mut renderer = renderer();
        let mut surface = renderer.create_surface().unwrap();
        let history = history(vec![entry(1.0, 2.0, 2.0, true)]);

        renderer.render(
            &mut surface,
            &Transform::centered(400, 400, 40.0),
            Radius::Two,
            &history,
        );

        let marker = pixel(&surface, 240, 120);
        assert_eq!(
            (marker.red(), marker.green(), marker.blue(), marker.alpha()),
            (0, 128, 0, 255)
        );
    }

    #[test]
    fn render_starts_from_a_cleared_surface() {
        let mut renderer = renderer();
        let mut surface = renderer.create_surface().unwrap();
        surface.fill(Color::from_rgba8(255, 0, 0, 255));

        renderer.render(
            &mut surface,
            &Transform::centered(400, 400, 40.0),
            Radius::One,
            &History::new(),
        );

        assert_eq!(pixel(&surface, 5, 5).alpha(), 0);
        assert_eq!(pixel(&surface, 395, 395).alpha(), 0);
    }

    #[test]
    fn off_canvas_markers_are_clipped() {
        let mut renderer = renderer();
        let mut surface = renderer.create_surface().unwrap();
        let history = history(vec![entry(40.0, -40.0, 1.0, false)]);

        renderer.render(
            &mut surface,
            &Transform::centered(400, 400, 40.0),
            Radius::One,
            &history,
        );
        assert_eq!(renderer.frames_rendered(), 1);
    }

    #[test]
    fn zero_sized_surface_cannot_be_created() {
        let mut config = PlaneConfig::default();
        config.canvas.width = 0;
        let renderer = PlaneRenderer::new(Arc::new(config)).unwrap();

        assert!(matches!(
            renderer.create_surface(),
            Err(RendererError::SurfaceCreationFailed { width: 0, height: 400 })
        ));
    }

    #[test]
    fn missing_font_file_is_reported() {
        let mut config = PlaneConfig::default();
        config.canvas.font_path = Some(PathBuf::from("/nonexistent/hitplane/label.ttf"));

        let result = PlaneRenderer::new(Arc::new(config));
        assert!(matches!(result, Err(RendererError::FontRead { .. })));
    }
}
