//! Text labels rasterised from font outlines
//!
//! Glyph outlines from ab_glyph are converted into tiny-skia paths so
//! labels are filled with the same anti-aliased pipeline as every other
//! shape on the plane.

use std::path::Path;

use ab_glyph::{Font, FontVec, GlyphId, OutlineCurve, PxScale, ScaleFont};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::ui::renderer::RendererError;

/// A piece of text anchored at its baseline start
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    /// Alphabetic baseline
    pub y: f32,
    pub font_size: f32,
    pub color: Color,
}

/// Draws labels when a font is available
#[derive(Debug, Default)]
pub struct LabelPainter {
    font: Option<FontVec>,
}

impl LabelPainter {
    /// Painter without a font; labels are skipped
    pub fn without_font() -> Self {
        Self { font: None }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, RendererError> {
        let font = FontVec::try_from_vec(bytes).map_err(|_| RendererError::InvalidFont)?;
        Ok(Self { font: Some(font) })
    }

    pub fn from_file(path: &Path) -> Result<Self, RendererError> {
        let bytes = std::fs::read(path).map_err(|source| RendererError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes)
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Fills `label` onto the pixmap; a no-op without a font
    pub fn draw(&self, pixmap: &mut Pixmap, label: &Label) {
        let Some(font) = self.font.as_ref() else {
            return;
        };
        let Some(path) = text_path(font, label) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(label.color);
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

fn text_path(font: &FontVec, label: &Label) -> Option<tiny_skia::Path> {
    let scaled = font.as_scaled(PxScale::from(label.font_size));
    let h_factor = scaled.h_scale_factor();
    let v_factor = scaled.v_scale_factor();

    let mut builder = PathBuilder::new();
    let mut caret = label.x;
    let mut previous: Option<GlyphId> = None;

    for ch in label.text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }

        if let Some(outline) = font.outline(id) {
            let origin_x = caret;
            // Font units are y-up; the surface is y-down from the baseline.
            let map = |p: ab_glyph::Point| (origin_x + p.x * h_factor, label.y - p.y * v_factor);
            let mut cursor: Option<ab_glyph::Point> = None;

            for curve in &outline.curves {
                let (start, end) = match curve {
                    OutlineCurve::Line(p0, p1) => (*p0, *p1),
                    OutlineCurve::Quad(p0, _, p2) => (*p0, *p2),
                    OutlineCurve::Cubic(p0, _, _, p3) => (*p0, *p3),
                };

                if cursor != Some(start) {
                    if cursor.is_some() {
                        builder.close();
                    }
                    let (x, y) = map(start);
                    builder.move_to(x, y);
                }

                match curve {
                    OutlineCurve::Line(_, p1) => {
                        let (x, y) = map(*p1);
                        builder.line_to(x, y);
                    }
                    OutlineCurve::Quad(_, c, p2) => {
                        let (cx, cy) = map(*c);
                        let (x, y) = map(*p2);
                        builder.quad_to(cx, cy, x, y);
                    }
                    OutlineCurve::Cubic(_, c0, c1, p3) => {
                        let (c0x, c0y) = map(*c0);
                        let (c1x, c1y) = map(*c1);
                        let (x, y) = map(*p3);
                        builder.cubic_to(c0x, c0y, c1x, c1y, x, y);
                    }
                }
                cursor = Some(end);
            }

            if cursor.is_some() {
                builder.close();
            }
        }

        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text: &str) -> Label {
        Label {
            text: text.to_owned(),
            x: 10.0,
            y: 20.0,
            font_size: 20.0,
            color: Color::BLACK,
        }
    }

    #[test]
    fn painter_without_font_leaves_surface_untouched() {
        let painter = LabelPainter::without_font();
        assert!(!painter.has_font());

        let mut pixmap = Pixmap::new(40, 40).unwrap();
        painter.draw(&mut pixmap, &label("X"));
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn rejects_invalid_font_data() {
        let result = LabelPainter::from_bytes(vec![0u8; 16]);
        assert!(matches!(result, Err(RendererError::InvalidFont)));
    }

    #[test]
    fn reports_missing_font_file() {
        let result = LabelPainter::from_file(Path::new("/nonexistent/hitplane/font.ttf"));
        assert!(matches!(result, Err(RendererError::FontRead { .. })));
    }
}
