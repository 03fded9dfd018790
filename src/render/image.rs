//! Glyph rasterization using tiny-skia
//!
//! These functions stroke vector glyphs onto an RgbaImage for saving to disk.

use image::RgbaImage;
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::geometry::{self, BEZIER_K};
use crate::config::StrokeColor;
use crate::domain::{EllipseOutline, Glyph, LineSegment};

/// Convert RgbaImage to Pixmap, apply drawing function, and copy back
fn with_pixmap(img: &mut RgbaImage, f: impl FnOnce(&mut Pixmap)) {
    let (w, h) = (img.width(), img.height());
    let Some(mut pixmap) = Pixmap::from_vec(
        img.as_raw().clone(),
        tiny_skia::IntSize::from_wh(w, h).unwrap(),
    ) else {
        return;
    };

    f(&mut pixmap);

    // Copy back
    img.copy_from_slice(pixmap.data());
}

/// Build an ellipse path using cubic bezier curves
fn build_ellipse_path(cx: f32, cy: f32, rx: f32, ry: f32) -> Option<tiny_skia::Path> {
    let kx = rx * BEZIER_K;
    let ky = ry * BEZIER_K;

    let mut pb = PathBuilder::new();

    // Start at top
    pb.move_to(cx, cy - ry);

    // Top to right
    pb.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);

    // Right to bottom
    pb.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);

    // Bottom to left
    pb.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);

    // Left to top
    pb.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);

    pb.close();
    pb.finish()
}

/// Build a two-point line path
fn build_line_path(x1: f32, y1: f32, x2: f32, y2: f32) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(x1, y1);
    pb.line_to(x2, y2);
    pb.finish()
}

/// Stroke a path with the glyph's color and width
///
/// Default butt caps: line ends stay flush with their endpoints.
fn stroke_path(pixmap: &mut Pixmap, path: &tiny_skia::Path, color: StrokeColor, width: f32) {
    let [r, g, b, a] = color.to_rgba_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    let stroke = Stroke {
        width,
        ..Default::default()
    };
    pixmap.stroke_path(path, &paint, &stroke, Transform::identity(), None);
}

fn stroke_ellipse(pixmap: &mut Pixmap, glyph: &EllipseOutline) {
    let (cx, cy, rx, ry) = geometry::ellipse_from_bounds(glyph.bbox);
    let Some(path) = build_ellipse_path(cx, cy, rx, ry) else {
        return;
    };
    stroke_path(pixmap, &path, glyph.color, glyph.width);
}

fn stroke_line(pixmap: &mut Pixmap, glyph: &LineSegment) {
    let Some(path) = build_line_path(
        glyph.x1 as f32,
        glyph.y1 as f32,
        glyph.x2 as f32,
        glyph.y2 as f32,
    ) else {
        return;
    };
    stroke_path(pixmap, &path, glyph.color, glyph.width);
}

/// Stroke every glyph onto the canvas in order
pub fn draw_glyphs_on_image(img: &mut RgbaImage, glyphs: &[Glyph]) {
    if glyphs.is_empty() {
        return;
    }

    with_pixmap(img, |pixmap| {
        for glyph in glyphs {
            match glyph {
                Glyph::Ellipse(ellipse) => stroke_ellipse(pixmap, ellipse),
                Glyph::Line(line) => stroke_line(pixmap, line),
            }
        }
    });
}
