//! Glyph types for the vector drawing pass
//!
//! All glyphs store coordinates in canvas pixel space.

use crate::config::StrokeColor;
use crate::domain::Rect;

/// Outlined ellipse glyph (no fill)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseOutline {
    /// Bounding box of the ellipse
    pub bbox: Rect,
    /// Stroke color
    pub color: StrokeColor,
    /// Stroke width in pixels
    pub width: f32,
}

/// Straight line glyph
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    /// Start point
    pub x1: i32,
    pub y1: i32,
    /// End point
    pub x2: i32,
    pub y2: i32,
    /// Stroke color
    pub color: StrokeColor,
    /// Stroke width in pixels
    pub width: f32,
}

/// Unified glyph type for ordered drawing
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Glyph {
    Ellipse(EllipseOutline),
    Line(LineSegment),
}
