//! Shared geometry constants and math for the globe
//!
//! This module contains constants and math shared between
//! glyph composition and the rasterizer.

use crate::domain::Rect;

/// Globe outline constants
pub mod ring {
    /// Outline stroke width in pixels
    pub const STROKE: f32 = 24.0;
}

/// Latitude/longitude grid constants
pub mod grid {
    /// Grid stroke width in pixels
    pub const STROKE: f32 = 10.0;
    /// Grid stroke alpha, the outline itself stays fully opaque
    pub const ALPHA: u8 = 200;
    /// Vertical half-height of a latitude band in pixels
    pub const LAT_HALF_HEIGHT: i32 = 40;
    /// Latitude placement ratios relative to the outline radius
    pub const LATITUDE_RATIOS: [f32; 5] = [-0.6, -0.3, 0.0, 0.3, 0.6];
    /// Number of longitude lines
    pub const LONGITUDE_COUNT: usize = 6;
    /// Fraction of the radius longitude lines reach at the equator
    pub const LONGITUDE_REACH: f32 = 0.95;
}

/// Ellipse bezier approximation constant: 4/3 * (sqrt(2) - 1)
pub const BEZIER_K: f32 = 0.552_284_8;

/// Vertical offset and horizontal radius of the latitude band at ratio `k`
///
/// The band sits at `k * radius` below the center (negative `k` is above)
/// and its horizontal radius shrinks as `1 - k^2`, the circle-section
/// profile of a sphere viewed head-on.
#[inline]
pub fn latitude_band(radius: i32, k: f32) -> (i32, i32) {
    let r = radius as f32;
    let dy = (r * k).round() as i32;
    let rx = (r * (1.0 - k * k)).round() as i32;
    (dy, rx)
}

/// Horizontal half-offset of longitude line `idx` of `count`
///
/// Meridians are drawn as straight chords through the center, swept over
/// half a turn in `count` steps.
#[inline]
pub fn longitude_offset(radius: i32, idx: usize, count: usize) -> i32 {
    let angle = idx as f32 * std::f32::consts::PI / count as f32;
    (radius as f32 * grid::LONGITUDE_REACH * angle.sin()).round() as i32
}

/// Calculate ellipse center and radii from a bounding box
#[inline]
pub fn ellipse_from_bounds(bbox: Rect) -> (f32, f32, f32, f32) {
    let cx = (bbox.left + bbox.right) as f32 * 0.5;
    let cy = (bbox.top + bbox.bottom) as f32 * 0.5;
    let rx = (bbox.width() as f32 * 0.5).max(1.0);
    let ry = (bbox.height() as f32 * 0.5).max(1.0);
    (cx, cy, rx, ry)
}
