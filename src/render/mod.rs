//! Glyph rendering module
//!
//! This module contains:
//! - Geometry constants and math shared between composition and tests
//! - Image rendering using tiny-skia (for saving to file)

pub mod geometry;
pub mod image;
