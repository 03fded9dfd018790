//! Globe icon composition and persistence
//!
//! Builds the fixed glyph list for the globe, rasterizes it onto a square
//! canvas, and writes the result as a PNG.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

use crate::config::{IconConfig, StrokeColor};
use crate::domain::{EllipseOutline, Glyph, LineSegment, Rect};
use crate::render::geometry::{grid, latitude_band, longitude_offset, ring};
use crate::render::image::draw_glyphs_on_image;

/// Build the globe glyph list: outline, then latitudes, then longitudes
pub fn globe_glyphs(config: &IconConfig) -> Vec<Glyph> {
    let (cx, cy) = (config.center(), config.center());
    let r = config.radius();

    let mut glyphs = Vec::with_capacity(1 + grid::LATITUDE_RATIOS.len() + grid::LONGITUDE_COUNT);

    // Globe outline
    glyphs.push(Glyph::Ellipse(EllipseOutline {
        bbox: Rect::around(cx, cy, r, r),
        color: StrokeColor::WHITE,
        width: ring::STROKE,
    }));

    let grid_color = StrokeColor::new(255, 255, 255, grid::ALPHA);

    // Latitude bands
    for k in grid::LATITUDE_RATIOS {
        let (dy, rx) = latitude_band(r, k);
        glyphs.push(Glyph::Ellipse(EllipseOutline {
            bbox: Rect::around(cx, cy + dy, rx, grid::LAT_HALF_HEIGHT),
            color: grid_color,
            width: grid::STROKE,
        }));
    }

    // Longitude lines
    for idx in 0..grid::LONGITUDE_COUNT {
        let sx = longitude_offset(r, idx, grid::LONGITUDE_COUNT);
        glyphs.push(Glyph::Line(LineSegment {
            x1: cx - sx,
            y1: cy - r,
            x2: cx + sx,
            y2: cy + r,
            color: grid_color,
            width: grid::STROKE,
        }));
    }

    glyphs
}

/// Render the icon canvas for the given configuration
pub fn render_icon(config: &IconConfig) -> anyhow::Result<RgbaImage> {
    config.validate()?;

    let mut img = RgbaImage::from_pixel(
        config.size,
        config.size,
        image::Rgba(config.background.to_rgba_u8()),
    );

    let glyphs = globe_glyphs(config);
    log::debug!(
        "Rendering {} glyphs onto a {}x{} canvas",
        glyphs.len(),
        config.size,
        config.size
    );
    draw_glyphs_on_image(&mut img, &glyphs);

    Ok(img)
}

fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}

/// Encode the canvas as PNG and write it to `path`, overwriting
pub fn save_rgba(img: &RgbaImage, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_png(&mut file, img).with_context(|| format!("encoding {}", path.display()))?;
    Ok(())
}

/// Encode the canvas as PNG into an in-memory buffer
pub fn save_rgba_to_buffer(img: &RgbaImage, buffer: &mut Vec<u8>) -> anyhow::Result<()> {
    Ok(write_png(buffer, img)?)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    const BACKGROUND: Rgba<u8> = Rgba([20, 105, 180, 255]);

    #[test]
    fn test_glyph_list_shape() {
        let glyphs = globe_glyphs(&IconConfig::default());
        assert_eq!(glyphs.len(), 12);

        // Outline first, then 5 latitude ellipses, then 6 longitude lines
        assert!(matches!(glyphs[0], Glyph::Ellipse(_)));
        assert!(
            glyphs[1..6]
                .iter()
                .all(|g| matches!(g, Glyph::Ellipse(_)))
        );
        assert!(glyphs[6..].iter().all(|g| matches!(g, Glyph::Line(_))));
    }

    #[test]
    fn test_outline_bbox() {
        let glyphs = globe_glyphs(&IconConfig::default());
        let Glyph::Ellipse(outline) = glyphs[0] else {
            panic!("first glyph is the outline ellipse");
        };
        assert_eq!(outline.bbox, Rect::new(80, 80, 944, 944));
        assert_eq!(outline.color, StrokeColor::WHITE);
        assert_eq!(outline.width, 24.0);
    }

    #[test]
    fn test_latitude_band_bboxes() {
        let glyphs = globe_glyphs(&IconConfig::default());

        // k = -0.6 is the first band, k = 0.6 the last
        let Glyph::Ellipse(north) = glyphs[1] else {
            panic!("latitude glyph");
        };
        assert_eq!(north.bbox, Rect::new(236, 213, 788, 293));

        let Glyph::Ellipse(south) = glyphs[5] else {
            panic!("latitude glyph");
        };
        assert_eq!(south.bbox, Rect::new(236, 731, 788, 811));
        assert_eq!(south.color, StrokeColor::new(255, 255, 255, 200));
        assert_eq!(south.width, 10.0);

        // Equator spans the full radius
        let Glyph::Ellipse(equator) = glyphs[3] else {
            panic!("latitude glyph");
        };
        assert_eq!(equator.bbox, Rect::new(80, 472, 944, 552));
    }

    #[test]
    fn test_longitude_lines_symmetric_about_center() {
        let glyphs = globe_glyphs(&IconConfig::default());
        let expected_sx = [0, 205, 355, 410, 355, 205];

        for (line, sx) in glyphs[6..].iter().zip(expected_sx) {
            let Glyph::Line(line) = line else {
                panic!("longitude glyph");
            };
            assert_eq!(line.x1, 512 - sx);
            assert_eq!(line.x2, 512 + sx);
            assert_eq!(line.y1, 80);
            assert_eq!(line.y2, 944);
            assert_eq!(line.color, StrokeColor::new(255, 255, 255, 200));
        }
    }

    #[test]
    fn test_render_dimensions() {
        let img = render_icon(&IconConfig::default()).unwrap();
        assert_eq!(img.dimensions(), (1024, 1024));
    }

    #[test]
    fn test_background_outside_globe() {
        let img = render_icon(&IconConfig::default()).unwrap();

        // Corners and cardinal points beyond the outline's stroke reach
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*img.get_pixel(1023, 1023), BACKGROUND);
        assert_eq!(*img.get_pixel(512, 10), BACKGROUND);
        assert_eq!(*img.get_pixel(10, 512), BACKGROUND);
        assert_eq!(*img.get_pixel(1013, 512), BACKGROUND);
    }

    #[test]
    fn test_outline_stroke_is_white_on_cardinals() {
        let img = render_icon(&IconConfig::default()).unwrap();

        // The outline path passes through (512 +/- 432, 512) and
        // (512, 512 +/- 432), fully covered by the 24px stroke
        assert_eq!(*img.get_pixel(512, 80), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(512, 944), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(80, 512), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(944, 512), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = IconConfig::default();
        let first = render_icon(&config).unwrap();
        let second = render_icon(&config).unwrap();
        assert_eq!(first.as_raw(), second.as_raw());

        let mut encoded_first = Vec::new();
        let mut encoded_second = Vec::new();
        save_rgba_to_buffer(&first, &mut encoded_first).unwrap();
        save_rgba_to_buffer(&second, &mut encoded_second).unwrap();
        assert_eq!(encoded_first, encoded_second);
    }

    #[test]
    fn test_render_rejects_degenerate_config() {
        let config = IconConfig {
            margin: 600,
            ..IconConfig::default()
        };
        assert!(render_icon(&config).is_err());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons").join("AppIcon-1024.png");

        let config = IconConfig::default();
        let img = render_icon(&config).unwrap();
        save_rgba(&img, &path).unwrap();

        let decoded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (1024, 1024));
        assert_eq!(*decoded.get_pixel(0, 0), BACKGROUND);

        // Overwrite on a second run, byte-identical output
        let first_bytes = std::fs::read(&path).unwrap();
        save_rgba(&render_icon(&config).unwrap(), &path).unwrap();
        let second_bytes = std::fs::read(&path).unwrap();
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn test_save_reports_unwritable_path() {
        let img = render_icon(&IconConfig {
            size: 64,
            margin: 8,
            ..IconConfig::default()
        })
        .unwrap();
        let err = save_rgba(&img, Path::new("/proc/globegen-denied/icon.png")).unwrap_err();
        assert!(err.to_string().contains("globegen-denied"));
    }
}
