//! Icon geometry and output configuration

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

/// Stroke or fill color in 8-bit RGBA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl StrokeColor {
    /// Fully opaque white (globe outline)
    pub const WHITE: StrokeColor = StrokeColor::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to image crate RGBA format
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Icon settings persisted as JSON, defaults match the shipped app icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Canvas side length in pixels
    pub size: u32,
    /// Gap between the globe outline and the canvas edge in pixels
    pub margin: u32,
    /// Canvas fill color behind the globe
    pub background: StrokeColor,
    /// Where the rendered PNG is written
    pub output: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: 1024,
            margin: 80,
            // Marketing blue behind the white globe
            background: StrokeColor::new(20, 105, 180, 255),
            output: PathBuf::from("AppIcon-1024.png"),
        }
    }
}

impl IconConfig {
    /// File name looked up in the platform config directory
    pub const FILE_NAME: &'static str = "globegen.json";

    /// Load configuration from an explicit path, or from the platform
    /// config directory with defaults as fallback
    ///
    /// An explicit path that cannot be read or parsed is a hard error. The
    /// implicit config file is best-effort: a broken one logs a warning and
    /// the defaults are used.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let data = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                let config = serde_json::from_str(&data)
                    .with_context(|| format!("parsing config {}", path.display()))?;
                Ok(config)
            }
            None => Ok(Self::load_default_location()),
        }
    }

    fn load_default_location() -> Self {
        let Some(path) = dirs::config_dir().map(|dir| dir.join(Self::FILE_NAME)) else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        let loaded = fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|data| serde_json::from_str(&data).map_err(anyhow::Error::from));
        match loaded {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "Error loading config {}, using defaults: {:?}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Reject geometry that leaves no globe to draw
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.size == 0 {
            bail!("canvas size must be nonzero");
        }
        if u64::from(self.margin) * 2 >= u64::from(self.size) {
            bail!(
                "margin {} leaves no room for the globe on a {}px canvas",
                self.margin,
                self.size
            );
        }
        Ok(())
    }

    /// Center coordinate, shared by both axes (the canvas is square)
    pub fn center(&self) -> i32 {
        (self.size / 2) as i32
    }

    /// Globe outline radius
    pub fn radius(&self) -> i32 {
        (self.size / 2) as i32 - self.margin as i32
    }
}
