//! Command-line surface

use std::path::PathBuf;

use clap::Parser;

use crate::config::IconConfig;

/// Render the globe app icon as a PNG
#[derive(Debug, Parser)]
#[command(name = "globegen", version, about)]
pub struct Args {
    /// Where to write the icon (overrides the config file)
    pub output: Option<PathBuf>,

    /// Explicit config file instead of the platform config directory
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Canvas side length in pixels
    #[arg(long, value_name = "PX")]
    pub size: Option<u32>,

    /// Gap between the globe outline and the canvas edge in pixels
    #[arg(long, value_name = "PX")]
    pub margin: Option<u32>,
}

impl Args {
    /// Resolve the final configuration: config file first, CLI overrides on top
    pub fn into_config(self) -> anyhow::Result<IconConfig> {
        let mut config = IconConfig::load(self.config.as_deref())?;
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        config.validate()?;
        Ok(config)
    }
}
