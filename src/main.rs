mod cli;
mod config;
mod domain;
mod icon;
mod render;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = cli::Args::parse().into_config()?;
    let image = icon::render_icon(&config)?;
    icon::save_rgba(&image, &config.output)?;
    println!("Saved {}", config.output.display());

    Ok(())
}
