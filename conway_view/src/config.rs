// config.rs - Command line configuration

use std::path::PathBuf;

use anyhow::{Result, ensure};
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "conway_view",
    version,
    about = "Conway's Game of Life, with known patterns highlighted as they appear"
)]
pub struct Config {
    /// RLE file to seed the board with. Defaults to the built-in glider loop.
    pub pattern: Option<PathBuf>,

    /// Initial board width in cells.
    #[arg(long, default_value_t = 128)]
    pub width: usize,

    /// Initial board height in cells.
    #[arg(long, default_value_t = 128)]
    pub height: usize,

    /// Size of one cell on screen, in points.
    #[arg(long, default_value_t = 8.0)]
    pub cell_size: f32,

    /// Target generations per second.
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Start with the simulation paused.
    #[arg(long)]
    pub paused: bool,

    /// Pause automatically when the board repeats one of its recent states.
    #[arg(long)]
    pub pause_on_repeat: bool,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

/// Slowest supported generation rate.
pub const MIN_FPS: f32 = 0.01;

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 0 && self.height > 0, "board dimensions must be positive");
        ensure!(self.cell_size >= 1.0, "cell size must be at least 1");
        ensure!(self.fps >= MIN_FPS, "fps must be at least {}", MIN_FPS);
        Ok(())
    }
}
