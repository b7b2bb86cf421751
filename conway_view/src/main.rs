// main.rs - Conway's Game of Life viewer with highlighted known patterns
// Seeds the board from an RLE file and colors every catalogue match

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use egui::Color32;
use log::{debug, info, warn};

use conway::patterns;
use conway::{Catalogue, Pattern, Rgb, Simulation};

mod config; // Command line flags
mod loader; // Async RLE file loading
mod ui; // eframe::App impl

use config::Config;

/// Vertical room taken by the control and status panels.
const PANEL_HEIGHT: f32 = 140.0;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    simple_logger::SimpleLogger::new()
        .with_level(config.log_level)
        .init()?;
    info!("Starting conway_view v{}", env!("CARGO_PKG_VERSION"));

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let catalogue = Arc::new(Catalogue::standard()?);
    for (i, entry) in catalogue.entries().iter().enumerate() {
        debug!("Catalogue tag {}: {}", i + 1, entry.pattern.name());
    }

    let (seed, load_error) = runtime.block_on(loader::load_seed(config.pattern.as_deref()))?;
    if let Some(e) = &load_error {
        warn!("{:#}, using the built-in seed", e);
    }

    let mut app = GameOfLife::new(config.clone(), runtime, catalogue, seed);
    app.load_error = load_error.map(|e| format!("{:#}", e));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            config.width as f32 * config.cell_size + 16.0,
            config.height as f32 * config.cell_size + PANEL_HEIGHT,
        ]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("event loop failed: {}", e))?;

    info!("Window closed, exiting");
    Ok(())
}

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Viewer state: the simulation plus everything the controls change.
pub struct GameOfLife {
    sim: Simulation,
    seed: Pattern,
    config: Config,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub pause_on_repeat: bool,
    pub cell_size: f32,
    pub load_error: Option<String>,

    runtime: tokio::runtime::Runtime,
    random_seed: u64,

    grid_history: [u64; 10],
    history_count: usize,
}

impl GameOfLife {
    pub fn new(
        config: Config,
        runtime: tokio::runtime::Runtime,
        catalogue: Arc<Catalogue>,
        seed: Pattern,
    ) -> Self {
        let mut sim = Simulation::new(config.width, config.height, catalogue);
        sim.seed(&seed);

        Self {
            sim,
            seed,
            is_running: !config.paused,
            last_update: Instant::now(),
            update_interval: Duration::from_secs_f32(1.0 / config.fps.max(config::MIN_FPS)),
            dead_color: Color32::WHITE,
            selected_pattern: 0,
            pause_on_repeat: config.pause_on_repeat,
            cell_size: config.cell_size,
            load_error: None,
            runtime,
            random_seed: 0,
            grid_history: [0; 10],
            history_count: 0,
            config,
        }
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn randomize(&mut self) {
        self.random_seed += 1;
        self.sim.randomize(self.random_seed);
        self.reset_history();
    }

    /// Toggles a cell; ignored while running.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if !self.is_running {
            self.sim.toggle(x, y);
            self.reset_history();
        }
    }

    /// Reads the seed file again and restarts from it. A failed read keeps
    /// the current seed and reports the error.
    pub fn reload_seed(&mut self) {
        let Some(path) = self.config.pattern.clone() else {
            self.restart();
            return;
        };
        match self.runtime.block_on(loader::load_pattern(&path)) {
            Ok(pattern) => {
                self.seed = pattern;
                self.load_error = None;
                self.restart();
            }
            Err(e) => {
                warn!("{:#}", e);
                self.load_error = Some(format!("{:#}", e));
            }
        }
    }

    fn restart(&mut self) {
        self.sim.seed(&self.seed);
        self.reset_history();
    }

    fn reset_history(&mut self) {
        self.grid_history = [0; 10];
        self.history_count = 0;
    }
}

pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn hash_grid(&self) -> u64;
    fn check_for_cycle(&mut self) -> bool;
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn handle_resize(&mut self, width: usize, height: usize);
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        self.sim.tick();
        if self.check_for_cycle() && self.pause_on_repeat {
            info!("Board repeated at generation {}, pausing", self.sim.generation());
            self.is_running = false;
        }
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.sim.board().hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        let seen = self.grid_history[..self.history_count.min(10)].contains(&current_hash);
        self.grid_history[self.history_count % 10] = current_hash;
        self.history_count += 1;
        seen
    }

    fn clear_grid(&mut self) {
        self.sim.clear();
        self.reset_history();
    }

    fn apply_selected_pattern(&mut self) {
        let Some(builtin) = patterns::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        match builtin.decode() {
            Ok(pattern) => {
                self.sim.seed(&pattern);
                self.reset_history();
            }
            Err(e) => warn!("{}", e),
        }
    }

    /// Board dimensions follow the drawing area. Zero-sized areas (a
    /// minimized window) are ignored so the board survives.
    fn handle_resize(&mut self, width: usize, height: usize) {
        if width == 0 || height == 0 {
            return;
        }
        let board = self.sim.board();
        if (board.width(), board.height()) != (width, height) {
            info!(
                "Board resized {}x{} -> {}x{}",
                board.width(),
                board.height(),
                width,
                height
            );
            self.sim.resize(width, height);
            self.reset_history();
        }
    }
}
