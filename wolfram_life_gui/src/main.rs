// main.rs - Wolfram-seeded Game of Life viewer
// Drives the simulation from the egui frame loop; drawing lives in ui.rs

use anyhow::Context;
use eframe::egui;
use egui::Color32;
use log::{info, warn};
use std::time::Instant;
use wolfram_life::{Controls, SimConfig, Simulation};

mod ui;   // eframe::App impl for MatrixLife

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .context("failed to install logger")?;

    let app = MatrixLife::new(&SimConfig::default()).context("invalid simulation config")?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MATRIX | GAME OF LIFE",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("viewer stopped: {err}"))
}

/// Pixel size of one cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Zoom {
    X1,
    #[default]
    X2,
    X3,
}

impl Zoom {
    pub const ALL: [Zoom; 3] = [Zoom::X1, Zoom::X2, Zoom::X3];

    pub fn factor(self) -> f32 {
        match self {
            Zoom::X1 => 1.0,
            Zoom::X2 => 2.0,
            Zoom::X3 => 3.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Zoom::X1 => "1x",
            Zoom::X2 => "2x",
            Zoom::X3 => "3x",
        }
    }
}

pub struct MatrixLife {
    simulation: Simulation,
    pub controls: Controls,
    pub zoom: Zoom,
    pub last_update: Instant,
    pub started: Instant,          // Phase origin for the glow
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl MatrixLife {
    pub fn new(config: &SimConfig) -> wolfram_life::Result<Self> {
        Ok(Self {
            simulation: Simulation::new(config)?,
            controls: Controls::from_config(config),
            zoom: Zoom::default(),
            last_update: Instant::now(),
            started: Instant::now(),
            live_color: Color32::from_rgb(0, 190, 0),
            dead_color: Color32::from_rgb(0, 8, 0),
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Steps once if running and the speed preset's delay has passed.
    pub fn advance(&mut self) -> bool {
        if self.controls.paused || self.last_update.elapsed() < self.controls.speed.delay() {
            return false;
        }
        self.simulation.step();
        self.last_update = Instant::now();
        true
    }

    /// Re-initializes the board if mode or rule were changed in the UI.
    pub fn apply_controls(&mut self) {
        if self.controls.apply(&mut self.simulation) {
            info!("reset: {} rule {}", self.controls.mode, self.controls.rule);
        }
    }

    pub fn toggle_pattern(&mut self, pattern: usize) {
        match self.controls.toggle_pattern(pattern) {
            Ok(_) => self.apply_controls(),
            Err(err) => warn!("pattern edit rejected: {err}"),
        }
    }

    pub fn toggle_paused(&mut self) {
        let paused = self.controls.toggle_paused();
        info!("{}", if paused { "paused" } else { "resumed" });
        if !paused {
            self.last_update = Instant::now();
        }
    }
}
