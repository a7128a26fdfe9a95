// main.rs - Headless driver with a stepping task and a printing task
// The stepper owns the simulation; only completed grids cross the channel

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use tokio::sync::mpsc;
use wolfram_life::{Grid, Simulation, Speed};

mod args;   // Command-line flags

use args::Args;

/// A completed step, as seen by the printer.
#[derive(Debug, Clone)]
pub struct Frame {
    pub generation: u64,
    pub reseeded: bool,
    pub grid: Grid,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .context("failed to install logger")?;

    let args = Args::parse();
    let config = args.sim_config()?;
    let simulation = Simulation::new(&config).context("invalid simulation config")?;
    info!(
        "running {}x{} board, {} rule {} at {} speed",
        config.width, config.height, config.mode, config.rule, args.speed
    );

    let (frames_tx, frames_rx) = mpsc::channel(4);
    let stepper = tokio::spawn(run_steps(simulation, args.speed, args.generations, frames_tx));
    let printer = tokio::spawn(print_frames(frames_rx, args.rows));

    let run = async {
        stepper.await.context("stepping task failed")?;
        printer.await.context("printing task failed")?
    };

    tokio::select! {
        result = run => result,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted");
            Ok(())
        }
    }
}

/// Steps at the preset cadence until the generation limit or until the
/// printer hangs up. `Speed::Max` only yields between steps.
async fn run_steps(
    mut simulation: Simulation,
    speed: Speed,
    generations: Option<u64>,
    frames: mpsc::Sender<Frame>,
) {
    let delay = speed.delay();
    let mut ticker = (!delay.is_zero()).then(|| tokio::time::interval(delay));

    while generations.is_none_or(|limit| simulation.generation() < limit) {
        match ticker.as_mut() {
            Some(ticker) => {
                ticker.tick().await;
            }
            None => tokio::task::yield_now().await,
        }

        let grid = simulation.step().clone();
        let frame = Frame {
            generation: simulation.generation(),
            reseeded: simulation.reseeded(),
            grid,
        };
        if frames.send(frame).await.is_err() {
            debug!("printer gone, stopping at generation {}", simulation.generation());
            break;
        }
    }
}

async fn print_frames(mut frames: mpsc::Receiver<Frame>, rows: Option<usize>) -> anyhow::Result<()> {
    while let Some(frame) = frames.recv().await {
        print!("{}", render_frame(&frame, rows));
    }
    Ok(())
}

/// Header line plus the board, `#` alive and `.` dead.
pub fn render_frame(frame: &Frame, rows: Option<usize>) -> String {
    let mut text = format!(
        "generation {}{} population {}\n",
        frame.generation,
        if frame.reseeded { " (reseed)" } else { "" },
        frame.grid.population()
    );
    let shown = rows.unwrap_or(frame.grid.height());
    for row in frame.grid.rows().take(shown) {
        text.extend(row.iter().map(|cell| if cell.is_alive() { '#' } else { '.' }));
        text.push('\n');
    }
    text
}
