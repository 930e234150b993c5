//! Headless UNDERTAKER demo.
//!
//! Wires the simulation engine to stand-in collaborators: a follow camera, a
//! scripted input source and a sphere-overlap physics layer.

pub mod camera;
pub mod cli;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod physics;

use log::info;

use undertaker_sim::SimulationEngine;

pub use undertaker_core as core;

use crate::cli::Cli;
use crate::error::AppError;
use crate::game_loop::RunSummary;

/// Build an engine from the command line and run the loop to completion.
pub fn run(cli: &Cli) -> Result<RunSummary, AppError> {
    let config = cli.game_config()?;
    let options = cli.loop_options()?;
    let mut engine = SimulationEngine::new(config)?;

    info!(
        "running {} ticks at {} Hz{}",
        options.ticks,
        options.tick_rate,
        if options.realtime { " (realtime)" } else { "" }
    );
    game_loop::run(&mut engine, &options)
}
