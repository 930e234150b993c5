//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use undertaker_core::config::GameConfig;
use undertaker_core::constants::TICK_RATE;

use crate::error::AppError;
use crate::game_loop::LoopOptions;

/// Headless arena shooter demo: spawners, pursuing agents and an autopiloted player.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML config file; missing keys keep their defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the RNG seed from the config
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 3600)]
    pub ticks: u64,

    /// Ticks per simulated second
    #[arg(long, default_value_t = TICK_RATE)]
    pub tick_rate: u32,

    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    pub realtime: bool,

    /// Start a new session when the player is caught instead of stopping
    #[arg(long)]
    pub restart_on_death: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the config file (or defaults) and apply command-line overrides.
    pub fn game_config(&self) -> Result<GameConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }

    pub fn loop_options(&self) -> Result<LoopOptions, AppError> {
        if self.tick_rate == 0 {
            return Err(AppError::ZeroTickRate);
        }
        Ok(LoopOptions {
            ticks: self.ticks,
            tick_rate: self.tick_rate,
            realtime: self.realtime,
            restart_on_death: self.restart_on_death,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["undertaker"]);
        assert_eq!(cli.ticks, 3600);
        assert_eq!(cli.tick_rate, TICK_RATE);
        assert!(!cli.realtime);
        assert!(!cli.restart_on_death);
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_seed_override() {
        let cli = Cli::parse_from(["undertaker", "--seed", "7", "--ticks", "10"]);
        assert_eq!(cli.game_config().unwrap().seed, 7);
        assert_eq!(cli.loop_options().unwrap().ticks, 10);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let cli = Cli::parse_from(["undertaker", "--tick-rate", "0"]);
        assert!(matches!(cli.loop_options(), Err(AppError::ZeroTickRate)));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::parse_from(["undertaker", "--config", "/nonexistent/undertaker.toml"]);
        assert!(matches!(cli.game_config(), Err(AppError::Config(_))));
    }
}
