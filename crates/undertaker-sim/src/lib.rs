//! Simulation engine for UNDERTAKER.
//!
//! Owns the hecs world, runs the per-tick systems in order, receives
//! collision notifications from the physics layer and produces
//! `GameStateSnapshot`s.

pub mod collaborators;
pub mod engine;
pub mod error;
pub mod handles;
pub mod systems;
pub mod world_setup;

pub use collaborators::Camera;
pub use engine::SimulationEngine;
pub use error::SimError;
pub use undertaker_ai::combat::CombatResolution;
pub use undertaker_core as core;
