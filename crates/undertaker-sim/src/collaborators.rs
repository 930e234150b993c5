//! Interfaces to the collaborators the core consumes but does not implement.
//!
//! Input polling lives in `undertaker_core::input`; the clock is the
//! `elapsed` argument of `SimulationEngine::tick`.

use glam::{DVec2, DVec3};

/// Camera projection queries used for aiming.
pub trait Camera {
    /// Camera position in world space.
    fn position(&self) -> DVec3;

    /// World point under `screen` (pixels, origin bottom-left) at `depth`
    /// units along the camera's view direction.
    fn unproject(&self, screen: DVec2, depth: f64) -> DVec3;
}
