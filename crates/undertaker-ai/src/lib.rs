//! Per-entity gameplay behaviour for UNDERTAKER.
//!
//! Pure functions over plain data: the spawn scheduler state machine, pursuit
//! steering, combat outcome resolution and player locomotion. No ECS
//! dependency; the simulation crate wires these into its systems.

pub mod combat;
pub mod locomotion;
pub mod pursuit;
pub mod spawn_fsm;
