//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call per tick, no wall clock)
//! - Seeded RNG only (autopilot)
//! - No rendering, storage or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::Rect;
pub use state::{GameState, JumpPhase, Tuning, TuningError};
pub use tick::{TickInput, TickResult, tick};
