//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One call is one
//! step at the session cadence; there is no `dt`.

use super::state::{GameState, JumpPhase};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// A jump was signaled since the previous tick (ignored while airborne)
    pub jump: bool,
}

impl TickInput {
    pub fn jump() -> Self {
        Self { jump: true }
    }
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Runner and obstacle hitboxes overlap after this tick
    pub collided: bool,
    /// Score after this tick
    pub score: u32,
    /// The obstacle scrolled off and was recycled this tick
    pub wrapped: bool,
}

/// Advance the game state by one fixed timestep
///
/// The simulation never stops itself: when `collided` comes back true the
/// caller is expected to stop ticking until it resets the state.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickResult {
    state.ticks += 1;
    let tuning = state.tuning;

    // Obstacle scroll + wrap
    state.obstacle_x -= tuning.speed;
    let wrapped = state.obstacle_x < -tuning.obstacle_size.x;
    if wrapped {
        state.obstacle_x = tuning.wrap_x();
        state.score = state.score.saturating_add(tuning.wrap_reward);
        log::debug!("Tick {}: obstacle cleared, score {}", state.ticks, state.score);
    }

    // Rise-only hop: climb until the apex, then snap back to the baseline
    if state.jump_phase == JumpPhase::InAir {
        state.jump_elapsed += tuning.jump_speed;
        if state.jump_elapsed >= tuning.jump_height {
            state.jump_phase = JumpPhase::Grounded;
            state.jump_elapsed = 0;
        }
    }

    if input.jump && state.jump_phase == JumpPhase::Grounded {
        state.jump_phase = JumpPhase::InAir;
        log::debug!("Tick {}: jump", state.ticks);
    }

    let collided = state.runner_rect().intersects(&state.obstacle_rect());

    TickResult {
        collided,
        score: state.score,
        wrapped,
    }
}
