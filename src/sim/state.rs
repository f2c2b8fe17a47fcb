//! Game state and core simulation types
//!
//! Everything the tick loop mutates lives here. Fields are only writable from
//! inside `sim`; the presentation side reads through accessors.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::Rect;
use crate::consts::*;

/// Vertical phase of the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpPhase {
    /// On the baseline, a jump request is accepted
    #[default]
    Grounded,
    /// Rising; jump requests are ignored until landing
    InAir,
}

/// Tuning values the tick loop cannot work with
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TuningError {
    #[error("obstacle speed must be positive, got {0}")]
    Speed(i32),
    #[error("jump speed must be positive, got {0}")]
    JumpSpeed(i32),
    #[error("jump height must be positive, got {0}")]
    JumpHeight(i32),
    #[error("runner size must be positive, got {0}")]
    RunnerSize(IVec2),
    #[error("obstacle size must be positive, got {0}")]
    ObstacleSize(IVec2),
    #[error("obstacle inset must be in 0..{width}, got {inset}")]
    ObstacleInset { inset: i32, width: i32 },
}

/// Track geometry and pacing (data-driven, see `Settings`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub track_width: i32,
    pub track_height: i32,
    /// Top-left of the runner when grounded
    pub runner_origin: IVec2,
    pub runner_size: IVec2,
    pub jump_height: i32,
    pub jump_speed: i32,
    pub obstacle_start_x: i32,
    pub obstacle_y: i32,
    pub obstacle_size: IVec2,
    pub obstacle_gap: i32,
    pub obstacle_inset: i32,
    pub speed: i32,
    pub wrap_reward: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            track_width: TRACK_WIDTH,
            track_height: TRACK_HEIGHT,
            runner_origin: IVec2::new(RUNNER_X, RUNNER_Y),
            runner_size: IVec2::new(RUNNER_WIDTH, RUNNER_HEIGHT),
            jump_height: JUMP_HEIGHT,
            jump_speed: JUMP_SPEED,
            obstacle_start_x: OBSTACLE_START_X,
            obstacle_y: OBSTACLE_Y,
            obstacle_size: IVec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            obstacle_gap: OBSTACLE_GAP,
            obstacle_inset: OBSTACLE_INSET,
            speed: SPEED,
            wrap_reward: WRAP_REWARD,
        }
    }
}

impl Tuning {
    /// Reject values that would stall the obstacle, keep the runner airborne
    /// forever or leave a hitbox with no area
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.speed <= 0 {
            return Err(TuningError::Speed(self.speed));
        }
        if self.jump_speed <= 0 {
            return Err(TuningError::JumpSpeed(self.jump_speed));
        }
        if self.jump_height <= 0 {
            return Err(TuningError::JumpHeight(self.jump_height));
        }
        if self.runner_size.cmple(IVec2::ZERO).any() {
            return Err(TuningError::RunnerSize(self.runner_size));
        }
        if self.obstacle_size.cmple(IVec2::ZERO).any() {
            return Err(TuningError::ObstacleSize(self.obstacle_size));
        }
        if !(0..self.obstacle_size.x).contains(&self.obstacle_inset) {
            return Err(TuningError::ObstacleInset {
                inset: self.obstacle_inset,
                width: self.obstacle_size.x,
            });
        }
        Ok(())
    }

    /// Where a wrapped obstacle reappears
    pub fn wrap_x(&self) -> i32 {
        self.track_width + self.obstacle_gap
    }

    /// Ticks from takeoff through landing, both inclusive
    pub fn jump_ticks(&self) -> u32 {
        if self.jump_speed <= 0 {
            return 0;
        }
        // Ceil(height / speed) rising ticks plus the takeoff tick
        let rising = (self.jump_height + self.jump_speed - 1) / self.jump_speed;
        rising.max(1) as u32 + 1
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) tuning: Tuning,
    pub(super) jump_phase: JumpPhase,
    /// Height above the baseline; nonzero only while `InAir`
    pub(super) jump_elapsed: i32,
    pub(super) obstacle_x: i32,
    pub(super) score: u32,
    /// Ticks since construction or the last reset
    pub(super) ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create a fresh run with the given tuning
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            jump_phase: JumpPhase::Grounded,
            jump_elapsed: 0,
            obstacle_x: tuning.obstacle_start_x,
            score: 0,
            ticks: 0,
        }
    }

    /// Return obstacle, jump and score to their starting values
    ///
    /// Tuning is kept. The persisted best score is not part of the
    /// simulation and is unaffected.
    pub fn reset(&mut self) {
        *self = Self::new(self.tuning);
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn jump_phase(&self) -> JumpPhase {
        self.jump_phase
    }

    pub fn jump_elapsed(&self) -> i32 {
        self.jump_elapsed
    }

    pub fn obstacle_x(&self) -> i32 {
        self.obstacle_x
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_grounded(&self) -> bool {
        self.jump_phase == JumpPhase::Grounded
    }

    /// Top-left of the runner sprite (screen space, y down)
    pub fn runner_position(&self) -> IVec2 {
        self.tuning.runner_origin - IVec2::new(0, self.jump_elapsed)
    }

    /// Top-left of the obstacle sprite
    pub fn obstacle_position(&self) -> IVec2 {
        IVec2::new(self.obstacle_x, self.tuning.obstacle_y)
    }

    /// Runner hitbox (full sprite)
    pub fn runner_rect(&self) -> Rect {
        Rect::new(self.runner_position(), self.tuning.runner_size)
    }

    /// Obstacle hitbox, inset on the leading edge to make contact forgiving
    pub fn obstacle_rect(&self) -> Rect {
        let inset = self.tuning.obstacle_inset;
        Rect::new(
            self.obstacle_position() + IVec2::new(inset, 0),
            self.tuning.obstacle_size - IVec2::new(inset, 0),
        )
    }
}
