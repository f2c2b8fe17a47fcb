//! Hurdle Run - a single-button runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacle, jump arc, collisions, game state)
//! - `input`: Edge-triggered jump latch
//! - `highscores`: Best-score persistence behind an injectable record
//! - `session`: Game loop plumbing (fixed cadence, game over, retry, HUD)
//! - `settings`: Data-driven tuning and runtime options

pub mod highscores;
pub mod input;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::{FileRecord, MemoryRecord, ScoreRecord, ScoreStore, ScoreStoreError};
pub use input::JumpLatch;
pub use session::{GameOverReport, Hud, PlayerName, Session, StepOutcome, Ticker};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation period in milliseconds (20 Hz)
    pub const TICK_MS: u64 = 50;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock frame fed to the ticker (ms)
    pub const MAX_FRAME_MS: u64 = 250;

    /// Track dimensions
    pub const TRACK_WIDTH: i32 = 1000;
    pub const TRACK_HEIGHT: i32 = 400;

    /// Runner defaults
    pub const RUNNER_X: i32 = 50;
    pub const RUNNER_Y: i32 = 240;
    pub const RUNNER_WIDTH: i32 = 70;
    pub const RUNNER_HEIGHT: i32 = 90;

    /// Jump arc: rises by JUMP_SPEED per tick until JUMP_HEIGHT, then lands
    pub const JUMP_HEIGHT: i32 = 150;
    pub const JUMP_SPEED: i32 = 20;

    /// Obstacle defaults
    pub const OBSTACLE_START_X: i32 = 1000;
    pub const OBSTACLE_Y: i32 = 280;
    pub const OBSTACLE_WIDTH: i32 = 50;
    pub const OBSTACLE_HEIGHT: i32 = 50;
    /// Extra distance past the track edge where a wrapped obstacle reappears
    pub const OBSTACLE_GAP: i32 = 50;
    /// Left-edge forgiveness on the obstacle hitbox
    pub const OBSTACLE_INSET: i32 = 10;
    /// Obstacle travel per tick
    pub const SPEED: i32 = 25;

    /// Points for each obstacle that scrolls off the track
    pub const WRAP_REWARD: u32 = 100;
}
