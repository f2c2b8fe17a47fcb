//! Session plumbing around the simulation
//!
//! Owns the game state, the jump latch and the score store for one player.
//! The caller drives it at a fixed cadence (see [`Ticker`]) and reads a
//! [`Hud`] snapshot for display.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS};
use crate::highscores::{ScoreRecord, ScoreStore};
use crate::input::JumpLatch;
use crate::settings::Settings;
use crate::sim::{GameState, JumpPhase, Rect, TickInput, TickResult, tick};

/// Rejected player name
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerNameError {
    #[error("please enter your name to start the game")]
    Empty,
}

/// Display name captured once at session start
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerName(String);

impl PlayerName {
    /// Trim surrounding whitespace; an empty result is rejected
    pub fn parse(raw: &str) -> Result<Self, PlayerNameError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(PlayerNameError::Empty);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOverReport {
    /// Final score of the run
    pub score: u32,
    /// Best score after recording this run
    pub best: u32,
    /// This run set a new best
    pub new_best: bool,
    /// Set when the new best could not be written
    pub persist_error: Option<String>,
}

/// Result of one session step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The run continues
    Running(TickResult),
    /// The runner hit the obstacle; no further ticks until `retry`
    GameOver(GameOverReport),
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub player: String,
    pub score: u32,
    pub best: u32,
    pub runner: Rect,
    pub obstacle: Rect,
    pub jump_phase: JumpPhase,
    pub game_over: bool,
}

/// One player's sequence of runs
#[derive(Debug)]
pub struct Session<R: ScoreRecord> {
    player: PlayerName,
    state: GameState,
    scores: ScoreStore<R>,
    latch: JumpLatch,
    game_over: Option<GameOverReport>,
    /// Runs started, including the current one
    runs: u32,
}

impl<R: ScoreRecord> Session<R> {
    pub fn new(player: PlayerName, settings: &Settings, scores: ScoreStore<R>) -> Self {
        log::info!(
            "Session started for {} (best score {})",
            player,
            scores.best()
        );
        Self {
            player,
            state: GameState::new(settings.tuning),
            scores,
            latch: JumpLatch::new(),
            game_over: None,
            runs: 1,
        }
    }

    /// Jump key down
    pub fn press_jump(&mut self) {
        self.latch.press();
    }

    /// Jump key up
    pub fn release_jump(&mut self) {
        self.latch.release();
    }

    /// Advance one tick, consuming any pending jump
    pub fn step(&mut self) -> StepOutcome {
        if let Some(report) = &self.game_over {
            log::debug!("Step ignored: run is over");
            return StepOutcome::GameOver(report.clone());
        }

        let input = TickInput {
            jump: self.latch.take(),
        };
        let result = tick(&mut self.state, &input);
        if !result.collided {
            return StepOutcome::Running(result);
        }

        let report = self.finish_run(result.score);
        self.game_over = Some(report.clone());
        StepOutcome::GameOver(report)
    }

    fn finish_run(&mut self, score: u32) -> GameOverReport {
        let (new_best, persist_error) = match self.scores.record_score(score) {
            Ok(new_best) => (new_best, None),
            Err(e) => {
                log::error!("{}", e);
                (true, Some(e.to_string()))
            }
        };

        log::info!(
            "Game over for {} after {} ticks: score {}, best {}{}",
            self.player,
            self.state.ticks(),
            score,
            self.scores.best(),
            if new_best { " (new best)" } else { "" }
        );

        GameOverReport {
            score,
            best: self.scores.best(),
            new_best,
            persist_error,
        }
    }

    /// Start a new run from the initial state
    pub fn retry(&mut self) {
        self.state.reset();
        self.latch.clear();
        self.game_over = None;
        self.runs += 1;
        log::info!("Run {} started", self.runs);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &PlayerName {
        &self.player
    }

    pub fn best(&self) -> u32 {
        self.scores.best()
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn scores(&self) -> &ScoreStore<R> {
        &self.scores
    }

    /// Snapshot for the presentation side
    pub fn hud(&self) -> Hud {
        Hud {
            player: self.player.to_string(),
            score: self.state.score(),
            best: self.scores.best(),
            runner: self.state.runner_rect(),
            obstacle: self.state.obstacle_rect(),
            jump_phase: self.state.jump_phase(),
            game_over: self.is_game_over(),
        }
    }
}

/// Fixed-timestep accumulator
///
/// Turns wall-clock frame times into a whole number of simulation steps.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    accumulator: Duration,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulator: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add elapsed time and return how many steps are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        // Clamp long stalls to prevent spiral of death
        self.accumulator += elapsed.min(Duration::from_millis(MAX_FRAME_MS));

        let mut steps = 0;
        while self.accumulator >= self.period && steps < MAX_SUBSTEPS {
            self.accumulator -= self.period;
            steps += 1;
        }
        if self.accumulator >= self.period {
            log::debug!("Dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        steps
    }

    /// Time left until the next step is due
    pub fn until_next(&self) -> Duration {
        self.period.saturating_sub(self.accumulator)
    }
}
