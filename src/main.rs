//! Hurdle Run entry point
//!
//! Headless driver: asks for the player's name, then runs the session at the
//! fixed cadence with the autopilot pressing jump. After each run it offers a
//! retry.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Instant;

use hurdle_run::sim::Autopilot;
use hurdle_run::{
    FileRecord, GameOverReport, PlayerName, ScoreRecord, ScoreStore, Session, Settings,
    StepOutcome, Ticker,
};

fn main() {
    env_logger::init();
    log::info!("Hurdle Run starting...");

    let settings = match Settings::load(Path::new(Settings::DEFAULT_PATH)) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("{}, using defaults", e);
            Settings::default()
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Hurdle Run");
    println!("Instructions: jump over the hurdles; don't run into them.");
    let Some(player) = prompt_name(&mut lines) else {
        log::info!("No player name given, exiting");
        return;
    };

    let record = FileRecord::new(&settings.score_file);
    log::info!("Best score record: {}", record.path().display());
    let scores = ScoreStore::open(record);
    let mut session = Session::new(player, &settings, scores);
    let mut pilot = Autopilot::new(settings.autopilot_seed, settings.autopilot_miss_chance);

    loop {
        let report = play_run(&mut session, &mut pilot, &settings);
        println!();
        println!("Game Over");
        println!("Final Score: {}", report.score);
        println!("Highest Score from the Previous Games: {}", report.best);
        if let Some(err) = &report.persist_error {
            println!("(could not save best score: {})", err);
        }

        if !prompt_retry(&mut lines) {
            break;
        }
        session.retry();
    }

    log::info!("Goodbye, {}", session.player());
}

/// Ask until a non-empty name is entered; `None` on end of input
fn prompt_name(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<PlayerName> {
    loop {
        print!("Enter your name: ");
        let _ = io::stdout().flush();

        let line = lines.next()?.ok()?;
        match PlayerName::parse(&line) {
            Ok(name) => return Some(name),
            Err(e) => println!("{}", e),
        }
    }
}

/// Retry on "r"/"retry"/"y"/"yes"; anything else quits
fn prompt_retry(lines: &mut impl Iterator<Item = io::Result<String>>) -> bool {
    print!("[R]etry or [Q]uit? ");
    let _ = io::stdout().flush();

    match lines.next() {
        Some(Ok(line)) => matches!(
            line.trim().to_lowercase().as_str(),
            "r" | "retry" | "y" | "yes"
        ),
        _ => false,
    }
}

/// Drive one run at the fixed cadence until the runner crashes
fn play_run<R: ScoreRecord>(
    session: &mut Session<R>,
    pilot: &mut Autopilot,
    settings: &Settings,
) -> GameOverReport {
    let mut ticker = Ticker::new(settings.tick_period());
    log::debug!("Ticking every {:?}", ticker.period());
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        let steps = ticker.advance(now - last);
        last = now;

        for _ in 0..steps {
            if pilot.wants_jump(session.state()) {
                session.press_jump();
                session.release_jump();
            }
            match session.step() {
                StepOutcome::Running(result) => {
                    if result.wrapped {
                        let hud = session.hud();
                        println!("{}  score {:>6}  best {:>6}", hud.player, hud.score, hud.best);
                    }
                }
                StepOutcome::GameOver(report) => return report,
            }
        }

        thread::sleep(ticker.until_next());
    }
}
