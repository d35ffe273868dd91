//! Shiftpick terminal application.
//!
//! Plays a shift picker puzzle on stdin/stdout.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin shiftpick
//! ```
//!
//! Load a custom initial configuration (one row per line, `.` for open
//! cells, `A`-`E` for fixed cells):
//!
//! ```sh
//! cargo run --bin shiftpick -- --puzzle roster.txt
//! ```
//!
//! Relax the rules:
//!
//! ```sh
//! cargo run --bin shiftpick -- --max-per-shift 3 --run-window 4 --max-in-window 3
//! ```

use std::{io, num::NonZero, path::PathBuf, process};

use clap::Parser;
use shiftpick_app::{load_puzzle, run};
use shiftpick_game::{Game, GameOptions};
use shiftpick_rules::RuleConfig;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Initial configuration file. Defaults to the built-in 7x6 puzzle.
    #[arg(long, value_name = "FILE")]
    puzzle: Option<PathBuf>,

    /// Maximum times a participant may work the same shift.
    #[arg(long, value_name = "COUNT", default_value_t = RuleConfig::default().max_per_shift_limit())]
    max_per_shift: usize,

    /// Length of the sliding window of consecutive periods.
    #[arg(long, value_name = "PERIODS", default_value_t = RuleConfig::default().run_window_len())]
    run_window: usize,

    /// Maximum working periods inside one window.
    #[arg(long, value_name = "COUNT", default_value_t = RuleConfig::default().max_in_window_limit())]
    max_in_window: usize,

    /// Number of grid snapshots kept for undo.
    #[arg(long, value_name = "N", default_value_t = GameOptions::DEFAULT_HISTORY_CAPACITY)]
    history: NonZero<usize>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let config = RuleConfig::default()
        .max_per_shift(args.max_per_shift)
        .run_window(args.run_window)
        .max_in_window(args.max_in_window);
    log::debug!("rule config: {config:?}");

    let initial = match load_puzzle(args.puzzle.as_deref()) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };
    let options = GameOptions::default()
        .rule_config(config)
        .history_capacity(args.history);
    let mut game = Game::with_options(initial, options);

    if let Err(err) = run(&mut game, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
