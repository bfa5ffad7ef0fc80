// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

//! The Atrium terminal menu.
//!
//! Loads the saved state (or seeds demo data on a fresh start), runs the
//! role-filtered menu loop, and saves everything back on exit. This binary
//! is the only component that prints.

mod menu;
mod seed;

use atrium_api::{AppState, Session};
use atrium_persistence::{FileStore, LoadOutcome};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Atrium - conference scheduling, sign-up, and messaging from a terminal
/// menu.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the five saved container files.
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Log more (repeat for even more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args: Args = Args::parse();
    init_tracing(args.verbose);

    let store: FileStore = FileStore::new(args.data_dir);
    let outcome: LoadOutcome = match store.load() {
        Ok(outcome) => outcome,
        Err(err) => {
            error!(%err, "could not load saved state");
            eprintln!("Could not load saved state: {err}");
            return ExitCode::FAILURE;
        }
    };
    let fresh: bool = outcome == LoadOutcome::Fresh;
    let mut state: AppState = AppState::from_load(outcome);
    if fresh {
        seed::populate(&mut state);
        println!("No saved state found; demo data has been loaded.");
    }

    let mut session: Session = Session::new();
    menu::run(&mut state, &mut session);

    if let Err(err) = store.save(&state.into_dataset()) {
        error!(%err, "could not save state");
        eprintln!("Could not save state: {err}");
        return ExitCode::FAILURE;
    }
    info!("state saved, goodbye");
    println!("All data saved. Goodbye.");
    ExitCode::SUCCESS
}

fn init_tracing(verbosity: u8) {
    let default_level: &str = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
