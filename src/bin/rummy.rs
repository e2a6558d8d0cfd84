//! Interactive rummy assistant.
//!
//! Usage:
//!   cargo run --release --bin rummy -- [OPTIONS]
//!
//! Options:
//!   --config <FILE>      Session configuration JSON file (optional)
//!   --decks <N>          Number of decks to draw from (default: 2)
//!   --hand-size <N>      Cards dealt by `new` (default: 11)
//!   --books <N>          Books required at start-up
//!   --runs <N>           Runs required at start-up
//!   --seed <N>           Random seed (optional)
//!
//! Set `RUST_LOG=debug` to see strategy evaluations.

use std::io;

use anyhow::Context;
use clap::Parser;

use rummy_solver::session::{Repl, Session, SessionConfig};

/// Command-line arguments; each flag overrides the config file.
#[derive(Parser, Debug)]
#[command(version, about = "Find the best books and runs in a rummy hand", long_about = None)]
struct Args {
    /// Session configuration JSON file.
    #[arg(short, long)]
    config: Option<String>,

    /// Number of 54-card decks random hands are drawn from.
    #[arg(short, long)]
    decks: Option<usize>,

    /// Number of cards dealt by `new` with no argument.
    #[arg(long)]
    hand_size: Option<usize>,

    /// Books required at start-up.
    #[arg(short, long)]
    books: Option<usize>,

    /// Runs required at start-up.
    #[arg(short, long)]
    runs: Option<usize>,

    /// Random seed for reproducible deals.
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    /// Load the config file (or defaults) and apply flag overrides.
    fn config(&self) -> anyhow::Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path))?,
            None => SessionConfig::default(),
        };
        if let Some(decks) = self.decks {
            config = config.with_decks(decks);
        }
        if let Some(hand_size) = self.hand_size {
            config = config.with_hand_size(hand_size);
        }
        if let Some(books) = self.books {
            config = config.with_books(books);
        }
        if let Some(runs) = self.runs {
            config = config.with_runs(runs);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate().context("invalid session configuration")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Args::parse().config()?;
    log::info!("starting session: {:?}", config);

    let stdin = io::stdin();
    let mut repl = Repl::new(Session::new(config), stdin.lock(), io::stdout());
    repl.run().context("session I/O failed")
}
