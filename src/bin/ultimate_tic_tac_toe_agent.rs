//
// This file is part of ultimate_tic_tac_toe.
//
// ultimate_tic_tac_toe is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// ultimate_tic_tac_toe is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with ultimate_tic_tac_toe. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2016-2017 Chris Foster
//

//! Plays ultimate tic-tac-toe over stdin and stdout.  Logs and diagnostics go to stderr.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ultimate_tic_tac_toe::Agent;
use ultimate_tic_tac_toe::analysis::search::mctsearch::{self, MctSearch, RandomSimulator, WallClock};
use ultimate_tic_tac_toe::impls::ultimate_tic_tac_toe::MetaBoard;
use ultimate_tic_tac_toe::protocol::{self, Options};

#[derive(Debug, Parser)]
#[command(about = "A time-bounded Monte Carlo ultimate tic-tac-toe player")]
struct Config {
    /// Time budget per turn, in milliseconds.
    #[arg(long, default_value_t = mctsearch::DEFAULT_BUDGET.as_millis() as u64)]
    budget_ms: u64,

    /// Maximum rollouts per turn.
    #[arg(long, default_value_t = mctsearch::DEFAULT_MAX_ROLLOUTS)]
    max_rollouts: u32,

    /// Seed for reproducible play.
    #[arg(long)]
    seed: Option<u64>,

    /// Warn when the referee's legal plies differ from our own.
    #[arg(long)]
    validate_hints: bool,

    /// Print the board to stderr every turn.
    #[arg(long)]
    show_board: bool,

    /// Log filter, overridden by RUST_LOG.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config.log_level);

    let search = match config.seed {
        Some(seed) => MctSearch::new(RandomSimulator::from_seed(seed), WallClock::new())
            .with_seed(seed.wrapping_add(1)),
        None => MctSearch::new(RandomSimulator::new(), WallClock::new()),
    };
    info!(?config, "Starting");

    let search = search
        .with_budget(Duration::from_millis(config.budget_ms))
        .with_max_rollouts(config.max_rollouts);
    info!(
        budget_ms = search.get_budget().as_millis() as u64,
        max_rollouts = search.get_max_rollouts(),
        "Search configured"
    );
    let mut agent = Agent::new(MetaBoard::new(), search);

    let stdin = io::stdin();
    let stdout = io::stdout();
    protocol::play(stdin.lock(), &mut stdout.lock(), &mut agent, Options {
        validate_hints: config.validate_hints,
        show_board: config.show_board,
    }).context("turn protocol failed")?;

    Ok(())
}
