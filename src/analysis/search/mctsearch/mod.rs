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

//! Flat Monte Carlo search.
//!
//! Every legal ply at the root is scored by random rollouts, dealt out round-robin
//! until the time budget runs out.  There is no tree; each rollout starts from a fresh
//! copy of the root state.

use std::fmt;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand_core::SeedableRng;
use tracing::{debug, trace, warn};

use crate::analysis::Extrapolatable;
use crate::analysis::search::Search;
use crate::resolution::Resolution;
use crate::state::State;
use crate::util::JKiss32Rng;

/// The default time budget for a single search.
pub const DEFAULT_BUDGET: Duration = Duration::from_millis(110);

/// The default upper bound on rollouts in a single search.
pub const DEFAULT_MAX_ROLLOUTS: u32 = 1_000_000;

/// A root ply and the results of its rollouts.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate<P> {
    pub ply: P,
    /// Rollouts won by the player to move, minus rollouts lost.
    pub score: i32,
    pub rollouts: u32,
}

/// The results of the search.
pub struct Analysis<S> where
    S: State + Extrapolatable<<S as State>::Ply> {
    /// The state on which the search was performed.
    pub state: S,
    /// The root plies, in the shuffled order they were searched.
    pub candidates: Vec<Candidate<<S as State>::Ply>>,
    /// The chosen ply, or `None` if the state had no legal plies.
    pub selected: Option<<S as State>::Ply>,
    /// Statistics from the search.
    pub statistics: Statistics,
}

/// A time-bounded flat Monte Carlo implementation of `Search`.
///
/// # Example
///
/// ```rust
/// # extern crate ultimate_tic_tac_toe;
/// use std::time::Duration;
///
/// use ultimate_tic_tac_toe::analysis::search::Search;
/// use ultimate_tic_tac_toe::analysis::search::mctsearch::{MctSearch, RandomSimulator, SteppingClock};
/// use ultimate_tic_tac_toe::impls::ultimate_tic_tac_toe::MetaBoard;
///
/// # fn main() {
/// let mut search = MctSearch::new(
///     RandomSimulator::<MetaBoard>::from_seed(1),
///     SteppingClock::new(Duration::from_millis(1)),
/// ).with_seed(2);
///
/// let analysis = search.search(&MetaBoard::new());
/// assert_eq!(analysis.statistics.rollouts, 111);
/// assert!(analysis.selected.is_some());
/// # }
/// ```
pub struct MctSearch<S, Q, C> where
    S: State + Extrapolatable<<S as State>::Ply>,
    Q: Simulator<S>,
    C: Clock {
    simulator: Q,
    clock: C,
    rng: JKiss32Rng,
    budget: Duration,
    max_rollouts: u32,
    rollout_state: Option<S>,
}

impl<S, Q, C> MctSearch<S, Q, C> where
    S: State + Extrapolatable<<S as State>::Ply>,
    Q: Simulator<S>,
    C: Clock {
    /// Creates a search with the default budget and rollout limit, shuffling with a
    /// randomly seeded generator.
    pub fn new(simulator: Q, clock: C) -> MctSearch<S, Q, C> {
        MctSearch {
            simulator: simulator,
            clock: clock,
            rng: JKiss32Rng::new(),
            budget: DEFAULT_BUDGET,
            max_rollouts: DEFAULT_MAX_ROLLOUTS,
            rollout_state: None,
        }
    }

    /// Stops each search once the clock reports more than `budget`.
    pub fn with_budget(mut self, budget: Duration) -> MctSearch<S, Q, C> {
        self.budget = budget;
        self
    }

    /// Stops each search after `max_rollouts` rollouts, even if time remains.
    pub fn with_max_rollouts(mut self, max_rollouts: u32) -> MctSearch<S, Q, C> {
        self.max_rollouts = max_rollouts;
        self
    }

    /// Shuffles candidates with a generator seeded from `seed`.
    pub fn with_seed(mut self, seed: u64) -> MctSearch<S, Q, C> {
        self.rng = JKiss32Rng::seed_from_u64(seed);
        self
    }

    /// Returns the time budget for a single search.
    pub fn get_budget(&self) -> Duration {
        self.budget
    }

    pub fn get_max_rollouts(&self) -> u32 {
        self.max_rollouts
    }

    /// Plays out `ply` from a fresh copy of `state` and returns the change to its score.
    fn rollout(&mut self, state: &S, ply: &<S as State>::Ply, mover: u8) -> Option<i32> {
        let rollout_state = self.rollout_state.get_or_insert_with(|| state.clone());
        rollout_state.clone_from(state);

        if let Err(error) = rollout_state.execute_ply(Some(ply)) {
            warn!(%error, ply = %ply, "Candidate ply was rejected");
            return None;
        }

        let winner = self.simulator.simulate(rollout_state).and_then(|resolution| resolution.get_winner());
        Some(match winner {
            Some(winner) if winner == mover => 1,
            Some(_) => -1,
            None => 0,
        })
    }
}

impl<S, Q, C> Search<S> for MctSearch<S, Q, C> where
    S: State + Extrapolatable<<S as State>::Ply>,
    Q: Simulator<S>,
    C: Clock {
    type Analysis = Analysis<S>;

    fn search(&mut self, state: &S) -> Analysis<S> {
        let mut plies = state.extrapolate();
        plies.shuffle(&mut self.rng);

        let mut candidates = plies.into_iter().map(|ply| Candidate {
            ply: ply,
            score: 0,
            rollouts: 0,
        }).collect::<Vec<_>>();

        let mover = state.get_next_player();
        let mut statistics = Statistics::default();

        self.clock.start();

        if !candidates.is_empty() {
            for iteration in 0..self.max_rollouts {
                // Whole milliseconds, so a reading inside the final millisecond still runs.
                if self.clock.elapsed().as_millis() > self.budget.as_millis() {
                    statistics.truncated = true;
                    break;
                }

                let index = iteration as usize % candidates.len();
                if let Some(delta) = self.rollout(state, &candidates[index].ply, mover) {
                    candidates[index].score += delta;
                    candidates[index].rollouts += 1;
                    statistics.rollouts += 1;
                }
            }
        }

        statistics.elapsed = self.clock.elapsed();

        for candidate in &candidates {
            trace!(ply = %candidate.ply, score = candidate.score, rollouts = candidate.rollouts, "Candidate");
        }

        let selected = select(&candidates);

        debug!(
            candidates = candidates.len(),
            rollouts = statistics.rollouts,
            elapsed_ms = statistics.elapsed.as_millis() as u64,
            truncated = statistics.truncated,
            selected = ?selected.as_ref().map(|ply| ply.to_string()),
            "Search finished"
        );

        Analysis {
            state: state.clone(),
            candidates: candidates,
            selected: selected,
            statistics: statistics,
        }
    }
}

/// Returns the last candidate holding the highest score.
fn select<P>(candidates: &[Candidate<P>]) -> Option<P> where
    P: Clone {
    let mut best: Option<&Candidate<P>> = None;
    for candidate in candidates {
        if best.map_or(true, |best| candidate.score >= best.score) {
            best = Some(candidate);
        }
    }
    best.map(|candidate| candidate.ply.clone())
}

impl<S> fmt::Display for Analysis<S> where
    S: State + Extrapolatable<<S as State>::Ply> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "State:\n{}", self.state)?;
        write!(f, "Candidates:")?;
        for candidate in &self.candidates {
            write!(f, "\n  {}: {:+} over {}", candidate.ply, candidate.score, candidate.rollouts)?;
        }
        match self.selected {
            Some(ref ply) => write!(f, "\nSelected: {}", ply)?,
            None => write!(f, "\nSelected: none")?,
        }
        write!(f, "\nStatistics:\n{}", self.statistics)
    }
}

pub use self::clock::{Clock, SteppingClock, WallClock};
pub use self::simulator::{RandomSimulator, Simulator};
pub use self::statistics::Statistics;

mod clock;
mod simulator;
mod statistics;
