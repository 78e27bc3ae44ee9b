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

//! A player that keeps the authoritative game state between turns.

use tracing::{info, warn};

use crate::analysis::Extrapolatable;
use crate::analysis::search::Search;
use crate::analysis::search::mctsearch::{Analysis, Clock, MctSearch, Simulator};
use crate::error::Result;
use crate::state::State;

/// Owns the real game state and mutates it once per ply actually played.  Searches only
/// ever see it by reference.
pub struct Agent<S, Q, C> where
    S: State + Extrapolatable<<S as State>::Ply>,
    Q: Simulator<S>,
    C: Clock {
    state: S,
    search: MctSearch<S, Q, C>,
}

impl<S, Q, C> Agent<S, Q, C> where
    S: State + Extrapolatable<<S as State>::Ply>,
    Q: Simulator<S>,
    C: Clock {
    pub fn new(state: S, search: MctSearch<S, Q, C>) -> Agent<S, Q, C> {
        Agent {
            state: state,
            search: search,
        }
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    /// Applies the opponent's ply, if there was one.  A rejected ply leaves the state as it was.
    pub fn observe(&mut self, ply: Option<&<S as State>::Ply>) -> Result<()> {
        self.state.execute_ply(ply).map_err(|error| {
            warn!(%error, ply = ?ply.map(|ply| ply.to_string()), "Opponent ply was rejected");
            error
        })
    }

    /// Searches the current state and plays the selected ply.  Returns the analysis, whose
    /// `selected` ply is `None` when there was nothing to play.
    pub fn respond(&mut self) -> Result<Analysis<S>> {
        let analysis = self.search.search(&self.state);
        self.state.execute_ply(analysis.selected.as_ref())?;

        if let Some(ref ply) = analysis.selected {
            info!(ply = %ply, rollouts = analysis.statistics.rollouts, "Playing");
        }

        Ok(analysis)
    }

    /// Plays one full turn: the opponent's ply, then ours.  A rejected opponent ply is
    /// logged and otherwise ignored, so play can continue.
    pub fn take_turn(&mut self, opponent: Option<&<S as State>::Ply>) -> Result<Option<<S as State>::Ply>> {
        self.observe(opponent).ok();
        Ok(self.respond()?.selected)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::*;
    use crate::analysis::search::mctsearch::{RandomSimulator, SteppingClock};
    use crate::impls::ultimate_tic_tac_toe::{Mark, MetaBoard, Position};
    use crate::resolution::Resolution;

    type TestAgent = Agent<MetaBoard, RandomSimulator<MetaBoard>, SteppingClock>;

    fn agent(seed: u64) -> TestAgent {
        Agent::new(
            MetaBoard::new(),
            MctSearch::new(
                RandomSimulator::from_seed(seed),
                SteppingClock::new(Duration::from_millis(10)),
            ).with_seed(seed),
        )
    }

    #[test]
    fn test_first_turn_without_opponent_move() {
        let mut agent = agent(1);
        let ply = agent.take_turn(None).unwrap().unwrap();

        assert_eq!(agent.get_state().get_move_count(), 1);
        assert_eq!(agent.get_state().get_cell(ply), Some(Mark::X));
    }

    #[test]
    fn test_reply_obeys_active_sub_board() {
        let mut agent = agent(2);
        let ply = agent.take_turn(Some(&Position::new(1, 5))).unwrap().unwrap();

        // Local cell (1, 2) sends us to sub-board (1, 2).
        assert_eq!(ply.to_local().0, Position::new(1, 2));
        assert_eq!(agent.get_state().get_move_count(), 2);
    }

    #[test]
    fn test_rejected_opponent_ply_keeps_state() {
        let mut agent = agent(3);
        let ours = agent.take_turn(None).unwrap().unwrap();
        let before = agent.get_state().clone();

        assert!(agent.observe(Some(&ours)).is_err());
        assert_eq!(agent.get_state(), &before);
    }

    #[test]
    fn test_self_play_terminates() {
        let mut agents = [agent(4), agent(5)];
        let mut last: Option<Position> = None;
        let mut turn = 0;

        loop {
            let agent = &mut agents[turn % 2];
            agent.observe(last.as_ref()).unwrap();

            let state = agent.get_state();
            assert_eq!(state.get_move_count() as usize, turn);
            if state.check_resolution().map_or(false, |r| r.get_winner().is_some()) || state.available_moves().is_empty() {
                break;
            }

            last = agent.respond().unwrap().selected;
            assert!(last.is_some());
            turn += 1;
            assert!(turn <= 81);
        }
    }
}
