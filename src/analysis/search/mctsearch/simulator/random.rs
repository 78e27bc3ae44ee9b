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

use rand::seq::SliceRandom;
use rand_core::SeedableRng;
use tracing::warn;

use crate::analysis::Extrapolatable;
use crate::analysis::search::mctsearch::Simulator;
use crate::resolution::Resolution;
use crate::state::State;
use crate::util::JKiss32Rng;

/// Plays uniformly random plies until someone wins or no plies remain.
///
/// A drawn resolution does not end the simulation on its own; only running out of plies does.
#[derive(Clone)]
pub struct RandomSimulator<S> where
    S: State + Extrapolatable<<S as State>::Ply> {
    rng: JKiss32Rng,
    plies: Vec<<S as State>::Ply>,
}

impl<S> RandomSimulator<S> where
    S: State + Extrapolatable<<S as State>::Ply> {
    pub fn new() -> RandomSimulator<S> {
        RandomSimulator::with_rng(JKiss32Rng::new())
    }

    pub fn with_rng(rng: JKiss32Rng) -> RandomSimulator<S> {
        RandomSimulator {
            rng: rng,
            plies: Vec::with_capacity(81),
        }
    }

    pub fn from_seed(seed: u64) -> RandomSimulator<S> {
        RandomSimulator::with_rng(JKiss32Rng::seed_from_u64(seed))
    }
}

impl<S> Simulator<S> for RandomSimulator<S> where
    S: State + Extrapolatable<<S as State>::Ply> {
    fn simulate(&mut self, state: &mut S) -> Option<<S as State>::Resolution> {
        loop {
            let resolution = state.check_resolution();
            if resolution.as_ref().map_or(false, |resolution| resolution.get_winner().is_some()) {
                return resolution;
            }

            self.plies.clear();
            state.extrapolate_into(&mut self.plies);

            let ply = match self.plies.choose(&mut self.rng) {
                Some(ply) => ply,
                None => return resolution,
            };

            if let Err(error) = state.execute_ply(Some(ply)) {
                warn!(%error, ply = %ply, "Generated ply was rejected; abandoning simulation");
                return resolution;
            }
        }
    }
}
