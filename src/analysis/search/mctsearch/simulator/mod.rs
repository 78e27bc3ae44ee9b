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

use crate::analysis::Extrapolatable;
use crate::state::State;

/// Plays a state out to the end of the game.
pub trait Simulator<S> where
    S: State + Extrapolatable<<S as State>::Ply> {
    /// Advances `state` in place until it is terminal, and returns its resolution, if any.
    fn simulate(&mut self, state: &mut S) -> Option<<S as State>::Resolution>;
}

pub use self::random::RandomSimulator;

mod random;
