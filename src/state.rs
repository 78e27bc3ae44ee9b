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

use std::fmt::Display;
use std::hash::Hash;

use crate::error::Result;
use crate::ply::Ply;
use crate::resolution::Resolution;

/// The state of the game.
///
/// This should represent everything that makes up a single moment of the game, i.e. in
/// tic-tac-toe, this would be the board, the turn number, and any restriction on where
/// the next mark may go.
///
/// Searches clone the state freely, so it is recommended to implement `Clone` in a way
/// that makes `clone_from` cheap.
pub trait State: Clone + Display + Eq + Hash + PartialEq {
    type Ply: Ply;
    type Resolution: Resolution;

    /// Returns the number of plies that have been executed on this state.
    fn get_ply_count(&self) -> usize;

    /// Returns the index of the player who will execute the next ply.
    fn get_next_player(&self) -> u8 {
        (self.get_ply_count() % 2) as u8
    }

    /// Executes a ply on the state.  `None` represents the absence of a ply, for
    /// example an opponent who has not moved yet.
    ///
    /// On error, the state must be left exactly as it was.
    fn execute_ply(&mut self, ply: Option<&Self::Ply>) -> Result<()>;

    /// Returns `None` if the game has not reached a conclusion.
    fn check_resolution(&self) -> Option<Self::Resolution>;

    /// Executes each ply in `plies` on the result of the previous ply.
    fn execute_plies(&mut self, plies: &[Self::Ply]) -> Result<()> {
        for ply in plies {
            self.execute_ply(Some(ply))?;
        }
        Ok(())
    }
}
