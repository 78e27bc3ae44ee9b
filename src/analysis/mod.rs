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

//! Tools for analyzing game states.

use crate::ply::Ply;

/// Provides a method to generate the plies available to the player to move.
pub trait Extrapolatable<P> where
    P: Ply {
    /// Appends every legal ply to `plies`.  Must be called again whenever the state changes.
    fn extrapolate_into(&self, plies: &mut Vec<P>);

    /// Returns every legal ply.
    fn extrapolate(&self) -> Vec<P> {
        let mut plies = Vec::new();
        self.extrapolate_into(&mut plies);
        plies
    }
}

pub mod search;
