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

use std::io;

use thiserror::Error;

/// Errors raised while executing plies or speaking the turn protocol.
#[derive(Debug, Error)]
pub enum Error {
    /// The target cell already holds a mark.  Nothing was changed.
    #[error("cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    /// The coordinates fall outside the board.
    #[error("coordinates ({row}, {col}) are out of bounds")]
    OutOfBounds { row: isize, col: isize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input stream did not follow the turn protocol.
    #[error("protocol error: {0}")]
    Protocol(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;
