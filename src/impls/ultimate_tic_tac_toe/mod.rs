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

//! The game of ultimate tic-tac-toe.
//!
//! Nine tic-tac-toe boards are arranged in a 3x3 grid.  Marking local cell (r, c) of
//! any sub-board sends the opponent to sub-board (r, c).  If that sub-board is already
//! decided, the opponent may play in any undecided sub-board instead.  Three sub-boards
//! in a line win the game; if the board fills up without a line, the player with more
//! sub-boards wins.

use std::hash::{Hash, Hasher};

/// Either X or O.  X always moves first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn flip(&self) -> Mark {
        match *self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The player index of this mark, 0 for X and 1 for O.
    pub fn get_index(&self) -> u8 {
        match *self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }
}

/// The status of a sub-board, or of the whole board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    Undecided,
    Win(Mark),
    /// Decided, but nobody won.
    Draw,
}

impl Outcome {
    pub fn is_decided(&self) -> bool {
        *self != Outcome::Undecided
    }

    pub fn get_winner(&self) -> Option<Mark> {
        match *self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

impl Default for Outcome {
    fn default() -> Outcome {
        Outcome::Undecided
    }
}

/// A (row, col) pair.  Local positions range over 0-2 within a sub-board; global
/// positions range over 0-8 within the whole board.  Global positions are the plies
/// of the game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position {
            row: row,
            col: col,
        }
    }

    /// Splits a global position into the sub-board that contains it and the local cell within.
    pub fn to_local(&self) -> (Position, Position) {
        (
            Position::new(self.row / 3, self.col / 3),
            Position::new(self.row % 3, self.col % 3),
        )
    }

    /// Combines a sub-board position and a local cell into a global position.
    pub fn from_local(sub_board: Position, cell: Position) -> Position {
        Position::new(sub_board.row * 3 + cell.row, sub_board.col * 3 + cell.col)
    }
}

impl Hash for Position {
    fn hash<H>(&self, state: &mut H) where H: Hasher {
        state.write_u64(((self.row as u64) << 8) | self.col as u64);
    }
}

/// Either a win or a draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {
    Win(Mark),
    Draw,
}

/// The eight lines of a 3x3 grid.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the mark that holds all three cells of some line, if any.
fn find_line(grid: &[[Option<Mark>; 3]; 3]) -> Option<Mark> {
    LINES.iter()
        .filter_map(|line| {
            let first = grid[line[0].0][line[0].1];
            if first.is_some() && line[1..].iter().all(|&(r, c)| grid[r][c] == first) {
                first
            } else {
                None
            }
        })
        .next()
}

pub use self::meta_board::MetaBoard;
pub use self::sub_board::SubBoard;

mod display;
mod meta_board;
mod sub_board;
mod zero_sum;
