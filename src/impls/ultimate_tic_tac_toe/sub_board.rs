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

use crate::error::{Error, Result};
use crate::impls::ultimate_tic_tac_toe::{find_line, Mark, Outcome, Position};

/// A single 3x3 tic-tac-toe board.
///
/// The outcome is cached when a mark is placed and never changes once decided.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SubBoard {
    cells: [[Option<Mark>; 3]; 3],
    move_count: u8,
    outcome: Outcome,
}

impl SubBoard {
    /// Creates an empty, undecided board.
    pub fn new() -> SubBoard {
        SubBoard::default()
    }

    /// Creates a board holding `cells`, with its move count and outcome derived from them.
    pub fn from_cells(cells: [[Option<Mark>; 3]; 3]) -> SubBoard {
        let mut board = SubBoard {
            cells: cells,
            move_count: cells.iter().flatten().filter(|cell| cell.is_some()).count() as u8,
            outcome: Outcome::Undecided,
        };
        board.outcome = board.check_outcome();
        board
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells[row][col]
    }

    pub fn get_move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the cached outcome.
    pub fn get_outcome(&self) -> Outcome {
        self.outcome
    }

    /// Places `mark` at the local cell (`row`, `col`) and returns the resulting outcome.
    /// The board is left untouched if the cell is already occupied.
    pub fn place_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<Outcome> {
        if row >= 3 || col >= 3 {
            return Err(Error::OutOfBounds { row: row as isize, col: col as isize });
        }

        if self.cells[row][col].is_some() {
            return Err(Error::OccupiedCell { row: row, col: col });
        }

        self.cells[row][col] = Some(mark);
        self.move_count += 1;

        if !self.outcome.is_decided() {
            self.outcome = self.check_outcome();
        }

        Ok(self.outcome)
    }

    /// Computes the outcome from the cells.  All eight lines are checked before the
    /// board is declared a draw.
    pub fn check_outcome(&self) -> Outcome {
        if let Some(mark) = find_line(&self.cells) {
            Outcome::Win(mark)
        } else if self.move_count >= 9 {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    /// Appends the empty cells to `cells`, in row-major order.
    pub fn available_cells_into(&self, cells: &mut Vec<Position>) {
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row][col].is_none() {
                    cells.push(Position::new(row, col));
                }
            }
        }
    }

    pub fn available_cells(&self) -> Vec<Position> {
        let mut cells = Vec::with_capacity(9 - self.move_count as usize);
        self.available_cells_into(&mut cells);
        cells
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    #[test]
    fn test_top_row_wins() {
        let board = SubBoard::from_cells([[X, X, X], [E, E, E], [E, E, E]]);
        assert_eq!(board.check_outcome(), Outcome::Win(Mark::X));
        assert_eq!(board.get_outcome(), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_every_line_is_checked() {
        let lines = [
            [(0, 0), (0, 1), (0, 2)],
            [(1, 0), (1, 1), (1, 2)],
            [(2, 0), (2, 1), (2, 2)],
            [(0, 0), (1, 0), (2, 0)],
            [(0, 1), (1, 1), (2, 1)],
            [(0, 2), (1, 2), (2, 2)],
            [(0, 0), (1, 1), (2, 2)],
            [(0, 2), (1, 1), (2, 0)],
        ];

        for line in lines.iter() {
            let mut board = SubBoard::new();
            for &(row, col) in line.iter() {
                assert_eq!(board.get_outcome(), Outcome::Undecided);
                board.place_move(row, col, Mark::O).unwrap();
            }
            assert_eq!(board.get_outcome(), Outcome::Win(Mark::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = SubBoard::from_cells([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(board.get_move_count(), 9);
        assert_eq!(board.check_outcome(), Outcome::Draw);
        assert!(board.available_cells().is_empty());
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board = SubBoard::from_cells([[X, O, X], [O, X, O], [O, X, X]]);
        assert_eq!(board.check_outcome(), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_partial_board_is_undecided() {
        let board = SubBoard::from_cells([[X, O, E], [E, X, E], [E, E, O]]);
        assert_eq!(board.check_outcome(), Outcome::Undecided);
        assert_eq!(board.available_cells(), vec![
            Position::new(0, 2),
            Position::new(1, 0),
            Position::new(1, 2),
            Position::new(2, 0),
            Position::new(2, 1),
        ]);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut board = SubBoard::new();
        board.place_move(1, 1, Mark::X).unwrap();
        let before = board;

        match board.place_move(1, 1, Mark::O) {
            Err(Error::OccupiedCell { row: 1, col: 1 }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(board, before);
        assert_eq!(board.get_move_count(), 1);
    }

    #[test]
    fn test_decided_outcome_is_never_recomputed() {
        let mut board = SubBoard::from_cells([[X, X, X], [O, O, E], [E, E, E]]);
        board.place_move(1, 2, Mark::O).unwrap();
        assert_eq!(board.get_outcome(), Outcome::Win(Mark::X));
    }
}
