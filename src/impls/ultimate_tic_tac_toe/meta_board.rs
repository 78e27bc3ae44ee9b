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
use crate::impls::ultimate_tic_tac_toe::{find_line, Mark, Outcome, Position, SubBoard};

/// The full board: a 3x3 grid of sub-boards.
///
/// The active sub-board is only meaningful while the board is closed.  When the board
/// is open, the next mark may go in any undecided sub-board.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MetaBoard {
    boards: [[SubBoard; 3]; 3],
    next_mark: Mark,
    move_count: u8,
    active: Position,
    open: bool,
    outcome: Outcome,
}

impl MetaBoard {
    /// Creates an empty board, open, with X to move.
    pub fn new() -> MetaBoard {
        MetaBoard {
            boards: [[SubBoard::new(); 3]; 3],
            next_mark: Mark::X,
            move_count: 0,
            active: Position::new(0, 0),
            open: true,
            outcome: Outcome::Undecided,
        }
    }

    /// Creates a board from existing sub-boards.  The move count is the total of the
    /// sub-boards' move counts.  `active` confines `next_mark` to a sub-board; the board is
    /// open if it is `None` or names a decided sub-board.
    pub fn from_sub_boards(boards: [[SubBoard; 3]; 3], next_mark: Mark, active: Option<Position>) -> MetaBoard {
        let mut board = MetaBoard {
            boards: boards,
            next_mark: next_mark,
            move_count: boards.iter().flatten().map(|board| board.get_move_count()).sum(),
            active: active.unwrap_or(Position::new(0, 0)),
            open: true,
            outcome: Outcome::Undecided,
        };
        if let Some(active) = active {
            board.open = board.boards[active.row][active.col].get_outcome().is_decided();
        }
        board.outcome = board.check_outcome();
        board
    }

    pub fn get_sub_board(&self, row: usize, col: usize) -> &SubBoard {
        &self.boards[row][col]
    }

    /// Returns the mark at a global position.
    pub fn get_cell(&self, position: Position) -> Option<Mark> {
        let (sub_board, cell) = position.to_local();
        self.boards[sub_board.row][sub_board.col].get_cell(cell.row, cell.col)
    }

    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    pub fn get_move_count(&self) -> u8 {
        self.move_count
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the sub-board the next mark is confined to, or `None` if the board is open.
    pub fn get_active_sub_board(&self) -> Option<Position> {
        if self.open {
            None
        } else {
            Some(self.active)
        }
    }

    /// Returns the cached outcome, as of the last successful placement.
    pub fn get_outcome(&self) -> Outcome {
        self.outcome
    }

    /// Places the next mark at the global `position`.
    ///
    /// The local cell that was marked becomes the opponent's active sub-board, and the
    /// board opens if that sub-board is already decided.  If the cell is occupied, the
    /// error is returned and nothing changes.
    pub fn place_move(&mut self, position: Position) -> Result<()> {
        if position.row >= 9 || position.col >= 9 {
            return Err(Error::OutOfBounds {
                row: position.row as isize,
                col: position.col as isize,
            });
        }

        let (sub_board, cell) = position.to_local();
        self.boards[sub_board.row][sub_board.col].place_move(cell.row, cell.col, self.next_mark)?;

        self.move_count += 1;
        self.next_mark = self.next_mark.flip();

        self.active = cell;
        self.open = self.boards[cell.row][cell.col].get_outcome().is_decided();

        self.outcome = self.check_outcome();
        Ok(())
    }

    /// Computes the outcome of the whole board from the outcomes of the sub-boards.
    ///
    /// A line of sub-boards won by the same mark wins.  Once all 81 moves have been
    /// played, the mark with more sub-boards wins, and equal counts are a draw.
    pub fn check_outcome(&self) -> Outcome {
        let mut grid = [[None; 3]; 3];
        let mut x_boards = 0;
        let mut o_boards = 0;

        for row in 0..3 {
            for col in 0..3 {
                let winner = self.boards[row][col].get_outcome().get_winner();
                match winner {
                    Some(Mark::X) => x_boards += 1,
                    Some(Mark::O) => o_boards += 1,
                    None => (),
                }
                grid[row][col] = winner;
            }
        }

        if let Some(mark) = find_line(&grid) {
            Outcome::Win(mark)
        } else if self.move_count >= 81 {
            if x_boards > o_boards {
                Outcome::Win(Mark::X)
            } else if o_boards > x_boards {
                Outcome::Win(Mark::O)
            } else {
                Outcome::Draw
            }
        } else {
            Outcome::Undecided
        }
    }

    /// Appends every legal global position to `moves`.
    ///
    /// A closed board yields the empty cells of the active sub-board (nothing, if it is
    /// somehow decided).  An open board yields the empty cells of every undecided
    /// sub-board, sub-boards in row-major order and cells in row-major order within each.
    pub fn available_moves_into(&self, moves: &mut Vec<Position>) {
        if !self.open {
            self.sub_board_moves_into(self.active, moves);
        } else {
            for row in 0..3 {
                for col in 0..3 {
                    self.sub_board_moves_into(Position::new(row, col), moves);
                }
            }
        }
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        self.available_moves_into(&mut moves);
        moves
    }

    fn sub_board_moves_into(&self, sub_board: Position, moves: &mut Vec<Position>) {
        let board = &self.boards[sub_board.row][sub_board.col];
        if board.get_outcome().is_decided() {
            return;
        }

        let start = moves.len();
        board.available_cells_into(moves);
        for cell in &mut moves[start..] {
            *cell = Position::from_local(sub_board, *cell);
        }
    }
}

impl Default for MetaBoard {
    fn default() -> MetaBoard {
        MetaBoard::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn play(board: &mut MetaBoard, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            board.place_move(Position::new(row, col)).unwrap();
        }
    }

    #[test]
    fn test_new_board_is_open() {
        let board = MetaBoard::new();
        assert!(board.is_open());
        assert_eq!(board.get_active_sub_board(), None);
        assert_eq!(board.next_mark(), Mark::X);
        assert_eq!(board.available_moves().len(), 81);
        assert_eq!(board.check_outcome(), Outcome::Undecided);
    }

    #[test]
    fn test_center_move_closes_board_on_center() {
        let mut board = MetaBoard::new();
        board.place_move(Position::new(4, 4)).unwrap();

        assert_eq!(board.get_sub_board(1, 1).get_outcome(), Outcome::Undecided);
        assert_eq!(board.get_active_sub_board(), Some(Position::new(1, 1)));
        assert!(!board.is_open());
        assert_eq!(board.next_mark(), Mark::O);
        assert_eq!(board.get_move_count(), 1);

        let moves = board.available_moves();
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| (3..6).contains(&m.row) && (3..6).contains(&m.col)));
        assert!(!moves.contains(&Position::new(4, 4)));
    }

    #[test]
    fn test_local_cell_chooses_next_sub_board() {
        let mut board = MetaBoard::new();
        board.place_move(Position::new(0, 8)).unwrap();
        assert_eq!(board.get_active_sub_board(), Some(Position::new(0, 2)));
        assert_eq!(board.available_moves()[0], Position::new(0, 6));
    }

    #[test]
    fn test_occupied_cell_leaves_state_unchanged() {
        let mut board = MetaBoard::new();
        play(&mut board, &[(4, 4), (4, 3), (4, 1)]);
        let before = board.clone();

        // O is confined to sub-board (1, 1), whose center is already taken.
        match board.place_move(Position::new(4, 4)) {
            Err(Error::OccupiedCell { row: 1, col: 1 }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut board = MetaBoard::new();
        assert!(board.place_move(Position::new(9, 0)).is_err());
        assert_eq!(board, MetaBoard::new());
    }

    #[test]
    fn test_decided_target_opens_board() {
        let mut board = MetaBoard::new();
        play(&mut board, &[
            (0, 0), // X, sub (0,0) cell (0,0) -> O to (0,0)
            (1, 1), // O, sub (0,0) cell (1,1) -> X to (1,1)
            (3, 3), // X, sub (1,1) cell (0,0) -> O to (0,0)
            (2, 2), // O, sub (0,0) cell (2,2) -> X to (2,2)
            (6, 6), // X, sub (2,2) cell (0,0) -> O to (0,0)
            (1, 2), // O, sub (0,0) cell (1,2) -> X to (1,2)
            (3, 6), // X, sub (1,2) cell (0,0) -> O to (0,0)
            (1, 0), // O, sub (0,0) cell (1,0): O wins sub-board (0,0) -> X to (1,0)
        ]);
        assert_eq!(board.get_sub_board(0, 0).get_outcome(), Outcome::Win(Mark::O));
        assert_eq!(board.get_active_sub_board(), Some(Position::new(1, 0)));

        play(&mut board, &[(3, 0)]); // X, sub (1,0) cell (0,0) -> O to (0,0), decided
        assert!(board.is_open());
        assert_eq!(board.get_active_sub_board(), None);

        let moves = board.available_moves();
        assert!(moves.iter().all(|m| m.row >= 3 || m.col >= 3));
        // 81 cells, minus 9 in the decided sub-board, minus the marks elsewhere.
        assert_eq!(moves.len(), 81 - 9 - 4);
        assert_eq!(moves[0], Position::new(0, 3));
    }

    #[test]
    fn test_line_of_sub_boards_wins() {
        let mut board = MetaBoard::new();
        board.boards[0][0] = SubBoard::from_cells([[Some(Mark::O); 3], [None; 3], [None; 3]]);
        board.boards[1][1] = SubBoard::from_cells([[Some(Mark::O); 3], [None; 3], [None; 3]]);
        assert_eq!(board.check_outcome(), Outcome::Undecided);
        board.boards[2][2] = SubBoard::from_cells([[Some(Mark::O); 3], [None; 3], [None; 3]]);
        assert_eq!(board.check_outcome(), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_draws_do_not_form_lines() {
        use crate::impls::ultimate_tic_tac_toe::Mark::{O, X};

        let drawn = SubBoard::from_cells([
            [Some(X), Some(O), Some(X)],
            [Some(X), Some(O), Some(O)],
            [Some(O), Some(X), Some(X)],
        ]);
        assert_eq!(drawn.get_outcome(), Outcome::Draw);

        let mut board = MetaBoard::new();
        board.boards[0] = [drawn; 3];
        assert_eq!(board.check_outcome(), Outcome::Undecided);
        assert_eq!(board.available_moves().len(), 54);
        assert!(board.available_moves().iter().all(|m| m.row >= 3));
    }

    #[test]
    fn test_full_board_resolves_by_sub_board_count() {
        use crate::impls::ultimate_tic_tac_toe::Mark::{O, X};

        let drawn = SubBoard::from_cells([
            [Some(X), Some(O), Some(X)],
            [Some(X), Some(O), Some(O)],
            [Some(O), Some(X), Some(X)],
        ]);
        let x_won = SubBoard::from_cells([
            [Some(X), Some(O), Some(X)],
            [Some(O), Some(X), Some(O)],
            [Some(O), Some(X), Some(X)],
        ]);

        let mut board = MetaBoard::new();
        board.boards = [[drawn; 3]; 3];
        board.move_count = 81;
        assert_eq!(board.check_outcome(), Outcome::Draw);

        board.boards[0][1] = x_won;
        assert_eq!(board.check_outcome(), Outcome::Win(Mark::X));

        board.move_count = 80;
        assert_eq!(board.check_outcome(), Outcome::Undecided);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = MetaBoard::new();
        play(&mut board, &[(4, 4), (3, 3)]);
        let snapshot = board.clone();

        let mut copy = board.clone();
        let next = copy.available_moves()[0];
        copy.place_move(next).unwrap();

        assert_eq!(board, snapshot);
        assert_ne!(copy, board);
        assert_eq!(board.get_move_count(), 2);
        assert_eq!(copy.get_move_count(), 3);
    }
}
