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

use crate::analysis;
use crate::error::Result;
use crate::impls::ultimate_tic_tac_toe::{Mark, MetaBoard, Outcome, Position, Resolution};
use crate::ply;
use crate::resolution;
use crate::state;

impl ply::Ply for Position { }

impl resolution::Resolution for Resolution {
    fn get_winner(&self) -> Option<u8> {
        match *self {
            Resolution::Win(mark) => Some(mark.get_index()),
            Resolution::Draw => None,
        }
    }

    fn is_draw(&self) -> bool {
        if let Resolution::Draw = *self { true } else { false }
    }
}

impl state::State for MetaBoard {
    type Ply = Position;
    type Resolution = Resolution;

    fn get_ply_count(&self) -> usize {
        self.get_move_count() as usize
    }

    fn get_next_player(&self) -> u8 {
        self.next_mark().get_index()
    }

    /// `None` leaves the board untouched; it stands for an opponent that has not moved yet.
    fn execute_ply(&mut self, ply: Option<&Position>) -> Result<()> {
        match ply {
            Some(position) => self.place_move(*position),
            None => Ok(()),
        }
    }

    fn check_resolution(&self) -> Option<Resolution> {
        match self.get_outcome() {
            Outcome::Undecided => None,
            Outcome::Win(mark) => Some(Resolution::Win(mark)),
            Outcome::Draw => Some(Resolution::Draw),
        }
    }
}

impl analysis::Extrapolatable<Position> for MetaBoard {
    fn extrapolate_into(&self, plies: &mut Vec<Position>) {
        self.available_moves_into(plies);
    }
}

#[cfg(test)]
mod test {
    use crate::analysis::Extrapolatable;
    use crate::impls::ultimate_tic_tac_toe::*;
    use crate::resolution::Resolution as ResolutionTrait;
    use crate::state::State;

    #[test]
    fn test_null_ply_is_a_no_op() {
        let mut board = MetaBoard::new();
        board.execute_ply(None).unwrap();
        assert_eq!(board, MetaBoard::new());
        assert_eq!(board.get_next_player(), 0);
    }

    #[test]
    fn test_execute_plies() {
        let mut board = MetaBoard::new();
        board.execute_plies(&[Position::new(4, 4), Position::new(3, 3)]).unwrap();
        assert_eq!(board.get_ply_count(), 2);
        assert_eq!(board.get_next_player(), Mark::X.get_index());
        assert_eq!(board.extrapolate(), board.available_moves());
        assert!(board.check_resolution().is_none());
    }

    #[test]
    fn test_resolution_winner_indices() {
        assert_eq!(Resolution::Win(Mark::X).get_winner(), Some(0));
        assert_eq!(Resolution::Win(Mark::O).get_winner(), Some(1));
        assert_eq!(Resolution::Draw.get_winner(), None);
        assert!(Resolution::Draw.is_draw());
    }

    #[test]
    fn test_resolution_follows_placements() {
        use crate::impls::ultimate_tic_tac_toe::Mark::{O, X};

        let won = SubBoard::from_cells([[Some(X); 3], [Some(O), Some(O), None], [None; 3]]);
        let open = SubBoard::from_cells([[Some(X), Some(X), None], [Some(O), Some(O), None], [None; 3]]);
        let mut boards = [[SubBoard::new(); 3]; 3];
        boards[0] = [won, won, open];

        let mut board = MetaBoard::from_sub_boards(boards, Mark::X, Some(Position::new(0, 2)));
        assert!(board.check_resolution().is_none());

        board.execute_ply(Some(&Position::new(0, 8))).unwrap();
        assert_eq!(board.get_outcome(), Outcome::Win(Mark::X));
        assert_eq!(board.check_resolution(), Some(Resolution::Win(Mark::X)));
        assert_eq!(board.check_resolution().and_then(|r| r.get_winner()), Some(0));
    }
}
