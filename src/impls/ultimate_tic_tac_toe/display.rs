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

use std::fmt;

use crate::impls::ultimate_tic_tac_toe::{Mark, MetaBoard, Outcome, Position, Resolution, SubBoard};

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Outcome::Undecided => write!(f, "."),
            Outcome::Win(mark) => write!(f, "{}", mark),
            Outcome::Draw => write!(f, "="),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Resolution::Win(mark) => write!(f, "{} wins", mark),
            Resolution::Draw => write!(f, "Draw"),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

impl fmt::Display for SubBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3 {
                match self.get_cell(row, col) {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

/// Renders the 9x9 grid, with `-` marking the cells the next mark may go in, followed
/// by the outcome of each sub-board.
impl fmt::Display for MetaBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let active = self.get_active_sub_board();

        for row in 0..9 {
            if row > 0 && row % 3 == 0 {
                writeln!(f)?;
            }
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    write!(f, " ")?;
                }

                let position = Position::new(row, col);
                let (sub_board, _) = position.to_local();
                match self.get_cell(position) {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => {
                        let playable = !self.get_sub_board(sub_board.row, sub_board.col).get_outcome().is_decided() &&
                            active.map_or(true, |active| active == sub_board);
                        write!(f, "{}", if playable { "-" } else { "." })?;
                    },
                }
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.get_sub_board(row, col).get_outcome())?;
            }
            writeln!(f)?;
        }

        write!(f, "{} to move, {} plies played", self.next_mark(), self.get_move_count())
    }
}

#[cfg(test)]
mod test {
    use crate::impls::ultimate_tic_tac_toe::{Mark, MetaBoard, Outcome, Position, SubBoard};

    #[test]
    fn test_display_sub_board_and_outcomes() {
        let board = SubBoard::from_cells([[Some(Mark::X), None, None], [None, Some(Mark::O), None], [None; 3]]);
        assert_eq!(format!("{}", board), "X..\n.O.\n...");
        assert_eq!(format!("{}", Outcome::Draw), "=");
        assert_eq!(format!("{}", Outcome::Win(Mark::O)), "O");
        assert_eq!(format!("{}", Position::new(7, 2)), "7 2");
    }

    #[test]
    fn test_display_marks_playable_cells() {
        let mut board = MetaBoard::new();
        board.place_move(Position::new(4, 4)).unwrap();

        let rendered = format!("{}", board);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "... ... ...");
        assert_eq!(lines[4], "... --- ...");
        assert_eq!(lines[5], "... -X- ...");
        assert_eq!(lines[12], "...");
        assert_eq!(lines[15], "O to move, 1 plies played");
    }
}
