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

//! The line-oriented turn protocol.
//!
//! Each turn the referee sends the opponent's last ply as `row col` (`-1 -1` before the
//! opponent has moved), then a count `n` followed by `n` pairs listing the legal plies.
//! We answer with `row col` on a line of its own.  All coordinates are global, 0-8.

use std::io::{BufRead, Write};

use fnv::FnvHashSet;
use tracing::{debug, warn};

use crate::agent::Agent;
use crate::analysis::search::mctsearch::{Clock, Simulator};
use crate::error::{Error, Result};
use crate::impls::ultimate_tic_tac_toe::{MetaBoard, Position};

/// One turn's worth of input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Turn {
    /// The opponent's last ply, or `None` if the opponent has not moved yet.
    pub opponent: Option<Position>,
    /// The legal plies as listed by the referee, unvalidated.
    pub hints: Vec<(i64, i64)>,
}

/// Reads whitespace-separated integers, across line breaks, from a buffered reader.
pub struct TurnReader<R> where
    R: BufRead {
    input: R,
    line: String,
    offset: usize,
}

impl<R> TurnReader<R> where
    R: BufRead {
    pub fn new(input: R) -> TurnReader<R> {
        TurnReader {
            input: input,
            line: String::new(),
            offset: 0,
        }
    }

    /// Reads the next turn.  Returns `None` if the input ends cleanly before the turn begins.
    pub fn read_turn(&mut self) -> Result<Option<Turn>> {
        let row = match self.next_integer()? {
            Some(row) => row,
            None => return Ok(None),
        };
        let col = self.expect_integer()?;
        let opponent = to_position(row, col)?;

        let count = self.expect_integer()?;
        if count < 0 {
            return Err(Error::Protocol(format!("negative legal ply count {}", count)));
        }

        let mut hints = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let row = self.expect_integer()?;
            let col = self.expect_integer()?;
            hints.push((row, col));
        }

        Ok(Some(Turn {
            opponent: opponent,
            hints: hints,
        }))
    }

    fn expect_integer(&mut self) -> Result<i64> {
        self.next_integer()?.ok_or_else(|| Error::Protocol(String::from("input ended in the middle of a turn")))
    }

    fn next_integer(&mut self) -> Result<Option<i64>> {
        loop {
            let rest = &self.line[self.offset..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let length = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                let token = &trimmed[..length];
                self.offset += rest.len() - trimmed.len() + length;
                return token.parse()
                    .map(Some)
                    .map_err(|_| Error::Protocol(format!("expected an integer, found {:?}", token)));
            }

            self.line.clear();
            self.offset = 0;
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }
}

/// Converts a pair of protocol integers to a ply.  `-1 -1` is the absence of a ply.
pub fn to_position(row: i64, col: i64) -> Result<Option<Position>> {
    if row == -1 && col == -1 {
        Ok(None)
    } else if row < 0 || row >= 9 || col < 0 || col >= 9 {
        Err(Error::OutOfBounds { row: row as isize, col: col as isize })
    } else {
        Ok(Some(Position::new(row as usize, col as usize)))
    }
}

/// Writes our ply, or `-1 -1` if there is none, and flushes.
pub fn write_ply<W>(output: &mut W, ply: Option<Position>) -> Result<()> where
    W: Write {
    match ply {
        Some(position) => writeln!(output, "{} {}", position.row, position.col)?,
        None => writeln!(output, "-1 -1")?,
    }
    output.flush()?;
    Ok(())
}

/// Returns `true` if the referee's legal plies are exactly `plies`.
pub fn hints_match(hints: &[(i64, i64)], plies: &[Position]) -> bool {
    let hinted = hints.iter().cloned().collect::<FnvHashSet<_>>();
    let generated = plies.iter()
        .map(|position| (position.row as i64, position.col as i64))
        .collect::<FnvHashSet<_>>();
    hinted == generated
}

/// Options for `play`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Compare the referee's legal plies with our own and warn on any difference.
    pub validate_hints: bool,
    /// Print the board to stderr before every search.
    pub show_board: bool,
}

/// Plays turns until the input ends.
pub fn play<R, W, Q, C>(input: R, output: &mut W, agent: &mut Agent<MetaBoard, Q, C>, options: Options) -> Result<()> where
    R: BufRead,
    W: Write,
    Q: Simulator<MetaBoard>,
    C: Clock {
    let mut reader = TurnReader::new(input);

    while let Some(turn) = reader.read_turn()? {
        debug!(opponent = ?turn.opponent, hints = turn.hints.len(), "Turn received");

        // A rejected ply has already been logged, and the state is unchanged.
        agent.observe(turn.opponent.as_ref()).ok();

        if options.validate_hints {
            let plies = agent.get_state().available_moves();
            if !hints_match(&turn.hints, &plies) {
                warn!(hinted = turn.hints.len(), generated = plies.len(), "Legal plies differ from the referee's");
            }
        }

        if options.show_board {
            eprintln!("{}\n", agent.get_state());
        }

        let analysis = agent.respond()?;
        write_ply(output, analysis.selected)?;
    }

    Ok(())
}
