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

//! A time-bounded Monte Carlo player for ultimate tic-tac-toe.
//!
//! This crate provides a small set of traits for describing a two-player zero-sum game,
//! a flat Monte Carlo search over any game that implements them, and an implementation
//! of ultimate tic-tac-toe.
//!
//! # Implementation
//!
//! The three basic traits are `Ply`, `Resolution`, and `State`.  These form the basic
//! building blocks of any zero-sum game.  To be searched, the `State` type must also
//! implement `analysis::Extrapolatable`, which lists the legal plies.
//!
//! # Example
//!
//! ```rust
//! # extern crate ultimate_tic_tac_toe;
//! use std::time::Duration;
//!
//! use ultimate_tic_tac_toe::Agent;
//! use ultimate_tic_tac_toe::analysis::search::mctsearch::{MctSearch, RandomSimulator, WallClock};
//! use ultimate_tic_tac_toe::impls::ultimate_tic_tac_toe::{MetaBoard, Position};
//!
//! # fn main() {
//! let search = MctSearch::new(RandomSimulator::new(), WallClock::new())
//!     .with_budget(Duration::from_millis(20));
//! let mut agent = Agent::new(MetaBoard::new(), search);
//!
//! // The opponent opened in the center, so we must answer in the center sub-board.
//! let reply = agent.take_turn(Some(&Position::new(4, 4))).unwrap().unwrap();
//! assert_eq!(reply.to_local().0, Position::new(1, 1));
//! # }
//! ```

pub use self::agent::Agent;
pub use self::error::{Error, Result};
pub use self::ply::Ply;
pub use self::resolution::Resolution;
pub use self::state::State;

pub mod analysis;
pub mod impls;
pub mod protocol;
pub mod util;

mod agent;
mod error;
mod ply;
mod resolution;
mod state;
