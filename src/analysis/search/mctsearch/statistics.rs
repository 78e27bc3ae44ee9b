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
use std::time::Duration;

/// Statistics from a single search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Statistics {
    /// The number of rollouts that ran to completion.
    pub rollouts: u32,
    /// Time spent on the search, as measured by the search's clock.
    pub elapsed: Duration,
    /// `true` if the deadline, rather than the rollout limit, ended the search.
    pub truncated: bool,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let seconds = self.elapsed.as_secs_f32();
        write!(f, "  Rollouts: {}\n  Time:     {:.3}s", self.rollouts, seconds)?;
        if seconds > 0.0 {
            write!(f, " ({:.0}/s)", self.rollouts as f32 / seconds)?;
        }
        if self.truncated {
            write!(f, "\n  Stopped at the deadline")?;
        }
        Ok(())
    }
}
