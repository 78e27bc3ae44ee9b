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

use std::time::{Duration, Instant};

/// A source of elapsed time for deadline checks.
pub trait Clock {
    /// Marks the beginning of a search.
    fn start(&mut self);

    /// Returns the time elapsed since the last call to `start`.
    fn elapsed(&mut self) -> Duration;
}

/// Measures real time.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> WallClock {
        WallClock {
            start: Instant::now(),
        }
    }
}

impl Clock for WallClock {
    fn start(&mut self) {
        self.start = Instant::now();
    }

    fn elapsed(&mut self) -> Duration {
        self.start.elapsed()
    }
}

/// A synthetic clock that advances by a fixed step every time it is read.  The first
/// read after `start` returns zero.
#[derive(Clone, Copy, Debug)]
pub struct SteppingClock {
    step: Duration,
    now: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> SteppingClock {
        SteppingClock {
            step: step,
            now: Duration::from_secs(0),
        }
    }
}

impl Clock for SteppingClock {
    fn start(&mut self) {
        self.now = Duration::from_secs(0);
    }

    fn elapsed(&mut self) -> Duration {
        let now = self.now;
        self.now += self.step;
        now
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stepping_clock() {
        let mut clock = SteppingClock::new(Duration::from_millis(10));
        clock.start();
        assert_eq!(clock.elapsed(), Duration::from_millis(0));
        assert_eq!(clock.elapsed(), Duration::from_millis(10));
        assert_eq!(clock.elapsed(), Duration::from_millis(20));
        clock.start();
        assert_eq!(clock.elapsed(), Duration::from_millis(0));
    }

    #[test]
    fn test_wall_clock_moves_forward() {
        let mut clock = WallClock::new();
        clock.start();
        let first = clock.elapsed();
        assert!(clock.elapsed() >= first);
    }
}
