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

use rand::{self, Rng};
use rand_core::{self, impls, RngCore, SeedableRng};

/// A small, fast generator (David Jones' JKISS32) used for shuffling and rollouts.
///
/// It is not cryptographically secure.  Use `seed_from_u64` for reproducible streams.
#[derive(Clone, Copy, Debug)]
pub struct JKiss32Rng {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
    c: bool,
}

impl JKiss32Rng {
    /// Creates a generator seeded from the thread-local generator.
    pub fn new() -> JKiss32Rng {
        let mut seed = [0; 16];
        rand::thread_rng().fill(&mut seed);
        JKiss32Rng::from_seed(seed)
    }
}

impl SeedableRng for JKiss32Rng {
    type Seed = [u8; 16];

    fn from_seed(seed: [u8; 16]) -> JKiss32Rng {
        let word = |i: usize| u32::from_le_bytes([seed[i], seed[i + 1], seed[i + 2], seed[i + 3]]);

        // The xorshift component never leaves zero.
        let y = word(4);

        JKiss32Rng {
            x: word(0),
            y: if y == 0 { 0x1F12_3BB5 } else { y },
            z: word(8),
            w: word(12),
            c: false,
        }
    }
}

impl RngCore for JKiss32Rng {
    fn next_u32(&mut self) -> u32 {
        self.y ^= self.y << 5;
        self.y ^= self.y >> 7;
        self.y ^= self.y << 22;
        let t = self.z.wrapping_add(self.w).wrapping_add(self.c as u32) as i32;
        self.z = self.w;
        self.c = t < 0;
        self.w = (t & 0x7FFFFFFF) as u32;
        self.x = self.x.wrapping_add(1411392427);
        self.x.wrapping_add(self.y).wrapping_add(self.w)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = JKiss32Rng::seed_from_u64(7);
        let mut b = JKiss32Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = JKiss32Rng::seed_from_u64(1);
        let mut b = JKiss32Rng::seed_from_u64(2);
        let a = (0..8).map(|_| a.next_u32()).collect::<Vec<_>>();
        let b = (0..8).map(|_| b.next_u32()).collect::<Vec<_>>();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_seed_still_varies() {
        let mut rng = JKiss32Rng::from_seed([0; 16]);
        let first = rng.next_u32();
        assert!((0..16).any(|_| rng.next_u32() != first));
    }
}
