/*
seeded_random.rs

Copyright 2025 The Stargrid contributors

This file is part of Stargrid.

Stargrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Stargrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Stargrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Reproducible pseudo-random sequence.
//!
//! [`SeededRandom`] is a Park–Miller "minimal standard" generator: a multiplicative linear
//! congruential generator over the Mersenne prime 2^31 - 1 with the multiplier 16807.
//! Two generators built from the same seed produce the same sequence, which makes the whole
//! layout generation reproducible.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Modulus of the recurrence (2^31 - 1).
const MODULUS: i64 = 2_147_483_647;

/// Multiplier of the recurrence.
const MULTIPLIER: i64 = 16_807;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomError {
    /// The lower bound is greater than the upper bound.
    InvertedBounds { min: i64, max: i64 },
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomError::InvertedBounds { min, max } => {
                write!(f, "inverted bounds: minimum {min} is greater than maximum {max}")
            }
        }
    }
}

impl Error for RandomError {}

/// Seeded pseudo-random generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    /// Current value of the recurrence, always in `(0, MODULUS)`.
    state: i64,
}

impl SeededRandom {
    /// Create a [`SeededRandom`] object.
    ///
    /// Any seed is accepted. Seeds that are negative, zero, or multiples of the modulus are
    /// remapped into the valid state range.
    pub fn new(seed: i64) -> Self {
        // The remainder keeps the sign of the seed
        let mut state: i64 = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        // Only reached for seed == -(MODULUS - 1). A zero state would stay zero forever.
        if state == 0 {
            state = MODULUS - 1;
        }
        Self { state }
    }

    /// Advance the sequence and return a value in `[0, 1)`.
    pub fn next_uniform(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Return a random integer between `min` and `max`, both inclusive.
    ///
    /// # Errors
    ///
    /// Return [`RandomError::InvertedBounds`] if `min` is greater than `max`. The sequence does
    /// not advance in that case.
    pub fn next_int(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        if min > max {
            return Err(RandomError::InvertedBounds { min, max });
        }
        let span: f64 = (max - min + 1) as f64;
        Ok((self.next_uniform() * span).floor() as i64 + min)
    }

    /// Return a random index in `0..len`.
    ///
    /// Draws the same value as `next_int(0, len - 1)`. An empty range always returns 0 and still
    /// advances the sequence.
    pub fn next_index(&mut self, len: usize) -> usize {
        (self.next_uniform() * len as f64).floor() as usize
    }

    /// Return the current internal state.
    pub fn state(&self) -> i64 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_follows_the_recurrence() {
        let mut rng = SeededRandom::new(1);
        let value = rng.next_uniform();
        assert_eq!(rng.state(), 16_807);
        assert_eq!(value, 16_806.0 / 2_147_483_646.0);
    }

    #[test]
    fn seeds_are_normalized() {
        assert_eq!(SeededRandom::new(0).state(), MODULUS - 1);
        assert_eq!(SeededRandom::new(MODULUS).state(), MODULUS - 1);
        assert_eq!(SeededRandom::new(-5).state(), MODULUS - 6);
        assert_eq!(SeededRandom::new(MODULUS + 3).state(), 3);
        assert_eq!(SeededRandom::new(-(MODULUS - 1)).state(), MODULUS - 1);
        assert_eq!(SeededRandom::new(42).state(), 42);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new(12346);
        let mut b = SeededRandom::new(12346);
        for _ in 0..1000 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn known_index_sequence() {
        let mut rng = SeededRandom::new(42);
        let drawn: Vec<usize> = (0..5).map(|_| rng.next_index(10)).collect();
        assert_eq!(drawn, vec![0, 5, 7, 2, 3]);
    }

    #[test]
    fn next_int_matches_next_index() {
        let mut a = SeededRandom::new(99);
        let mut b = SeededRandom::new(99);
        for _ in 0..200 {
            let i = a.next_int(0, 14).unwrap();
            assert_eq!(i as usize, b.next_index(15));
        }
    }

    #[test]
    fn next_int_stays_in_bounds() {
        let mut rng = SeededRandom::new(7);
        for _ in 0..10_000 {
            let v = rng.next_int(-3, 4).unwrap();
            assert!((-3..=4).contains(&v));
        }
        assert_eq!(rng.next_int(5, 5), Ok(5));
    }

    #[test]
    fn uniform_values_in_unit_interval() {
        let mut rng = SeededRandom::new(-123_456);
        for _ in 0..10_000 {
            let v = rng.next_uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut rng = SeededRandom::new(42);
        let before = rng.state();
        assert_eq!(
            rng.next_int(3, 2),
            Err(RandomError::InvertedBounds { min: 3, max: 2 })
        );
        assert_eq!(rng.state(), before);
    }
}
