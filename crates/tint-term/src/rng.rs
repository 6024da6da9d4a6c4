// SPDX-License-Identifier: MIT
//
// Seeded randomness for the one renderer that wants it.
//
// Gradient padding can duplicate random columns to reach the target width.
// That choice goes through `RandomSource` so tests (and callers who care
// about reproducible output) can inject their own source. `Xorshift32` is
// the built-in one: tiny, deterministic per seed, no external crate.

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// A value in `0..bound`. `bound` is never 0.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Minimal deterministic PRNG (Marsaglia xorshift, 13/17/5).
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed the generator. A zero seed would lock the state at zero, so it
    /// is promoted to 1.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

impl RandomSource for Xorshift32 {
    fn next_index(&mut self, bound: usize) -> usize {
        self.next() as usize % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xorshift32::new(42);
        let mut b = Xorshift32::new(42);
        for _ in 0..100 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn zero_seed_does_not_stall() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next(), 0);
    }

    #[test]
    fn known_first_value() {
        // 1 ^ (1 << 13) = 0x2001; ^ (>> 17) = 0x2001; ^ (<< 5) = 0x42021.
        assert_eq!(Xorshift32::new(1).next(), 0x0004_2021);
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut rng = Xorshift32::new(7);
        for bound in 1..50 {
            assert!(rng.next_index(bound) < bound);
        }
    }
}
