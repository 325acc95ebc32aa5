//! The linear congruential recurrence every maze is generated from.
//!
//! Output must be identical on every platform forever: a given token always
//! produces the same maze. Integer arithmetic only.

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS: u64 = 1 << 31;

/// `(seed * 1103515245 + 12345) mod 2^31`
///
/// Wrapping 64 bit arithmetic is exact here because 2^31 divides 2^64, so the
/// function is total over every `u64` seed.
#[inline]
pub fn next_state(seed: u64) -> u64 {
    seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & (MODULUS - 1)
}

/// Iterator over successive states of the recurrence, starting after `seed`.
#[derive(Debug, Clone)]
pub struct SemiRandom {
    state: u64,
}

impl SemiRandom {
    pub fn new(seed: u64) -> SemiRandom {
        SemiRandom { state: seed }
    }

    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance once and return the new state.
    #[inline]
    pub fn advance(&mut self) -> u64 {
        self.state = next_state(self.state);
        self.state
    }
}

impl Iterator for SemiRandom {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.advance())
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn known_values() {
        assert_eq!(next_state(0), 12_345);
        assert_eq!(next_state(12_345), 1_406_932_606);
    }

    #[test]
    fn iterator_matches_repeated_application() {
        let states = SemiRandom::new(7).take(3).collect::<Vec<_>>();
        let a = next_state(7);
        let b = next_state(a);
        let c = next_state(b);
        assert_eq!(states, vec![a, b, c]);
    }

    #[test]
    fn advance_updates_state() {
        let mut rng = SemiRandom::new(0);
        assert_eq!(rng.state(), 0);
        assert_eq!(rng.advance(), 12_345);
        assert_eq!(rng.state(), 12_345);
    }

    #[test]
    fn huge_seeds_do_not_overflow() {
        let expected = ((u128::from(u64::MAX) * u128::from(MULTIPLIER) + u128::from(INCREMENT)) %
                        u128::from(MODULUS)) as u64;
        assert_eq!(next_state(u64::MAX), expected);
    }

    #[test]
    fn quickcheck_matches_wide_arithmetic() {
        fn p(seed: u64) -> bool {
            let wide = (u128::from(seed) * u128::from(MULTIPLIER) + u128::from(INCREMENT)) %
                       u128::from(MODULUS);
            next_state(seed) == wide as u64
        }
        quickcheck(p as fn(u64) -> bool)
    }

    #[test]
    fn quickcheck_stays_below_modulus() {
        fn p(seed: u64) -> bool {
            next_state(seed) < MODULUS
        }
        quickcheck(p as fn(u64) -> bool)
    }
}
