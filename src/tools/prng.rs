//! A small xorshift generator for drawing reproducible test and benchmark words.
//!
//! Besides uniform words it can bias towards few set bits (`sparse_rand`), few unset bits
//! (`dense_rand`) or a single set bit (`singular_bit`), which are the inputs the
//! `Sparse`, `Dense` and `Iterated` popcount strategies are sensitive to.

/// Seed used in place of zero, which would leave the generator stuck at zero.
const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Object for generating pseudo-random numbers.
pub struct PRNG {
    seed: u64,
}

impl PRNG {
    /// Creates PRNG from a seed. A seed of zero is replaced with a fixed non-zero seed.
    #[inline(always)]
    pub fn init(s: u64) -> PRNG {
        PRNG {
            seed: if s == 0 { FALLBACK_SEED } else { s },
        }
    }

    /// Returns a pseudo-random number.
    pub fn rand(&mut self) -> u64 {
        self.rand_change()
    }

    /// Returns a pseudo-random number with on average 8 bits being set.
    pub fn sparse_rand(&mut self) -> u64 {
        let mut s = self.rand_change();
        s &= self.rand_change();
        s &= self.rand_change();
        s
    }

    /// Returns a pseudo-random number with on average 8 bits being unset.
    pub fn dense_rand(&mut self) -> u64 {
        !self.sparse_rand()
    }

    /// Returns a u64 with exactly one bit set in a random location.
    pub fn singular_bit(&mut self) -> u64 {
        let byte: u8 = (self.rand() ^ self.rand())
            .to_le_bytes()
            .iter()
            .fold(0, |acc, &x| acc ^ x);
        1u64 << (byte >> 2)
    }

    /// Randomizes the current seed and returns a random value.
    fn rand_change(&mut self) -> u64 {
        self.seed ^= self.seed >> 12;
        self.seed ^= self.seed << 25;
        self.seed ^= self.seed >> 27;
        self.seed.wrapping_mul(2685_8216_5773_6338_717)
    }
}

#[cfg(test)]
mod test {
    use super::PRNG;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PRNG::init(2_661_634);
        let mut b = PRNG::init(2_661_634);
        for _ in 0..64 {
            assert_eq!(a.rand(), b.rand());
        }
    }

    #[test]
    fn zero_seed_is_not_stuck() {
        let mut prng = PRNG::init(0);
        assert!((0..8).any(|_| prng.rand() != 0));
    }

    #[test]
    fn singular_bit_has_one_bit() {
        let mut prng = PRNG::init(10_300_014);
        for _ in 0..256 {
            assert_eq!(prng.singular_bit().count_ones(), 1);
        }
    }

    #[test]
    fn sparse_and_dense_density() {
        let mut prng = PRNG::init(77);
        let rounds = 1_000u32;
        let sparse: u32 = (0..rounds).map(|_| prng.sparse_rand().count_ones()).sum();
        let dense: u32 = (0..rounds).map(|_| prng.dense_rand().count_ones()).sum();
        assert!(sparse / rounds < 16);
        assert!(dense / rounds > 48);
    }
}
