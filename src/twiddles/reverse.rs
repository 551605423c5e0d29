//! Bit reversal of a 64-bit word.

use super::masks::LOW_GROUP_MASKS;

/// Reverses the order of the bits in `word`: bit `i` of the result is bit `63 - i` of
/// the input.
///
/// Works as a swap network. The two 32-bit halves are exchanged first, then the two
/// halfwords inside each half, and so on down to neighbouring single bits:
///
/// ```text
/// 0: 0a0b       0c0d
/// 1: 0c  0d  0a   0b
/// 2: 0 d 0 c 0 b 0 a
/// 3: d 0 c 0 b 0 a 0
/// ```
///
/// Six stages in total, no branches.
///
/// # Examples
///
/// ```
/// use twiddle::reverse_bits;
///
/// assert_eq!(reverse_bits(0b1011), 0b1101 << 60);
/// assert_eq!(reverse_bits(1 << 63), 1);
/// ```
#[inline]
pub fn reverse_bits(word: u64) -> u64 {
    let mut value = word;
    for (k, &mask) in LOW_GROUP_MASKS.iter().enumerate().rev() {
        let shift = 1u32 << k;
        value = ((value >> shift) & mask) | ((value & mask) << shift);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::prng::PRNG;

    #[test]
    fn reverse_fixed_points() {
        assert_eq!(reverse_bits(0), 0);
        assert_eq!(reverse_bits(u64::max_value()), u64::max_value());
        assert_eq!(reverse_bits(0x8000_0000_0000_0001), 0x8000_0000_0000_0001);
    }

    #[test]
    fn reverse_single_bits() {
        for i in 0..64 {
            assert_eq!(reverse_bits(1u64 << i), 1u64 << (63 - i));
        }
    }

    #[test]
    fn reverse_known_patterns() {
        assert_eq!(reverse_bits(0xFF), 0xFF00_0000_0000_0000);
        assert_eq!(reverse_bits(0x5555_5555_5555_5555), 0xAAAA_AAAA_AAAA_AAAA);
        assert_eq!(reverse_bits(0x3333_3333_3333_3333), 0xCCCC_CCCC_CCCC_CCCC);
        assert_eq!(reverse_bits(0x0000_0000_FFFF_FFFF), 0xFFFF_FFFF_0000_0000);
    }

    #[test]
    fn reverse_random_words() {
        let mut prng = PRNG::init(10_300_014);
        for _ in 0..5_000 {
            let word = prng.rand();
            let reversed = reverse_bits(word);
            assert_eq!(reversed, word.reverse_bits());
            assert_eq!(reverse_bits(reversed), word);
            assert_eq!(reversed.count_ones(), word.count_ones());
        }
    }
}
