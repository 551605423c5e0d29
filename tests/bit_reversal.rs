extern crate rand;
extern crate twiddle;

use twiddle::reverse_bits;
use twiddle::tools::prng::PRNG;

#[test]
fn reversal_fixed_points() {
    assert_eq!(reverse_bits(0), 0);
    assert_eq!(reverse_bits(u64::max_value()), u64::max_value());
}

#[test]
fn reversal_palindrome() {
    assert_eq!(reverse_bits(0x8000_0000_0000_0001), 0x8000_0000_0000_0001);
}

#[test]
fn reversal_msb_lsb() {
    assert_eq!(reverse_bits(1 << 63), 1);
    assert_eq!(reverse_bits(1), 1 << 63);
}

#[test]
fn reversal_of_signed_words() {
    assert_eq!(reverse_bits(-1i64 as u64), u64::max_value());
    assert_eq!(reverse_bits(i64::min_value() as u64), 1);
    assert_eq!(reverse_bits(-2i64 as u64), 0x7FFF_FFFF_FFFF_FFFF);
}

#[test]
fn reversal_involution() {
    for _ in 0..10_000 {
        let word = rand::random::<u64>();
        let reversed = reverse_bits(word);
        assert_eq!(reverse_bits(reversed), word);
        for i in 0..64 {
            assert_eq!((reversed >> i) & 1, (word >> (63 - i)) & 1);
        }
    }
}

#[test]
fn reversal_mirrors_single_bits() {
    let mut prng = PRNG::init(0);
    for _ in 0..512 {
        let bit = prng.singular_bit();
        let reversed = reverse_bits(bit);
        assert_eq!(reversed.count_ones(), 1);
        assert_eq!(reversed.trailing_zeros(), 63 - bit.trailing_zeros());
    }
}
