//! Constant bit patterns.

/// Every other bit, starting from the least significant: `0101...0101`.
pub const MASK_EVEN_BITS: u64 = 0x5555_5555_5555_5555;
/// Every other bit, starting from bit 1: `1010...1010`.
pub const MASK_ODD_BITS: u64 = 0xaaaa_aaaa_aaaa_aaaa;
/// The low pair of bits in every nibble: `0011...0011`.
pub const MASK_LOW_PAIRS: u64 = 0x3333_3333_3333_3333;
/// The high pair of bits in every nibble: `1100...1100`.
pub const MASK_HIGH_PAIRS: u64 = 0xcccc_cccc_cccc_cccc;
/// The low nibble of every byte.
pub const MASK_LOW_NIBBLES: u64 = 0x0f0f_0f0f_0f0f_0f0f;
/// The low byte of every 16-bit halfword.
pub const MASK_LOW_BYTES: u64 = 0x00ff_00ff_00ff_00ff;
/// The low halfword of every 32-bit half.
pub const MASK_LOW_HALFWORDS: u64 = 0x0000_ffff_0000_ffff;
/// The low 32 bits.
pub const MASK_LOW_HALF: u64 = 0x0000_0000_ffff_ffff;

/// `LOW_GROUP_MASKS[k]` selects the lower half of every group of `2^(k+1)` bits.
///
/// Shifting a word right by `1 << k` and masking with `LOW_GROUP_MASKS[k]` lines up each
/// upper half with the lower half of the same group. Folding sums the two halves, the
/// reversal network swaps them.
pub const LOW_GROUP_MASKS: [u64; 6] = [
    MASK_EVEN_BITS,
    MASK_LOW_PAIRS,
    MASK_LOW_NIBBLES,
    MASK_LOW_BYTES,
    MASK_LOW_HALFWORDS,
    MASK_LOW_HALF,
];

/// Masks printed by the `twiddle` binary when run without arguments.
pub const DIAGNOSTIC_MASKS: [u64; 4] = [
    MASK_LOW_PAIRS,
    MASK_HIGH_PAIRS,
    MASK_EVEN_BITS,
    MASK_ODD_BITS,
];
