//! The counting and reversal primitives themselves. `popcount` holds the six population
//! count strategies, `reverse` the bit reversal network, and `masks` the constant bit
//! patterns both of them are built from.

pub mod masks;
pub mod popcount;
pub mod reverse;

/// Number of bits in the words this crate operates on.
pub const WORD_BITS: u8 = 64;
