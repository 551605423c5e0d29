//! Population count strategies.
//!
//! Each strategy computes the number of set bits in a `u64`, and every strategy agrees with
//! every other on every input. They differ only in how they get there:
//!
//! | Strategy        | Cost                                   |
//! |-----------------|----------------------------------------|
//! | `Iterated`      | one step per bit up to the highest set |
//! | `Sparse`        | one step per set bit                   |
//! | `Dense`         | one step per unset bit                 |
//! | `ByteTable`     | eight lookups into a 256 entry table   |
//! | `HalfwordTable` | four lookups into a 65536 entry table  |
//! | `Folding`       | six branch-free mask/shift/add rounds  |
//!
//! All of them accept the full range of `u64`, zero and all-ones included.

use std::fmt;
use std::str::FromStr;

use super::masks::LOW_GROUP_MASKS;
use super::WORD_BITS;
use crate::helper;

/// Number of available strategies.
pub const STRATEGY_CNT: usize = 6;

/// Array of all strategies, indexed by their enum value.
pub const ALL_STRATEGIES: [PopStrategy; STRATEGY_CNT] = [
    PopStrategy::Iterated,
    PopStrategy::Sparse,
    PopStrategy::Dense,
    PopStrategy::ByteTable,
    PopStrategy::HalfwordTable,
    PopStrategy::Folding,
];

/// The algorithm used to count the set bits of a word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PopStrategy {
    /// Tests the lowest bit and shifts, until nothing is left.
    Iterated = 0,
    /// Kernighan's trick: clears the lowest set bit until nothing is left.
    Sparse = 1,
    /// Kernighan's trick applied to the complement, counting the unset bits.
    Dense = 2,
    /// Sums lookups of each byte in a 256 entry table.
    ByteTable = 3,
    /// Sums lookups of each 16-bit halfword in a 65536 entry table.
    HalfwordTable = 4,
    /// SIMD within a register: adds neighbouring bit groups of doubling width.
    Folding = 5,
}

impl PopStrategy {
    /// Counts the set bits of `word` using this strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use twiddle::PopStrategy;
    ///
    /// assert_eq!(PopStrategy::Dense.popcount(0b1011), 3);
    /// ```
    #[inline]
    pub fn popcount(self, word: u64) -> u8 {
        match self {
            PopStrategy::Iterated => popcount_iterated(word),
            PopStrategy::Sparse => popcount_sparse(word),
            PopStrategy::Dense => popcount_dense(word),
            PopStrategy::ByteTable => popcount_table8(word),
            PopStrategy::HalfwordTable => popcount_table16(word),
            PopStrategy::Folding => popcount_folding(word),
        }
    }

    /// Returns the short, lowercase name of the strategy. This is the name `FromStr`
    /// accepts and `Display` prints.
    pub fn name(self) -> &'static str {
        match self {
            PopStrategy::Iterated => "iterated",
            PopStrategy::Sparse => "sparse",
            PopStrategy::Dense => "dense",
            PopStrategy::ByteTable => "table8",
            PopStrategy::HalfwordTable => "table16",
            PopStrategy::Folding => "folding",
        }
    }

    /// Returns if the strategy reads from the precomputed lookup tables.
    #[inline]
    pub fn uses_tables(self) -> bool {
        match self {
            PopStrategy::ByteTable | PopStrategy::HalfwordTable => true,
            _ => false,
        }
    }
}

impl fmt::Display for PopStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a string does not name a `PopStrategy`.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
#[fail(display = "unrecognized popcount strategy: {}", name)]
pub struct ParseStrategyError {
    pub name: String,
}

impl FromStr for PopStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let strategy = match s.trim().to_ascii_lowercase().as_str() {
            "iterated" | "naive" => PopStrategy::Iterated,
            "sparse" | "kernighan" => PopStrategy::Sparse,
            "dense" => PopStrategy::Dense,
            "table8" | "byte" => PopStrategy::ByteTable,
            "table16" | "halfword" => PopStrategy::HalfwordTable,
            "folding" | "swar" => PopStrategy::Folding,
            _ => {
                return Err(ParseStrategyError {
                    name: s.to_string(),
                })
            }
        };
        Ok(strategy)
    }
}

/// Counts the number of set bits in `word` with the given strategy.
///
/// # Examples
///
/// ```
/// use twiddle::{population_count, PopStrategy};
///
/// assert_eq!(population_count(0xAAAA_AAAA_AAAA_AAAA, PopStrategy::HalfwordTable), 32);
/// ```
#[inline]
pub fn population_count(word: u64, strategy: PopStrategy) -> u8 {
    strategy.popcount(word)
}

/// Counts the number of bits by testing the least significant bit and shifting right
/// until the word is empty.
///
/// # Examples
///
/// ```
/// use twiddle::twiddles::popcount::*;
///
/// assert_eq!(popcount_iterated(0b1001), 2);
/// ```
#[inline]
pub fn popcount_iterated(word: u64) -> u8 {
    let mut value = word;
    let mut count: u8 = 0;
    while value != 0 {
        count += (value & 1) as u8;
        value >>= 1;
    }
    count
}

/// Counts the number of bits by clearing the lowest set bit until the word is empty.
/// Fast when few bits are set.
///
/// # Examples
///
/// ```
/// use twiddle::twiddles::popcount::*;
///
/// assert_eq!(popcount_sparse(0x8000_0000_0000_0001), 2);
/// ```
#[inline]
pub fn popcount_sparse(word: u64) -> u8 {
    let mut value = word;
    let mut count: u8 = 0;
    while value != 0 {
        count += 1;
        value &= value - 1;
    }
    count
}

/// Counts the number of bits by clearing the lowest unset bit until the word is full.
/// Fast when most bits are set.
///
/// # Examples
///
/// ```
/// use twiddle::twiddles::popcount::*;
///
/// assert_eq!(popcount_dense(!0b0110), 62);
/// ```
#[inline]
pub fn popcount_dense(word: u64) -> u8 {
    let mut value = !word;
    let mut count: u8 = WORD_BITS;
    while value != 0 {
        count -= 1;
        value &= value - 1;
    }
    count
}

/// Counts the number of bits by looking up each byte, low to high.
#[inline]
pub fn popcount_table8(word: u64) -> u8 {
    let table = helper::popcount8_table();
    let mut value = word;
    let mut count: u8 = 0;
    for _ in 0..8 {
        count += table[(value & 0xFF) as usize];
        value >>= 8;
    }
    count
}

/// Counts the number of bits by looking up each 16-bit halfword, low to high.
#[inline]
pub fn popcount_table16(word: u64) -> u8 {
    let table = helper::popcount16_table();
    let mut value = word;
    let mut count: u8 = 0;
    for _ in 0..4 {
        count += table[(value & 0xFFFF) as usize];
        value >>= 16;
    }
    count
}

/// Counts the number of bits without branching.
///
/// Round `k` adds each group of `2^k` bits to its neighbour, leaving a count in every
/// group of `2^(k+1)` bits. After the sixth round the single remaining group holds the
/// total.
///
/// # Examples
///
/// ```
/// use twiddle::twiddles::popcount::*;
///
/// assert_eq!(popcount_folding(u64::max_value()), 64);
/// ```
#[inline]
pub fn popcount_folding(word: u64) -> u8 {
    let mut value = word;
    for (k, mask) in LOW_GROUP_MASKS.iter().enumerate() {
        value = (value & mask) + ((value >> (1u32 << k)) & mask);
    }
    value as u8
}
