//! Exact bit-manipulation primitives over 64-bit words.
//!
//! This crate offers several interchangeable ways of computing the population count
//! (Hamming weight) of a `u64`, and a branch-free bit reversal.
//!
//! # Usage
//!
//! Every counting strategy computes the same function, so any of them can be used
//! wherever a count is needed:
//!
//! ```
//! use twiddle::{population_count, PopStrategy};
//!
//! assert_eq!(population_count(0xFF, PopStrategy::Folding), 8);
//! assert_eq!(population_count(0xFF, PopStrategy::Sparse), 8);
//! ```
//!
//! The strategies are also reachable as plain functions inside [`twiddles::popcount`]:
//!
//! ```
//! use twiddle::twiddles::popcount::popcount_table16;
//!
//! assert_eq!(popcount_table16(u64::max_value()), 64);
//! ```
//!
//! Reversing the bits of a word:
//!
//! ```
//! use twiddle::reverse_bits;
//!
//! assert_eq!(reverse_bits(1), 1 << 63);
//! ```
//!
//! # Lookup tables
//!
//! The `ByteTable` and `HalfwordTable` strategies read from two lookup tables which are
//! built lazily the first time they are touched. Call [`helper::init_statics`] up front if
//! the first lookup should not pay for building them.
//!
//! [`twiddles::popcount`]: twiddles/popcount/index.html
//! [`helper::init_statics`]: helper/fn.init_statics.html

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate failure;
#[macro_use]
extern crate failure_derive;

pub mod helper;
pub mod tools;
pub mod twiddles;

#[doc(no_inline)]
pub use crate::twiddles::popcount::{population_count, PopStrategy, ALL_STRATEGIES};
#[doc(no_inline)]
pub use crate::twiddles::reverse::reverse_bits;
