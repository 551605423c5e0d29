//! Statically initialized lookup tables.
//!
//! The table based popcount strategies read the population count of every byte and every
//! 16-bit halfword from two tables. The tables are built the first time they are accessed
//! and never written to again, so any number of threads may read them without locking.
//!
//! Calling [`init_statics`] forces both tables to be built, so that the first lookup does
//! not have to. Successive calls do nothing.
//!
//! [`init_statics`]: fn.init_statics.html

use crate::twiddles::popcount::popcount_iterated;

/// Number of entries in the byte table.
pub const POPCNT8_SIZE: usize = 1 << 8;
/// Number of entries in the halfword table.
pub const POPCNT16_SIZE: usize = 1 << 16;

lazy_static! {
    static ref POPCNT8: [u8; POPCNT8_SIZE] = {
        let mut table = [0u8; POPCNT8_SIZE];
        table.copy_from_slice(&build_popcount_table(8));
        debug!("built byte popcount table, {} entries", POPCNT8_SIZE);
        table
    };
    static ref POPCNT16: Box<[u8]> = {
        let table = build_popcount_table(16).into_boxed_slice();
        debug!("built halfword popcount table, {} entries", POPCNT16_SIZE);
        table
    };
}

/// Builds the popcount table for every value of `bits` width, so that `table[x]` is the
/// number of set bits in `x`.
///
/// # Panics
///
/// If `bits` is larger than 16.
pub fn build_popcount_table(bits: u32) -> Vec<u8> {
    assert!(bits <= 16, "popcount table of {} bits is too large", bits);
    (0..1u64 << bits).map(popcount_iterated).collect()
}

/// Forces the lookup tables to be built.
pub fn init_statics() {
    trace!("initializing popcount tables");
    lazy_static::initialize(&POPCNT8);
    lazy_static::initialize(&POPCNT16);
}

/// Returns the byte table: entry `b` holds the popcount of `b`.
#[inline(always)]
pub fn popcount8_table() -> &'static [u8; POPCNT8_SIZE] {
    &*POPCNT8
}

/// Returns the halfword table: entry `h` holds the popcount of `h`. Always `POPCNT16_SIZE`
/// entries long.
#[inline(always)]
pub fn popcount16_table() -> &'static [u8] {
    &*POPCNT16
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn table8_entries() {
        init_statics();
        let table = popcount8_table();
        for (b, &count) in table.iter().enumerate() {
            assert_eq!(count, popcount_iterated(b as u64));
            assert_eq!(count as u32, (b as u8).count_ones());
        }
        assert_eq!(table[0], 0);
        assert_eq!(table[0xFF], 8);
    }

    #[test]
    fn table16_entries() {
        let table = popcount16_table();
        assert_eq!(table.len(), POPCNT16_SIZE);
        for (h, &count) in table.iter().enumerate() {
            assert_eq!(count as u32, (h as u16).count_ones());
        }
        assert_eq!(table[0xFFFF], 16);
    }

    #[test]
    fn init_statics_twice() {
        init_statics();
        let first = popcount16_table().as_ptr();
        init_statics();
        assert_eq!(first, popcount16_table().as_ptr());
    }

    #[test]
    fn concurrent_readers() {
        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                thread::spawn(move || {
                    let mut sum: u64 = 0;
                    for h in (t as usize..POPCNT16_SIZE).step_by(4) {
                        sum += popcount16_table()[h] as u64;
                    }
                    sum
                })
            })
            .collect();
        let total: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        // every bit position is set in exactly half of all halfwords
        assert_eq!(total, 16 * (POPCNT16_SIZE as u64 / 2));
    }

    #[test]
    #[should_panic]
    fn oversized_table() {
        build_popcount_table(17);
    }
}
