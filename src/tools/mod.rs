//! Miscellaneous tools for displaying and reading words.

pub mod prng;

use std::num::IntErrorKind;

use crate::twiddles::WORD_BITS;

/// Error returned when a string can not be read as a 64-bit word.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum WordParseError {
    #[fail(display = "empty word")]
    Empty,
    #[fail(display = "invalid digit in word: {}", word)]
    InvalidDigit { word: String },
    #[fail(display = "word does not fit in 64 bits: {}", word)]
    Overflow { word: String },
}

/// Reads a word from a string.
///
/// Decimal, `0x` hexadecimal and `0b` binary are accepted, with optional `_` separators.
/// A leading `-` gives the two's complement bit pattern of the negated value.
///
/// # Examples
///
/// ```
/// use twiddle::tools::parse_word;
///
/// assert_eq!(parse_word("0xff"), Ok(255));
/// assert_eq!(parse_word("0b1000_0001"), Ok(129));
/// assert_eq!(parse_word("-1"), Ok(u64::max_value()));
/// ```
pub fn parse_word(input: &str) -> Result<u64, WordParseError> {
    let cleaned: String = input.trim().chars().filter(|&c| c != '_').collect();
    let (negative, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let lower = unsigned.to_ascii_lowercase();
    let (digits, radix) = if let Some(hex) = lower.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        (bin, 2)
    } else {
        (lower.as_str(), 10)
    };

    if digits.is_empty() {
        return Err(WordParseError::Empty);
    }
    if digits.starts_with('+') || digits.starts_with('-') {
        return Err(WordParseError::InvalidDigit {
            word: input.to_string(),
        });
    }

    let magnitude = u64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => WordParseError::Overflow {
            word: input.to_string(),
        },
        IntErrorKind::Empty => WordParseError::Empty,
        _ => WordParseError::InvalidDigit {
            word: input.to_string(),
        },
    })?;

    if !negative {
        return Ok(magnitude);
    }
    if magnitude > 1u64 << (WORD_BITS - 1) {
        return Err(WordParseError::Overflow {
            word: input.to_string(),
        });
    }
    Ok(magnitude.wrapping_neg())
}

/// Returns a stringified u64 with all 64 bits being represented.
///
/// # Examples
///
/// ```
/// use twiddle::tools::format_word;
///
/// assert_eq!(format_word(5).len(), 64);
/// assert!(format_word(5).ends_with("0101"));
/// ```
pub fn format_word(word: u64) -> String {
    format!("{:064b}", word)
}

/// Returns the binary digits of `word` without leading zeros, right aligned in a 64
/// character field.
pub fn format_word_aligned(word: u64) -> String {
    format!("{:>64b}", word)
}

/// Returns the bits of `word` as eight rows of eight, most significant byte first.
pub fn string_word(word: u64) -> String {
    let mut s = String::new();
    let format_in = format_word(word);
    for x in 0..8 {
        s += &format_in[x * 8..(x * 8) + 8];
        s += "\n";
    }
    s
}
