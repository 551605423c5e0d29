extern crate failure;
extern crate twiddle;

use std::env;
use std::process;

use twiddle::tools::{format_word, format_word_aligned, parse_word, string_word};
use twiddle::twiddles::masks::DIAGNOSTIC_MASKS;
use twiddle::{reverse_bits, ALL_STRATEGIES};

// With no arguments, prints the alternating masks the counting and reversal networks
// are built from. Otherwise describes every word given on the command line, laid out
// as an 8x8 grid when `--grid` is passed.
fn main() {
    match run(env::args().skip(1).collect()) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: Vec<String>) -> Result<Vec<String>, failure::Error> {
    let grid = args.iter().any(|arg| arg == "--grid");
    let words = args
        .iter()
        .filter(|arg| *arg != "--grid")
        .map(|arg| parse_word(arg))
        .collect::<Result<Vec<u64>, _>>()?;

    if words.is_empty() {
        return Ok(mask_lines());
    }
    Ok(words.into_iter().flat_map(|w| describe(w, grid)).collect())
}

fn mask_lines() -> Vec<String> {
    DIAGNOSTIC_MASKS
        .iter()
        .map(|mask| format_word_aligned(*mask))
        .collect()
}

fn describe(word: u64, grid: bool) -> Vec<String> {
    let mut lines = vec![format!("{:#018x}", word)];
    if grid {
        lines.extend(string_word(word).lines().map(|row| format!("  {}", row)));
    } else {
        lines.push(format!("  bits     {}", format_word(word)));
    }
    for strategy in ALL_STRATEGIES.iter() {
        lines.push(format!("  {:<8} {}", strategy, strategy.popcount(word)));
    }
    lines.push(format!("  reversed {}", format_word(reverse_bits(word))));
    lines
}
