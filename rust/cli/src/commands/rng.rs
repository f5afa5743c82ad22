//! Random number generator inspection command.
//!
//! Prints the first values of the ChaCha20 stream for a seed, followed by
//! the top of a deck shuffled from it. Useful for checking
//! that a seed reproduces the same stream on another machine.

use crate::error::CliError;
use crate::formatters::format_row;
use pineapple_engine::deck::Deck;
use rand::{RngCore, SeedableRng};
use std::io::Write;

const DECK_PREVIEW: usize = 5;

/// Handle the rng command.
///
/// # Arguments
///
/// * `seed` - Optional seed value for the RNG (uses random seed if None)
/// * `out` - Output stream for the sample
///
/// # Example
///
/// ```ignore
/// # use std::io;
/// let mut out = io::stdout();
/// handle_rng_command(Some(12345), &mut out)?;
/// ```
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let mut vals = vec![];
    for _ in 0..5 {
        vals.push(rng.next_u64());
    }
    writeln!(out, "RNG sample: {:?}", vals)?;

    let deck = Deck::new_with_seed(s);
    let top = &deck.cards()[..DECK_PREVIEW];
    writeln!(out, "Deck top: {}", format_row(top))?;
    Ok(())
}
