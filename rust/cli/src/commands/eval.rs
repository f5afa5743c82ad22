//! Eval command: evaluates one row and shows the royalty it would earn.

use crate::error::CliError;
use crate::formatters::format_row;
use pineapple_engine::cards::parse_cards;
use pineapple_engine::hand::evaluate_row;
use pineapple_engine::rules::{back_royalty, middle_royalty, FrontBonus};
use std::collections::HashSet;
use std::io::Write;

pub fn handle_eval_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards)?;
    let unique: HashSet<_> = cards.iter().collect();
    if unique.len() != cards.len() {
        return Err(CliError::InvalidInput("duplicate card".into()));
    }
    let value = evaluate_row(&cards).ok_or_else(|| {
        CliError::InvalidInput(format!("expected 3 or 5 cards, got {}", cards.len()))
    })?;

    writeln!(out, "Cards: {}", format_row(&cards))?;
    writeln!(out, "Rank: {}", value.rank.name())?;
    writeln!(out, "Strength: {}", value.strength)?;
    if cards.len() == 3 {
        writeln!(out, "Royalty: front {}", FrontBonus::of(&value).royalty())?;
    } else {
        writeln!(
            out,
            "Royalty: middle {} / back {}",
            middle_royalty(value.rank),
            back_royalty(value.rank)
        )?;
    }
    Ok(())
}
