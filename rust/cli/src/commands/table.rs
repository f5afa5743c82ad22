//! Checks shared by every command that settles a table of finished hands.

use crate::error::CliError;
use pineapple_engine::cards::Card;
use pineapple_engine::game::{MAX_PLAYERS, MIN_PLAYERS};
use pineapple_engine::player::Player;
use std::collections::HashSet;

/// Rejects tables that could not have come out of one deal: a seat count
/// outside 2-4, a repeated player id, an unfinished hand, or a card held twice.
pub(crate) fn validate_table(players: &[Player]) -> Result<(), CliError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(CliError::InvalidInput(format!(
            "a table needs {}-{} players, got {}",
            MIN_PLAYERS,
            MAX_PLAYERS,
            players.len()
        )));
    }

    let mut ids = HashSet::new();
    let mut seen: HashSet<Card> = HashSet::new();
    for player in players {
        if !ids.insert(player.id()) {
            return Err(CliError::InvalidInput(format!(
                "duplicate player id {}",
                player.id()
            )));
        }
        let hand = player.hand();
        if !hand.is_complete() {
            return Err(CliError::InvalidInput(format!(
                "player {} has {} of 13 cards placed",
                player.id(),
                hand.card_count()
            )));
        }
        if let Some(card) = hand.cards().find(|c| !seen.insert(**c)) {
            return Err(CliError::InvalidInput(format!(
                "card {} appears more than once",
                card
            )));
        }
    }
    Ok(())
}
