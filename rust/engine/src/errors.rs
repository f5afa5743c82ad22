use thiserror::Error;

use crate::cards::Card;
use crate::game::GameStatus;
use crate::player::Row;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid player count: {count} (2 to 4 players required)")]
    InvalidPlayerCount { count: usize },
    #[error("Row {row} is already full")]
    RowFull { row: Row },
    #[error("Invalid card index {index} ({available} unplaced cards)")]
    InvalidCardIndex { index: usize, available: usize },
    #[error("Player {player_id} not found")]
    PlayerNotFound { player_id: String },
    #[error("Player {player_id} is seated twice")]
    DuplicatePlayer { player_id: String },
    #[error("Operation requires status {expected:?}, table is {actual:?}")]
    InvalidPhase {
        expected: GameStatus,
        actual: GameStatus,
    },
    #[error("Player {player_id} has not resolved the current deal")]
    RoundInProgress { player_id: String },
    #[error("All pineapple rounds have been dealt")]
    AllRoundsDealt,
    #[error("Player {player_id} has no placements left this deal")]
    PlacementLimitReached { player_id: String },
    #[error("Player {player_id} may not discard now")]
    DiscardNotAllowed { player_id: String },
    #[error("Deck exhausted: {needed} cards needed, {remaining} remaining")]
    DeckExhausted { needed: usize, remaining: usize },
    #[error("Table aborted after an engine fault")]
    TableAborted,
    #[error("Engine fault: {0}")]
    Fault(#[from] EngineFault),
}

/// Unreachable states. The table that raised one is aborted and needs external reconciliation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineFault {
    #[error("hand of player {player_id} is incomplete at scoring")]
    IncompleteHand { player_id: String },
    #[error("card accounting mismatch: {accounted} of 52 cards accounted for")]
    CardAccounting { accounted: usize },
    #[error("card {card} appears more than once")]
    DuplicateCard { card: Card },
    #[error("deck ran short mid-game: {needed} cards needed, {remaining} remaining")]
    DeckExhausted { needed: usize, remaining: usize },
}
