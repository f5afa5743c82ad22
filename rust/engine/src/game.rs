//! Table lifecycle and deal scheduling for one deal-to-showdown cycle.
//!
//! A [`GameState`] moves `Waiting -> Dealing -> Placing`, alternates between
//! `Dealing` and `Placing` once per pineapple round, and ends in `Finished`
//! after [`GameState::score_game`]. Every operation validates before it
//! mutates, so a returned [`GameError`] leaves the state exactly as it was.
//! The exception is an [`EngineFault`]: the table moves to `Aborted` and
//! refuses all further operations.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{EngineFault, GameError};
use crate::player::{Allowance, Player, Row, HAND_SIZE};
use crate::rules::{earns_fantasyland, validate_discard, validate_placement};
use crate::scoring::{score_players, ScoreSheet};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
/// Cards each regular player receives in round 0.
pub const INITIAL_DEAL: usize = 5;
/// Cards each regular player receives in rounds 1-4.
pub const PINEAPPLE_DEAL: usize = 3;
/// Cards a Fantasyland player receives at once: a full hand plus one to discard.
pub const FANTASYLAND_DEAL: usize = HAND_SIZE + 1;
pub const PINEAPPLE_ROUNDS: u8 = 4;
pub const DECK_SIZE: usize = 52;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Dealing,
    Placing,
    Scoring,
    Finished,
    /// An engine fault was detected; the table needs external reconciliation.
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    id: Uuid,
    seed: Option<u64>,
    players: Vec<Player>,
    deck: Deck,
    discards: Vec<Card>,
    round: u8,
    status: GameStatus,
    fantasyland_queue: Vec<String>,
    score_sheets: Vec<ScoreSheet>,
}

/// Seats 2-4 players and shuffles a fresh deck with `rng`.
///
/// `fantasyland` lists the ids carried over from the previous game's
/// [`GameState::fantasyland_queue`]; unknown ids are ignored.
///
/// # Errors
///
/// - [`GameError::InvalidPlayerCount`] - fewer than 2 or more than 4 players,
///   or a name list that does not match the id list
/// - [`GameError::DuplicatePlayer`] - an id appears twice
pub fn create_game<S, R>(
    player_ids: &[S],
    player_names: &[S],
    fantasyland: &[S],
    rng: &mut R,
) -> Result<GameState, GameError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let count = player_ids.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) || player_names.len() != count {
        return Err(GameError::InvalidPlayerCount { count });
    }
    let mut seen = HashSet::new();
    for id in player_ids {
        if !seen.insert(id.as_ref()) {
            return Err(GameError::DuplicatePlayer {
                player_id: id.as_ref().to_string(),
            });
        }
    }

    let mut id_bytes = [0u8; 16];
    rng.fill_bytes(&mut id_bytes);
    let id = uuid::Builder::from_random_bytes(id_bytes).into_uuid();
    let deck = Deck::shuffled(rng);

    let players = player_ids
        .iter()
        .zip(player_names)
        .map(|(pid, name)| {
            let in_fl = fantasyland.iter().any(|f| f.as_ref() == pid.as_ref());
            Player::new(pid.as_ref(), name.as_ref(), in_fl)
        })
        .collect();

    info!(game_id = %id, players = count, "game created");
    Ok(GameState {
        id,
        seed: None,
        players,
        deck,
        discards: Vec::new(),
        round: 0,
        status: GameStatus::Waiting,
        fantasyland_queue: Vec::new(),
        score_sheets: Vec::new(),
    })
}

fn receives_pineapple_deal(player: &Player) -> bool {
    !player.is_fantasyland() && !player.hand().is_complete()
}

impl GameState {
    pub fn id(&self) -> Uuid {
        self.id
    }
    /// Seed of the RNG that shuffled this game's deck, when known.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }
    pub fn round(&self) -> u8 {
        self.round
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn fantasyland_queue(&self) -> &[String] {
        &self.fantasyland_queue
    }
    /// Per-pairing breakdown, filled in by [`GameState::score_game`].
    pub fn score_sheets(&self) -> &[ScoreSheet] {
        &self.score_sheets
    }

    pub(crate) fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    /// Players who would receive cards in the next pineapple round.
    pub fn eligible_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| receives_pineapple_deal(p))
    }

    /// Round 0: 14 cards to each Fantasyland player, 5 to everyone else.
    pub fn deal_initial_cards(&mut self) -> Result<(), GameError> {
        self.expect_status(GameStatus::Waiting)?;
        let needed: usize = self
            .players
            .iter()
            .map(|p| {
                if p.is_fantasyland() {
                    FANTASYLAND_DEAL
                } else {
                    INITIAL_DEAL
                }
            })
            .sum();
        let remaining = self.deck.remaining();
        if needed > remaining {
            return Err(GameError::DeckExhausted { needed, remaining });
        }

        self.status = GameStatus::Dealing;
        for i in 0..self.players.len() {
            let (n, allowance) = if self.players[i].is_fantasyland() {
                (
                    FANTASYLAND_DEAL,
                    Allowance {
                        place: HAND_SIZE as u8,
                        discard: 1,
                    },
                )
            } else {
                (
                    INITIAL_DEAL,
                    Allowance {
                        place: INITIAL_DEAL as u8,
                        discard: 0,
                    },
                )
            };
            self.deal_to(i, n, allowance)?;
        }
        self.status = GameStatus::Placing;
        self.check_accounting()
    }

    /// Rounds 1-4: three cards to every regular player whose hand is still open.
    ///
    /// A deck too short for the round is an [`EngineFault`] and aborts the table.
    pub fn deal_pineapple_round(&mut self) -> Result<(), GameError> {
        self.expect_status(GameStatus::Placing)?;
        if self.round >= PINEAPPLE_ROUNDS {
            return Err(GameError::AllRoundsDealt);
        }
        if let Some(p) = self.players.iter().find(|p| !p.current_cards().is_empty()) {
            return Err(GameError::RoundInProgress {
                player_id: p.id().to_string(),
            });
        }
        let eligible: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| receives_pineapple_deal(p))
            .map(|(i, _)| i)
            .collect();
        let needed = eligible.len() * PINEAPPLE_DEAL;
        let remaining = self.deck.remaining();
        if needed > remaining {
            return Err(self.abort(EngineFault::DeckExhausted { needed, remaining }));
        }

        self.status = GameStatus::Dealing;
        self.round += 1;
        for i in eligible {
            self.deal_to(
                i,
                PINEAPPLE_DEAL,
                Allowance {
                    place: (PINEAPPLE_DEAL - 1) as u8,
                    discard: 1,
                },
            )?;
        }
        self.status = GameStatus::Placing;
        self.check_accounting()
    }

    /// Moves `current_cards[card_index]` of `player_id` into `row`.
    pub fn place_card(
        &mut self,
        player_id: &str,
        card_index: usize,
        row: Row,
    ) -> Result<(), GameError> {
        self.expect_status(GameStatus::Placing)?;
        let idx = self.player_index(player_id)?;
        let player = &mut self.players[idx];
        validate_placement(player, card_index, row)?;

        let card = player.current_cards()[card_index];
        player.hand_mut().push(row, card)?;
        player.take_current(card_index);
        player.allowance_mut().place -= 1;
        debug!(game_id = %self.id, player_id, round = self.round, %card, %row, "card placed");
        Ok(())
    }

    /// Removes `current_cards[card_index]` of `player_id` from play for the rest of the game.
    pub fn discard_card(&mut self, player_id: &str, card_index: usize) -> Result<(), GameError> {
        self.expect_status(GameStatus::Placing)?;
        let idx = self.player_index(player_id)?;
        let player = &mut self.players[idx];
        validate_discard(player, card_index)?;

        let card = player.take_current(card_index);
        player.allowance_mut().discard -= 1;
        self.discards.push(card);
        debug!(game_id = %self.id, player_id, round = self.round, %card, "card discarded");
        Ok(())
    }

    /// True once every hand is complete and nobody holds unresolved cards.
    pub fn is_ready_to_score(&self) -> bool {
        self.status == GameStatus::Placing
            && self
                .players
                .iter()
                .all(|p| p.hand().is_complete() && p.current_cards().is_empty())
    }

    /// Scores every pairing, updates running scores and the Fantasyland queue.
    ///
    /// An incomplete hand at this point is an [`EngineFault`] and aborts the table.
    pub fn score_game(&mut self) -> Result<(), GameError> {
        self.expect_status(GameStatus::Placing)?;
        if let Some(p) = self.players.iter().find(|p| !p.current_cards().is_empty()) {
            return Err(GameError::RoundInProgress {
                player_id: p.id().to_string(),
            });
        }
        if let Some(p) = self.players.iter().find(|p| !p.hand().is_complete()) {
            let fault = EngineFault::IncompleteHand {
                player_id: p.id().to_string(),
            };
            return Err(self.abort(fault));
        }
        self.check_accounting()?;

        self.status = GameStatus::Scoring;
        self.score_sheets = score_players(&mut self.players);
        self.fantasyland_queue = self
            .players
            .iter()
            .filter(|p| earns_fantasyland(p.hand(), p.is_fantasyland()))
            .map(|p| p.id().to_string())
            .collect();
        self.status = GameStatus::Finished;
        info!(
            game_id = %self.id,
            pairings = self.score_sheets.len(),
            fantasyland = ?self.fantasyland_queue,
            "game scored"
        );
        Ok(())
    }

    /// Checks that no card is duplicated and that all 52 are accounted for.
    pub fn verify_accounting(&self) -> Result<(), EngineFault> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let all = self
            .players
            .iter()
            .flat_map(|p| p.hand().cards().chain(p.current_cards()))
            .chain(self.deck.cards())
            .chain(&self.discards);
        for &card in all {
            if !seen.insert(card) {
                return Err(EngineFault::DuplicateCard { card });
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(EngineFault::CardAccounting {
                accounted: seen.len(),
            });
        }
        Ok(())
    }

    fn check_accounting(&mut self) -> Result<(), GameError> {
        match self.verify_accounting() {
            Ok(()) => Ok(()),
            Err(fault) => Err(self.abort(fault)),
        }
    }

    fn abort(&mut self, fault: EngineFault) -> GameError {
        error!(game_id = %self.id, %fault, "table aborted");
        self.status = GameStatus::Aborted;
        GameError::Fault(fault)
    }

    fn expect_status(&self, expected: GameStatus) -> Result<(), GameError> {
        match self.status {
            GameStatus::Aborted => Err(GameError::TableAborted),
            actual if actual != expected => Err(GameError::InvalidPhase { expected, actual }),
            _ => Ok(()),
        }
    }

    fn player_index(&self, player_id: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or_else(|| GameError::PlayerNotFound {
                player_id: player_id.to_string(),
            })
    }

    fn deal_to(&mut self, idx: usize, n: usize, allowance: Allowance) -> Result<(), GameError> {
        let remaining = self.deck.remaining();
        let Some(cards) = self.deck.deal(n) else {
            return Err(self.abort(EngineFault::DeckExhausted {
                needed: n,
                remaining,
            }));
        };
        let player = &mut self.players[idx];
        debug!(
            game_id = %self.id,
            player_id = player.id(),
            round = self.round,
            cards = n,
            "cards dealt"
        );
        player.receive(cards, allowance);
        Ok(())
    }
}
