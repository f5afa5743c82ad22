use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

pub const FRONT_CAPACITY: usize = 3;
pub const MIDDLE_CAPACITY: usize = 5;
pub const BACK_CAPACITY: usize = 5;
/// Cards in a complete hand.
pub const HAND_SIZE: usize = FRONT_CAPACITY + MIDDLE_CAPACITY + BACK_CAPACITY;

/// One of the three card groupings a player builds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Row {
    /// Top row, 3 cards
    Front,
    /// Middle row, 5 cards
    Middle,
    /// Bottom row, 5 cards
    Back,
}

impl Row {
    pub const ALL: [Row; 3] = [Row::Front, Row::Middle, Row::Back];

    pub fn capacity(self) -> usize {
        match self {
            Row::Front => FRONT_CAPACITY,
            Row::Middle => MIDDLE_CAPACITY,
            Row::Back => BACK_CAPACITY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Row::Front => "front",
            Row::Middle => "middle",
            Row::Back => "back",
        }
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three rows belonging to one player, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    front: Vec<Card>,
    middle: Vec<Card>,
    back: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a hand from finished or partial rows, rejecting any row over capacity.
    pub fn from_rows(
        front: Vec<Card>,
        middle: Vec<Card>,
        back: Vec<Card>,
    ) -> Result<Self, GameError> {
        let hand = Self {
            front,
            middle,
            back,
        };
        for row in Row::ALL {
            if hand.row(row).len() > row.capacity() {
                return Err(GameError::RowFull { row });
            }
        }
        Ok(hand)
    }

    pub fn row(&self, row: Row) -> &[Card] {
        match row {
            Row::Front => &self.front,
            Row::Middle => &self.middle,
            Row::Back => &self.back,
        }
    }

    pub fn front(&self) -> &[Card] {
        &self.front
    }
    pub fn middle(&self) -> &[Card] {
        &self.middle
    }
    pub fn back(&self) -> &[Card] {
        &self.back
    }

    pub fn is_row_full(&self, row: Row) -> bool {
        self.row(row).len() >= row.capacity()
    }

    pub fn is_complete(&self) -> bool {
        Row::ALL
            .iter()
            .all(|&r| self.row(r).len() == r.capacity())
    }

    pub fn card_count(&self) -> usize {
        self.front.len() + self.middle.len() + self.back.len()
    }

    /// Open slots left across all rows.
    pub fn remaining_capacity(&self) -> usize {
        HAND_SIZE - self.card_count()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.front.iter().chain(&self.middle).chain(&self.back)
    }

    pub(crate) fn push(&mut self, row: Row, card: Card) -> Result<(), GameError> {
        if self.is_row_full(row) {
            return Err(GameError::RowFull { row });
        }
        match row {
            Row::Front => self.front.push(card),
            Row::Middle => self.middle.push(card),
            Row::Back => self.back.push(card),
        }
        Ok(())
    }
}

/// What a player may still do with the cards from their latest deal.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowance {
    pub place: u8,
    pub discard: u8,
}

impl Allowance {
    pub const NONE: Allowance = Allowance {
        place: 0,
        discard: 0,
    };
}

/// A seat at the table: identity, hand under construction, and running score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: String,
    name: String,
    hand: Hand,
    /// Cards dealt but not yet placed or discarded
    current_cards: Vec<Card>,
    fantasyland: bool,
    score: i32,
    /// Only meaningful once the hand is complete
    fouled: bool,
    allowance: Allowance,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, fantasyland: bool) -> Self {
        Self::with_hand(id, name, Hand::new(), fantasyland)
    }

    pub fn with_hand(
        id: impl Into<String>,
        name: impl Into<String>,
        hand: Hand,
        fantasyland: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hand,
            current_cards: Vec::new(),
            fantasyland,
            score: 0,
            fouled: false,
            allowance: Allowance::NONE,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn current_cards(&self) -> &[Card] {
        &self.current_cards
    }
    pub fn is_fantasyland(&self) -> bool {
        self.fantasyland
    }
    pub fn score(&self) -> i32 {
        self.score
    }
    pub fn is_fouled(&self) -> bool {
        self.fouled
    }
    pub fn allowance(&self) -> Allowance {
        self.allowance
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn receive(&mut self, cards: Vec<Card>, allowance: Allowance) {
        self.current_cards.extend(cards);
        self.allowance = allowance;
    }

    pub(crate) fn take_current(&mut self, index: usize) -> Card {
        self.current_cards.remove(index)
    }

    pub(crate) fn allowance_mut(&mut self) -> &mut Allowance {
        &mut self.allowance
    }

    pub(crate) fn set_fouled(&mut self, fouled: bool) {
        self.fouled = fouled;
    }

    pub(crate) fn add_score(&mut self, delta: i32) {
        self.score = self.score.saturating_add(delta);
    }
}

pub fn is_hand_complete(player: &Player) -> bool {
    player.hand().is_complete()
}
