use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::errors::GameError;
use crate::hand::{evaluate_front, evaluate_hand, HandRank, HandValue};
use crate::player::{Hand, Player, Row};

// Indexed by rank value - 2
const FRONT_PAIR_ROYALTY: [i32; 13] = [0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
const FRONT_TRIPS_ROYALTY: [i32; 13] = [10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22];

/// Validates placing `current_cards[card_index]` into `row`.
///
/// Checks run in a fixed order (allowance, index, capacity) and nothing is
/// mutated; the caller applies the placement only after this returns `Ok`.
/// Fouls are not considered here: any row with room is legal.
///
/// # Errors
///
/// - [`GameError::PlacementLimitReached`] - the current deal allows no more placements
/// - [`GameError::InvalidCardIndex`] - `card_index` is outside the unplaced cards
/// - [`GameError::RowFull`] - the destination row is at capacity
///
/// # Examples
///
/// ```
/// use pineapple_engine::errors::GameError;
/// use pineapple_engine::player::{Player, Row};
/// use pineapple_engine::rules::validate_placement;
///
/// let player = Player::new("p1", "Alice", false);
/// // nothing has been dealt yet
/// assert!(matches!(
///     validate_placement(&player, 0, Row::Front),
///     Err(GameError::PlacementLimitReached { .. })
/// ));
/// ```
pub fn validate_placement(player: &Player, card_index: usize, row: Row) -> Result<(), GameError> {
    if player.allowance().place == 0 {
        return Err(GameError::PlacementLimitReached {
            player_id: player.id().to_string(),
        });
    }
    check_index(player, card_index)?;
    if player.hand().is_row_full(row) {
        return Err(GameError::RowFull { row });
    }
    Ok(())
}

/// Validates discarding `current_cards[card_index]`.
pub fn validate_discard(player: &Player, card_index: usize) -> Result<(), GameError> {
    if player.allowance().discard == 0 {
        return Err(GameError::DiscardNotAllowed {
            player_id: player.id().to_string(),
        });
    }
    check_index(player, card_index)
}

fn check_index(player: &Player, card_index: usize) -> Result<(), GameError> {
    let available = player.current_cards().len();
    if card_index >= available {
        return Err(GameError::InvalidCardIndex {
            index: card_index,
            available,
        });
    }
    Ok(())
}

/// Evaluated rows of a complete hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowValues {
    pub front: HandValue,
    pub middle: HandValue,
    pub back: HandValue,
}

impl RowValues {
    pub fn of(hand: &Hand) -> Option<RowValues> {
        if !hand.is_complete() {
            return None;
        }
        let front = evaluate_front(hand.front().try_into().ok()?);
        let middle = evaluate_hand(hand.middle().try_into().ok()?);
        let back = evaluate_hand(hand.back().try_into().ok()?);
        Some(RowValues {
            front,
            middle,
            back,
        })
    }

    pub fn get(&self, row: Row) -> HandValue {
        match row {
            Row::Front => self.front,
            Row::Middle => self.middle,
            Row::Back => self.back,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.back.strength >= self.middle.strength && self.middle.strength >= self.front.strength
    }
}

/// A complete hand is fouled unless back >= middle >= front. Incomplete hands never are.
pub fn is_fouled(hand: &Hand) -> bool {
    RowValues::of(hand).is_some_and(|v| !v.is_ordered())
}

/// Front-row made hand that can earn a royalty.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rank", rename_all = "lowercase")]
pub enum FrontBonus {
    #[default]
    None,
    Pair(Rank),
    Trips(Rank),
}

impl FrontBonus {
    pub fn of(front: &HandValue) -> FrontBonus {
        match (front.rank, front.primary_rank()) {
            (HandRank::ThreeOfAKind, Some(r)) => FrontBonus::Trips(r),
            (HandRank::OnePair, Some(r)) => FrontBonus::Pair(r),
            _ => FrontBonus::None,
        }
    }

    pub fn royalty(self) -> i32 {
        match self {
            FrontBonus::None => 0,
            FrontBonus::Pair(r) => FRONT_PAIR_ROYALTY[usize::from(r.value() - 2)],
            FrontBonus::Trips(r) => FRONT_TRIPS_ROYALTY[usize::from(r.value() - 2)],
        }
    }
}

pub fn middle_royalty(rank: HandRank) -> i32 {
    match rank {
        HandRank::HighCard | HandRank::OnePair | HandRank::TwoPair => 0,
        HandRank::ThreeOfAKind => 2,
        HandRank::Straight => 4,
        HandRank::Flush => 8,
        HandRank::FullHouse => 12,
        HandRank::FourOfAKind => 20,
        HandRank::StraightFlush => 30,
        HandRank::RoyalFlush => 50,
    }
}

pub fn back_royalty(rank: HandRank) -> i32 {
    match rank {
        HandRank::HighCard | HandRank::OnePair | HandRank::TwoPair | HandRank::ThreeOfAKind => 0,
        HandRank::Straight => 2,
        HandRank::Flush => 4,
        HandRank::FullHouse => 6,
        HandRank::FourOfAKind => 10,
        HandRank::StraightFlush => 15,
        HandRank::RoyalFlush => 25,
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Royalties {
    pub front_bonus: FrontBonus,
    pub front: i32,
    pub middle: i32,
    pub back: i32,
    pub total: i32,
}

/// Royalty points per row. All zeros for a fouled or incomplete hand.
pub fn calculate_royalties(hand: &Hand) -> Royalties {
    let Some(values) = RowValues::of(hand).filter(RowValues::is_ordered) else {
        return Royalties::default();
    };
    let front_bonus = FrontBonus::of(&values.front);
    let front = front_bonus.royalty();
    let middle = middle_royalty(values.middle.rank);
    let back = back_royalty(values.back.rank);
    Royalties {
        front_bonus,
        front,
        middle,
        back,
        total: front + middle + back,
    }
}

/// Entry bar: unfouled, with a front pair or trips of queens or better.
pub fn qualifies_for_fantasyland(hand: &Hand) -> bool {
    let Some(values) = RowValues::of(hand).filter(RowValues::is_ordered) else {
        return false;
    };
    match FrontBonus::of(&values.front) {
        FrontBonus::Pair(r) | FrontBonus::Trips(r) => r >= Rank::Queen,
        FrontBonus::None => false,
    }
}

/// Retention bar: unfouled, and front trips, middle full house+, or back quads+.
pub fn stays_in_fantasyland(hand: &Hand) -> bool {
    let Some(values) = RowValues::of(hand).filter(RowValues::is_ordered) else {
        return false;
    };
    values.front.rank == HandRank::ThreeOfAKind
        || values.middle.rank >= HandRank::FullHouse
        || values.back.rank >= HandRank::FourOfAKind
}

/// Whether a seat plays the next game from Fantasyland.
pub fn earns_fantasyland(hand: &Hand, in_fantasyland: bool) -> bool {
    if in_fantasyland {
        stays_in_fantasyland(hand)
    } else {
        qualifies_for_fantasyland(hand)
    }
}
