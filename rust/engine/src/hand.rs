//! Hand evaluation for the 5-card rows and the 3-card front row.
//!
//! Every evaluation yields a [`HandValue`] whose `strength` totally orders hands:
//! the category occupies the most significant base-15 digit and the kickers the
//! five digits below it, most significant kicker first. Front rows are encoded
//! on the same scale with absent kickers as zero, so a front row and a 5-card
//! row can be ordered against each other for foul detection.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

const BASE: u32 = 15;
const TIER: u32 = BASE * BASE * BASE * BASE * BASE;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    /// A straight flush holding both the ace and the king.
    RoyalFlush = 9,
}

impl HandRank {
    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "high card",
            HandRank::OnePair => "pair",
            HandRank::TwoPair => "two pair",
            HandRank::ThreeOfAKind => "trips",
            HandRank::Straight => "straight",
            HandRank::Flush => "flush",
            HandRank::FullHouse => "full house",
            HandRank::FourOfAKind => "quads",
            HandRank::StraightFlush => "straight flush",
            HandRank::RoyalFlush => "royal flush",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandValue {
    pub rank: HandRank,
    // kickers: ordered most significant first, zero-padded
    pub kickers: [u8; 5],
    pub strength: u32,
}

impl HandValue {
    fn new(rank: HandRank, kickers: [u8; 5]) -> Self {
        let strength = kickers
            .iter()
            .fold(rank as u32, |acc, &k| acc * BASE + u32::from(k));
        Self {
            rank,
            kickers,
            strength,
        }
    }

    /// Rank of the pair or trips that defines the hand, if any.
    pub fn primary_rank(&self) -> Option<Rank> {
        Rank::from_u8(self.kickers[0])
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength.cmp(&other.strength)
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Evaluates a 5-card middle or back row.
pub fn evaluate_hand(cards: &[Card; 5]) -> HandValue {
    let rank_counts = count_ranks(cards);
    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high_from_mask(rank_mask(&rank_counts));

    match (flush, straight_high) {
        (true, Some(high)) => {
            let has_king = rank_counts[Rank::King as usize] > 0;
            let has_ace = rank_counts[Rank::Ace as usize] > 0;
            let rank = if has_ace && has_king {
                HandRank::RoyalFlush
            } else {
                HandRank::StraightFlush
            };
            return HandValue::new(rank, [high, 0, 0, 0, 0]);
        }
        (false, Some(high)) => {
            return HandValue::new(HandRank::Straight, [high, 0, 0, 0, 0]);
        }
        _ => {}
    }

    let groups = grouped_ranks(&rank_counts);
    let kickers = pad(groups.iter().map(|&(_, r)| r));
    if flush {
        return HandValue::new(HandRank::Flush, kickers);
    }
    let rank = match (groups[0].0, groups.get(1).map(|g| g.0).unwrap_or(0)) {
        (4, _) => HandRank::FourOfAKind,
        (3, 2) => HandRank::FullHouse,
        (3, _) => HandRank::ThreeOfAKind,
        (2, 2) => HandRank::TwoPair,
        (2, _) => HandRank::OnePair,
        _ => HandRank::HighCard,
    };
    HandValue::new(rank, kickers)
}

/// Evaluates the 3-card front row. Only high card, pair and trips can occur.
pub fn evaluate_front(cards: &[Card; 3]) -> HandValue {
    let rank_counts = count_ranks(cards);
    let groups = grouped_ranks(&rank_counts);
    let kickers = pad(groups.iter().map(|&(_, r)| r));
    let rank = match groups[0].0 {
        3 => HandRank::ThreeOfAKind,
        2 => HandRank::OnePair,
        _ => HandRank::HighCard,
    };
    HandValue::new(rank, kickers)
}

/// Evaluates a complete row of either length.
pub fn evaluate_row(cards: &[Card]) -> Option<HandValue> {
    if let Ok(front) = <&[Card; 3]>::try_from(cards) {
        Some(evaluate_front(front))
    } else if let Ok(five) = <&[Card; 5]>::try_from(cards) {
        Some(evaluate_hand(five))
    } else {
        None
    }
}

/// Largest strength any hand can reach; front and 5-card rows share the scale.
pub fn max_strength() -> u32 {
    (HandRank::RoyalFlush as u32 + 1) * TIER - 1
}

fn count_ranks(cards: &[Card]) -> [u8; 15] {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[c.rank as usize] += 1;
    }
    rank_counts
}

fn rank_mask(rank_counts: &[u8; 15]) -> u16 {
    rank_counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .fold(0u16, |m, (r, _)| m | (1 << r))
}

// (count, rank) pairs, largest group first and higher rank first within a group size
fn grouped_ranks(rank_counts: &[u8; 15]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

fn pad(ranks: impl Iterator<Item = u8>) -> [u8; 5] {
    let mut k = [0u8; 5];
    for (slot, r) in k.iter_mut().zip(ranks) {
        *slot = r;
    }
    k
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    // Treat Ace as 14 and optionally as 1
    let mut m = mask;
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5
    for high in (5..=14u8).rev() {
        let window = 0b11111u16 << (high - 4);
        if (m & window) == window {
            return Some(high);
        }
    }
    None
}
