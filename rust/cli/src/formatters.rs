//! Card and row formatters for terminal display.
//!
//! Unicode suit symbols are used when the terminal supports them, with an
//! ASCII fallback (`h d c s`) otherwise.
//!
//! ## Example
//!
//! ```rust
//! use pineapple_engine::cards::{Card, Rank, Suit};
//! use pineapple_cli::formatters::{format_card, format_row};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_row(&[ace_spades]).starts_with("[A"));
//! ```

use pineapple_engine::cards::{Card, Suit};
use pineapple_engine::player::Hand;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.to_char().to_string()
    }
}

/// String like "A♠" (Unicode) or "As" (ASCII)
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.to_char(), format_suit(card.suit))
}

/// Bracketed row like "[A♠ K♥ Q♦]", or "[]" when empty.
pub fn format_row(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Three lines, one per row, front first.
pub fn format_hand(hand: &Hand) -> String {
    format!(
        "  front:  {}\n  middle: {}\n  back:   {}",
        format_row(hand.front()),
        format_row(hand.middle()),
        format_row(hand.back())
    )
}

/// Signed point delta such as "+6", "-3" or "0".
pub fn format_points(points: i32) -> String {
    if points > 0 {
        format!("+{}", points)
    } else {
        points.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pineapple_engine::cards::parse_cards;

    #[test]
    fn test_format_row_brackets_and_spacing() {
        let cards = parse_cards("Ah Kd").unwrap();
        let row = format_row(&cards);
        assert!(row.starts_with("[A"));
        assert!(row.ends_with(']'));
        assert_eq!(row.split(' ').count(), 2);
        assert_eq!(format_row(&[]), "[]");
    }

    #[test]
    fn test_format_points_sign() {
        assert_eq!(format_points(6), "+6");
        assert_eq!(format_points(-3), "-3");
        assert_eq!(format_points(0), "0");
    }

    #[test]
    fn test_format_hand_has_three_rows() {
        let hand = Hand::from_rows(parse_cards("Ah Kd 2c").unwrap(), vec![], vec![]).unwrap();
        let text = format_hand(&hand);
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().next().unwrap().contains("front"));
    }
}
