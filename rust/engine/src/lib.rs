//! # pineapple-engine: Open-Face Chinese Poker (Pineapple) rules engine
//!
//! Deals, validates placements, detects fouls, computes royalties and scores
//! every pairing at a 2-4 player table. All shuffles come from a seeded
//! ChaCha20 RNG so any game can be replayed exactly.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Shuffled 52-card deck
//! - [`hand`] - 3- and 5-card row evaluation on one strength scale
//! - [`player`] - Rows, hands and seats
//! - [`rules`] - Placement validation, fouls, royalties, Fantasyland bars
//! - [`scoring`] - Pairwise showdown scoring
//! - [`game`] - Table lifecycle and deal schedule
//! - [`engine`] - Seeded game factory
//! - [`logger`] - GameRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pineapple_engine::cards::parse_cards;
//! use pineapple_engine::hand::{evaluate_hand, HandRank};
//!
//! let cards: [_; 5] = parse_cards("Ah Kh Qh Jh Th").unwrap().try_into().unwrap();
//! assert_eq!(evaluate_hand(&cards).rank, HandRank::RoyalFlush);
//! ```
//!
//! ## Playing a table
//!
//! ```rust
//! use pineapple_engine::engine::Engine;
//! use pineapple_engine::game::GameStatus;
//! use pineapple_engine::player::Row;
//!
//! let mut engine = Engine::new(Some(42));
//! let mut game = engine.create_game(&["p1", "p2"], &["Alice", "Bob"], &[]).unwrap();
//! game.deal_initial_cards().unwrap();
//! game.place_card("p1", 0, Row::Back).unwrap();
//! assert_eq!(game.player("p1").unwrap().current_cards().len(), 4);
//! assert_eq!(game.status(), GameStatus::Placing);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod scoring;
