// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow Poker hand evaluator.
//!
//! Evaluates the 5 cards high hand and the 2 cards low hand of a Pai Gow
//! split, and the best 5 cards hand out of 7 cards used by the bonus bets.
//! The deck has one semi-wild Joker: in the high hand it counts as an Ace
//! unless it completes a straight or a flush, in the low hand it pairs the
//! other card.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use paigow_eval::*;
//! let high = ["9H", "10H", "JH", "QH", "Joker"].map(|c| c.parse::<Card>().unwrap());
//! let v = HandValue::eval5(&high).unwrap();
//! assert_eq!(v.rank(), Some(HandRank::StraightFlush));
//! assert_eq!(v.tiebreaks(), &[13]);
//!
//! let low = ["7C", "Joker"].map(|c| c.parse::<Card>().unwrap());
//! let v = HandValue::eval2(&low).unwrap();
//! assert_eq!(v.describe_low(), "Pair of Sevens");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub mod eval;

pub use error::EvalError;
pub use eval::{HandRank, HandValue, LowHandRank, compare2, compare5};

// Reexport cards types.
pub use paigow_cards::{Card, Deck, Rank, Suit, combinations};
