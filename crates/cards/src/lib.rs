// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow Poker cards types.
//!
//! This crate define types to create cards, a Pai Gow deck has the 52
//! standard cards and one Joker:
//!
//! ```
//! # use paigow_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let joker = Card::JOKER;
//! assert_eq!(ah.value(), Some(14));
//! assert_eq!(joker.value(), None);
//! assert_eq!("AH".parse::<Card>().unwrap(), ah);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 2 cards hands:
//!
//! ```
//! # use paigow_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(2, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_378);
//! ```
//!
//! The [combinations] module enumerates the k-subsets of a hand used by the
//! evaluators to search for the best five cards and the best split.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combinations;
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
