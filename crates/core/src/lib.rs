// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow Poker game rules.
//!
//! The dealer hand is set by [HouseWay], the player hand is set by the caller
//! as an [Arrangement], [Showdown] compares the two hands and [settle] pays
//! the main bet and the Fortune side bet. A [Session] keeps the bankroll and
//! the bets across rounds:
//!
//! ```
//! # use paigow_core::*;
//! let mut session = Session::new(&Config {
//!     bankroll: Chips::new(500),
//!     seed: Some(7),
//! });
//!
//! session.place_bet(BetKind::Main, Chips::new(25)).unwrap();
//! session.place_bet(BetKind::Fortune, Chips::new(5)).unwrap();
//! session.deal_round().unwrap();
//!
//! let player = session.suggest_split().unwrap();
//! let report = session.finish_round(&player).unwrap();
//! assert_eq!(session.bankroll(), report.bankroll);
//! assert!(session.bets().is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod error;
pub mod game;
pub mod house_way;
pub mod poker;
pub mod round;
pub mod settle;
pub mod split;

pub use error::GameError;
pub use game::{Config, Round, RoundReport, Session, deal_round};
pub use house_way::{HouseRule, HouseWay, arrange_house_way};
pub use poker::{BetKind, Bets, Card, Chips, Deck, HandRank, HandValue, LowHandRank, Rank, Suit};
pub use round::{HandResult, RoundOutcome, Showdown, compare_round, is_foul};
pub use settle::{BetOutcome, BetResult, FortuneResult, Settlement, fortune_multiplier, settle};
pub use split::{Arrangement, PlayerSplit};
