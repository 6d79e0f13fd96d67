// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game errors.
use paigow_eval::{Card, EvalError};
use thiserror::Error;

use crate::poker::Chips;

/// Errors for calls that break the game rules or the evaluators contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A split was used before exactly 2 + 5 cards were assigned.
    #[error("incomplete split: {low} low and {high} high cards, expected 2 and 5")]
    IncompleteSplit {
        /// Cards in the low hand.
        low: usize,
        /// Cards in the high hand.
        high: usize,
    },
    /// The split cards are not the cards dealt to the player.
    #[error("split does not match the dealt hand")]
    InvalidSplit,
    /// The card is not in the player hand.
    #[error("card {0} is not in the hand")]
    CardNotInHand(Card),
    /// The low hand already has two cards.
    #[error("low hand already has two cards")]
    LowHandFull,
    /// The bets would exceed the bankroll.
    #[error("not enough chips: bankroll {bankroll}, bets {bets}")]
    InsufficientChips {
        /// The bankroll.
        bankroll: Chips,
        /// The total bets that were requested.
        bets: Chips,
    },
    /// A round cannot start without a main bet.
    #[error("a main bet is required to deal")]
    NoMainBet,
    /// The call is not allowed while a round is in progress.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// The call needs a dealt round.
    #[error("no round in progress")]
    NoRound,
    /// A hand failed evaluation.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
