// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown between the player and the dealer.
use paigow_eval::{Card, HandValue};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{error::GameError, split::Arrangement};

/// Checks if a low hand fouls a high hand.
///
/// The two values are compared field by field, category first and then the
/// tiebreaks, as if they were on the same scale. The low hand fouls if it
/// ranks above the high hand or ties it exactly.
pub fn is_foul(low: &HandValue, high: &HandValue) -> bool {
    low >= high
}

/// The player result on one hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandResult {
    /// The player hand beats the dealer hand.
    Win,
    /// The dealer hand beats the player hand.
    Lose,
    /// The hands are equal.
    Tie,
}

impl From<Ordering> for HandResult {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => HandResult::Win,
            Ordering::Less => HandResult::Lose,
            Ordering::Equal => HandResult::Tie,
        }
    }
}

/// The outcome of a round.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The player won both hands.
    PlayerWins,
    /// The player lost both hands.
    DealerWins,
    /// Any other combination of results.
    Push,
    /// The player low hand fouls the high hand, settled as a loss.
    Foul,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self {
            RoundOutcome::PlayerWins => "PLAYER WINS",
            RoundOutcome::DealerWins => "DEALER WINS",
            RoundOutcome::Push => "PUSH",
            RoundOutcome::Foul => "FOUL",
        };

        write!(f, "{outcome}")
    }
}

/// A showdown with the evaluated hands and the per hand results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    /// The round outcome.
    pub outcome: RoundOutcome,
    /// The player low hand result, `None` on a foul.
    pub low: Option<HandResult>,
    /// The player high hand result, `None` on a foul.
    pub high: Option<HandResult>,
    /// The player low hand value.
    pub player_low: HandValue,
    /// The player high hand value.
    pub player_high: HandValue,
    /// The dealer low hand value.
    pub dealer_low: HandValue,
    /// The dealer high hand value.
    pub dealer_high: HandValue,
}

impl Showdown {
    /// Compares the player and the dealer arrangements.
    pub fn new(player: &Arrangement, dealer: &Arrangement) -> Result<Self, GameError> {
        let (player_low, player_high) = player.eval()?;
        let (dealer_low, dealer_high) = dealer.eval()?;

        let mut showdown = Self {
            outcome: RoundOutcome::Foul,
            low: None,
            high: None,
            player_low,
            player_high,
            dealer_low,
            dealer_high,
        };

        if is_foul(&player_low, &player_high) {
            return Ok(showdown);
        }

        let low = HandResult::from(player_low.cmp(&dealer_low));
        let high = HandResult::from(player_high.cmp(&dealer_high));

        showdown.outcome = match (low, high) {
            (HandResult::Win, HandResult::Win) => RoundOutcome::PlayerWins,
            (HandResult::Lose, HandResult::Lose) => RoundOutcome::DealerWins,
            _ => RoundOutcome::Push,
        };
        showdown.low = Some(low);
        showdown.high = Some(high);

        Ok(showdown)
    }
}

/// Compares the player hands with the dealer hands.
///
/// Fails with [GameError::IncompleteSplit] unless both sides have 2 low and 5
/// high cards.
pub fn compare_round(
    player_low: &[Card],
    player_high: &[Card],
    dealer_low: &[Card],
    dealer_high: &[Card],
) -> Result<RoundOutcome, GameError> {
    let player = Arrangement::from_slices(player_low, player_high)?;
    let dealer = Arrangement::from_slices(dealer_low, dealer_high)?;
    Ok(Showdown::new(&player, &dealer)?.outcome)
}
