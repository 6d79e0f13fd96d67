// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Chips and wagers.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

pub use paigow_eval::{Card, Deck, HandRank, HandValue, LowHandRank, Rank, Suit};

/// Chips amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }

    /// Applies a signed net amount, the result saturates at zero.
    pub fn apply(self, net: i64) -> Self {
        let amount = (self.0 as i64).saturating_add(net);
        Self(amount.clamp(0, u32::MAX as i64) as u32)
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val)
    }
}

impl From<Chips> for u32 {
    fn from(val: Chips) -> Self {
        val.0
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::Sub<Chips> for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 10_000_000 {
            write!(f, "{:.1}M", amount as f64 / 1e6)
        } else if amount >= 1_000_000 {
            write!(
                f,
                "{},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "{},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "{}", amount)
        }
    }
}

/// The wagers a player can make on a round.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetKind {
    /// The main bet, settled by the showdown against the dealer.
    Main,
    /// The Fortune side bet, paid on the player's best 5 of 7 cards.
    Fortune,
}

/// The bets for one round.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bets {
    /// The main bet.
    pub main: Chips,
    /// The Fortune side bet.
    pub fortune: Chips,
}

impl Bets {
    /// Creates bets with the given amounts.
    pub fn new(main: Chips, fortune: Chips) -> Self {
        Self { main, fortune }
    }

    /// The amount bet on the given kind.
    pub fn get(&self, kind: BetKind) -> Chips {
        match kind {
            BetKind::Main => self.main,
            BetKind::Fortune => self.fortune,
        }
    }

    /// Adds chips to a bet.
    pub fn add(&mut self, kind: BetKind, chips: Chips) {
        match kind {
            BetKind::Main => self.main += chips,
            BetKind::Fortune => self.fortune += chips,
        }
    }

    /// The total amount at risk.
    pub fn total(&self) -> Chips {
        self.main + self.fortune
    }

    /// Checks if no chips have been bet.
    pub fn is_empty(&self) -> bool {
        self.total() == Chips::ZERO
    }
}
