// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation totals.
use paigow_core::{BetOutcome, FortuneResult, HandRank, RoundOutcome};
use std::{collections::BTreeMap, fmt};

/// Totals across the simulated rounds.
#[derive(Debug, Default)]
pub struct Summary {
    rounds: u32,
    player_wins: u32,
    dealer_wins: u32,
    pushes: u32,
    fouls: u32,
    fortune_hits: BTreeMap<HandRank, u32>,
    net: i64,
}

impl Summary {
    /// Adds a round.
    pub fn add(&mut self, outcome: RoundOutcome, fortune: &FortuneResult, net: i64) {
        self.rounds += 1;
        self.net += net;

        match outcome {
            RoundOutcome::PlayerWins => self.player_wins += 1,
            RoundOutcome::DealerWins => self.dealer_wins += 1,
            RoundOutcome::Push => self.pushes += 1,
            RoundOutcome::Foul => self.fouls += 1,
        }

        if let (BetOutcome::Win, Some(rank)) = (fortune.outcome, fortune.hand) {
            *self.fortune_hits.entry(rank).or_default() += 1;
        }
    }

    /// The number of rounds played.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: u32| {
            if self.rounds == 0 {
                0.0
            } else {
                n as f64 * 100.0 / self.rounds as f64
            }
        };

        writeln!(f, "Rounds:       {}", self.rounds)?;
        writeln!(
            f,
            "Player wins:  {} ({:.1}%)",
            self.player_wins,
            pct(self.player_wins)
        )?;
        writeln!(
            f,
            "Dealer wins:  {} ({:.1}%)",
            self.dealer_wins,
            pct(self.dealer_wins)
        )?;
        writeln!(f, "Pushes:       {} ({:.1}%)", self.pushes, pct(self.pushes))?;
        writeln!(f, "Fouls:        {}", self.fouls)?;
        writeln!(f, "Net:          {:+}", self.net)?;

        if self.fortune_hits.is_empty() {
            write!(f, "Fortune hits: none")
        } else {
            write!(f, "Fortune hits:")?;
            for (rank, count) in self.fortune_hits.iter().rev() {
                write!(f, "\n  {:<16} {count}", rank.to_string())?;
            }
            Ok(())
        }
    }
}
