// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game session with the player bankroll, bets and the dealt round.
use log::info;
use paigow_eval::{Card, Deck};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    error::GameError,
    house_way::HouseWay,
    poker::{BetKind, Bets, Chips},
    round::Showdown,
    settle::{Settlement, settle},
    split::{Arrangement, PlayerSplit},
};

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The starting bankroll.
    pub bankroll: Chips,
    /// The shuffle seed, uses OS entropy if `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bankroll: Chips::new(1_000),
            seed: None,
        }
    }
}

/// Deals 7 cards to the player and 7 to the dealer from a new shuffled deck.
pub fn deal_round<R: Rng>(rng: &mut R) -> (Vec<Card>, Vec<Card>) {
    let mut deck = Deck::new_and_shuffled(rng);
    let player = deck.deal_many(7);
    let dealer = deck.deal_many(7);
    (player, dealer)
}

/// A dealt round.
#[derive(Debug, Clone)]
pub struct Round {
    player: Vec<Card>,
    dealer_cards: Vec<Card>,
    dealer: Arrangement,
}

impl Round {
    /// The player cards.
    pub fn player(&self) -> &[Card] {
        &self.player
    }

    /// The dealer cards as dealt.
    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer_cards
    }

    /// The dealer hand set by house way.
    pub fn dealer(&self) -> &Arrangement {
        &self.dealer
    }

    /// Starts a player split for this round.
    pub fn split(&self) -> PlayerSplit {
        PlayerSplit::new(&self.player)
    }
}

/// The result of a finished round.
#[derive(Debug, Clone)]
pub struct RoundReport {
    /// The player cards as dealt.
    pub player_cards: Vec<Card>,
    /// The player hand.
    pub player: Arrangement,
    /// The dealer hand.
    pub dealer: Arrangement,
    /// The round showdown.
    pub showdown: Showdown,
    /// The bets that were settled.
    pub bets: Bets,
    /// The bets results.
    pub settlement: Settlement,
    /// The bankroll after settlement.
    pub bankroll: Chips,
}

/// A player session.
#[derive(Debug)]
pub struct Session {
    bankroll: Chips,
    bets: Bets,
    last_bets: Option<Bets>,
    round: Option<Round>,
    rng: StdRng,
    house_way: HouseWay,
}

impl Session {
    /// Creates a session with the default house way.
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::with_rng(config.bankroll, rng)
    }

    fn with_rng(bankroll: Chips, rng: StdRng) -> Self {
        Self {
            bankroll,
            bets: Bets::default(),
            last_bets: None,
            round: None,
            rng,
            house_way: HouseWay::default(),
        }
    }

    /// Sets the house way used for the dealer.
    pub fn with_house_way(mut self, house_way: HouseWay) -> Self {
        self.house_way = house_way;
        self
    }

    /// The player bankroll.
    pub fn bankroll(&self) -> Chips {
        self.bankroll
    }

    /// The bets for the next round.
    pub fn bets(&self) -> &Bets {
        &self.bets
    }

    /// The bets of the last settled round.
    pub fn last_bets(&self) -> Option<&Bets> {
        self.last_bets.as_ref()
    }

    /// The round in progress.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Adds chips to a bet.
    pub fn place_bet(&mut self, kind: BetKind, chips: Chips) -> Result<(), GameError> {
        let mut bets = self.bets;
        bets.add(kind, chips);
        self.set_bets(bets)
    }

    /// Removes all bets.
    pub fn clear_bets(&mut self) -> Result<(), GameError> {
        self.set_bets(Bets::default())
    }

    /// Places the bets of the last round again, does nothing if no round
    /// has been settled.
    pub fn rebet(&mut self) -> Result<(), GameError> {
        match self.last_bets {
            Some(bets) => self.set_bets(bets),
            None => Ok(()),
        }
    }

    fn set_bets(&mut self, bets: Bets) -> Result<(), GameError> {
        if self.round.is_some() {
            return Err(GameError::RoundInProgress);
        }

        if bets.total() > self.bankroll {
            return Err(GameError::InsufficientChips {
                bankroll: self.bankroll,
                bets: bets.total(),
            });
        }

        self.bets = bets;
        Ok(())
    }

    /// Deals a new round and sets the dealer hand by house way.
    pub fn deal_round(&mut self) -> Result<&Round, GameError> {
        if self.round.is_some() {
            return Err(GameError::RoundInProgress);
        }

        if self.bets.main == Chips::ZERO {
            return Err(GameError::NoMainBet);
        }

        let (player, dealer_cards) = deal_round(&mut self.rng);
        self.start_round(player, dealer_cards)
    }

    /// Starts a round with the given hands, the dealer hand is set by house way.
    fn start_round(
        &mut self,
        player: Vec<Card>,
        dealer_cards: Vec<Card>,
    ) -> Result<&Round, GameError> {
        let dealer = self.house_way.arrange(&dealer_cards)?;

        info!(
            "Dealt round main bet {} fortune bet {} player {}",
            self.bets.main,
            self.bets.fortune,
            join(&player)
        );

        Ok(&*self.round.insert(Round {
            player,
            dealer_cards,
            dealer,
        }))
    }

    /// Sets the player hand by house way.
    pub fn suggest_split(&self) -> Result<Arrangement, GameError> {
        let round = self.round.as_ref().ok_or(GameError::NoRound)?;
        self.house_way.arrange(&round.player)
    }

    /// Plays the player hand against the dealer and settles the bets.
    ///
    /// On error the round is left in progress.
    pub fn finish_round(&mut self, player: &Arrangement) -> Result<RoundReport, GameError> {
        let round = self.round.as_ref().ok_or(GameError::NoRound)?;
        if !player.is_split_of(&round.player) {
            return Err(GameError::InvalidSplit);
        }

        let showdown = Showdown::new(player, &round.dealer)?;
        let (bankroll, settlement) =
            settle(self.bankroll, &self.bets, showdown.outcome, &round.player)?;

        info!(
            "Round {} player {player} dealer {} net {} bankroll {bankroll}",
            showdown.outcome,
            round.dealer,
            settlement.net(),
        );

        let report = RoundReport {
            player_cards: round.player.clone(),
            player: player.clone(),
            dealer: round.dealer.clone(),
            showdown,
            bets: self.bets,
            settlement,
            bankroll,
        };

        self.round = None;
        self.bankroll = bankroll;
        self.last_bets = Some(self.bets);
        self.bets = Bets::default();

        Ok(report)
    }
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
