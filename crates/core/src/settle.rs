// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bets settlement.
use paigow_eval::{Card, HandRank, HandValue};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    error::GameError,
    poker::{Bets, Chips},
    round::RoundOutcome,
};

/// The outcome of a single bet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetOutcome {
    /// The bet won.
    Win,
    /// The bet lost.
    Lose,
    /// The bet is returned.
    Push,
    /// Nothing was bet.
    NoAction,
}

impl fmt::Display for BetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self {
            BetOutcome::Win => "WIN",
            BetOutcome::Lose => "LOSE",
            BetOutcome::Push => "PUSH",
            BetOutcome::NoAction => "NO ACTION",
        };

        write!(f, "{outcome}")
    }
}

/// The main bet result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetResult {
    /// The bet outcome.
    pub outcome: BetOutcome,
    /// The bankroll change.
    pub net: i64,
}

/// The Fortune bet result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneResult {
    /// The bet outcome.
    pub outcome: BetOutcome,
    /// The bankroll change.
    pub net: i64,
    /// A description of the paid hand.
    pub note: String,
    /// The player best 5 of 7 cards rank, `None` if nothing was bet.
    pub hand: Option<HandRank>,
}

/// The results of all bets in a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The main bet result.
    pub main: BetResult,
    /// The Fortune bet result.
    pub fortune: FortuneResult,
}

impl Settlement {
    /// The total bankroll change.
    pub fn net(&self) -> i64 {
        self.main.net + self.fortune.net
    }
}

/// The Fortune bet multiplier for a hand rank, zero for hands that lose.
///
/// A winning bet is paid `bet * (multiplier - 1)`.
pub fn fortune_multiplier(rank: HandRank) -> u32 {
    match rank {
        HandRank::RoyalFlush => 150,
        HandRank::StraightFlush => 50,
        HandRank::FourOfAKind => 25,
        HandRank::FullHouse => 9,
        HandRank::Flush => 6,
        HandRank::Straight => 5,
        HandRank::ThreeOfAKind => 4,
        HandRank::TwoPair | HandRank::OnePair | HandRank::HighCard => 0,
    }
}

/// Settles the round bets, returns the new bankroll and the bets results.
///
/// The main bet is paid 1:1 when the player wins both hands and lost on a
/// dealer win or a foul. The Fortune bet only depends on the player best 5
/// cards out of the 7 dealt.
///
/// Fails with [GameError::InsufficientChips] if the bets exceed the bankroll,
/// so that the new bankroll is always the old one plus the net change.
pub fn settle(
    bankroll: Chips,
    bets: &Bets,
    outcome: RoundOutcome,
    player_cards: &[Card],
) -> Result<(Chips, Settlement), GameError> {
    if bets.total() > bankroll {
        return Err(GameError::InsufficientChips {
            bankroll,
            bets: bets.total(),
        });
    }

    // Validates the hand even without a Fortune bet.
    let best = HandValue::best_of_7(player_cards)?;

    let main_bet = bets.main.amount() as i64;
    let main = match outcome {
        _ if main_bet == 0 => BetResult {
            outcome: BetOutcome::NoAction,
            net: 0,
        },
        RoundOutcome::PlayerWins => BetResult {
            outcome: BetOutcome::Win,
            net: main_bet,
        },
        RoundOutcome::DealerWins | RoundOutcome::Foul => BetResult {
            outcome: BetOutcome::Lose,
            net: -main_bet,
        },
        RoundOutcome::Push => BetResult {
            outcome: BetOutcome::Push,
            net: 0,
        },
    };

    let fortune = settle_fortune(bets.fortune, &best);
    let settlement = Settlement { main, fortune };
    Ok((bankroll.apply(settlement.net()), settlement))
}

fn settle_fortune(bet: Chips, best: &HandValue) -> FortuneResult {
    if bet == Chips::ZERO {
        return FortuneResult {
            outcome: BetOutcome::NoAction,
            net: 0,
            note: String::new(),
            hand: None,
        };
    }

    let Some(rank) = best.rank() else {
        return FortuneResult {
            outcome: BetOutcome::Lose,
            net: -(bet.amount() as i64),
            note: "Hand: unknown, no bonus".to_string(),
            hand: None,
        };
    };

    let bet = bet.amount() as i64;
    match fortune_multiplier(rank) {
        0 => FortuneResult {
            outcome: BetOutcome::Lose,
            net: -bet,
            note: format!("Hand: {}, no bonus", rank.key()),
            hand: Some(rank),
        },
        multiplier => FortuneResult {
            outcome: BetOutcome::Win,
            net: bet * (multiplier as i64 - 1),
            note: format!("Hand: {} pays {multiplier}x on Fortune", rank.key()),
            hand: Some(rank),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::tests::cards;
    use paigow_eval::EvalError;

    const HIGH_CARD: &str = "2C 5D 7H 9S JC KD 3H";
    const STRAIGHT: &str = "5C 6D 7H 8S 9C KD 2H";

    fn bets(main: u32, fortune: u32) -> Bets {
        Bets::new(Chips::new(main), Chips::new(fortune))
    }

    #[test]
    fn main_bet_player_wins() {
        let (bankroll, settlement) = settle(
            Chips::new(1_000),
            &bets(100, 0),
            RoundOutcome::PlayerWins,
            &cards(HIGH_CARD),
        )
        .unwrap();

        assert_eq!(bankroll, Chips::new(1_100));
        assert_eq!(settlement.main.outcome, BetOutcome::Win);
        assert_eq!(settlement.main.net, 100);
        assert_eq!(settlement.fortune.outcome, BetOutcome::NoAction);
        assert_eq!(settlement.fortune.net, 0);
    }

    #[test]
    fn main_bet_dealer_wins_and_foul() {
        for outcome in [RoundOutcome::DealerWins, RoundOutcome::Foul] {
            let (bankroll, settlement) =
                settle(Chips::new(1_000), &bets(50, 0), outcome, &cards(HIGH_CARD)).unwrap();
            assert_eq!(bankroll, Chips::new(950));
            assert_eq!(settlement.main.outcome, BetOutcome::Lose);
            assert_eq!(settlement.main.net, -50);
        }
    }

    #[test]
    fn main_bet_push() {
        let (bankroll, settlement) = settle(
            Chips::new(1_000),
            &bets(50, 0),
            RoundOutcome::Push,
            &cards(HIGH_CARD),
        )
        .unwrap();
        assert_eq!(bankroll, Chips::new(1_000));
        assert_eq!(settlement.main.outcome, BetOutcome::Push);
        assert_eq!(settlement.net(), 0);
    }

    #[test]
    fn fortune_straight() {
        let (bankroll, settlement) = settle(
            Chips::new(1_000),
            &bets(0, 10),
            RoundOutcome::DealerWins,
            &cards(STRAIGHT),
        )
        .unwrap();

        assert_eq!(settlement.fortune.outcome, BetOutcome::Win);
        assert_eq!(settlement.fortune.net, 40);
        assert_eq!(settlement.fortune.hand, Some(HandRank::Straight));
        assert_eq!(settlement.fortune.note, "Hand: straight pays 5x on Fortune");
        assert_eq!(bankroll, Chips::new(1_040));
    }

    #[test]
    fn fortune_high_card_loses() {
        let (bankroll, settlement) = settle(
            Chips::new(1_000),
            &bets(0, 50),
            RoundOutcome::PlayerWins,
            &cards(HIGH_CARD),
        )
        .unwrap();

        assert_eq!(settlement.fortune.outcome, BetOutcome::Lose);
        assert_eq!(settlement.fortune.net, -50);
        assert_eq!(settlement.fortune.note, "Hand: highCard, no bonus");
        assert_eq!(bankroll, Chips::new(950));
    }

    #[test]
    fn fortune_trips() {
        let (_, settlement) = settle(
            Chips::new(1_000),
            &bets(0, 10),
            RoundOutcome::Push,
            &cards("10C 10D 10H 2S 5C 8D QH"),
        )
        .unwrap();
        assert_eq!(settlement.fortune.hand, Some(HandRank::ThreeOfAKind));
        assert_eq!(settlement.fortune.net, 30);
    }

    #[test]
    fn fortune_one_pair_note() {
        let (_, settlement) = settle(
            Chips::new(1_000),
            &bets(0, 5),
            RoundOutcome::Push,
            &cards("10C 10D 3H 2S 5C 8D QH"),
        )
        .unwrap();
        assert_eq!(settlement.fortune.note, "Hand: onePair, no bonus");
        assert_eq!(settlement.fortune.net, -5);
    }

    #[test]
    fn combined_bets() {
        let (bankroll, settlement) = settle(
            Chips::new(1_000),
            &bets(100, 10),
            RoundOutcome::PlayerWins,
            &cards(STRAIGHT),
        )
        .unwrap();
        assert_eq!(settlement.net(), 140);
        assert_eq!(bankroll, Chips::new(1_140));
    }

    #[test]
    fn paytable() {
        let paid = HandRank::ranks()
            .map(|r| (r, fortune_multiplier(r)))
            .filter(|&(_, m)| m > 0)
            .collect::<Vec<_>>();
        assert_eq!(
            paid,
            vec![
                (HandRank::ThreeOfAKind, 4),
                (HandRank::Straight, 5),
                (HandRank::Flush, 6),
                (HandRank::FullHouse, 9),
                (HandRank::FourOfAKind, 25),
                (HandRank::StraightFlush, 50),
                (HandRank::RoyalFlush, 150),
            ]
        );
    }

    #[test]
    fn bets_above_bankroll() {
        let res = settle(
            Chips::new(10),
            &bets(50, 0),
            RoundOutcome::DealerWins,
            &cards(HIGH_CARD),
        );
        assert_eq!(
            res,
            Err(GameError::InsufficientChips {
                bankroll: Chips::new(10),
                bets: Chips::new(50),
            })
        );

        let res = settle(
            Chips::new(50),
            &bets(40, 20),
            RoundOutcome::PlayerWins,
            &cards(STRAIGHT),
        );
        assert_eq!(
            res,
            Err(GameError::InsufficientChips {
                bankroll: Chips::new(50),
                bets: Chips::new(60),
            })
        );
    }

    #[test]
    fn whole_bankroll_lost() {
        let (bankroll, settlement) = settle(
            Chips::new(60),
            &bets(50, 10),
            RoundOutcome::Foul,
            &cards(HIGH_CARD),
        )
        .unwrap();
        assert_eq!(settlement.net(), -60);
        assert_eq!(bankroll, Chips::ZERO);
    }

    #[test]
    fn invalid_hand() {
        let res = settle(
            Chips::new(1_000),
            &bets(10, 0),
            RoundOutcome::PlayerWins,
            &cards("2C 5D 7H 9S JC KD"),
        );
        assert_eq!(
            res,
            Err(GameError::Eval(EvalError::InvalidCardCount {
                expected: 7,
                found: 6
            }))
        );
    }
}
