// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! House way, the fixed rules used to set the dealer hand.
//!
//! The arranger first checks for five Aces (four Aces and the Joker) that are
//! always split as a pair of Aces in the low hand and the other three Aces in
//! the high hand. Any other hand goes through a table of rules keyed by the
//! category of its best 5 cards, a category without a rule (all of them in
//! the default table) is set by an optimizer that scores each of the 21
//! possible splits and picks the highest.
//!
//! Whatever sets the hand the result always splits the input cards exactly
//! and never fouls.
use ahash::AHashMap;
use log::{debug, warn};
use paigow_eval::{Card, HandRank, HandValue, Rank, combinations::KSubsets};
use std::fmt;

use crate::{error::GameError, round::is_foul, split::Arrangement};

/// A house rule for hands whose best 5 cards have a given category.
pub trait HouseRule: Send + Sync {
    /// The rule name, used for logging.
    fn name(&self) -> &str;

    /// Sets the hand, returns `None` to defer to the optimizer.
    ///
    /// The `best` value is the best 5 of 7 cards value of the hand.
    fn arrange(&self, cards: &[Card], best: &HandValue) -> Option<Arrangement>;
}

/// The house way arranger.
#[derive(Default)]
pub struct HouseWay {
    rules: AHashMap<HandRank, Box<dyn HouseRule>>,
}

impl HouseWay {
    /// Creates a house way with no rules, every hand is set by the optimizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule for hands whose best 5 cards have the given rank,
    /// replacing any previous rule for that rank.
    pub fn with_rule<R: HouseRule + 'static>(mut self, rank: HandRank, rule: R) -> Self {
        self.rules.insert(rank, Box::new(rule));
        self
    }

    /// The rule for the given rank, if any.
    pub fn rule(&self, rank: HandRank) -> Option<&dyn HouseRule> {
        self.rules.get(&rank).map(|r| &**r)
    }

    /// Sets a 7 cards hand.
    pub fn arrange(&self, cards: &[Card]) -> Result<Arrangement, GameError> {
        // Checks hand size and Jokers.
        let best = HandValue::best_of_7(cards)?;

        if let Some(arrangement) = five_aces(cards)? {
            debug!("Five aces {arrangement}");
            return Ok(arrangement);
        }

        let rule = best.rank().and_then(|rank| self.rule(rank));
        if let Some(rule) = rule {
            if let Some(arrangement) = rule.arrange(cards, &best) {
                if is_valid(&arrangement, cards)? {
                    debug!("Rule {} set {arrangement}", rule.name());
                    return Ok(arrangement);
                }

                warn!(
                    "Rule {} returned invalid split {arrangement}, using optimizer",
                    rule.name()
                );
            }
        }

        let arrangement = optimize(cards)?;
        debug!("Optimizer set {arrangement} best hand {}", best.describe_high());
        Ok(arrangement)
    }
}

impl fmt::Debug for HouseWay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rules = self
            .rules
            .iter()
            .map(|(rank, rule)| (*rank, rule.name()))
            .collect::<Vec<_>>();
        rules.sort();

        f.debug_struct("HouseWay").field("rules", &rules).finish()
    }
}

/// Sets a 7 cards hand with the default house way.
pub fn arrange_house_way(cards: &[Card]) -> Result<Arrangement, GameError> {
    HouseWay::default().arrange(cards)
}

/// Checks an arrangement splits the cards and does not foul.
fn is_valid(arrangement: &Arrangement, cards: &[Card]) -> Result<bool, GameError> {
    Ok(arrangement.is_split_of(cards) && !arrangement.is_foul()?)
}

/// Four natural Aces and the Joker: two Aces in the low hand, the other two
/// Aces, the Joker and the remaining cards in the high hand.
fn five_aces(cards: &[Card]) -> Result<Option<Arrangement>, GameError> {
    let (aces, others): (Vec<Card>, Vec<Card>) = cards
        .iter()
        .partition(|c| c.rank() == Some(Rank::Ace));

    if aces.len() != 4 || !others.contains(&Card::JOKER) {
        return Ok(None);
    }

    let high = aces[2..].iter().chain(&others).copied().collect::<Vec<_>>();
    Arrangement::from_slices(&aces[..2], &high).map(Some)
}

/// Scores a split, the high hand category dominates, then the low hand
/// category, then the sum of the high tiebreaks and the low tiebreaks.
///
/// The weights are 1000, 10, 1/100 and 1/10000 scaled by 10000 so that the
/// score is an integer, no tiebreak sum can reach the next weight.
fn score(low: &HandValue, high: &HandValue) -> u32 {
    let sum = |v: &HandValue| v.tiebreaks().iter().map(|&t| t as u32).sum::<u32>();
    high.category() as u32 * 10_000_000
        + low.category() as u32 * 100_000
        + sum(high) * 100
        + sum(low)
}

/// Sets the hand with the highest scoring split that does not foul.
///
/// On equal scores the first split in enumeration order of the low hand
/// cards wins.
fn optimize(cards: &[Card]) -> Result<Arrangement, GameError> {
    let mut best: Option<(u32, Arrangement)> = None;
    let mut strongest: Option<(HandValue, Arrangement)> = None;

    for subset in KSubsets::new(cards.len(), 2) {
        let (low, high) = subset.split(cards);
        let arrangement = Arrangement::from_slices(&low, &high)?;
        let (low_value, high_value) = arrangement.eval()?;

        if strongest.as_ref().is_none_or(|(v, _)| high_value > *v) {
            strongest = Some((high_value, arrangement.clone()));
        }

        if is_foul(&low_value, &high_value) {
            continue;
        }

        let score = score(&low_value, &high_value);
        if best.as_ref().is_none_or(|(s, _)| score > *s) {
            best = Some((score, arrangement));
        }
    }

    match (best, strongest) {
        (Some((_, arrangement)), _) => Ok(arrangement),
        (None, Some((_, arrangement))) => {
            warn!("Every split fouls, keeping the strongest high hand {arrangement}");
            Ok(arrangement)
        }
        (None, None) => Err(GameError::IncompleteSplit {
            low: 0,
            high: cards.len(),
        }),
    }
}
