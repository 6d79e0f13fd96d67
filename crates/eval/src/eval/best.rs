// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards out of 7 selection.
use paigow_cards::{Card, combinations::KSubsets};

use super::{HandValue, five};
use crate::{EvalError, error::check_hand};

/// Returns the strongest 5 cards hand out of 7 cards and its cards.
///
/// All 21 subsets are scored, on ties the first subset in lexicographic
/// order is returned.
pub fn best_of_7(cards: &[Card]) -> Result<(HandValue, Vec<Card>), EvalError> {
    check_hand(cards, 7, 1)?;

    let mut best: Option<(HandValue, Vec<Card>)> = None;
    for subset in KSubsets::new(cards.len(), 5) {
        let (hand, _) = subset.split(cards);
        let value = five::eval5(&hand)?;
        if best.as_ref().is_none_or(|(b, _)| value > *b) {
            best = Some((value, hand));
        }
    }

    best.ok_or(EvalError::InvalidCardCount {
        expected: 7,
        found: cards.len(),
    })
}
