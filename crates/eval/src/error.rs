// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

/// Errors for hands that break the evaluators contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand has the wrong number of cards for the evaluator.
    #[error("invalid card count: expected {expected} cards, found {found}")]
    InvalidCardCount {
        /// The number of cards the evaluator takes.
        expected: usize,
        /// The number of cards passed in.
        found: usize,
    },
    /// The hand has more Jokers than a deck can deal.
    #[error("invalid joker count: at most {max} allowed, found {found}")]
    InvalidJokerCount {
        /// The maximum number of Jokers for this hand size.
        max: usize,
        /// The number of Jokers in the hand.
        found: usize,
    },
}

/// Checks the hand size and the number of Jokers.
pub(crate) fn check_hand(
    cards: &[paigow_cards::Card],
    expected: usize,
    max_jokers: usize,
) -> Result<usize, EvalError> {
    if cards.len() != expected {
        return Err(EvalError::InvalidCardCount {
            expected,
            found: cards.len(),
        });
    }

    let jokers = cards.iter().filter(|c| c.is_joker()).count();
    if jokers > max_jokers {
        return Err(EvalError::InvalidJokerCount {
            max: max_jokers,
            found: jokers,
        });
    }

    Ok(jokers)
}
