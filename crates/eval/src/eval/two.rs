// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Two cards low hand evaluation.
use paigow_cards::{Card, Rank};

use super::{HandValue, LowHandRank};
use crate::{EvalError, error::check_hand};

/// Evaluates a 2 cards hand.
///
/// The low hand only ranks pairs and high cards. A Joker next to a natural
/// card always makes a pair of that card rank, two Jokers make a pair of Aces.
pub fn eval2(cards: &[Card]) -> Result<HandValue, EvalError> {
    check_hand(cards, 2, 2)?;

    let values = cards.iter().filter_map(Card::value).collect::<Vec<_>>();
    let value = match values.as_slice() {
        &[a, b] if a == b => HandValue::new(LowHandRank::Pair.category(), &[a]),
        &[a, b] => HandValue::new(LowHandRank::HighCard.category(), &[a.max(b), a.min(b)]),
        &[a] => HandValue::new(LowHandRank::Pair.category(), &[a]),
        _ => HandValue::new(LowHandRank::Pair.category(), &[Rank::Ace.value()]),
    };

    Ok(value)
}
