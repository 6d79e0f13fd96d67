// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards high hand evaluation.
use paigow_cards::{Card, Rank, Suit};

use super::{HandRank, HandValue};
use crate::{EvalError, error::check_hand};

/// A card with a resolved value, a natural card or a Joker substitution.
type Resolved = (u8, Suit);

/// Evaluates a 5 cards hand with at most one Joker.
pub fn eval5(cards: &[Card]) -> Result<HandValue, EvalError> {
    check_hand(cards, 5, 1)?;

    let mut hand = [(0, Suit::Clubs); 5];
    let mut joker = None;
    for (pos, card) in cards.iter().enumerate() {
        match (card.value(), card.suit()) {
            (Some(value), Some(suit)) => hand[pos] = (value, suit),
            _ => joker = Some(pos),
        }
    }

    let Some(joker) = joker else {
        return Ok(classify(&hand));
    };

    // Try every substitution and keep the strongest, the first one wins ties.
    let mut best: Option<HandValue> = None;
    for candidate in joker_candidates() {
        hand[joker] = candidate;
        let value = classify(&hand);
        if best.is_none_or(|b| value > b) {
            best = Some(value);
        }
    }

    Ok(best.unwrap_or_else(|| classify(&hand)))
}

/// All the cards a Joker can stand for, every rank in every suit.
///
/// Candidates equal to a card already in the hand are kept, the hand is
/// scored as if the duplicate was dealt.
fn joker_candidates() -> impl Iterator<Item = Resolved> {
    Rank::ranks().flat_map(|r| Suit::suits().map(move |s| (r.value(), s)))
}

/// Classifies a hand of resolved cards.
fn classify(hand: &[Resolved; 5]) -> HandValue {
    let mut counts = [0u8; 15];
    for &(value, _) in hand {
        counts[value as usize] += 1;
    }

    // Ranks grouped by count, larger groups first and higher values first
    // within groups of the same size.
    let mut groups = (2..=14u8)
        .rev()
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (counts[v as usize], v))
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.cmp(a));

    let shape = groups.iter().map(|&(count, _)| count).collect::<Vec<_>>();
    let grouped = groups.iter().map(|&(_, value)| value).collect::<Vec<_>>();

    let mut values = hand.iter().map(|&(value, _)| value).collect::<Vec<_>>();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = hand.iter().all(|&(_, suit)| suit == hand[0].1);
    let straight = straight_top(&grouped);

    let (rank, tiebreaks) = match (flush, straight) {
        (true, Some(14)) => (HandRank::RoyalFlush, vec![14]),
        (true, Some(top)) => (HandRank::StraightFlush, vec![top]),
        _ => match shape.as_slice() {
            [4, 1] => (HandRank::FourOfAKind, grouped),
            [3, 2] => (HandRank::FullHouse, grouped),
            _ if flush => (HandRank::Flush, values),
            _ if straight.is_some() => (HandRank::Straight, straight.into_iter().collect()),
            [3, 1, 1] => (HandRank::ThreeOfAKind, grouped),
            [2, 2, 1] => (HandRank::TwoPair, grouped),
            [2, 1, 1, 1] => (HandRank::OnePair, grouped),
            _ => (HandRank::HighCard, values),
        },
    };

    HandValue::new(rank.category(), &tiebreaks)
}

/// Returns the top value of a straight given the distinct values in
/// descending order, the wheel (A-2-3-4-5) tops at 5.
fn straight_top(distinct: &[u8]) -> Option<u8> {
    match distinct {
        [14, 5, 4, 3, 2] => Some(5),
        [top, .., low] if distinct.len() == 5 && top - low == 4 => Some(*top),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::tests::cards;
    use rand::{SeedableRng, rngs::StdRng};

    fn eval(s: &str) -> HandValue {
        eval5(&cards(s)).unwrap()
    }

    fn check(s: &str, rank: HandRank, tiebreaks: &[u8]) {
        let value = eval(s);
        assert_eq!(value.rank(), Some(rank), "{s}");
        assert_eq!(value.tiebreaks(), tiebreaks, "{s}");
    }

    #[test]
    fn natural_categories() {
        check("10H JH QH KH AH", HandRank::RoyalFlush, &[14]);
        check("5D 6D 7D 8D 9D", HandRank::StraightFlush, &[9]);
        check("AS 2S 3S 4S 5S", HandRank::StraightFlush, &[5]);
        check("9C 9D 9H 9S 2C", HandRank::FourOfAKind, &[9, 2]);
        check("3C 3D KH KS 3S", HandRank::FullHouse, &[3, 13]);
        check("2H 7H 9H JH KH", HandRank::Flush, &[13, 11, 9, 7, 2]);
        check("10C JD QH KS AC", HandRank::Straight, &[14]);
        check("8C 8D 8H 4S QC", HandRank::ThreeOfAKind, &[8, 12, 4]);
        check("4C 4D 10H 10S 7C", HandRank::TwoPair, &[10, 4, 7]);
        check("JC JD 2H 9S 5C", HandRank::OnePair, &[11, 9, 5, 2]);
        check("2C 7D 9H JS KC", HandRank::HighCard, &[13, 11, 9, 7, 2]);
    }

    #[test]
    fn wheel_tops_at_five() {
        let value = eval("2C 3C 4C 5C AD");
        assert_eq!(value.rank(), Some(HandRank::Straight));
        assert_eq!(value.tiebreaks(), &[5]);

        // A wheel is the weakest straight.
        assert!(value < eval("2C 3D 4H 5S 6C"));

        // A-K-Q-J-2 wraps around and is not a straight.
        assert_eq!(eval("AC KD QH JS 2C").rank(), Some(HandRank::HighCard));
    }

    #[test]
    fn joker_completes_straight_flush() {
        let value = eval("9H 10H JH QH Joker");
        assert_eq!(value.rank(), Some(HandRank::StraightFlush));
        assert_eq!(value.tiebreaks(), &[13]);

        let value = eval("10S JS QS KS Joker");
        assert_eq!(value.rank(), Some(HandRank::RoyalFlush));
    }

    #[test]
    fn joker_completes_straight_and_flush() {
        check("5C 6D 7H 9S Joker", HandRank::Straight, &[9]);
        check("2C 3D 4H 5S Joker", HandRank::Straight, &[6]);
        check("2D 7D 9D JD Joker", HandRank::Flush, &[14, 11, 9, 7, 2]);
    }

    #[test]
    fn joker_defaults_to_ace() {
        check("2C 7D 9H JS Joker", HandRank::OnePair, &[14, 11, 9, 7]);
        check("AC KD 7H 4S Joker", HandRank::OnePair, &[14, 13, 7, 4]);
        check("KC KD 7H 4S Joker", HandRank::ThreeOfAKind, &[13, 7, 4]);
        check("AC AD AH AS Joker", HandRank::FourOfAKind, &[14, 13]);
        check("QC QD 3H 3S Joker", HandRank::FullHouse, &[12, 3]);
    }

    #[test]
    fn joker_never_weaker_than_ace() {
        let mut rng = StdRng::seed_from_u64(17);
        let deck = paigow_cards::Deck::new_and_shuffled(&mut rng)
            .into_iter()
            .filter(|c| !c.is_joker())
            .collect::<Vec<_>>();

        for chunk in deck.chunks_exact(4) {
            let mut hand = chunk.to_vec();
            hand.push(Card::JOKER);
            let with_joker = eval5(&hand).unwrap();

            for suit in Suit::suits() {
                hand[4] = Card::new(Rank::Ace, suit);
                assert!(with_joker >= eval5(&hand).unwrap(), "{hand:?}");
            }
        }
    }

    #[test]
    fn invalid_hands() {
        assert_eq!(
            eval5(&cards("2C 3C 4C 5C")),
            Err(EvalError::InvalidCardCount {
                expected: 5,
                found: 4
            })
        );
        assert_eq!(
            eval5(&cards("2C 3C 4C Joker Joker")),
            Err(EvalError::InvalidJokerCount { max: 1, found: 2 })
        );
    }

    #[test]
    fn card_order_does_not_matter() {
        let a = eval("KS 3C 3D 3H KD");
        let b = eval("3H KD 3C KS 3D");
        assert_eq!(a, b);
        assert_eq!(a.rank(), Some(HandRank::FullHouse));
    }
}
