// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::combinations::KSubsets;

/// A Pai Gow card, one of the 52 standard cards or the Joker.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |jxssrrrr|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
///   j = set for the Joker, all other bits are zero
/// ```
///
/// The Joker has no rank or suit of its own, the evaluators decide what it
/// stands for depending on the other cards in the hand.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// The Joker.
    pub const JOKER: Card = Card(0x80);

    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self((rank as u8) | ((suit as u8) << 4))
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Checks if this card is the Joker.
    #[inline]
    pub fn is_joker(&self) -> bool {
        self.0 & 0x80 != 0
    }

    /// Returns the card suit, `None` for the Joker.
    pub fn suit(&self) -> Option<Suit> {
        if self.is_joker() {
            return None;
        }

        match (self.0 >> 4) & 0x3 {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            _ => Some(Suit::Spades),
        }
    }

    /// Returns the card rank, `None` for the Joker.
    pub fn rank(&self) -> Option<Rank> {
        if self.is_joker() {
            None
        } else {
            Rank::from_index(self.0 & 0xf)
        }
    }

    /// The card value 2..=14 with Ace high, `None` for the Joker.
    pub fn value(&self) -> Option<u8> {
        self.rank().map(Rank::value)
    }

    /// A value used only to order cards for display, the Joker sorts above
    /// the Ace.
    pub fn sort_value(&self) -> u8 {
        self.value().unwrap_or(Self::JOKER_SORT_VALUE)
    }

    const JOKER_SORT_VALUE: u8 = 15;
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank(), self.suit()) {
            (Some(rank), Some(suit)) => write!(f, "{rank}{suit}"),
            _ => write!(f, "Joker"),
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Error returned when parsing a card from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card '{0}'")]
pub struct ParseCardError(String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("joker") {
            return Ok(Card::JOKER);
        }

        let err = || ParseCardError(s.to_string());

        let mut chars = s.chars();
        let suit = match chars.next_back().ok_or_else(err)?.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(err()),
        };

        let rank = match chars.as_str().to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(err()),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 2 for a deuce up to 14 for an ace.
    pub fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Returns the rank with the given value 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        value.checked_sub(2).and_then(Self::from_index)
    }

    fn from_index(index: u8) -> Option<Rank> {
        Self::ranks().nth(index as usize)
    }

    /// The rank symbol as printed on the card.
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// A Pai Gow deck, 52 cards plus the Joker.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 53;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `n` cards, or fewer if the deck runs out.
    pub fn deal_many(&mut self, n: usize) -> Vec<Card> {
        let split = self.cards.len().saturating_sub(n);
        let mut hand = self.cards.split_off(split);
        hand.reverse();
        hand
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let mut hand = Vec::with_capacity(k);
        for subset in KSubsets::new(self.cards.len(), k) {
            hand.clear();
            hand.extend(subset.iter().map(|&idx| self.cards[idx]));
            f(&hand);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .chain(std::iter::once(Card::JOKER))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
