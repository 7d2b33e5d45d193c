//! The shared draw pile.

use std::collections::VecDeque;

use crate::cards::Card;
use crate::core::config::DeckComposition;
use crate::core::rng::GameRng;
use crate::error::{Error, Result};

/// Ordered draw pile. Index 0 is the top (next card drawn).
///
/// During play the deck only shrinks through [`Deck::draw`] and only grows
/// when a defused kitten is put back with [`Deck::insert`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an unshuffled deck from a composition (no Defuses or kittens).
    #[must_use]
    pub fn from_composition(composition: &DeckComposition) -> Self {
        let cards = composition
            .counts()
            .into_iter()
            .flat_map(|(card, count)| std::iter::repeat(card).take(count))
            .collect();
        Self { cards }
    }

    /// Build a deck with a fixed order, top first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Apply a uniform random permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(Error::EmptyDeck)
    }

    /// Insert a card at a 0-based position, clamped to `[0, len]`.
    ///
    /// Returns the index actually used.
    pub fn insert(&mut self, index: usize, card: Card) -> usize {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
        index
    }

    /// Put a card on the bottom. Only used while building the deck.
    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// The next `n` cards (fewer if the deck is shorter), top first.
    pub fn peek(&self, n: usize) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().take(n).copied()
    }

    /// Position of the first copy of `card`, from the top.
    #[must_use]
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// Number of copies of `card` in the deck.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}
