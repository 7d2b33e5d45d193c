//! A player's hand.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::error::{Error, Result};

/// Unordered multiset of cards owned by one player.
///
/// Insertion order is kept only so that seeded games stay reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: SmallVec<[Card; 16]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove one copy of `card`.
    pub fn remove(&mut self, card: Card) -> Result<Card> {
        let idx = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(Error::CardNotFound { card })?;
        Ok(self.cards.remove(idx))
    }

    /// Remove the card at `index`, if any.
    pub fn take_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Distinct card types held, in `Card` order.
    #[must_use]
    pub fn distinct(&self) -> SmallVec<[Card; 10]> {
        Card::ALL.into_iter().filter(|&c| self.contains(c)).collect()
    }

    /// Sorted copy of the cards, for comparisons in tests and logs.
    #[must_use]
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.to_vec();
        cards.sort();
        cards
    }
}
