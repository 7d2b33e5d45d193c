//! Cards that have left play.

use crate::cards::Card;

/// Played cards, consumed Defuses and exploded kittens, in discard order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Take back the most recently discarded copy of `card`.
    pub fn take_last(&mut self, card: Card) -> Option<Card> {
        let idx = self.cards.iter().rposition(|&c| c == card)?;
        Some(self.cards.remove(idx))
    }

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
}
