//! The card tag.
//!
//! Cards carry no identity beyond their type: two Attacks are
//! interchangeable, so the whole card model is a `Copy` enum.

use serde::{Deserialize, Serialize};

/// A card type.
///
/// Declaration order is used as the canonical ordering for sorted output
/// and deterministic tie-breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Attack,
    Skip,
    SeeTheFuture,
    Shuffle,
    Favor,
    Defuse,
    Cattermelon,
    Tacocat,
    RainbowRalphingCat,
    ExplodingKitten,
}

impl Card {
    /// Every card type, in declaration order.
    pub const ALL: [Card; 10] = [
        Card::Attack,
        Card::Skip,
        Card::SeeTheFuture,
        Card::Shuffle,
        Card::Favor,
        Card::Defuse,
        Card::Cattermelon,
        Card::Tacocat,
        Card::RainbowRalphingCat,
        Card::ExplodingKitten,
    ];

    /// Cat cards, in the order used to resolve a generic cat play.
    pub const CATS: [Card; 3] = [Card::Cattermelon, Card::Tacocat, Card::RainbowRalphingCat];

    /// Cards a player may hand over, least valuable first.
    pub const SURRENDER_ORDER: [Card; 9] = [
        Card::Tacocat,
        Card::Cattermelon,
        Card::RainbowRalphingCat,
        Card::Favor,
        Card::Shuffle,
        Card::SeeTheFuture,
        Card::Skip,
        Card::Attack,
        Card::Defuse,
    ];

    /// Check if this is one of the cat cards (only playable as a pair).
    #[must_use]
    pub const fn is_cat(self) -> bool {
        matches!(self, Card::Cattermelon | Card::Tacocat | Card::RainbowRalphingCat)
    }

    /// Check if this card can be played from a hand at all.
    ///
    /// Defuse is only ever consumed by a kitten draw, and kittens never
    /// sit in a hand.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Card::Defuse | Card::ExplodingKitten)
    }

    /// Number of copies consumed when the card is played.
    #[must_use]
    pub const fn copies_per_play(self) -> usize {
        if self.is_cat() {
            2
        } else {
            1
        }
    }

    /// Rank in the surrender order (lower = given away first).
    ///
    /// Kittens never sit in a hand and rank last.
    #[must_use]
    pub fn surrender_rank(self) -> usize {
        Self::SURRENDER_ORDER
            .iter()
            .position(|&c| c == self)
            .unwrap_or(Self::SURRENDER_ORDER.len())
    }

    /// Printed card name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Attack => "Attack",
            Card::Skip => "Skip",
            Card::SeeTheFuture => "See The Future",
            Card::Shuffle => "Shuffle",
            Card::Favor => "Favor",
            Card::Defuse => "Defuse",
            Card::Cattermelon => "Cattermelon",
            Card::Tacocat => "Tacocat",
            Card::RainbowRalphingCat => "Rainbow-Ralphing Cat",
            Card::ExplodingKitten => "Exploding Kitten",
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cats() {
        for card in Card::ALL {
            assert_eq!(card.is_cat(), Card::CATS.contains(&card));
        }
        assert_eq!(Card::Tacocat.copies_per_play(), 2);
        assert_eq!(Card::Attack.copies_per_play(), 1);
    }

    #[test]
    fn test_playable() {
        assert!(!Card::Defuse.is_playable());
        assert!(!Card::ExplodingKitten.is_playable());
        assert!(Card::Favor.is_playable());
        assert!(Card::RainbowRalphingCat.is_playable());
    }

    #[test]
    fn test_surrender_rank() {
        assert_eq!(Card::Tacocat.surrender_rank(), 0);
        assert!(Card::Favor.surrender_rank() < Card::Shuffle.surrender_rank());
        assert!(Card::Attack.surrender_rank() < Card::Defuse.surrender_rank());
        assert_eq!(Card::ExplodingKitten.surrender_rank(), 9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::SeeTheFuture.to_string(), "See The Future");
        assert_eq!(format!("{}", Card::RainbowRalphingCat), "Rainbow-Ralphing Cat");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Card::Tacocat).unwrap();
        let card: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, Card::Tacocat);
    }
}
