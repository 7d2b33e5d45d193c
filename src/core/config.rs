//! Game configuration.
//!
//! Defaults reproduce the standard two-to-four player setup:
//! - `DeckComposition`: per-type counts of the shuffled draw pile
//! - `GameConfig`: composition plus hand size, future depth and recording

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Number of copies of each card type shuffled into the initial deck.
///
/// Defuses and kittens are not part of the composition: every player is
/// dealt one Defuse, and `players - 1` kittens are added after the deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    pub attack: usize,
    pub skip: usize,
    pub see_the_future: usize,
    pub shuffle: usize,
    pub favor: usize,
    pub tacocat: usize,
    pub cattermelon: usize,
    pub rainbow_ralphing_cat: usize,
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self {
            attack: 4,
            skip: 4,
            see_the_future: 3,
            shuffle: 2,
            favor: 2,
            tacocat: 3,
            cattermelon: 3,
            rainbow_ralphing_cat: 3,
        }
    }
}

impl DeckComposition {
    /// Counts per card type, in deck-building order.
    #[must_use]
    pub fn counts(&self) -> [(Card, usize); 8] {
        [
            (Card::Attack, self.attack),
            (Card::Skip, self.skip),
            (Card::SeeTheFuture, self.see_the_future),
            (Card::Shuffle, self.shuffle),
            (Card::Favor, self.favor),
            (Card::Tacocat, self.tacocat),
            (Card::Cattermelon, self.cattermelon),
            (Card::RainbowRalphingCat, self.rainbow_ralphing_cat),
        ]
    }

    /// Total number of cards in the composition.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts().iter().map(|(_, n)| n).sum()
    }
}

/// Per-game settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards shuffled into the draw pile before dealing.
    pub composition: DeckComposition,

    /// Starting hand size, including the dealt Defuse.
    pub hand_size: usize,

    /// How many cards See The Future reveals.
    pub future_depth: usize,

    /// Record (signature, action) trajectories for training.
    pub record_trajectories: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            composition: DeckComposition::default(),
            hand_size: 7,
            future_depth: 3,
            record_trajectories: true,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_composition(mut self, composition: DeckComposition) -> Self {
        self.composition = composition;
        self
    }

    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    pub fn with_future_depth(mut self, depth: usize) -> Self {
        self.future_depth = depth;
        self
    }

    pub fn with_recording(mut self, record: bool) -> Self {
        self.record_trajectories = record;
        self
    }

    /// Does the composition hold enough cards to deal `player_count`
    /// starting hands (the Defuse aside)?
    #[must_use]
    pub fn can_deal(&self, player_count: usize) -> bool {
        player_count.saturating_mul(self.hand_size.saturating_sub(1)) <= self.composition.total()
    }

    /// Kittens shuffled in for a game with `player_count` players.
    #[must_use]
    pub fn kitten_count(&self, player_count: usize) -> usize {
        player_count.saturating_sub(1)
    }

    /// Cards in play right after setup, kittens and Defuses included.
    #[must_use]
    pub fn total_cards(&self, player_count: usize) -> usize {
        self.composition.total() + player_count + self.kitten_count(player_count)
    }
}
