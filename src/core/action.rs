//! Policy-level actions.
//!
//! An `Action` is what a trajectory records and what a policy table is
//! keyed on. It is coarser than a concrete play: all three cat pairs
//! collapse into `Action::Cat`, and `EndTurn` marks the decision to stop
//! playing and draw.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A decision taken during the card-play phase of a turn.
///
/// Declaration order is the tie-break order for policy lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Attack,
    Skip,
    SeeTheFuture,
    Shuffle,
    Favor,
    /// Play any pair of matching cat cards.
    Cat,
    /// Stop playing cards for this turn.
    EndTurn,
}

impl Action {
    /// Every action, in tie-break order.
    pub const ALL: [Action; 7] = [
        Action::Attack,
        Action::Skip,
        Action::SeeTheFuture,
        Action::Shuffle,
        Action::Favor,
        Action::Cat,
        Action::EndTurn,
    ];

    /// The action a concrete card play is recorded as.
    ///
    /// Returns `None` for Defuse and kittens, which are never played.
    #[must_use]
    pub const fn from_card(card: Card) -> Option<Action> {
        match card {
            Card::Attack => Some(Action::Attack),
            Card::Skip => Some(Action::Skip),
            Card::SeeTheFuture => Some(Action::SeeTheFuture),
            Card::Shuffle => Some(Action::Shuffle),
            Card::Favor => Some(Action::Favor),
            Card::Cattermelon | Card::Tacocat | Card::RainbowRalphingCat => Some(Action::Cat),
            Card::Defuse | Card::ExplodingKitten => None,
        }
    }

    /// The single card this action plays, if it is not ambiguous.
    ///
    /// `Cat` needs the hand to pick a pair and `EndTurn` plays nothing.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Action::Attack => Some(Card::Attack),
            Action::Skip => Some(Card::Skip),
            Action::SeeTheFuture => Some(Card::SeeTheFuture),
            Action::Shuffle => Some(Card::Shuffle),
            Action::Favor => Some(Card::Favor),
            Action::Cat | Action::EndTurn => None,
        }
    }

    /// Actions that take a card from an opponent.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(self, Action::Favor | Action::Cat)
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Cat => f.write_str("Cat"),
            Action::EndTurn => f.write_str("Finish Turn"),
            other => match other.card() {
                Some(card) => write!(f, "{card}"),
                None => Ok(()),
            },
        }
    }
}

/// Compact set of actions (one bit per `Action`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionSet(u8);

impl ActionSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    #[must_use]
    pub const fn contains(self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in tie-break order.
    pub fn iter(self) -> impl Iterator<Item = Action> {
        Action::ALL.into_iter().filter(move |&a| self.contains(a))
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = Self::empty();
        for action in iter {
            set.insert(action);
        }
        set
    }
}
