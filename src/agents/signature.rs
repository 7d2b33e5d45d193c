//! State signatures.
//!
//! A signature is the coarse, hashable view of the table a learned policy
//! is keyed on. It sees only what the seat could know: its own hand, hand
//! sizes of the others, the deck size, the memo, the attack counter and
//! Defuse counts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{Action, ActionSet, PlayerId};
use crate::rules::Table;

/// Structural policy key for one seat's view.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateSignature {
    /// Card actions the hand supports (cats only as a pair).
    pub playable: ActionSet,
    /// Hand sizes of every other seat, ascending.
    pub opponent_hand_sizes: SmallVec<[u8; 4]>,
    pub deck_size: u16,
    /// Next deck card, if a See The Future revealed it.
    pub future: Option<Card>,
    pub pending_attacks: u8,
    pub defuses: u8,
    /// Defuses held by the first other seat.
    pub opponent_defuses: u8,
}

impl StateSignature {
    /// Observe `table` from seat `me`.
    #[must_use]
    pub fn observe(table: &Table, me: PlayerId) -> Self {
        let state = table.player(me);
        let hand = &state.hand;

        let playable = hand
            .distinct()
            .into_iter()
            .filter(|&card| hand.count(card) >= card.copies_per_play())
            .filter_map(Action::from_card)
            .collect();

        let mut opponent_hand_sizes: SmallVec<[u8; 4]> =
            table.opponents(me).map(|(_, p)| clamp_u8(p.hand.len())).collect();
        opponent_hand_sizes.sort_unstable();

        let opponent_defuses = table
            .opponents(me)
            .next()
            .map_or(0, |(_, p)| clamp_u8(p.hand.count(Card::Defuse)));

        Self {
            playable,
            opponent_hand_sizes,
            deck_size: u16::try_from(table.deck().len()).unwrap_or(u16::MAX),
            future: state.next_known_card(),
            pending_attacks: clamp_u8(table.pending_attacks()),
            defuses: clamp_u8(hand.count(Card::Defuse)),
            opponent_defuses,
        }
    }
}

fn clamp_u8(n: usize) -> u8 {
    u8::try_from(n).unwrap_or(u8::MAX)
}

impl std::fmt::Display for StateSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, action) in self.playable.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{action}")?;
        }
        write!(f, "] opponents={:?} deck={}", self.opponent_hand_sizes.as_slice(), self.deck_size)?;
        if let Some(card) = self.future {
            write!(f, " next={card}")?;
        }
        write!(
            f,
            " pending={} defuses={}/{}",
            self.pending_attacks, self.defuses, self.opponent_defuses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::zones::{Deck, Hand};

    fn table() -> Table {
        Table::with_hands(
            GameConfig::default(),
            Deck::from_cards([Card::Skip, Card::ExplodingKitten, Card::Favor]),
            vec![
                Hand::from_cards([Card::Tacocat, Card::Tacocat, Card::Cattermelon, Card::Defuse, Card::Skip]),
                Hand::from_cards([Card::Defuse, Card::Defuse, Card::Attack]),
                Hand::from_cards([Card::Favor]),
            ],
        )
    }

    #[test]
    fn test_observe() {
        let sig = StateSignature::observe(&table(), PlayerId::new(0));

        assert_eq!(sig.playable.iter().collect::<Vec<_>>(), vec![Action::Skip, Action::Cat]);
        assert_eq!(sig.opponent_hand_sizes.as_slice(), &[1, 3]);
        assert_eq!(sig.deck_size, 3);
        assert_eq!(sig.future, None);
        assert_eq!(sig.pending_attacks, 0);
        assert_eq!(sig.defuses, 1);
        assert_eq!(sig.opponent_defuses, 2);
    }

    #[test]
    fn test_single_cat_is_not_playable() {
        let table = table();
        let sig = StateSignature::observe(&table, PlayerId::new(2));
        assert_eq!(sig.playable.iter().collect::<Vec<_>>(), vec![Action::Favor]);

        // Seat 2's first other seat is seat 0.
        assert_eq!(sig.opponent_defuses, 1);
    }

    #[test]
    fn test_memo_and_equality() {
        let mut table = table();
        let me = PlayerId::new(0);
        let before = StateSignature::observe(&table, me);

        table.players[me].future_seen.extend([Card::Skip, Card::ExplodingKitten]);
        let after = StateSignature::observe(&table, me);

        assert_eq!(after.future, Some(Card::Skip));
        assert_ne!(before, after);
        assert_eq!(after, StateSignature::observe(&table, me));
    }

    #[test]
    fn test_display() {
        let sig = StateSignature::observe(&table(), PlayerId::new(0));
        assert_eq!(
            sig.to_string(),
            "[Skip, Cat] opponents=[1, 3] deck=3 pending=0 defuses=1/2"
        );
    }
}
