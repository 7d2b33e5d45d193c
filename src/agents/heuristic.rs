//! Random play with two fixed answers: surrender the cheapest card, and
//! put a defused kitten straight back on top.

use crate::cards::Card;
use crate::core::{GameRng, PlayerId};
use crate::error::{Error, Result};
use crate::rules::{Table, Turn};
use crate::zones::Hand;

use super::{random_turn, Agent, AgentKind};

#[derive(Clone, Debug)]
pub struct HeuristicAgent {
    name: String,
}

impl HeuristicAgent {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Agent for HeuristicAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Heuristic
    }

    fn give_card(&mut self, table: &Table, me: PlayerId, _requester: PlayerId, _rng: &mut GameRng) -> Result<Card> {
        surrender(table, me)
    }

    fn choose_spot_in_deck(&mut self, _deck_size: usize, _rng: &mut GameRng) -> usize {
        0
    }

    fn take_turn(&mut self, turn: &mut Turn<'_>) -> Result<()> {
        random_turn(self, turn)
    }
}

/// The card in `hand` that hurts least to give away.
///
/// See [`Card::SURRENDER_ORDER`].
#[must_use]
pub fn least_valuable_card(hand: &Hand) -> Option<Card> {
    hand.iter().min_by_key(|card| card.surrender_rank())
}

/// Heuristic `give_card`, shared with the agents built on top of it.
pub(crate) fn surrender(table: &Table, me: PlayerId) -> Result<Card> {
    least_valuable_card(&table.player(me).hand).ok_or(Error::EmptyHand { player: me })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_least_valuable_card() {
        let hand = Hand::from_cards([Card::Defuse, Card::Attack, Card::Favor, Card::RainbowRalphingCat]);
        assert_eq!(least_valuable_card(&hand), Some(Card::RainbowRalphingCat));

        let hand = Hand::from_cards([Card::Defuse, Card::Skip, Card::Attack]);
        assert_eq!(least_valuable_card(&hand), Some(Card::Skip));

        let hand = Hand::from_cards([Card::Defuse]);
        assert_eq!(least_valuable_card(&hand), Some(Card::Defuse));

        assert_eq!(least_valuable_card(&Hand::new()), None);
    }

    #[test]
    fn test_tacocat_goes_first() {
        let hand = Hand::from_cards([Card::Cattermelon, Card::Tacocat, Card::Shuffle]);
        assert_eq!(least_valuable_card(&hand), Some(Card::Tacocat));
    }

    #[test]
    fn test_replants_on_top() {
        let mut agent = HeuristicAgent::new("h");
        let mut rng = GameRng::new(0);
        assert_eq!(agent.choose_spot_in_deck(12, &mut rng), 0);
    }
}
