//! The uniform-random agent and the random building blocks other agents
//! fall back on.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{GameRng, PlayerId};
use crate::error::{Error, Result};
use crate::rules::{Table, Turn};

use super::{Agent, AgentKind};

/// Uniform over every legal choice.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    name: String,
}

impl RandomAgent {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Random
    }

    fn take_turn(&mut self, turn: &mut Turn<'_>) -> Result<()> {
        random_turn(self, turn)
    }
}

/// A uniformly chosen eligible opponent of `me`.
pub fn random_target(table: &Table, me: PlayerId, rng: &mut GameRng) -> Result<PlayerId> {
    let targets = table.eligible_targets(me);
    rng.choose(&targets).copied().ok_or(Error::NoEligibleTarget)
}

/// A uniformly chosen card from `me`'s hand.
pub fn random_card(table: &Table, me: PlayerId, rng: &mut GameRng) -> Result<Card> {
    let cards: SmallVec<[Card; 16]> = table.player(me).hand.iter().collect();
    rng.choose(&cards).copied().ok_or(Error::EmptyHand { player: me })
}

/// A uniformly chosen legal play, if there is one.
pub fn random_play(turn: &mut Turn<'_>) -> Option<Card> {
    let legal = turn.legal_plays();
    turn.rng().choose(&legal).copied()
}

/// Random card-play phase.
///
/// Before each play a fair coin is flipped; tails ends the phase. It also
/// ends when nothing is playable or a Skip or Attack already ended the
/// turn.
pub fn random_turn(agent: &mut dyn Agent, turn: &mut Turn<'_>) -> Result<()> {
    while !turn.is_skipping() && turn.rng().coin_flip() {
        let Some(card) = random_play(turn) else {
            break;
        };
        turn.play(agent, card)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::zones::{Deck, Hand};

    fn table() -> Table {
        Table::with_hands(
            GameConfig::default(),
            Deck::from_cards([Card::Skip]),
            vec![
                Hand::from_cards([Card::Attack]),
                Hand::new(),
                Hand::from_cards([Card::Favor, Card::Skip]),
            ],
        )
    }

    #[test]
    fn test_random_target_only_picks_eligible() {
        let table = table();
        let mut rng = GameRng::new(1);

        for _ in 0..50 {
            assert_eq!(random_target(&table, PlayerId::new(0), &mut rng).unwrap(), PlayerId::new(2));
        }
    }

    #[test]
    fn test_random_target_none_eligible() {
        let mut table = table();
        table.players[PlayerId::new(2)].alive = false;
        let mut rng = GameRng::new(1);

        assert!(matches!(
            random_target(&table, PlayerId::new(0), &mut rng),
            Err(Error::NoEligibleTarget)
        ));
    }

    #[test]
    fn test_random_card_from_hand() {
        let table = table();
        let mut rng = GameRng::new(9);

        for _ in 0..20 {
            let card = random_card(&table, PlayerId::new(2), &mut rng).unwrap();
            assert!(matches!(card, Card::Favor | Card::Skip));
        }
        assert!(matches!(
            random_card(&table, PlayerId::new(1), &mut rng),
            Err(Error::EmptyHand { .. })
        ));
    }

    #[test]
    fn test_default_spot_in_range() {
        let mut agent = RandomAgent::new("r");
        let mut rng = GameRng::new(4);

        for _ in 0..50 {
            assert!(agent.choose_spot_in_deck(5, &mut rng) <= 5);
        }
        assert_eq!(agent.choose_spot_in_deck(0, &mut rng), 0);
    }
}
