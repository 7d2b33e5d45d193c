//! Heuristic agent that answers an opponent's Defuse.
//!
//! A Defuse means the kitten is back in the deck, usually somewhere the
//! defuser knows. The reactive agent gets out of the way with the first of
//! Attack, Skip or Shuffle it holds.

use crate::cards::Card;
use crate::core::{GameRng, PlayerId};
use crate::error::Result;
use crate::rules::{Table, Turn};

use super::heuristic::surrender;
use super::{random_turn, Agent, AgentKind};

const RESPONSES: [Card; 3] = [Card::Attack, Card::Skip, Card::Shuffle];

#[derive(Clone, Debug)]
pub struct ReactiveAgent {
    name: String,
}

impl ReactiveAgent {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Agent for ReactiveAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Reactive
    }

    fn give_card(&mut self, table: &Table, me: PlayerId, _requester: PlayerId, _rng: &mut GameRng) -> Result<Card> {
        surrender(table, me)
    }

    fn choose_spot_in_deck(&mut self, _deck_size: usize, _rng: &mut GameRng) -> usize {
        0
    }

    fn take_turn(&mut self, turn: &mut Turn<'_>) -> Result<()> {
        if let Some(card) = reactive_response(turn.table(), turn.player()) {
            return turn.play(self, card);
        }
        random_turn(self, turn)
    }
}

/// The card to answer with, if the last card played was an opponent's
/// Defuse and `me` holds Attack, Skip or Shuffle.
#[must_use]
pub fn reactive_response(table: &Table, me: PlayerId) -> Option<Card> {
    match table.last_played() {
        Some((by, Card::Defuse)) if by != me => {
            let hand = &table.player(me).hand;
            RESPONSES.into_iter().find(|&card| hand.contains(card))
        }
        _ => None,
    }
}
