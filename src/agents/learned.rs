//! Agents that follow a trained policy table.
//!
//! Both learned agents look up their current `StateSignature`, take the
//! highest-scoring recorded action (ties to the earliest `Action`), play
//! it, and repeat until the table says `EndTurn`. They differ in the
//! statistic they read and in what they do when the table has nothing to
//! say:
//!
//! - `OutcomePolicyAgent` makes one random-style decision and looks up again.
//! - `SurvivalPolicyAgent` hands the rest of the turn to `random_turn`.
//!
//! While some live opponent holds no cards (or nobody can be targeted)
//! Favor and Cat are excluded from the lookup. A Favor with nobody to ask
//! comes straight back to the hand, so a table that likes it would
//! otherwise loop forever.

use log::trace;

use crate::cards::Card;
use crate::core::{Action, GameRng, PlayerId};
use crate::error::Result;
use crate::rules::{Table, Turn};
use crate::training::{OutcomeTable, PolicyTable, Statistic, SurvivalTable};

use super::heuristic::surrender;
use super::{random_play, random_turn, reactive_response, Agent, AgentKind, StateSignature};

/// Follows the action with the best win rate.
#[derive(Clone, Debug)]
pub struct OutcomePolicyAgent {
    name: String,
    policy: OutcomeTable,
}

impl OutcomePolicyAgent {
    #[must_use]
    pub fn new(name: impl Into<String>, policy: OutcomeTable) -> Self {
        Self {
            name: name.into(),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> &OutcomeTable {
        &self.policy
    }

    /// The next card to play, or `None` to end the card-play phase.
    pub fn decide(&self, turn: &mut Turn<'_>) -> Option<Card> {
        if turn.is_skipping() {
            return None;
        }
        match self.lookup(turn) {
            Some((Action::EndTurn, _)) => None,
            Some((_, Some(card))) => Some(card),
            _ => fallback_decision(turn),
        }
    }

    fn lookup(&self, turn: &Turn<'_>) -> Option<(Action, Option<Card>)> {
        let signature = self.compute_state_signature(turn.table(), turn.player());
        lookup(&self.policy, turn.table(), turn.player(), &signature)
    }
}

impl Agent for OutcomePolicyAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::OutcomePolicy
    }

    fn give_card(&mut self, table: &Table, me: PlayerId, _requester: PlayerId, _rng: &mut GameRng) -> Result<Card> {
        surrender(table, me)
    }

    fn choose_spot_in_deck(&mut self, _deck_size: usize, _rng: &mut GameRng) -> usize {
        0
    }

    fn take_turn(&mut self, turn: &mut Turn<'_>) -> Result<()> {
        while let Some(card) = self.decide(turn) {
            turn.play(self, card)?;
        }
        Ok(())
    }
}

/// Follows the action with the best survival score.
#[derive(Clone, Debug)]
pub struct SurvivalPolicyAgent {
    name: String,
    policy: SurvivalTable,
}

impl SurvivalPolicyAgent {
    #[must_use]
    pub fn new(name: impl Into<String>, policy: SurvivalTable) -> Self {
        Self {
            name: name.into(),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> &SurvivalTable {
        &self.policy
    }
}

impl Agent for SurvivalPolicyAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::SurvivalPolicy
    }

    fn give_card(&mut self, table: &Table, me: PlayerId, _requester: PlayerId, _rng: &mut GameRng) -> Result<Card> {
        surrender(table, me)
    }

    fn choose_spot_in_deck(&mut self, _deck_size: usize, _rng: &mut GameRng) -> usize {
        0
    }

    fn take_turn(&mut self, turn: &mut Turn<'_>) -> Result<()> {
        while !turn.is_skipping() {
            let signature = self.compute_state_signature(turn.table(), turn.player());
            match lookup(&self.policy, turn.table(), turn.player(), &signature) {
                Some((Action::EndTurn, _)) => return Ok(()),
                Some((_, Some(card))) => turn.play(self, card)?,
                _ => {
                    trace!("{}: no policy for {}, playing randomly", self.name, signature);
                    return random_turn(self, turn);
                }
            }
        }
        Ok(())
    }
}

/// Best recorded action for `signature` and the card that carries it out.
///
/// The card is `None` for `EndTurn` and for actions the hand cannot
/// currently back.
fn lookup<R: Statistic>(
    policy: &PolicyTable<R>,
    table: &Table,
    me: PlayerId,
    signature: &StateSignature,
) -> Option<(Action, Option<Card>)> {
    let restricted = targets_restricted(table, me);
    let action = policy.best_action(signature, |action| !(restricted && action.needs_target()))?;
    Some((action, resolve_action(action, table, me)))
}

/// Are Favor and Cat off the table for `me` right now?
#[must_use]
pub fn targets_restricted(table: &Table, me: PlayerId) -> bool {
    table.any_opponent_empty_handed(me) || !table.has_eligible_target(me)
}

/// The card that plays `action` from `me`'s hand, if it is legal now.
///
/// `Cat` resolves to the first of Cattermelon, Tacocat and
/// Rainbow-Ralphing Cat held as a pair.
#[must_use]
pub fn resolve_action(action: Action, table: &Table, me: PlayerId) -> Option<Card> {
    let legal = table.legal_plays(me);
    match action {
        Action::Cat => Card::CATS.into_iter().find(|card| legal.contains(card)),
        Action::EndTurn => None,
        other => other.card().filter(|card| legal.contains(card)),
    }
}

/// One random-style decision: tails ends the turn, otherwise answer an
/// opponent's Defuse if possible, else play a uniformly random legal card.
pub fn fallback_decision(turn: &mut Turn<'_>) -> Option<Card> {
    if turn.is_skipping() || !turn.rng().coin_flip() {
        return None;
    }
    if let Some(card) = reactive_response(turn.table(), turn.player()) {
        return Some(card);
    }
    random_play(turn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::zones::{Deck, Hand};

    fn table(me: Hand, them: Hand) -> Table {
        Table::with_hands(GameConfig::default(), Deck::from_cards([Card::Skip]), vec![me, them])
    }

    #[test]
    fn test_resolve_cat_picks_first_pair() {
        let table = table(
            Hand::from_cards([
                Card::RainbowRalphingCat,
                Card::RainbowRalphingCat,
                Card::Tacocat,
                Card::Tacocat,
                Card::Cattermelon,
            ]),
            Hand::from_cards([Card::Skip]),
        );
        assert_eq!(resolve_action(Action::Cat, &table, PlayerId::new(0)), Some(Card::Tacocat));
    }

    #[test]
    fn test_resolve_requires_held_card() {
        let table = table(Hand::from_cards([Card::Skip]), Hand::from_cards([Card::Skip]));
        let me = PlayerId::new(0);

        assert_eq!(resolve_action(Action::Skip, &table, me), Some(Card::Skip));
        assert_eq!(resolve_action(Action::Attack, &table, me), None);
        assert_eq!(resolve_action(Action::Cat, &table, me), None);
        assert_eq!(resolve_action(Action::EndTurn, &table, me), None);
    }

    #[test]
    fn test_resolve_favor_needs_target() {
        let table = table(Hand::from_cards([Card::Favor]), Hand::new());
        assert_eq!(resolve_action(Action::Favor, &table, PlayerId::new(0)), None);
    }

    #[test]
    fn test_targets_restricted() {
        let me = PlayerId::new(0);
        assert!(!targets_restricted(
            &table(Hand::new(), Hand::from_cards([Card::Skip])),
            me
        ));
        assert!(targets_restricted(&table(Hand::new(), Hand::new()), me));

        let mut dead = table(Hand::new(), Hand::from_cards([Card::Skip]));
        dead.players[PlayerId::new(1)].alive = false;
        assert!(targets_restricted(&dead, me));
    }
}
