//! The card-play phase of one turn.
//!
//! A `Turn` is the handle an agent receives in `Agent::take_turn`. It
//! exposes the table read-only and routes every play through the effect
//! dispatch table, so agents can never mutate state directly.

use smallvec::SmallVec;

use crate::agents::{Agent, StateSignature};
use crate::cards::Card;
use crate::core::{Action, GameRng, PlayerId};
use crate::effects::{self, EffectContext};
use crate::error::{Error, Result};
use crate::training::trajectory::Step;

use super::table::Table;

/// Mutable access to every agent except the one taking the turn.
///
/// Favor needs the target agent to choose which card to give while the
/// acting agent is already borrowed by `take_turn`.
pub struct Others<'g> {
    before: &'g mut [Box<dyn Agent>],
    after: &'g mut [Box<dyn Agent>],
}

impl<'g> Others<'g> {
    pub(crate) fn new(before: &'g mut [Box<dyn Agent>], after: &'g mut [Box<dyn Agent>]) -> Self {
        Self { before, after }
    }

    /// The agent in seat `player`, or `None` for the acting seat.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut (dyn Agent + 'static)> {
        let idx = player.index();
        let split = self.before.len();
        let slot = if idx < split {
            self.before.get_mut(idx)
        } else if idx > split {
            self.after.get_mut(idx - split - 1)
        } else {
            None
        };
        slot.map(|agent| agent.as_mut())
    }
}

/// One player's card-play phase.
pub struct Turn<'g> {
    table: &'g mut Table,
    rng: &'g mut GameRng,
    others: Others<'g>,
    player: PlayerId,
    plays: usize,
}

impl<'g> Turn<'g> {
    pub(crate) fn new(
        table: &'g mut Table,
        rng: &'g mut GameRng,
        others: Others<'g>,
        player: PlayerId,
    ) -> Self {
        Self {
            table,
            rng,
            others,
            player,
            plays: 0,
        }
    }

    /// The seat taking this turn.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &*self.table
    }

    /// The game's RNG, for randomized decisions.
    pub fn rng(&mut self) -> &mut GameRng {
        &mut *self.rng
    }

    /// Has a Skip or Attack already ended this turn's draw?
    #[must_use]
    pub fn is_skipping(&self) -> bool {
        self.table.player(self.player).skipping
    }

    /// Cards played so far this turn.
    #[must_use]
    pub fn plays_made(&self) -> usize {
        self.plays
    }

    #[must_use]
    pub fn legal_plays(&self) -> SmallVec<[Card; 8]> {
        self.table.legal_plays(self.player)
    }

    /// Play `card` (a pair, for cats) and resolve its effect.
    ///
    /// `actor` must be the agent taking the turn; Favor and cat effects
    /// call back into it for target selection.
    pub fn play(&mut self, actor: &mut dyn Agent, card: Card) -> Result<()> {
        let hand = &self.table.player(self.player).hand;
        if !card.is_playable() || hand.count(card) < card.copies_per_play() {
            return Err(Error::UnplayableCard { card });
        }

        if let Some(action) = Action::from_card(card) {
            self.record(&*actor, action);
        }

        let mut ctx = EffectContext {
            table: &mut *self.table,
            rng: &mut *self.rng,
            actor,
            others: &mut self.others,
            player: self.player,
        };
        effects::resolve(&mut ctx, card)?;

        self.plays += 1;
        Ok(())
    }

    /// Close the card-play phase, recording the decision to stop.
    pub(crate) fn finish(&mut self, actor: &dyn Agent) {
        self.record(actor, Action::EndTurn);
    }

    fn record(&mut self, actor: &dyn Agent, action: Action) {
        if !self.table.config.record_trajectories {
            return;
        }
        let signature: StateSignature = actor.compute_state_signature(&*self.table, self.player);
        self.table.players[self.player]
            .trajectory
            .push(Step::new(signature, action));
    }
}
