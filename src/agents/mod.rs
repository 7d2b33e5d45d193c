//! Decision-making agents.
//!
//! An agent answers the engine's questions for one seat: which cards to
//! play this turn, whom to target, which card to surrender, where to
//! replant a defused kitten. The engine owns everything else about the
//! seat (see `PlayerState`).
//!
//! ## Key Types
//!
//! - `Agent`: the strategy trait, used as `Box<dyn Agent>`
//! - `AgentKind`: the built-in strategies, for factories and reports
//! - `StateSignature`: the structural state key learned policies index on
//!
//! ## Built-in strategies
//!
//! - `RandomAgent`: uniform over legal choices
//! - `HeuristicAgent`: random play, but surrenders its cheapest card and
//!   replants kittens on top of the deck
//! - `ReactiveAgent`: heuristic, plus answers an opponent's Defuse with
//!   Attack, Skip or Shuffle
//! - `OutcomePolicyAgent`: follows the best win rate in an `OutcomeTable`
//! - `SurvivalPolicyAgent`: follows the best survival score in a
//!   `SurvivalTable`

pub mod heuristic;
pub mod learned;
pub mod random;
pub mod reactive;
pub mod signature;

pub use heuristic::{least_valuable_card, HeuristicAgent};
pub use learned::{fallback_decision, resolve_action, targets_restricted, OutcomePolicyAgent, SurvivalPolicyAgent};
pub use random::{random_card, random_play, random_target, random_turn, RandomAgent};
pub use reactive::{reactive_response, ReactiveAgent};
pub use signature::StateSignature;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameRng, PlayerId};
use crate::error::Result;
use crate::rules::{Table, Turn};
use crate::training::{OutcomeTable, SurvivalTable};

/// A strategy for one seat.
///
/// Every method except [`Agent::take_turn`] has a uniform-random default.
pub trait Agent {
    /// Display name; also the identity used to label trajectories.
    fn name(&self) -> &str;

    fn kind(&self) -> AgentKind;

    /// Pick the opponent a Favor asks a card from.
    ///
    /// Only called when at least one eligible target exists.
    fn choose_favor_target(&mut self, table: &Table, me: PlayerId, rng: &mut GameRng) -> Result<PlayerId> {
        random_target(table, me, rng)
    }

    /// Pick the opponent a cat pair steals from.
    fn choose_cat_target(&mut self, table: &Table, me: PlayerId, rng: &mut GameRng) -> Result<PlayerId> {
        random_target(table, me, rng)
    }

    /// Pick the card to hand over when `requester` plays a Favor on `me`.
    fn give_card(&mut self, table: &Table, me: PlayerId, _requester: PlayerId, rng: &mut GameRng) -> Result<Card> {
        random_card(table, me, rng)
    }

    /// Where a defused kitten goes back, as an index in `[0, deck_size]`
    /// (0 = top). Larger values are clamped by the engine.
    fn choose_spot_in_deck(&mut self, deck_size: usize, rng: &mut GameRng) -> usize {
        rng.up_to(deck_size)
    }

    /// Key for this seat's view of the table.
    fn compute_state_signature(&self, table: &Table, me: PlayerId) -> StateSignature {
        StateSignature::observe(table, me)
    }

    /// Play zero or more cards through `turn`, then return.
    ///
    /// The draw that ends the turn is done by the engine.
    fn take_turn(&mut self, turn: &mut Turn<'_>) -> Result<()>;
}

/// The built-in strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgentKind {
    Random,
    Heuristic,
    Reactive,
    OutcomePolicy,
    SurvivalPolicy,
}

impl AgentKind {
    /// The strategies that need no training, usable as self-play baselines.
    pub const BASELINES: [AgentKind; 3] = [AgentKind::Random, AgentKind::Heuristic, AgentKind::Reactive];

    /// Build a fresh agent of this kind.
    ///
    /// Learned kinds start with an empty table, so they play their
    /// fallback strategy until given a trained one.
    #[must_use]
    pub fn build(self, name: impl Into<String>) -> Box<dyn Agent> {
        let name = name.into();
        match self {
            AgentKind::Random => Box::new(RandomAgent::new(name)),
            AgentKind::Heuristic => Box::new(HeuristicAgent::new(name)),
            AgentKind::Reactive => Box::new(ReactiveAgent::new(name)),
            AgentKind::OutcomePolicy => Box::new(OutcomePolicyAgent::new(name, OutcomeTable::default())),
            AgentKind::SurvivalPolicy => Box::new(SurvivalPolicyAgent::new(name, SurvivalTable::default())),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AgentKind::Random => "random",
            AgentKind::Heuristic => "heuristic",
            AgentKind::Reactive => "reactive",
            AgentKind::OutcomePolicy => "outcome-policy",
            AgentKind::SurvivalPolicy => "survival-policy",
        };
        f.write_str(name)
    }
}
