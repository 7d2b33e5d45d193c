//! # rust-kittens
//!
//! An Exploding Kittens simulator with self-play tabular policy learning.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: agents decide, the engine mutates. An
//!    agent sees the `Table` read-only and acts only through its `Turn`.
//!
//! 2. **N-Player First**: two or more seats everywhere, indexed by
//!    `PlayerId`.
//!
//! 3. **Reproducible**: one seeded `GameRng` per game drives shuffles,
//!    steals and every random decision; training forks one per game.
//!
//! ## Architecture
//!
//! - **Dispatch table**: each playable card maps to one effect handler
//!   through an exhaustive `match`.
//!
//! - **Persistent Data Structures**: policy tables live in `im` maps, so a
//!   trained table is shared with every evaluation agent in O(1).
//!
//! ## Modules
//!
//! - `core`: players, actions, RNG, configuration
//! - `cards`: the card tag
//! - `zones`: deck, hand and discard pile
//! - `rules`: table, turns and the game state machine
//! - `effects`: card effect handlers
//! - `agents`: the `Agent` trait and the built-in strategies
//! - `training`: trajectories, policy tables, self-play and evaluation
//!
//! ## Example
//!
//! ```
//! use rust_kittens::{Agent, Game, GameResult, HeuristicAgent, RandomAgent};
//!
//! let agents: Vec<Box<dyn Agent>> = vec![
//!     Box::new(RandomAgent::new("alice")),
//!     Box::new(HeuristicAgent::new("bob")),
//! ];
//! let mut game = Game::with_seed(agents, 42).unwrap();
//!
//! match game.start_game().unwrap() {
//!     GameResult::Winner(_) => assert!(game.decide_winner().is_some()),
//!     GameResult::NoWinner => assert!(game.decide_winner().is_none()),
//! }
//! ```

pub mod agents;
pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod rules;
pub mod training;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionSet, DeckComposition, GameConfig, GameRng, PlayerId, PlayerMap, PlayerState,
};

pub use crate::cards::Card;

pub use crate::zones::{Deck, DiscardPile, Hand};

pub use crate::rules::{Game, GameResult, GameStatus, Table, Turn};

pub use crate::agents::{
    Agent, AgentKind, HeuristicAgent, OutcomePolicyAgent, RandomAgent, ReactiveAgent, StateSignature,
    SurvivalPolicyAgent,
};

pub use crate::training::{
    evaluate, train_outcome, train_survival, MatchReport, OutcomeStats, OutcomeTable, PolicyTable, Statistic,
    SurvivalScore, SurvivalTable, Trainer, TrainingConfig, Trajectory,
};

pub use crate::error::{Error, Result};
