//! Core types: seats, per-player state, actions, RNG, configuration.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;

pub use action::{Action, ActionSet};
pub use config::{DeckComposition, GameConfig};
pub use player::{PlayerId, PlayerMap, PlayerState};
pub use rng::GameRng;
