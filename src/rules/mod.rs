//! The rules engine.
//!
//! ## Key Types
//!
//! - `Table`: deck, discard pile, seats and turn bookkeeping
//! - `Turn`: an agent's handle for the card-play phase of one turn
//! - `Game`: the state machine that deals, schedules turns and resolves draws
//!
//! Agents only ever see the table read-only; every mutation goes through
//! `Turn::play` (which dispatches to `effects`) or the engine's draw step.

pub mod engine;
pub mod table;
pub mod turn;

pub use engine::{Game, GameResult, GameStatus};
pub use table::Table;
pub use turn::{Others, Turn};
