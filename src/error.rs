//! Error types for the simulator.
//!
//! Every variant except `Snapshot` is a broken engine contract: the engine
//! only offers legal plays, so hitting one of these means an agent or the
//! engine itself misbehaved. They are propagated, never recovered.

use thiserror::Error;

use crate::cards::Card;
use crate::core::PlayerId;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the engine, agents and policy tables.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    #[error("card {card} is not in the hand")]
    CardNotFound { card: Card },

    #[error("{player} has no card to give")]
    EmptyHand { player: PlayerId },

    #[error("no eligible target for a favor or cat steal")]
    NoEligibleTarget,

    #[error("{player} is not an eligible target")]
    IllegalTarget { player: PlayerId },

    #[error("{card} cannot be played from this hand")]
    UnplayableCard { card: Card },

    #[error("{player} is not in the game")]
    InactivePlayer { player: PlayerId },

    #[error("cannot seat this many agents (2 or more, and few enough to deal every hand), got {count}")]
    InvalidPlayerCount { count: usize },

    #[error("policy table snapshot failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::CardNotFound { card: Card::Defuse };
        assert_eq!(err.to_string(), "card Defuse is not in the hand");

        let err = Error::IllegalTarget { player: PlayerId::new(1) };
        assert_eq!(err.to_string(), "Player 1 is not an eligible target");

        let err = Error::InvalidPlayerCount { count: 1 };
        assert!(err.to_string().contains("got 1"));
    }
}
