//! Per-game decision records.
//!
//! Every decision a player takes during its card-play phase is recorded
//! as a `Step`: the state signature it saw and the action it chose
//! (`EndTurn` included). At the end of a game each seat's steps become a
//! `Trajectory`, labelled with whether that player won.

use serde::{Deserialize, Serialize};

use crate::agents::StateSignature;
use crate::core::Action;

/// A single decision point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub signature: StateSignature,
    pub action: Action,
}

impl Step {
    #[must_use]
    pub fn new(signature: StateSignature, action: Action) -> Self {
        Self { signature, action }
    }
}

/// Summary of one player's game, as seen by a statistic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Episode {
    /// Did this player win the game?
    pub won: bool,
    /// Number of recorded decisions.
    pub length: usize,
}

/// One player's decisions over a complete game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trajectory {
    pub player_name: String,
    pub steps: Vec<Step>,
    pub won: bool,
}

impl Trajectory {
    #[must_use]
    pub fn new(player_name: String, steps: Vec<Step>, won: bool) -> Self {
        Self {
            player_name,
            steps,
            won,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn episode(&self) -> Episode {
        Episode {
            won: self.won,
            length: self.steps.len(),
        }
    }
}
