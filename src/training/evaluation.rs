//! Head-to-head evaluation.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::core::{GameConfig, GameRng};
use crate::error::Result;
use crate::rules::Game;

/// Win counts from a series of games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub games: usize,
    /// Wins per agent name.
    pub wins: BTreeMap<String, usize>,
    /// Games that ended with the deck exhausted and several players alive.
    pub no_winner: usize,
}

impl MatchReport {
    /// Count one finished game.
    pub fn record(&mut self, winner: Option<&str>) {
        self.games += 1;
        match winner {
            Some(name) => *self.wins.entry(name.to_owned()).or_default() += 1,
            None => self.no_winner += 1,
        }
    }

    #[must_use]
    pub fn wins_for(&self, name: &str) -> usize {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Fraction of all games `name` won (0 for an empty report).
    #[must_use]
    pub fn win_rate(&self, name: &str) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins_for(name) as f64 / self.games as f64
    }
}

/// Play `games` games between fresh lineups, without recording.
///
/// `lineup` is called once per game and returns the agents in seat order.
pub fn evaluate(games: usize, seed: u64, mut lineup: impl FnMut() -> Vec<Box<dyn Agent>>) -> Result<MatchReport> {
    let mut rng = GameRng::new(seed);
    let config = GameConfig::default().with_recording(false);
    let mut report = MatchReport::default();

    for _ in 0..games {
        let mut game = Game::with_config(lineup(), config.clone(), rng.fork())?;
        game.start_game()?;
        report.record(game.decide_winner());
    }

    debug!("evaluated {} games: {:?}, {} without winner", report.games, report.wins, report.no_winner);
    Ok(report)
}
