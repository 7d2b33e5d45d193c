//! Self-play training loop.
//!
//! Runs many games between two fresh agents of one baseline kind, and
//! folds every seat's trajectory into a shared `PolicyTable`.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::agents::{Agent, AgentKind};
use crate::core::{GameConfig, GameRng};
use crate::error::Result;
use crate::rules::Game;

use super::policy_table::{OutcomeTable, PolicyTable, Statistic, SurvivalTable};

/// Configuration for a training run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play games.
    pub iterations: usize,

    /// Seed for the trainer's RNG; each game runs on a fork of it.
    pub seed: u64,

    /// One agent is built per name, seated in this order.
    pub player_names: Vec<String>,

    /// Games between progress log lines. `None` logs every 10%.
    pub progress_interval: Option<usize>,

    /// Rules for every training game. Recording is always switched on.
    pub game: GameConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            seed: 0,
            player_names: vec!["Player1".to_owned(), "Player2".to_owned()],
            progress_interval: None,
            game: GameConfig::default(),
        }
    }
}

impl TrainingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for outcome (win/loss) tables: 2 500 000 games.
    pub fn outcome() -> Self {
        Self::default().with_iterations(2_500_000)
    }

    /// Preset for survival tables: 50 000 games.
    pub fn survival() -> Self {
        Self::default().with_iterations(50_000)
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_player_names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = Some(interval);
        self
    }

    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Games between progress log lines (never zero).
    #[must_use]
    pub fn effective_progress_interval(&self) -> usize {
        self.progress_interval.unwrap_or(self.iterations / 10).max(1)
    }
}

/// Runs self-play games and accumulates policy tables.
pub struct Trainer {
    config: TrainingConfig,
    rng: GameRng,
}

impl Trainer {
    #[must_use]
    pub fn new(config: TrainingConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train a fresh table from self-play between agents of `kind`.
    pub fn train<R: Statistic>(&mut self, kind: AgentKind) -> Result<PolicyTable<R>> {
        let mut table = PolicyTable::new();
        self.train_into(|name| kind.build(name), &mut table)?;
        Ok(table)
    }

    /// Run the configured number of games, folding into `table`.
    ///
    /// `factory` builds the agent for each name in `player_names`, once
    /// per game.
    pub fn train_into<R: Statistic>(
        &mut self,
        mut factory: impl FnMut(&str) -> Box<dyn Agent>,
        table: &mut PolicyTable<R>,
    ) -> Result<()> {
        let iterations = self.config.iterations;
        let interval = self.config.effective_progress_interval();
        let game_config = self.config.game.clone().with_recording(true);

        debug!(
            "training {} games, seed {}, players {:?}",
            iterations, self.config.seed, self.config.player_names
        );

        for played in 1..=iterations {
            let agents: Vec<Box<dyn Agent>> = self
                .config
                .player_names
                .iter()
                .map(|name| factory(name.as_str()))
                .collect();

            let mut game = Game::with_config(agents, game_config.clone(), self.rng.fork())?;
            game.start_game()?;
            for trajectory in game.take_trajectories() {
                table.fold(&trajectory);
            }

            if played % interval == 0 {
                info!(
                    "trained {}/{} games ({}%), {} signatures",
                    played,
                    iterations,
                    played * 100 / iterations,
                    table.len()
                );
            }
        }
        Ok(())
    }
}

/// Train a win/loss table with the outcome preset.
pub fn train_outcome(kind: AgentKind, iterations: usize) -> Result<OutcomeTable> {
    Trainer::new(TrainingConfig::outcome().with_iterations(iterations)).train(kind)
}

/// Train a survival table with the survival preset.
pub fn train_survival(kind: AgentKind, iterations: usize) -> Result<SurvivalTable> {
    Trainer::new(TrainingConfig::survival().with_iterations(iterations)).train(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(TrainingConfig::outcome().iterations, 2_500_000);
        assert_eq!(TrainingConfig::survival().iterations, 50_000);
        assert_eq!(TrainingConfig::default().player_names, vec!["Player1", "Player2"]);
    }

    #[test]
    fn test_progress_interval() {
        let config = TrainingConfig::new().with_iterations(250);
        assert_eq!(config.effective_progress_interval(), 25);

        let config = TrainingConfig::new().with_iterations(3);
        assert_eq!(config.effective_progress_interval(), 1);

        let config = config.with_progress_interval(0);
        assert_eq!(config.effective_progress_interval(), 1);
    }

    #[test]
    fn test_config_builders() {
        let config = TrainingConfig::new()
            .with_seed(9)
            .with_player_names(["a", "b", "c"])
            .with_game(GameConfig::default().with_future_depth(2));

        assert_eq!(config.seed, 9);
        assert_eq!(config.player_names.len(), 3);
        assert_eq!(config.game.future_depth, 2);
    }

    #[test]
    fn test_train_small_run() {
        let mut trainer = Trainer::new(TrainingConfig::new().with_iterations(20).with_seed(1));
        let table: OutcomeTable = trainer.train(AgentKind::Random).unwrap();
        assert!(!table.is_empty());
    }
}
