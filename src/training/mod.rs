//! Policy learning from self-play.
//!
//! ## Overview
//!
//! - **Trajectory**: one player's (signature, action) decisions over a game
//! - **PolicyTable**: per-signature, per-action statistics folded from trajectories
//! - **Trainer**: runs self-play games and fills a table
//! - **evaluate**: head-to-head series between lineups, for measuring a table
//!
//! ## Usage
//!
//! ```
//! use rust_kittens::agents::{Agent, AgentKind, OutcomePolicyAgent, RandomAgent};
//! use rust_kittens::training::{evaluate, OutcomeTable, Trainer, TrainingConfig};
//!
//! let config = TrainingConfig::outcome().with_iterations(50).with_seed(7);
//! let table: OutcomeTable = Trainer::new(config).train(AgentKind::Random).unwrap();
//!
//! let report = evaluate(10, 1, || {
//!     let lineup: Vec<Box<dyn Agent>> = vec![
//!         Box::new(OutcomePolicyAgent::new("learned", table.clone())),
//!         Box::new(RandomAgent::new("random")),
//!     ];
//!     lineup
//! })
//! .unwrap();
//! assert_eq!(report.games, 10);
//! ```

pub mod evaluation;
pub mod policy_table;
pub mod self_play;
pub mod trajectory;

pub use evaluation::{evaluate, MatchReport};
pub use policy_table::{OutcomeStats, OutcomeTable, PolicyTable, Statistic, SurvivalScore, SurvivalTable};
pub use self_play::{train_outcome, train_survival, Trainer, TrainingConfig};
pub use trajectory::{Episode, Step, Trajectory};
