//! Tabular policies learned from self-play.
//!
//! A `PolicyTable` maps a `StateSignature` to per-action statistics. The
//! statistic decides both how a finished game updates an entry and how an
//! entry is scored when an agent looks up its best action:
//!
//! - `OutcomeStats`: win/loss counts, scored by win rate
//! - `SurvivalScore`: running score `(old + trajectory length) / 2`
//!
//! Tables are built on `im` maps, so handing a trained table to any
//! number of agents is a cheap structural-sharing clone.

use std::fmt::Debug;
use std::hash::BuildHasherDefault;

use im::OrdMap;
use rustc_hash::FxHasher;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::agents::StateSignature;
use crate::core::Action;
use crate::error::Result;

use super::trajectory::{Episode, Trajectory};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Per-(state, action) learning statistic.
pub trait Statistic: Clone + Default + Debug + Serialize + DeserializeOwned {
    /// Fold in one finished game of the player who took the action.
    fn update(&mut self, episode: &Episode);

    /// How good the action looks; `None` if there is nothing to go on.
    fn score(&self) -> Option<f64>;
}

/// Win/loss counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeStats {
    pub wins: u64,
    pub losses: u64,
}

impl OutcomeStats {
    #[must_use]
    pub fn games(&self) -> u64 {
        self.wins + self.losses
    }
}

impl Statistic for OutcomeStats {
    fn update(&mut self, episode: &Episode) {
        if episode.won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    fn score(&self) -> Option<f64> {
        let games = self.games();
        (games > 0).then(|| self.wins as f64 / games as f64)
    }
}

/// Running survival score.
///
/// Each update halves the distance to the latest trajectory length, so
/// recent games dominate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurvivalScore(pub f64);

impl Statistic for SurvivalScore {
    fn update(&mut self, episode: &Episode) {
        self.0 = (self.0 + episode.length as f64) / 2.0;
    }

    fn score(&self) -> Option<f64> {
        Some(self.0)
    }
}

/// `StateSignature → (Action → statistic)`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PolicyTable<R: Statistic> {
    entries: im::HashMap<StateSignature, OrdMap<Action, R>, FxBuildHasher>,
}

pub type OutcomeTable = PolicyTable<OutcomeStats>;
pub type SurvivalTable = PolicyTable<SurvivalScore>;

impl<R: Statistic> PolicyTable<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every step of a finished trajectory in, in play order.
    pub fn fold(&mut self, trajectory: &Trajectory) {
        let episode = trajectory.episode();
        for step in &trajectory.steps {
            self.record(step.signature.clone(), step.action, &episode);
        }
    }

    /// Update one (state, action) entry.
    pub fn record(&mut self, signature: StateSignature, action: Action, episode: &Episode) {
        let actions = self.entries.entry(signature).or_insert_with(OrdMap::new);
        match actions.get_mut(&action) {
            Some(stat) => stat.update(episode),
            None => {
                let mut stat = R::default();
                stat.update(episode);
                actions.insert(action, stat);
            }
        }
    }

    /// The best-scoring recorded action that `allow` accepts.
    ///
    /// Ties go to the earliest action in `Action` order. `None` for an
    /// unseen signature or when nothing allowed has a score.
    pub fn best_action(&self, signature: &StateSignature, allow: impl Fn(Action) -> bool) -> Option<Action> {
        let actions = self.entries.get(signature)?;

        let mut best: Option<(Action, f64)> = None;
        for action in Action::ALL {
            if !allow(action) {
                continue;
            }
            let Some(score) = actions.get(&action).and_then(R::score) else {
                continue;
            };
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((action, score));
            }
        }
        best.map(|(action, _)| action)
    }

    #[must_use]
    pub fn get(&self, signature: &StateSignature) -> Option<&OrdMap<Action, R>> {
        self.entries.get(signature)
    }

    #[must_use]
    pub fn stat(&self, signature: &StateSignature, action: Action) -> Option<&R> {
        self.entries.get(signature)?.get(&action)
    }

    /// Every signature with at least one recorded action.
    pub fn signatures(&self) -> impl Iterator<Item = &StateSignature> + '_ {
        self.entries.keys()
    }

    /// Number of distinct signatures seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot for a driver that wants to persist the table.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl PolicyTable<OutcomeStats> {
    /// Add another table's counts into this one.
    pub fn merge(&mut self, other: &Self) {
        for (signature, theirs) in other.entries.clone() {
            let ours = self.entries.entry(signature).or_insert_with(OrdMap::new);
            for action in Action::ALL {
                let Some(add) = theirs.get(&action) else {
                    continue;
                };
                match ours.get_mut(&action) {
                    Some(stat) => {
                        stat.wins += add.wins;
                        stat.losses += add.losses;
                    }
                    None => {
                        ours.insert(action, *add);
                    }
                }
            }
        }
    }
}
