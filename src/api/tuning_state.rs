use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::core::{Checkpoint, WeatherCondition, WeatherPatch};

/// Discrete-or-continuous time selector for parameter reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeQuery {
    /// Evaluate exactly at a checkpoint's canonical time; no interpolation.
    At(Checkpoint),
    /// Evaluate at a continuous time of day, blending between the two
    /// surrounding checkpoints.
    Continuous(f64),
}

/// Stored overrides for one condition: one sparse patch per checkpoint.
///
/// Never sparse itself — a checkpoint without edits holds an empty patch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CheckpointOverrides {
    #[serde(default)]
    pub dawn: WeatherPatch,
    #[serde(default)]
    pub noon: WeatherPatch,
    #[serde(default)]
    pub dusk: WeatherPatch,
    #[serde(default)]
    pub midnight: WeatherPatch,
}

impl CheckpointOverrides {
    #[must_use]
    pub fn get(&self, checkpoint: Checkpoint) -> &WeatherPatch {
        match checkpoint {
            Checkpoint::Dawn => &self.dawn,
            Checkpoint::Noon => &self.noon,
            Checkpoint::Dusk => &self.dusk,
            Checkpoint::Midnight => &self.midnight,
        }
    }

    #[must_use]
    pub fn get_mut(&mut self, checkpoint: Checkpoint) -> &mut WeatherPatch {
        match checkpoint {
            Checkpoint::Dawn => &mut self.dawn,
            Checkpoint::Noon => &mut self.noon,
            Checkpoint::Dusk => &mut self.dusk,
            Checkpoint::Midnight => &mut self.midnight,
        }
    }

    pub fn set(&mut self, checkpoint: Checkpoint, patch: WeatherPatch) {
        *self.get_mut(checkpoint) = patch;
    }

    /// True when no checkpoint carries an override.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dawn.is_empty()
            && self.noon.is_empty()
            && self.dusk.is_empty()
            && self.midnight.is_empty()
    }
}

/// Per-checkpoint review flags for one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReviewStatus {
    #[serde(default)]
    pub dawn: bool,
    #[serde(default)]
    pub noon: bool,
    #[serde(default)]
    pub dusk: bool,
    #[serde(default)]
    pub midnight: bool,
}

impl ReviewStatus {
    #[must_use]
    pub fn get(self, checkpoint: Checkpoint) -> bool {
        match checkpoint {
            Checkpoint::Dawn => self.dawn,
            Checkpoint::Noon => self.noon,
            Checkpoint::Dusk => self.dusk,
            Checkpoint::Midnight => self.midnight,
        }
    }

    pub fn set(&mut self, checkpoint: Checkpoint, reviewed: bool) {
        match checkpoint {
            Checkpoint::Dawn => self.dawn = reviewed,
            Checkpoint::Noon => self.noon = reviewed,
            Checkpoint::Dusk => self.dusk = reviewed,
            Checkpoint::Midnight => self.midnight = reviewed,
        }
    }

    #[must_use]
    pub fn all_reviewed(self) -> bool {
        self.dawn && self.noon && self.dusk && self.midnight
    }
}

/// Whole-engine tuning snapshot.
///
/// Owned exclusively by [`crate::api::TuningEngine`]; hosts receive clones
/// and hand them to a persistence collaborator. `IndexMap`/`IndexSet`
/// preserve insertion order so snapshots and exports stay stable across
/// save/load cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningState {
    /// Global continuous time cursor in `[0, 1)`. Shared by every
    /// condition; never stored per-condition.
    #[serde(default = "default_time_of_day")]
    pub time_of_day: f64,
    /// Checkpoint currently targeted by whole-set writes.
    #[serde(default = "default_active_checkpoint")]
    pub active_checkpoint: Checkpoint,
    /// Per-condition overrides; conditions never tuned have no entry.
    #[serde(default)]
    pub overrides: IndexMap<WeatherCondition, CheckpointOverrides>,
    /// Per-condition review progress.
    #[serde(default)]
    pub review: IndexMap<WeatherCondition, ReviewStatus>,
    /// Conditions a human has approved after reviewing all checkpoints.
    #[serde(default)]
    pub signed_off: IndexSet<WeatherCondition>,
}

impl Default for TuningState {
    fn default() -> Self {
        Self {
            time_of_day: default_time_of_day(),
            active_checkpoint: default_active_checkpoint(),
            overrides: IndexMap::new(),
            review: IndexMap::new(),
            signed_off: IndexSet::new(),
        }
    }
}

fn default_time_of_day() -> f64 {
    0.5
}

fn default_active_checkpoint() -> Checkpoint {
    Checkpoint::Noon
}
