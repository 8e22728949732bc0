//! Persistence seam between the engine and a host's blob store.
//!
//! The engine never performs I/O itself. A host hands it whatever its
//! store produced, and the engine treats a missing or unreadable snapshot
//! as "start from empty" rather than an error.

use super::engine::TuningEngine;
use super::tuning_state::TuningState;

/// Opaque key-value blob store collaborator.
///
/// `load` returns `None` on first run or on parse failure; `save` receives
/// a JSON-serializable snapshot and is free to write it asynchronously
/// after this call returns.
pub trait StateStore {
    fn load(&self) -> Option<TuningState>;
    fn save(&mut self, state: &TuningState);
}

/// In-memory store for tests and ephemeral hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    snapshot: Option<TuningState>,
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Option<TuningState> {
        self.snapshot.clone()
    }

    fn save(&mut self, state: &TuningState) {
        self.snapshot = Some(state.clone());
    }
}

impl TuningEngine {
    /// Boots from whatever the store holds.
    #[must_use]
    pub fn from_store(store: &dyn StateStore) -> Self {
        Self::from_snapshot(store.load())
    }

    /// Hands the current snapshot to the store.
    pub fn persist_to(&self, store: &mut dyn StateStore) {
        store.save(self.snapshot());
    }
}
