pub mod engine;
pub mod export;
pub mod json_contract;
pub mod store;
pub mod tuning_state;

pub use engine::TuningEngine;
pub use export::{export_overrides_json, export_overrides_json_pretty, export_overrides_source};
pub use json_contract::{TUNING_STATE_JSON_SCHEMA_V1, TuningStateJsonContractV1};
pub use store::{MemoryStateStore, StateStore};
pub use tuning_state::{CheckpointOverrides, ReviewStatus, TimeQuery, TuningState};
