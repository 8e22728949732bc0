//! skytune: checkpoint-keyed weather parameter tuning engine.
//!
//! This crate holds the interpolation, diff/merge, and state-orchestration
//! core behind a weather-effect tuning workflow. Editor widgets, preview
//! canvases, and storage transports stay outside; hosts talk to
//! [`api::TuningEngine`] and receive fully-populated parameter sets.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{TimeQuery, TuningEngine, TuningState};
pub use error::{TuningError, TuningResult};
