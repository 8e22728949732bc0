//! Versioned JSON contract for persisted tuning snapshots.
//!
//! Encoding is strict; decoding is deliberately lenient. A snapshot that
//! survived a partial storage corruption or came out of an old export
//! still loads: unknown condition tags are dropped, malformed patches
//! become empty ones, and missing keys take their defaults. Losing a
//! stored edit is recoverable; refusing to start is not.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Checkpoint, WeatherCondition, WeatherPatch, normalize_time_of_day};
use crate::error::{TuningError, TuningResult};

use super::tuning_state::{CheckpointOverrides, ReviewStatus, TuningState};

pub const TUNING_STATE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningStateJsonContractV1 {
    pub schema_version: u32,
    pub state: TuningState,
}

impl TuningState {
    /// Serializes the snapshot inside the v1 contract envelope.
    pub fn to_json_contract_v1_pretty(&self) -> TuningResult<String> {
        let payload = TuningStateJsonContractV1 {
            schema_version: TUNING_STATE_JSON_SCHEMA_V1,
            state: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TuningError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a v1 contract payload.
    ///
    /// The outer JSON must parse and a present `schema_version` must be
    /// supported; everything inside the state decodes leniently.
    pub fn from_json_compat_str(input: &str) -> TuningResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| TuningError::InvalidData(format!("failed to parse snapshot json: {e}")))?;

        let state_value = match value.get("schema_version") {
            Some(version) => {
                let version = version.as_u64().unwrap_or(0);
                if version != u64::from(TUNING_STATE_JSON_SCHEMA_V1) {
                    return Err(TuningError::InvalidData(format!(
                        "unsupported snapshot schema version: {version}"
                    )));
                }
                value.get("state").cloned().unwrap_or(Value::Null)
            }
            None => value,
        };

        Ok(Self::from_wire(&state_value))
    }

    /// Lenient field-by-field decode of a snapshot object.
    fn from_wire(value: &Value) -> Self {
        let mut state = Self::default();
        let Value::Object(map) = value else {
            return state;
        };

        if let Some(time_of_day) = map.get("time_of_day").and_then(Value::as_f64) {
            state.time_of_day = normalize_time_of_day(time_of_day);
        }
        if let Some(checkpoint) = map
            .get("active_checkpoint")
            .and_then(|raw| serde_json::from_value::<Checkpoint>(raw.clone()).ok())
        {
            state.active_checkpoint = checkpoint;
        }

        if let Some(Value::Object(entries)) = map.get("overrides") {
            for (tag, entry) in entries {
                let Ok(condition) = tag.parse::<WeatherCondition>() else {
                    continue;
                };
                state.overrides.insert(condition, decode_overrides(entry));
            }
        }

        if let Some(Value::Object(entries)) = map.get("review") {
            for (tag, entry) in entries {
                let Ok(condition) = tag.parse::<WeatherCondition>() else {
                    continue;
                };
                let review = serde_json::from_value::<ReviewStatus>(entry.clone()).unwrap_or_default();
                state.review.insert(condition, review);
            }
        }

        if let Some(Value::Array(tags)) = map.get("signed_off") {
            for tag in tags {
                if let Some(condition) = tag.as_str().and_then(|s| s.parse::<WeatherCondition>().ok())
                {
                    state.signed_off.insert(condition);
                }
            }
        }

        state
    }
}

/// Decodes one condition's overrides; a checkpoint whose patch fails to
/// parse falls back to no edits.
fn decode_overrides(value: &Value) -> CheckpointOverrides {
    let mut overrides = CheckpointOverrides::default();
    let Value::Object(map) = value else {
        return overrides;
    };
    for checkpoint in Checkpoint::ALL {
        if let Some(raw) = map.get(checkpoint.tag()) {
            let patch = serde_json::from_value::<WeatherPatch>(raw.clone()).unwrap_or_default();
            overrides.set(checkpoint, patch);
        }
    }
    overrides
}
