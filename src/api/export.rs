//! Export rendering for stored overrides.
//!
//! Pure formatting over the diff engine's data shapes: walk every
//! condition/checkpoint pair holding a non-empty patch and render it as a
//! JSON tree or as Rust source literal text. Numbers are clamped to four
//! decimal places so repeated exports of the same state diff cleanly.

use serde_json::{Map, Value};

use crate::core::{Checkpoint, WeatherPatch};
use crate::error::{TuningError, TuningResult};

use super::tuning_state::TuningState;

/// Fixed export precision, as a power-of-ten divisor.
const PRECISION: f64 = 10_000.0;

fn round_export(value: f64) -> f64 {
    (value * PRECISION).round() / PRECISION
}

/// Rounds every number in a JSON tree to export precision, in place.
fn round_tree(value: &mut Value) {
    match value {
        Value::Number(number) => {
            if let Some(float) = number.as_f64() {
                if let Some(rounded) = serde_json::Number::from_f64(round_export(float)) {
                    *number = rounded;
                }
            }
        }
        Value::Object(map) => {
            for (_, child) in map.iter_mut() {
                round_tree(child);
            }
        }
        Value::Array(items) => {
            for child in items.iter_mut() {
                round_tree(child);
            }
        }
        _ => {}
    }
}

fn patch_to_value(patch: &WeatherPatch) -> Value {
    let mut value = serde_json::to_value(patch).unwrap_or(Value::Null);
    round_tree(&mut value);
    value
}

/// Renders every non-empty override as a JSON tree keyed by condition tag,
/// then checkpoint tag.
#[must_use]
pub fn export_overrides_json(state: &TuningState) -> Value {
    let mut conditions = Map::new();
    for (condition, overrides) in &state.overrides {
        let mut checkpoints = Map::new();
        for checkpoint in Checkpoint::ALL {
            let patch = overrides.get(checkpoint);
            if patch.is_empty() {
                continue;
            }
            checkpoints.insert(checkpoint.tag().to_owned(), patch_to_value(patch));
        }
        if checkpoints.is_empty() {
            continue;
        }
        conditions.insert(condition.tag().to_owned(), Value::Object(checkpoints));
    }
    Value::Object(conditions)
}

/// Pretty-printed form of [`export_overrides_json`].
pub fn export_overrides_json_pretty(state: &TuningState) -> TuningResult<String> {
    serde_json::to_string_pretty(&export_overrides_json(state))
        .map_err(|e| TuningError::InvalidData(format!("failed to serialize export: {e}")))
}

fn group_type_name(group: &str) -> &'static str {
    match group {
        "layers" => "LayerPatch",
        "celestial" => "CelestialPatch",
        "cloud" => "CloudPatch",
        "rain" => "RainPatch",
        "lightning" => "LightningPatch",
        "snow" => "SnowPatch",
        _ => "WeatherPatch",
    }
}

fn render_field_literal(out: &mut String, name: &str, value: &Value, indent: &str) {
    let rendered = match value {
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match number.as_f64() {
            Some(float) => format!("{:.4}", round_export(float)),
            None => number.to_string(),
        },
        other => other.to_string(),
    };
    out.push_str(&format!("{indent}{name}: Some({rendered}),\n"));
}

/// Renders every non-empty override as Rust source literal text, ready to
/// paste into a preset table.
#[must_use]
pub fn export_overrides_source(state: &TuningState) -> String {
    let mut out = String::new();
    for (condition, overrides) in &state.overrides {
        for checkpoint in Checkpoint::ALL {
            let patch = overrides.get(checkpoint);
            if patch.is_empty() {
                continue;
            }
            out.push_str(&format!("// {} @ {}\n", condition.tag(), checkpoint.tag()));
            out.push_str("WeatherPatch {\n");
            if let Value::Object(groups) = patch_to_value(patch) {
                for (group, fields) in &groups {
                    let Value::Object(fields) = fields else {
                        continue;
                    };
                    out.push_str(&format!(
                        "    {group}: Some({} {{\n",
                        group_type_name(group)
                    ));
                    for (name, value) in fields {
                        render_field_literal(&mut out, name, value, "        ");
                    }
                    out.push_str("        ..Default::default()\n    }),\n");
                }
            }
            out.push_str("    ..Default::default()\n},\n\n");
        }
    }
    out
}
