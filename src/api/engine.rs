use tracing::debug;

use crate::core::{
    CelestialField, Checkpoint, ParamField, ParamValue, WeatherCondition, WeatherParams,
    WeatherPatch, base_params_at, diff_params, interpolate_patches, locate, merge_params,
    normalize_time_of_day,
};
use crate::error::{TuningError, TuningResult};

use super::tuning_state::{ReviewStatus, TimeQuery, TuningState};

/// Fields treated as global settings rather than per-condition overrides;
/// the diff skips them so the time cursor never leaks into stored patches.
const GLOBAL_FIELDS: [ParamField; 1] = [ParamField::Celestial(CelestialField::TimeOfDay)];

/// Orchestrates checkpoint overrides, the global time cursor, and the
/// review/sign-off workflow.
///
/// All mutation happens through `&mut self` on one owned [`TuningState`];
/// reads hand out derived values or snapshot clones, never aliased
/// mutable state.
#[derive(Debug, Clone, Default)]
pub struct TuningEngine {
    state: TuningState,
}

impl TuningEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores an engine from a persisted snapshot.
    ///
    /// `None` (first run, parse failure upstream) starts from the empty
    /// state; an out-of-range cursor is wrapped back into `[0, 1)`.
    #[must_use]
    pub fn from_snapshot(snapshot: Option<TuningState>) -> Self {
        let mut state = snapshot.unwrap_or_default();
        state.time_of_day = normalize_time_of_day(state.time_of_day);
        Self { state }
    }

    /// Read-only view of the current state for persistence collaborators.
    #[must_use]
    pub fn snapshot(&self) -> &TuningState {
        &self.state
    }

    #[must_use]
    pub fn time_of_day(&self) -> f64 {
        self.state.time_of_day
    }

    #[must_use]
    pub fn active_checkpoint(&self) -> Checkpoint {
        self.state.active_checkpoint
    }

    /// Moves the continuous time cursor (scrubbing).
    ///
    /// Passing through a checkpoint's canonical time this way never marks
    /// it reviewed; only [`Self::select_checkpoint`] does.
    pub fn set_time_of_day(&mut self, time_of_day: f64) {
        self.state.time_of_day = normalize_time_of_day(time_of_day);
    }

    /// Explicitly navigates to `checkpoint` while editing `condition`.
    ///
    /// Snaps the cursor to the canonical time, makes the checkpoint the
    /// target of subsequent whole-set writes, and marks it reviewed for
    /// `condition`.
    pub fn select_checkpoint(&mut self, condition: WeatherCondition, checkpoint: Checkpoint) {
        self.state.time_of_day = checkpoint.time_of_day();
        self.state.active_checkpoint = checkpoint;
        self.state
            .review
            .entry(condition)
            .or_default()
            .set(checkpoint, true);
        debug!(condition = condition.tag(), checkpoint = checkpoint.tag(), "checkpoint selected");
    }

    /// Stored override for `condition` at `checkpoint`, `None` when the
    /// condition was never tuned or the checkpoint has no edits.
    #[must_use]
    pub fn override_at(&self, condition: WeatherCondition, checkpoint: Checkpoint) -> Option<&WeatherPatch> {
        self.state
            .overrides
            .get(&condition)
            .map(|overrides| overrides.get(checkpoint))
            .filter(|patch| !patch.is_empty())
    }

    /// Full parameter set for `condition` at the queried time.
    ///
    /// Discrete queries merge the stored override onto the base evaluated
    /// at the checkpoint's canonical time. Continuous queries locate the
    /// surrounding checkpoints, interpolate their overrides (with the base
    /// at each checkpoint as fallback endpoints), and merge the blend onto
    /// the base at the queried time. Either way the global cursor value is
    /// written into the result's time-of-day field last.
    #[must_use]
    pub fn full_params(&self, condition: WeatherCondition, query: TimeQuery) -> WeatherParams {
        let mut params = match query {
            TimeQuery::At(checkpoint) => {
                let base = base_params_at(condition, checkpoint.time_of_day());
                merge_params(base, self.override_at(condition, checkpoint))
            }
            TimeQuery::Continuous(time_of_day) => {
                let time_of_day = normalize_time_of_day(time_of_day);
                let span = locate(time_of_day);
                let base = base_params_at(condition, time_of_day);
                let base_before = base_params_at(condition, span.before.time_of_day());
                let base_after = base_params_at(condition, span.after.time_of_day());
                let blended = interpolate_patches(
                    self.override_at(condition, span.before),
                    self.override_at(condition, span.after),
                    Some(&base_before),
                    Some(&base_after),
                    span.t,
                );
                merge_params(base, blended.as_ref())
            }
        };
        params.celestial.time_of_day = self.state.time_of_day;
        params
    }

    /// Captures `current` as the override at the active checkpoint.
    ///
    /// The stored patch is the diff of `current` against the base at that
    /// checkpoint, replacing any prior override there wholesale. A diff
    /// that comes back empty leaves a never-tuned condition untouched.
    pub fn update_params(&mut self, condition: WeatherCondition, current: &WeatherParams) {
        let checkpoint = self.state.active_checkpoint;
        let base = base_params_at(condition, checkpoint.time_of_day());
        let patch = diff_params(*current, base, &GLOBAL_FIELDS);
        if patch.is_empty() && !self.state.overrides.contains_key(&condition) {
            return;
        }
        self.state
            .overrides
            .entry(condition)
            .or_default()
            .set(checkpoint, patch);
        debug!(condition = condition.tag(), checkpoint = checkpoint.tag(), "override replaced");
    }

    /// Writes one field value across the `conditions` × `checkpoints`
    /// product.
    ///
    /// Each slot keeps its other overridden fields untouched: this is a
    /// field-level merge into the stored patch, not a whole-diff
    /// replacement. Slots whose effective value already equals `value` are
    /// skipped, so untuned conditions stay untuned when the value matches
    /// their baseline.
    pub fn bulk_update(
        &mut self,
        conditions: &[WeatherCondition],
        checkpoints: &[Checkpoint],
        field: ParamField,
        value: ParamValue,
    ) -> TuningResult<()> {
        if value.kind() != field.kind() {
            return Err(TuningError::FieldKind { field });
        }
        for &condition in conditions {
            for &checkpoint in checkpoints {
                let base = base_params_at(condition, checkpoint.time_of_day());
                let effective = merge_params(base, self.override_at(condition, checkpoint));
                if effective.field(field) == value {
                    continue;
                }
                self.state
                    .overrides
                    .entry(condition)
                    .or_default()
                    .get_mut(checkpoint)
                    .set_field(field, value)?;
            }
        }
        debug!(field = ?field, "bulk update applied");
        Ok(())
    }

    /// True when the condition carries at least one non-empty override.
    #[must_use]
    pub fn has_overrides(&self, condition: WeatherCondition) -> bool {
        self.state
            .overrides
            .get(&condition)
            .is_some_and(|overrides| !overrides.is_empty())
    }

    /// Review progress for `condition`; conditions never reviewed report
    /// all checkpoints pending.
    #[must_use]
    pub fn review_status(&self, condition: WeatherCondition) -> ReviewStatus {
        self.state.review.get(&condition).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_signed_off(&self, condition: WeatherCondition) -> bool {
        self.state.signed_off.contains(&condition)
    }

    /// Approves `condition` after review.
    ///
    /// Rejected while any of the four checkpoints is still pending; state
    /// is left untouched in that case.
    pub fn sign_off(&mut self, condition: WeatherCondition) -> TuningResult<()> {
        if !self.review_status(condition).all_reviewed() {
            return Err(TuningError::ReviewIncomplete { condition });
        }
        self.state.signed_off.insert(condition);
        debug!(condition = condition.tag(), "condition signed off");
        Ok(())
    }

    /// Withdraws a previous approval; review flags stay set.
    pub fn revoke_sign_off(&mut self, condition: WeatherCondition) {
        self.state.signed_off.shift_remove(&condition);
    }

    /// Returns `condition` to the untouched state: overrides, review
    /// flags, and sign-off are cleared together.
    pub fn reset_condition(&mut self, condition: WeatherCondition) {
        self.state.overrides.shift_remove(&condition);
        self.state.review.shift_remove(&condition);
        self.state.signed_off.shift_remove(&condition);
        debug!(condition = condition.tag(), "condition reset");
    }
}
