//! Fixed time-of-day anchors and the segment locator built on them.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Named time-of-day anchor used as a tuning keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Checkpoint {
    Dawn,
    Noon,
    Dusk,
    Midnight,
}

impl Checkpoint {
    /// Every checkpoint, in presentation order.
    pub const ALL: [Self; 4] = [Self::Dawn, Self::Noon, Self::Dusk, Self::Midnight];

    /// Canonical normalized time of day for this anchor, in `[0, 1)`.
    #[must_use]
    pub fn time_of_day(self) -> f64 {
        match self {
            Self::Dawn => 0.25,
            Self::Noon => 0.5,
            Self::Dusk => 0.75,
            Self::Midnight => 0.0,
        }
    }

    /// Stable tag used in persisted snapshots and exports.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Dawn => "dawn",
            Self::Noon => "noon",
            Self::Dusk => "dusk",
            Self::Midnight => "midnight",
        }
    }

    /// Human-facing label for editor surfaces.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dawn => "Dawn",
            Self::Noon => "Noon",
            Self::Dusk => "Dusk",
            Self::Midnight => "Midnight",
        }
    }

    /// All checkpoints sorted ascending by canonical time.
    #[must_use]
    pub fn ordered_by_time() -> SmallVec<[Self; 4]> {
        let mut ordered: SmallVec<[Self; 4]> = SmallVec::from_slice(&Self::ALL);
        ordered.sort_by_key(|checkpoint| OrderedFloat(checkpoint.time_of_day()));
        ordered
    }
}

/// Segment of the day between two adjacent checkpoints, with the query's
/// normalized position inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckpointSpan {
    pub before: Checkpoint,
    pub after: Checkpoint,
    /// Position inside the segment, in `[0, 1]`.
    pub t: f64,
}

/// Wraps an arbitrary time value into `[0, 1)`.
///
/// Non-finite input collapses to 0.0 so downstream arithmetic never sees a
/// NaN cursor.
#[must_use]
pub fn normalize_time_of_day(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid of a tiny negative can round up to exactly 1.0.
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Finds the two checkpoints surrounding `time_of_day` and the blend
/// factor between them.
///
/// The checkpoint set is circular: the segment after the latest anchor
/// wraps past midnight into the earliest one. A zero-width segment yields
/// `t = 0` instead of dividing by zero, and float edge cases that slip
/// through every segment test fall back to the wrap segment at `t = 0`.
#[must_use]
pub fn locate(time_of_day: f64) -> CheckpointSpan {
    let query = normalize_time_of_day(time_of_day);
    let ordered = Checkpoint::ordered_by_time();

    for (index, &before) in ordered.iter().enumerate() {
        let after = ordered[(index + 1) % ordered.len()];
        let start = before.time_of_day();
        let mut end = after.time_of_day();
        if end <= start {
            // Final segment continues past 1.0 into the first anchor.
            end += 1.0;
        }

        let mut shifted = query;
        if shifted < start {
            shifted += 1.0;
        }

        if shifted >= start && shifted < end {
            let width = end - start;
            let t = if width > 0.0 { (shifted - start) / width } else { 0.0 };
            return CheckpointSpan { before, after, t };
        }
    }

    // Unreachable for well-formed anchors; keeps the domain total anyway.
    let last = ordered[ordered.len() - 1];
    let first = ordered[0];
    CheckpointSpan {
        before: last,
        after: first,
        t: 0.0,
    }
}
