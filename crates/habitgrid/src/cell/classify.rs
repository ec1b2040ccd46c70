//! Cell value classification.

use serde::{Deserialize, Serialize};

/// Which real-world quantity a numeric cell represents, inferred from its
/// row's habit label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    /// Sleep duration goal, recorded in thousandths of an hour.
    SleepGoal,
    /// Sleep quality score, recorded in thousandths of a point.
    SleepScore,
    /// Step count, recorded in raw steps (displayed per thousand).
    Steps,
}

impl MetricKind {
    /// Match a habit label to a metric kind by case-insensitive substring.
    ///
    /// Check order is sleep goal, steps, sleep score; a label matching
    /// several keywords resolves to the first.
    pub fn from_habit(habit: &str) -> Option<Self> {
        let label = habit.to_lowercase();
        if label.contains("sleep goal") {
            Some(MetricKind::SleepGoal)
        } else if label.contains("steps") {
            Some(MetricKind::Steps)
        } else if label.contains("sleep score") {
            Some(MetricKind::SleepScore)
        } else {
            None
        }
    }
}

/// The semantic category of a single cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellClass {
    /// Habit completed, whether logged by hand or by a device.
    Yes,
    /// Habit explicitly not done.
    No,
    /// No data recorded for this date.
    Unknown,
    /// A numeric metric value, still at its raw (unscaled) magnitude.
    Metric { kind: MetricKind, value: f64 },
    /// Anything else, passed through verbatim.
    Text(String),
}

/// Classify a raw cell string given its owning row's habit label.
///
/// Pure and total: any unrecognized input falls through to [`CellClass::Text`].
/// Comparison happens on the trimmed, ASCII-uppercased value; `Text` keeps
/// the original untrimmed string. Rules apply in order, first match wins.
pub fn classify(raw: &str, habit: &str) -> CellClass {
    let trimmed = raw.trim();
    match trimmed.to_ascii_uppercase().as_str() {
        "YES_MANUAL" | "YES_AUTO" => return CellClass::Yes,
        "NO" => return CellClass::No,
        "UNKNOWN" | "" => return CellClass::Unknown,
        _ => {}
    }

    if let Some(kind) = MetricKind::from_habit(habit) {
        if let Ok(value) = trimmed.parse::<f64>() {
            if value.is_finite() {
                return CellClass::Metric { kind, value };
            }
        }
    }

    CellClass::Text(raw.to_string())
}
