//! Presentation formatting for classified cells.

use serde::{Deserialize, Serialize};

use super::classify::{CellClass, MetricKind};

/// Glyph shown for boolean-habit states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlyphKind {
    /// Habit done.
    Check,
    /// Habit not done.
    Cross,
    /// No data. A neutral marker, rendered distinctly from both Check and
    /// Cross rather than left blank.
    Dot,
}

/// A cell ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayValue {
    /// Boolean-habit glyph.
    Glyph(GlyphKind),
    /// Scaled metric text, with an optional unit label.
    Number { text: String, unit: Option<String> },
    /// Verbatim passthrough. Renderers may truncate for width; the value
    /// itself stays whole.
    Text(String),
}

impl DisplayValue {
    /// True for the de-emphasized zero metric case.
    pub fn is_zero(&self) -> bool {
        matches!(self, DisplayValue::Number { text, .. } if text == "0")
    }
}

/// Render a classification into its presentation value.
///
/// Metric values are recorded at 1000x their display unit; `scaled` is
/// `value / 1000`, fixed to the kind's decimals. A scaled value of exactly
/// zero renders as `"0"` with no decimal expansion — the unit label is still
/// reported, and de-emphasis is left to the renderer.
pub fn format_cell(class: &CellClass) -> DisplayValue {
    match class {
        CellClass::Yes => DisplayValue::Glyph(GlyphKind::Check),
        CellClass::No => DisplayValue::Glyph(GlyphKind::Cross),
        CellClass::Unknown => DisplayValue::Glyph(GlyphKind::Dot),
        CellClass::Metric { kind, value } => {
            let scaled = value / 1000.0;
            let (decimals, unit) = match kind {
                MetricKind::SleepGoal => (2, Some("hours")),
                MetricKind::Steps => (1, None),
                MetricKind::SleepScore => (0, None),
            };
            let text = if scaled == 0.0 {
                "0".to_string()
            } else {
                format!("{:.*}", decimals, scaled)
            };
            DisplayValue::Number {
                text,
                unit: unit.map(str::to_string),
            }
        }
        CellClass::Text(s) => DisplayValue::Text(s.clone()),
    }
}
