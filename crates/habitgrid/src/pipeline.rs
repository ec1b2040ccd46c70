//! Main Habitgrid struct and public API.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cell::{classify, CellClass};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::pivot::{transpose, HabitTable};

/// Configuration for the pivot pipeline.
#[derive(Debug, Clone, Default)]
pub struct HabitgridConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
}

/// Result of pivoting a source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PivotResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The pivoted, display-ready table.
    pub table: HabitTable,
    /// Classification tallies over the pivoted table.
    pub summary: PivotSummary,
}

/// Summary statistics for a pivoted table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PivotSummary {
    /// Number of habit rows.
    pub habit_count: usize,
    /// Number of date columns.
    pub date_count: usize,
    /// Tallies over the whole table.
    pub totals: CellCounts,
    /// Tallies per habit, in row order. Duplicate habit names aggregate.
    pub by_habit: IndexMap<String, CellCounts>,
}

/// Counts of cell classifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    pub yes: usize,
    pub no: usize,
    pub unknown: usize,
    pub metric: usize,
    pub text: usize,
}

impl CellCounts {
    fn record(&mut self, class: &CellClass) {
        match class {
            CellClass::Yes => self.yes += 1,
            CellClass::No => self.no += 1,
            CellClass::Unknown => self.unknown += 1,
            CellClass::Metric { .. } => self.metric += 1,
            CellClass::Text(_) => self.text += 1,
        }
    }
}

/// The pivot pipeline: parse, transpose, summarize.
pub struct Habitgrid {
    parser: Parser,
}

impl Habitgrid {
    /// Create a new pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(HabitgridConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: HabitgridConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
        }
    }

    /// Pivot a source file into a habit-major table with metadata and
    /// summary. Parse failures halt the pipeline before transposition; an
    /// empty file is not a failure and pivots to an empty table.
    pub fn pivot_file(&self, path: impl AsRef<Path>) -> Result<PivotResult> {
        let (daily, source) = self.parser.parse_file(path)?;
        let table = transpose(&daily);
        let summary = compute_summary(&table);

        Ok(PivotResult {
            source,
            table,
            summary,
        })
    }

    /// The raw-text pipeline: CSV text in, pivoted table out.
    pub fn pivot_text(&self, text: &str) -> Result<HabitTable> {
        let daily = self.parser.parse_text(text)?;
        Ok(transpose(&daily))
    }
}

impl Default for Habitgrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Tally cell classifications across a pivoted table.
pub fn compute_summary(table: &HabitTable) -> PivotSummary {
    let mut totals = CellCounts::default();
    let mut by_habit: IndexMap<String, CellCounts> = IndexMap::new();

    for row in &table.rows {
        let habit = row.first().cloned().unwrap_or_default();
        let counts = by_habit.entry(habit.clone()).or_default();
        for cell in row.iter().skip(1) {
            let class = classify(cell, &habit);
            counts.record(&class);
            totals.record(&class);
        }
    }

    PivotSummary {
        habit_count: table.habit_count(),
        date_count: table.date_count(),
        totals,
        by_habit,
    }
}
