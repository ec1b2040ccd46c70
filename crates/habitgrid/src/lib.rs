//! Habitgrid: pivot habit-tracker CSV exports into display-ready tables.
//!
//! A habit-tracking service exports one row per date and one column per
//! habit. Habitgrid transposes that into one row per habit and one column
//! per date, classifies each cell (done / not done / no data / numeric
//! metric / free text), and formats or sanitizes the result for display and
//! re-export.
//!
//! # Core principles
//!
//! - **Pure core**: parsing, transposition, classification and formatting
//!   are synchronous functions over immutable in-memory grids.
//! - **Raw fidelity**: exports keep original cell strings; only the internal
//!   "unknown" sentinel is blanked.
//! - **Graceful degradation**: ragged rows pad, unparseable metrics fall
//!   through to text, empty input is "no data" rather than an error.
//!
//! # Example
//!
//! ```no_run
//! use habitgrid::Habitgrid;
//!
//! let result = Habitgrid::new().pivot_file("checkmarks.csv").unwrap();
//!
//! println!("Habits: {}", result.table.habit_count());
//! println!("Dates:  {}", result.table.date_count());
//! ```

pub mod cell;
pub mod error;
pub mod export;
pub mod input;
pub mod pivot;

mod pipeline;

pub use cell::{classify, date_header, format_cell, CellClass, DateHeader, DisplayValue, GlyphKind, MetricKind};
pub use error::{HabitgridError, Result};
pub use export::{export_path, sanitize, to_csv};
pub use input::{DailyTable, Parser, ParserConfig, SourceMetadata};
pub use pipeline::{compute_summary, CellCounts, Habitgrid, HabitgridConfig, PivotResult, PivotSummary};
pub use pivot::{transpose, HabitTable, HABITS_LABEL};
