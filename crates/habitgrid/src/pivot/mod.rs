//! Date-major to habit-major pivoting.

mod engine;
mod grid;

pub use engine::{transpose, HABITS_LABEL};
pub use grid::HabitTable;
