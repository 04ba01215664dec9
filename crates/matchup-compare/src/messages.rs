// Message types exchanged between the app task and the terminal UI.

use crate::catalog::CategorySpec;
use crate::compare::ComparisonResult;
use crate::data::Team;

/// Commands flowing from the input handler to the app task.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Assign a team to the first comparison slot.
    SelectTeamOne(i64),
    /// Assign a team to the second comparison slot.
    SelectTeamTwo(i64),
    /// Reset both slots to the placeholder.
    ClearSelection,
    /// Shut the application down.
    Quit,
}

/// Updates flowing from the app task to the terminal UI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// A freshly computed comparison, sent on startup and after every
    /// accepted selection change.
    Comparison(ComparisonSnapshot),
    /// Short operator-facing text for the status bar, e.g. a rejected
    /// selection.
    Notice(String),
}

/// Everything the UI needs to render the comparison state.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSnapshot {
    pub league_name: String,
    pub current_week: u32,
    /// Teams in league order; the selector lists them as-is.
    pub teams: Vec<Team>,
    /// Selected team ids, slot one then slot two; 0 marks an empty slot.
    pub selection: [i64; 2],
    /// Enabled categories with minutes already excluded, in catalog order.
    pub active_categories: Vec<CategorySpec>,
    pub result: ComparisonResult,
}
