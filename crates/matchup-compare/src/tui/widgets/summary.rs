// Summary widget: per-category mean and stdev over both teams' values.
//
// One row per active category, computed from the union of the two
// selected teams' valid weekly values.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::catalog::CategorySpec;
use crate::tui::ViewState;

/// Render the combined summary into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from("Mean"),
        Cell::from("StDev"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(0);

    let rows: Vec<Row> = if state.result.summary.is_empty() {
        vec![Row::new(vec![Cell::from("No comparison yet")])]
    } else {
        state
            .result
            .summary
            .iter()
            .map(|(label, entry)| {
                let digits = digits_for(&state.active_categories, entry.category_id);
                Row::new(vec![
                    Cell::from(label.clone()),
                    Cell::from(format_stat(entry.mean, digits)),
                    Cell::from(format_stat(entry.stdev, digits)),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Min(12),
        Constraint::Length(10),
        Constraint::Length(10),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Summary (both teams)"),
    );
    frame.render_widget(table, area);
}

/// Format a summary statistic, "-" when undefined.
pub fn format_stat(value: Option<f64>, digits: u8) -> String {
    match value {
        Some(v) => format!("{:.*}", digits as usize, v),
        None => "-".to_string(),
    }
}

/// Decimal precision for a category id, defaulting to 1 for unknown ids.
fn digits_for(active: &[CategorySpec], category_id: i64) -> u8 {
    active
        .iter()
        .find(|spec| spec.id == category_id)
        .map(|spec| spec.digits)
        .unwrap_or(1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::compare::SummaryEntry;

    #[test]
    fn format_stat_rounds_to_digits() {
        assert_eq!(format_stat(Some(91.25), 1), "91.2");
        assert_eq!(format_stat(Some(91.25), 2), "91.25");
    }

    #[test]
    fn format_stat_missing_is_dash() {
        assert_eq!(format_stat(None, 1), "-");
    }

    #[test]
    fn digits_for_known_category() {
        let active: Vec<CategorySpec> =
            catalog::select_active(&[0, 20]).into_iter().copied().collect();
        assert_eq!(digits_for(&active, 0), 1);
        assert_eq!(digits_for(&active, 20), 4);
    }

    #[test]
    fn digits_for_unknown_category() {
        let active: Vec<CategorySpec> = Vec::new();
        assert_eq!(digits_for(&active, 42), 1);
    }

    #[test]
    fn render_does_not_panic_empty() {
        let backend = ratatui::backend::TestBackend::new(60, 15);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_entries() {
        let backend = ratatui::backend::TestBackend::new(60, 15);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.active_categories = catalog::select_active(&[0]).into_iter().copied().collect();
        state.result.summary = vec![(
            "PTS".to_string(),
            SummaryEntry {
                category_id: 0,
                mean: Some(91.25),
                stdev: Some(8.54),
            },
        )];
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
