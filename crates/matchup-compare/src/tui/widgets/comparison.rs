// Comparison table widget: two rows per active category, one per team.
//
// Columns: category, team, one cell per completed week, then the
// aggregates (mean, stdev, min, max) and the category win count.
// Missing weekly values render as "-". Scrollable via comparison_scroll.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::catalog::CategorySpec;
use crate::compare::ComparisonRow;
use crate::tui::ViewState;

/// Render the comparison table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let week_count = state
        .result
        .rows
        .first()
        .map(|row| row.weeks.len())
        .unwrap_or(0);

    let mut header_cells = vec![Cell::from("Category"), Cell::from("Team")];
    for week in 1..=week_count {
        header_cells.push(Cell::from(format!("W{}", week)));
    }
    header_cells.extend([
        Cell::from("Mean"),
        Cell::from("StDev"),
        Cell::from("Min"),
        Cell::from("Max"),
        Cell::from("Wins"),
    ]);
    let header = Row::new(header_cells)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(0);

    let visible = visible_rows(&state.result.rows, state.comparison_scroll);

    let rows: Vec<Row> = if state.result.rows.is_empty() {
        vec![Row::new(vec![
            Cell::from(""),
            Cell::from("Select two teams to compare"),
        ])]
    } else {
        visible
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let absolute = state.comparison_scroll + i;
                build_table_row(row, absolute, &state.active_categories)
            })
            .collect()
    };

    let mut widths = vec![Constraint::Length(10), Constraint::Min(14)];
    widths.extend(std::iter::repeat(Constraint::Length(8)).take(week_count));
    widths.extend([
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(5),
    ]);

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Comparison"),
    );
    frame.render_widget(table, area);
}

/// Build a single table row for one team within one category.
///
/// The row header (the category label) is printed only on the first row of
/// each category pair; `absolute` is the row's index in the full
/// (unscrolled) row list.
fn build_table_row<'a>(
    row: &ComparisonRow,
    absolute: usize,
    active: &[CategorySpec],
) -> Row<'a> {
    let digits = digits_for(active, row.category_id);
    let label = if absolute % 2 == 0 {
        row.row_header.clone()
    } else {
        String::new()
    };

    let mut cells = vec![Cell::from(label), Cell::from(row.team_name.clone())];
    for value in &row.weeks {
        cells.push(Cell::from(format_value(*value, digits)));
    }
    cells.extend([
        Cell::from(format_value(row.mean, digits)),
        Cell::from(format_value(row.stdev, digits)),
        Cell::from(format_value(row.min, digits)),
        Cell::from(format_value(row.max, digits)),
        Cell::from(format!("{}", row.wins)),
    ]);
    Row::new(cells)
}

/// Format a measurement or aggregate for display.
///
/// Missing values render as "-"; present values use the category's
/// decimal precision.
pub fn format_value(value: Option<f64>, digits: u8) -> String {
    match value {
        Some(v) => format!("{:.*}", digits as usize, v),
        None => "-".to_string(),
    }
}

/// The slice of rows still visible after scrolling past `offset` rows.
pub fn visible_rows(rows: &[ComparisonRow], offset: usize) -> &[ComparisonRow] {
    &rows[offset.min(rows.len())..]
}

/// Decimal precision for a category, defaulting to 1 for unknown ids.
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
