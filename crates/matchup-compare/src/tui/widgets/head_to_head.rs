// Head to head widget: category wins per completed week.
//
// Two rows, one per selected team. A cell reads "Won" when that team took
// strictly more categories than the other in that week; tied weeks leave
// both cells blank.

use std::iter;

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the head to head grid into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let week_count = state
        .result
        .head_to_head
        .first()
        .map(|row| row.weeks.len())
        .unwrap_or(0);

    let header = Row::new(
        iter::once(Cell::from("Team"))
            .chain((1..=week_count).map(|week| Cell::from(format!("W{week}")))),
    )
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(0);

    let rows: Vec<Row> = if state.result.head_to_head.is_empty() {
        vec![Row::new(vec![Cell::from("No head to head yet")])]
    } else {
        state
            .result
            .head_to_head
            .iter()
            .map(|row| {
                Row::new(
                    iter::once(Cell::from(row.row_header.clone()))
                        .chain(row.weeks.iter().map(|&won| week_cell(won))),
                )
            })
            .collect()
    };

    let widths = iter::once(Constraint::Min(14))
        .chain(iter::repeat(Constraint::Length(6)).take(week_count));

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Head to Head"),
    );
    frame.render_widget(table, area);
}

fn week_cell(won: bool) -> Cell<'static> {
    let cell = Cell::from(cell_text(won));
    if won {
        cell.style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        cell
    }
}

/// Text for a single head to head cell.
pub fn cell_text(won: bool) -> &'static str {
    if won {
        "Won"
    } else {
        ""
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
