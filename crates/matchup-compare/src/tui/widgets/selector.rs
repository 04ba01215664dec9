// Team selector: one row per league team, a highlight cursor, and [1]/[2]
// markers showing which teams occupy the comparison slots.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::data::Team;
use crate::tui::ViewState;

/// Render the team selector into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let header = Row::new(vec![Cell::from("Slot"), Cell::from("Team")])
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(0);

    let rows: Vec<Row> = if state.teams.is_empty() {
        vec![Row::new(vec![Cell::from(""), Cell::from("No teams loaded")])]
    } else {
        state
            .teams
            .iter()
            .enumerate()
            .map(|(i, team)| team_row(team, state.selection, i == state.highlight))
            .collect()
    };

    let table = Table::new(rows, [Constraint::Length(5), Constraint::Min(16)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Teams ({})", state.teams.len())),
        );
    frame.render_widget(table, area);
}

fn team_row(team: &Team, selection: [i64; 2], highlighted: bool) -> Row<'_> {
    let style = if highlighted {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Row::new(vec![
        Cell::from(slot_marker(selection, team.team_id)),
        Cell::from(team.full_team_name.as_str()),
    ])
    .style(style)
}

/// Marker for the slot a team is currently assigned to, or "" when unassigned.
pub fn slot_marker(selection: [i64; 2], team_id: i64) -> &'static str {
    if selection[0] == team_id {
        "[1]"
    } else if selection[1] == team_id {
        "[2]"
    } else {
        ""
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
