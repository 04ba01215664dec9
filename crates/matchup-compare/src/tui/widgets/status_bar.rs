// Status bar widget: league context, selection state, notices, key hints.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::data::PLACEHOLDER_TEAM_ID;
use crate::tui::ViewState;

/// One-line strip along the bottom edge.
///
/// Layout: [league + week] [selection state] [notice, if any] [key hints]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(build_spans(state)))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Build the status bar spans.
pub fn build_spans(state: &ViewState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    spans.push(Span::styled(
        format!(" {} ", state.league_name),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!("Week {}", state.current_week),
        Style::default().fg(Color::White),
    ));

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.push(Span::styled(
        selection_label(state),
        Style::default().fg(Color::White),
    ));

    if let Some(notice) = &state.notice {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            notice.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.push(Span::styled(
        key_hints(),
        Style::default().fg(Color::Gray),
    ));

    spans
}

/// Human-readable description of the current slot assignments.
pub fn selection_label(state: &ViewState) -> String {
    let [one, two] = state.selection;
    match (one == PLACEHOLDER_TEAM_ID, two == PLACEHOLDER_TEAM_ID) {
        (true, true) => "Select two teams".to_string(),
        (false, true) => format!("{} vs ?", team_name(state, one)),
        (true, false) => format!("? vs {}", team_name(state, two)),
        (false, false) => format!("{} vs {}", team_name(state, one), team_name(state, two)),
    }
}

/// Key hint summary shown at the right of the bar.
pub fn key_hints() -> &'static str {
    "j/k move | Enter/1 slot one | 2 slot two | c clear | [/] scroll | q quit"
}

/// Name of a team by id, falling back to the raw id.
fn team_name(state: &ViewState, team_id: i64) -> String {
    state
        .teams
        .iter()
        .find(|team| team.team_id == team_id)
        .map(|team| team.full_team_name.clone())
        .unwrap_or_else(|| format!("Team {}", team_id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
