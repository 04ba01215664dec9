// Key dispatch for the dashboard. A handled key either mutates ViewState in
// place (team highlight, comparison scroll) or produces a UserCommand for the
// app task. Quitting goes through a y/n confirmation dialog first.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::UserCommand;
use super::ViewState;

/// Rows moved by PageUp/PageDown in the comparison table.
const SCROLL_PAGE: usize = 10;

/// Map one keyboard event to its effect.
///
/// `Some(command)` is forwarded to the app task; `None` means the key was
/// absorbed here, either by a local ViewState change or because it is not
/// bound to anything.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Windows terminals report Press and Release for every keystroke; acting
    // on Press alone keeps one physical key to one action.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C bypasses the confirmation dialog.
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return confirm_quit_key(key_event.code, view_state);
    }

    match key_event.code {
        // Team list highlight
        KeyCode::Up | KeyCode::Char('k') => {
            move_highlight_up(view_state);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_highlight_down(view_state);
            None
        }

        // Slot assignment for the highlighted team
        KeyCode::Enter | KeyCode::Char('1') => {
            highlighted_team_id(view_state).map(UserCommand::SelectTeamOne)
        }
        KeyCode::Char('2') => highlighted_team_id(view_state).map(UserCommand::SelectTeamTwo),
        KeyCode::Char('c') => Some(UserCommand::ClearSelection),

        // Comparison table scrolling
        KeyCode::Char('[') => {
            scroll_comparison_up(view_state, 1);
            None
        }
        KeyCode::Char(']') => {
            scroll_comparison_down(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            scroll_comparison_up(view_state, SCROLL_PAGE);
            None
        }
        KeyCode::PageDown => {
            scroll_comparison_down(view_state, SCROLL_PAGE);
            None
        }

        // Quit asks for confirmation rather than exiting on the spot
        KeyCode::Char('q') | KeyCode::Esc => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// Keys accepted while the quit dialog is up. `y`/`q` confirm, `n`/`Esc`
/// dismiss, anything else is swallowed so no action fires underneath the
/// dialog.
fn confirm_quit_key(code: KeyCode, view_state: &mut ViewState) -> Option<UserCommand> {
    match code {
        KeyCode::Char('y' | 'Y' | 'q' | 'Q') => Some(UserCommand::Quit),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Team id under the highlight cursor, if the team list is non-empty.
fn highlighted_team_id(view_state: &ViewState) -> Option<i64> {
    view_state
        .teams
        .get(view_state.highlight)
        .map(|team| team.team_id)
}

fn move_highlight_up(view_state: &mut ViewState) {
    view_state.highlight = view_state.highlight.saturating_sub(1);
}

/// Move the highlight down one row, stopping at the last team.
fn move_highlight_down(view_state: &mut ViewState) {
    if view_state.teams.is_empty() {
        return;
    }
    let last = view_state.teams.len() - 1;
    view_state.highlight = (view_state.highlight + 1).min(last);
}

fn scroll_comparison_up(view_state: &mut ViewState, rows: usize) {
    view_state.comparison_scroll = view_state.comparison_scroll.saturating_sub(rows);
}

fn scroll_comparison_down(view_state: &mut ViewState, rows: usize) {
    view_state.comparison_scroll = view_state.comparison_scroll.saturating_add(rows);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
