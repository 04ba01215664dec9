// Terminal dashboard: layout, key handling, and widget rendering.
//
// The TUI keeps a `ViewState` fed by `UiUpdate` messages from the app task
// and redraws it on a ~30 fps tick. Key presses either mutate `ViewState`
// locally or go back to the app task as `UserCommand`s.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::catalog::CategorySpec;
use crate::compare::ComparisonResult;
use crate::data::{Team, PLACEHOLDER_TEAM_ID};
use crate::messages::{UiUpdate, UserCommand};

use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Everything the dashboard needs to draw a frame.
///
/// The app task owns the authoritative state; this copy is only as fresh
/// as the last `UiUpdate` that arrived.
pub struct ViewState {
    /// League name from configuration.
    pub league_name: String,
    /// Number of completed weeks in the comparison window.
    pub current_week: u32,
    /// All teams in catalog order, as loaded.
    pub teams: Vec<Team>,
    /// Current slot assignments; placeholder id when a slot is empty.
    pub selection: [i64; 2],
    /// Active categories for the configured league.
    pub active_categories: Vec<CategorySpec>,
    /// The most recent comparison result.
    pub result: ComparisonResult,
    /// Index of the team the selector cursor is pointing at.
    pub highlight: usize,
    /// Rows scrolled past in the comparison table.
    pub comparison_scroll: usize,
    /// Transient message shown in the status bar (e.g. rejected selection).
    pub notice: Option<String>,
    /// Whether the quit confirmation dialog is showing.
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            league_name: String::new(),
            current_week: 0,
            teams: Vec::new(),
            selection: [PLACEHOLDER_TEAM_ID, PLACEHOLDER_TEAM_ID],
            active_categories: Vec::new(),
            result: ComparisonResult::empty(),
            highlight: 0,
            comparison_scroll: 0,
            notice: None,
            confirm_quit: false,
        }
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Fold one message from the app task into the view.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Comparison(snapshot) => {
            state.league_name = snapshot.league_name;
            state.current_week = snapshot.current_week;
            state.teams = snapshot.teams;
            state.selection = snapshot.selection;
            state.active_categories = snapshot.active_categories;
            state.result = snapshot.result;
            // A fresh snapshot supersedes any pending notice
            state.notice = None;
            if state.highlight >= state.teams.len() {
                state.highlight = state.teams.len().saturating_sub(1);
            }
        }
        UiUpdate::Notice(text) => {
            state.notice = Some(text);
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw every zone of the dashboard, then the quit dialog on top if it is up.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    render_title_bar(frame, &layout, state);
    widgets::selector::render(frame, layout.team_list, state);
    widgets::comparison::render(frame, layout.comparison, state);
    widgets::summary::render(frame, layout.summary, state);
    widgets::head_to_head::render(frame, layout.head_to_head, state);
    widgets::status_bar::render(frame, layout.status_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

fn render_title_bar(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let text = format!(" Matchup Compare | {}", state.league_name);
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.title_bar);
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Drive the terminal dashboard until the user quits or the app task stops.
///
/// Owns the terminal for its whole lifetime: raw mode and the alternate
/// screen go up on entry and come back down on every exit path, panics
/// included. In between, a select loop applies `UiUpdate`s to the view and
/// forwards key presses to the app task as `UserCommand`s, redrawing about
/// thirty times a second.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal before the default panic output prints, or the
    // message is lost to the alternate screen.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    // Redraw on a fixed ~30 fps cadence rather than after every event.
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // Sender dropped: the app task is gone, so follow it down.
                    None => break,
                }
            }

            maybe_event = event_stream.next() => {
                // A closed or failed input stream leaves nothing to wait for.
                let Some(Ok(event)) = maybe_event else { break };
                if let Event::Key(key_event) = event {
                    if let Some(command) = input::handle_key(key_event, &mut view_state) {
                        let quitting = command == UserCommand::Quit;
                        let _ = cmd_tx.send(command).await;
                        if quitting {
                            break;
                        }
                    }
                }
                // Resize and focus events fall through to the next redraw.
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
