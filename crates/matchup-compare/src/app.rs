// Application core: owns the loaded league data and the team selection,
// recomputes the comparison on every accepted change, and pushes snapshots
// to the UI.

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::catalog::{self, CategorySpec};
use crate::compare::{self, ComparisonResult};
use crate::config::Config;
use crate::data::{LeagueData, ScoreboardRecord, Team, PLACEHOLDER_TEAM_ID};
use crate::messages::{ComparisonSnapshot, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// Team selection
// ---------------------------------------------------------------------------

/// The two comparison slots. Setters reject a team already held by the
/// other slot, so a duplicate pair never reaches the engine from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamSelection {
    team_one: i64,
    team_two: i64,
}

impl TeamSelection {
    pub fn new() -> Self {
        Self {
            team_one: PLACEHOLDER_TEAM_ID,
            team_two: PLACEHOLDER_TEAM_ID,
        }
    }

    /// Both slots, slot one first.
    pub fn pair(&self) -> [i64; 2] {
        [self.team_one, self.team_two]
    }

    pub fn team_one(&self) -> i64 {
        self.team_one
    }

    pub fn team_two(&self) -> i64 {
        self.team_two
    }

    /// Assign slot one. Returns false, leaving the slot untouched, when the
    /// team is already held by slot two.
    pub fn set_team_one(&mut self, team_id: i64) -> bool {
        if team_id != PLACEHOLDER_TEAM_ID && team_id == self.team_two {
            return false;
        }
        self.team_one = team_id;
        true
    }

    /// Assign slot two. Returns false, leaving the slot untouched, when the
    /// team is already held by slot one.
    pub fn set_team_two(&mut self, team_id: i64) -> bool {
        if team_id != PLACEHOLDER_TEAM_ID && team_id == self.team_one {
            return false;
        }
        self.team_two = team_id;
        true
    }

    /// Reset both slots to the placeholder.
    pub fn clear(&mut self) {
        self.team_one = PLACEHOLDER_TEAM_ID;
        self.team_two = PLACEHOLDER_TEAM_ID;
    }
}

impl Default for TeamSelection {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Central application state handed to the app task.
pub struct AppState {
    /// Loaded configuration.
    pub config: Config,
    /// League teams in their loaded order; the UI lists them as-is.
    pub teams: Vec<Team>,
    /// All weekly scoreboard records.
    pub records: Vec<ScoreboardRecord>,
    /// Enabled categories with minutes excluded, in catalog order.
    pub active_categories: Vec<CategorySpec>,
    /// The two comparison slots.
    pub selection: TeamSelection,
}

impl AppState {
    pub fn new(config: Config, data: LeagueData) -> Self {
        let active_categories = catalog::select_active(&config.league.categories.ids)
            .into_iter()
            .copied()
            .collect();
        Self {
            teams: data.teams,
            records: data.records,
            active_categories,
            selection: TeamSelection::new(),
            config,
        }
    }

    /// Run the comparison engine for the current selection.
    pub fn compare(&self) -> ComparisonResult {
        compare::compute(
            &self.teams,
            &self.records,
            &self.config.league.categories.ids,
            self.selection.pair(),
            self.config.league.current_week,
        )
    }

    /// Snapshot of everything the UI renders.
    pub fn build_snapshot(&self) -> ComparisonSnapshot {
        ComparisonSnapshot {
            league_name: self.config.league.name.clone(),
            current_week: self.config.league.current_week,
            teams: self.teams.clone(),
            selection: self.selection.pair(),
            active_categories: self.active_categories.clone(),
            result: self.compare(),
        }
    }

    fn team_name(&self, team_id: i64) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.team_id == team_id)
            .map(|t| t.full_team_name.as_str())
    }
}

// ---------------------------------------------------------------------------
// App task
// ---------------------------------------------------------------------------

/// Main application task: drains user commands, recomputes the comparison on
/// selection changes, and pushes snapshots to the UI. Returns when a `Quit`
/// arrives or the command channel closes.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    // Initial snapshot so the UI has the team list before any selection.
    let _ = ui_tx
        .send(UiUpdate::Comparison(state.build_snapshot()))
        .await;

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            UserCommand::Quit => {
                info!("quit command received, shutting down app task");
                break;
            }
            other => handle_user_command(&mut state, other, &ui_tx).await,
        }
    }

    Ok(())
}

async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match cmd {
        UserCommand::SelectTeamOne(team_id) => {
            if state.selection.set_team_one(team_id) {
                info!("slot one set to team {}", team_id);
                push_snapshot(state, ui_tx).await;
            } else {
                warn!("rejected slot one selection, team {} already in slot two", team_id);
                push_rejection(state, team_id, ui_tx).await;
            }
        }
        UserCommand::SelectTeamTwo(team_id) => {
            if state.selection.set_team_two(team_id) {
                info!("slot two set to team {}", team_id);
                push_snapshot(state, ui_tx).await;
            } else {
                warn!("rejected slot two selection, team {} already in slot one", team_id);
                push_rejection(state, team_id, ui_tx).await;
            }
        }
        UserCommand::ClearSelection => {
            state.selection.clear();
            info!("selection cleared");
            push_snapshot(state, ui_tx).await;
        }
        // Quit is handled by the run loop before dispatch.
        UserCommand::Quit => {}
    }
}

async fn push_snapshot(state: &AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let _ = ui_tx
        .send(UiUpdate::Comparison(state.build_snapshot()))
        .await;
}

async fn push_rejection(state: &AppState, team_id: i64, ui_tx: &mpsc::Sender<UiUpdate>) {
    let name = state
        .team_name(team_id)
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("Team {team_id}"));
    let _ = ui_tx
        .send(UiUpdate::Notice(format!(
            "{name} is already selected in the other slot"
        )))
        .await;
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
