// Matchup comparison dashboard entry point.
//
// Boot order:
// 1. Set up file logging
// 2. Ensure config files exist, then load config
// 3. Load team and scoreboard CSV data
// 4. Initialize AppState
// 5. Create mpsc channels
// 6. Spawn app logic task
// 7. Run the TUI event loop (blocking until user quits)
// 8. Wait for the app task, then exit

use matchup_compare::app;
use matchup_compare::config;
use matchup_compare::data;
use matchup_compare::tui;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Set up file logging
    init_tracing()?;
    info!("Matchup compare starting up");

    // 2. Ensure config files exist, then load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: league={}, week={}, {} category ids",
        config.league.name,
        config.league.current_week,
        config.league.categories.ids.len()
    );

    // 3. Load team and scoreboard CSV data
    let league_data =
        data::load_all(&config.data_paths).context("failed to load league data")?;
    info!(
        "Loaded {} teams and {} scoreboard rows",
        league_data.teams.len(),
        league_data.records.len()
    );

    // 4. Initialize AppState
    let app_state = app::AppState::new(config, league_data);

    // 5. Create mpsc channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    // 6. Spawn app logic task
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("app task failed: {}", e);
        }
    });

    // 7. Run the TUI event loop (blocking until user quits)
    if let Err(e) = tui::run(ui_rx, cmd_tx).await {
        error!("terminal UI failed: {}", e);
    }

    // 8. The TUI dropping cmd_tx ends the app loop; give it a moment to drain.
    let shutdown = tokio::time::timeout(std::time::Duration::from_secs(5), app_handle);
    if shutdown.await.is_err() {
        error!("app task did not stop within 5 seconds");
    }

    info!("Matchup compare shut down cleanly");
    Ok(())
}

/// Route tracing output to `logs/matchup.log`; the terminal belongs to the TUI.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::File::create(log_dir.join("matchup.log"))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("matchup_compare=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
