// CSV ingest for league data: the team list and weekly scoreboard totals.
//
// Both loaders follow the same shape: a reader-based core that deserializes
// rows and skips malformed ones with a warning, plus a path-based wrapper
// that attaches file context to errors. A file that yields zero usable rows
// is a validation error at the `load_all` level.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::config::DataPaths;

/// Reserved team id meaning "no team selected".
pub const PLACEHOLDER_TEAM_ID: i64 = 0;

// ---------------------------------------------------------------------------
// Domain types
// ---------------------------------------------------------------------------

/// A fantasy team as it appears in the league.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub team_id: i64,
    pub full_team_name: String,
}

/// One team's category totals for one matchup week.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreboardRecord {
    pub team_id: i64,
    /// Matchup week, starting at 1.
    pub week: u32,
    /// Measurement key -> raw value. A key the scoreboard did not report is
    /// simply absent; absence is never coded as zero.
    pub measurements: HashMap<String, f64>,
}

/// Everything the comparison engine consumes, loaded from disk.
#[derive(Debug, Clone)]
pub struct LeagueData {
    pub teams: Vec<Team>,
    pub records: Vec<ScoreboardRecord>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while loading league data files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("data validation failed: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV rows
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawTeamRow {
    #[serde(alias = "teamId")]
    team_id: i64,
    #[serde(alias = "fullTeamName", alias = "name")]
    full_team_name: String,
}

/// Raw scoreboard row. Every measurement column is optional: an empty cell
/// or an absent column is a missing measurement, not a zero.
#[derive(Debug, Deserialize)]
struct RawScoreboardRow {
    #[serde(alias = "teamId")]
    team_id: i64,
    week: u32,
    #[serde(default)]
    pts: Option<f64>,
    #[serde(default)]
    blk: Option<f64>,
    #[serde(default)]
    stl: Option<f64>,
    #[serde(default)]
    ast: Option<f64>,
    #[serde(default)]
    oreb: Option<f64>,
    #[serde(default)]
    dreb: Option<f64>,
    #[serde(default)]
    reb: Option<f64>,
    #[serde(default)]
    ejs: Option<f64>,
    #[serde(default)]
    pf: Option<f64>,
    #[serde(default)]
    to: Option<f64>,
    #[serde(default)]
    fgm: Option<f64>,
    #[serde(default)]
    ftm: Option<f64>,
    #[serde(default, alias = "3pm")]
    tpm: Option<f64>,
    #[serde(default, alias = "fg%")]
    fg_pct: Option<f64>,
    #[serde(default, alias = "ft%")]
    ft_pct: Option<f64>,
    #[serde(default, alias = "3p%")]
    tp_pct: Option<f64>,
    #[serde(default)]
    mins: Option<f64>,
}

impl RawScoreboardRow {
    fn into_record(self) -> ScoreboardRecord {
        let mut measurements = HashMap::new();
        let mut put = |key: &str, value: Option<f64>| {
            // Non-finite values are dropped at ingest.
            if let Some(v) = value.filter(|v| v.is_finite()) {
                measurements.insert(key.to_string(), v);
            }
        };
        put("pts", self.pts);
        put("blk", self.blk);
        put("stl", self.stl);
        put("ast", self.ast);
        put("oreb", self.oreb);
        put("dreb", self.dreb);
        put("reb", self.reb);
        put("ejs", self.ejs);
        put("pf", self.pf);
        put("to", self.to);
        put("fgm", self.fgm);
        put("ftm", self.ftm);
        put("tpm", self.tpm);
        put("fg_pct", self.fg_pct);
        put("ft_pct", self.ft_pct);
        put("tp_pct", self.tp_pct);
        put("mins", self.mins);
        ScoreboardRecord {
            team_id: self.team_id,
            week: self.week,
            measurements,
        }
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

fn load_teams_from_reader<R: Read>(reader: R) -> Result<Vec<Team>, csv::Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut teams: Vec<Team> = Vec::new();

    for result in csv_reader.deserialize::<RawTeamRow>() {
        match result {
            Ok(raw) => {
                if raw.team_id <= 0 {
                    warn!("skipping team row with reserved or invalid id {}", raw.team_id);
                    continue;
                }
                let name = raw.full_team_name.trim();
                if name.is_empty() {
                    warn!("skipping team {} with empty name", raw.team_id);
                    continue;
                }
                if teams.iter().any(|t| t.team_id == raw.team_id) {
                    warn!("skipping duplicate team id {}", raw.team_id);
                    continue;
                }
                teams.push(Team {
                    team_id: raw.team_id,
                    full_team_name: name.to_string(),
                });
            }
            Err(e) => warn!("skipping malformed team row: {}", e),
        }
    }

    Ok(teams)
}

fn load_scoreboard_from_reader<R: Read>(reader: R) -> Result<Vec<ScoreboardRecord>, csv::Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records: Vec<ScoreboardRecord> = Vec::new();

    for result in csv_reader.deserialize::<RawScoreboardRow>() {
        match result {
            Ok(raw) => {
                if raw.week == 0 {
                    warn!("skipping scoreboard row for team {} with week 0", raw.team_id);
                    continue;
                }
                records.push(raw.into_record());
            }
            Err(e) => warn!("skipping malformed scoreboard row: {}", e),
        }
    }

    Ok(records)
}

/// Load the team list from a CSV file.
pub fn load_teams(path: &str) -> Result<Vec<Team>, DataError> {
    let file = File::open(path).map_err(|e| DataError::Io {
        path: path.to_string(),
        source: e,
    })?;
    load_teams_from_reader(file).map_err(|e| DataError::Csv {
        path: path.to_string(),
        source: e,
    })
}

/// Load weekly scoreboard records from a CSV file.
pub fn load_scoreboard(path: &str) -> Result<Vec<ScoreboardRecord>, DataError> {
    let file = File::open(path).map_err(|e| DataError::Io {
        path: path.to_string(),
        source: e,
    })?;
    load_scoreboard_from_reader(file).map_err(|e| DataError::Csv {
        path: path.to_string(),
        source: e,
    })
}

/// Load teams and scoreboard from the configured paths. Files that load but
/// contain no usable rows are treated as validation failures so the app
/// never starts on an empty league.
pub fn load_all(paths: &DataPaths) -> Result<LeagueData, DataError> {
    let teams = load_teams(&paths.teams)?;
    if teams.is_empty() {
        return Err(DataError::Validation(format!(
            "no teams loaded from {}",
            paths.teams
        )));
    }

    let records = load_scoreboard(&paths.scoreboard)?;
    if records.is_empty() {
        return Err(DataError::Validation(format!(
            "no scoreboard rows loaded from {}",
            paths.scoreboard
        )));
    }

    Ok(LeagueData { teams, records })
}
