// League and data-path configuration (config/league.toml, config/data.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A `current_week` past a full year of matchup weeks is a typo.
const MAX_WEEK: u32 = 52;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing config file {path}")]
    FileNotFound { path: PathBuf },

    #[error("invalid TOML in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("could not initialize config/ from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub league: LeagueConfig,
    pub data_paths: DataPaths,
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

/// league.toml deserializes through this envelope; the settings all sit
/// under one `[league]` table.
#[derive(Debug, Clone, Deserialize)]
struct LeagueFile {
    league: LeagueConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
    pub platform: String,
    pub scoring_type: String,
    /// Latest completed matchup week. 0 is legal before the season starts.
    pub current_week: u32,
    pub categories: CategoryIdsSection,
}

/// The `[league.categories]` table: external ids of the enabled categories.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryIdsSection {
    pub ids: Vec<i64>,
}

// ---------------------------------------------------------------------------
// data.toml structs
// ---------------------------------------------------------------------------

/// data.toml envelope, a single `[data_paths]` table.
#[derive(Debug, Clone, Deserialize)]
struct DataFile {
    data_paths: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub teams: String,
    pub scoreboard: String,
}

// ---------------------------------------------------------------------------
// Loading and seeding
// ---------------------------------------------------------------------------

/// Read and validate `config/league.toml` and `config/data.toml` under an
/// explicit base directory, with no seeding step.
///
/// The binary goes through `load_config`, which seeds `config/` from
/// `defaults/` before calling this.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_dir = base_dir.join("config");

    let league_file: LeagueFile = load_toml(&config_dir.join("league.toml"))?;
    let data_file: DataFile = load_toml(&config_dir.join("data.toml"))?;

    let config = Config {
        league: league_file.league,
        data_paths: data_file.data_paths,
    };

    validate(&config)?;

    Ok(config)
}

/// Seed `config/` from `defaults/`, copying only files that are not already
/// present. Returns the paths that were copied; user edits are never touched.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.is_dir() {
        // Nothing to seed from. A hand-made config/ still works; having
        // neither directory cannot.
        if config_dir.is_dir() {
            return Ok(Vec::new());
        }
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "no defaults/ directory and no config/ directory in {}; \
                 run from the repo root so defaults/ can seed config/",
                base_dir.display()
            ),
        });
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| copy_error("create", &config_dir, e))?;

    let mut copied = Vec::new();
    let entries =
        std::fs::read_dir(&defaults_dir).map_err(|e| copy_error("read", &defaults_dir, e))?;
    for entry in entries {
        let source = entry
            .map_err(|e| copy_error("scan", &defaults_dir, e))?
            .path();
        if !source.is_file() {
            continue;
        }
        let Some(name) = source.file_name() else {
            continue;
        };
        let target = config_dir.join(name);
        if copy_if_absent(&source, &target)? {
            copied.push(target);
        }
    }

    Ok(copied)
}

/// Load config relative to the current working directory, seeding `config/`
/// from `defaults/` first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("cannot determine working directory: {e}"),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Copy `source` to `target` unless `target` already exists. `create_new`
/// keeps the existence check and the create atomic.
fn copy_if_absent(source: &Path, target: &Path) -> Result<bool, ConfigError> {
    match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
    {
        Ok(mut file) => {
            let bytes = std::fs::read(source).map_err(|e| copy_error("read", source, e))?;
            std::io::Write::write_all(&mut file, &bytes)
                .map_err(|e| copy_error("write", target, e))?;
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(copy_error("create", target, e)),
    }
}

fn copy_error(action: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::DefaultsCopyError {
        message: format!("failed to {action} {}: {err}", path.display()),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: message.into(),
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let league = &config.league;

    let required: &[(&str, &str)] = &[
        ("league.name", &league.name),
        ("league.platform", &league.platform),
        ("league.scoring_type", &league.scoring_type),
        ("data_paths.teams", &config.data_paths.teams),
        ("data_paths.scoreboard", &config.data_paths.scoreboard),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(invalid(field, "must not be empty"));
        }
    }

    // 0 means the season has not started.
    if league.current_week > MAX_WEEK {
        return Err(invalid(
            "league.current_week",
            format!("must be <= {MAX_WEEK}, got {}", league.current_week),
        ));
    }

    if league.categories.ids.is_empty() {
        return Err(invalid(
            "league.categories.ids",
            "must list at least one category id",
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
