// Configuration loading and parsing (tournament.toml).

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// tournament.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire tournament.toml file.
#[derive(Debug, Clone, Deserialize)]
struct TournamentFile {
    tournament: TournamentSection,
    search: SearchSection,
    data_paths: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TournamentSection {
    pub name: String,
    /// Date the shipped snapshot was taken, "YYYY-MM-DD".
    pub as_of: NaiveDate,
    /// Full match length in whole overs (20 for a T20 tournament).
    pub match_overs: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSection {
    /// Defensive cap on the match length a scenario request may search over.
    pub max_match_overs: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub points_table: String,
}

/// The assembled configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub tournament: TournamentSection,
    pub search: SearchSection,
    pub data_paths: DataPaths,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/tournament.toml` relative to
/// the given `base_dir`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("tournament.toml");
    let text = std::fs::read_to_string(&path).map_err(|_| ConfigError::FileNotFound {
        path: path.clone(),
    })?;
    let file: TournamentFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let config = Config {
        tournament: file.tournament,
        search: file.search,
        data_paths: file.data_paths,
    };

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working
/// directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.tournament.name.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "tournament.name".into(),
            message: "must not be empty".into(),
        });
    }

    if config.tournament.match_overs == 0 {
        return Err(ConfigError::ValidationError {
            field: "tournament.match_overs".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.search.max_match_overs < config.tournament.match_overs {
        return Err(ConfigError::ValidationError {
            field: "search.max_match_overs".into(),
            message: format!(
                "must be at least tournament.match_overs ({})",
                config.tournament.match_overs
            ),
        });
    }

    if config.data_paths.points_table.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data_paths.points_table".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const VALID_TOML: &str = r#"
[tournament]
name = "Indian T20 League 2022"
as_of = "2022-05-01"
match_overs = 20

[search]
max_match_overs = 50

[data_paths]
points_table = "data/points_table.csv"
"#;

    /// Write the given tournament.toml body into a fresh temp base dir.
    fn write_config(dir_name: &str, body: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(dir_name);
        let config_dir = tmp.join("config");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("tournament.toml"), body).unwrap();
        tmp
    }

    #[test]
    fn loads_valid_config() {
        let tmp = write_config("standings_config_valid", VALID_TOML);
        let config = load_config_from(&tmp).expect("should load valid config");

        assert_eq!(config.tournament.name, "Indian T20 League 2022");
        assert_eq!(
            config.tournament.as_of,
            NaiveDate::from_ymd_opt(2022, 5, 1).unwrap()
        );
        assert_eq!(config.tournament.match_overs, 20);
        assert_eq!(config.search.max_match_overs, 50);
        assert_eq!(config.data_paths.points_table, "data/points_table.csv");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_zero_match_overs() {
        let tmp = write_config(
            "standings_config_zero_overs",
            &VALID_TOML.replace("match_overs = 20", "match_overs = 0"),
        );
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "tournament.match_overs");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_search_cap_below_match_length() {
        let tmp = write_config(
            "standings_config_low_cap",
            &VALID_TOML.replace("max_match_overs = 50", "max_match_overs = 10"),
        );
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "search.max_match_overs");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_name() {
        let tmp = write_config(
            "standings_config_empty_name",
            &VALID_TOML.replace("Indian T20 League 2022", ""),
        );
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "tournament.name");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn file_not_found_for_missing_config() {
        let tmp = std::env::temp_dir().join("standings_config_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::FileNotFound { path } => {
                assert!(path.ends_with("tournament.toml"));
            }
            other => panic!("expected FileNotFound, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = write_config("standings_config_bad_toml", "this is not valid [[[ toml");
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ParseError { path, .. } => {
                assert!(path.ends_with("tournament.toml"));
            }
            other => panic!("expected ParseError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }
}
