// Baseline snapshot loading.
//
// Reads the points-table CSV shipped with the tournament config. Rows that
// fail to deserialize are skipped with a warning; structural problems
// (duplicate identifiers, counters that cannot add up) fail the whole load.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::nrr::recalc_table_nrr;
use crate::table::{InningsAggregate, StandingsTable, TeamStanding};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStandingRow {
    id: String,
    name: String,
    matches: u32,
    won: u32,
    lost: u32,
    points: u32,
    runs_for: u32,
    balls_for: u32,
    runs_against: u32,
    balls_against: u32,
}

// ---------------------------------------------------------------------------
// Reader-based loader (private, enables testing without temp files)
// ---------------------------------------------------------------------------

fn load_table_from_reader<R: Read>(rdr: R) -> Result<StandingsTable, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut teams = Vec::new();
    for result in reader.deserialize::<RawStandingRow>() {
        match result {
            Ok(raw) => {
                teams.push(TeamStanding {
                    id: raw.id.trim().to_string(),
                    name: raw.name.trim().to_string(),
                    matches: raw.matches,
                    won: raw.won,
                    lost: raw.lost,
                    points: raw.points,
                    runs_for: InningsAggregate {
                        runs: raw.runs_for,
                        balls: raw.balls_for,
                    },
                    runs_against: InningsAggregate {
                        runs: raw.runs_against,
                        balls: raw.balls_against,
                    },
                    nrr: 0.0,
                });
            }
            Err(e) => {
                warn!("skipping malformed standings row: {}", e);
            }
        }
    }
    Ok(StandingsTable::new(teams))
}

fn validate(table: &StandingsTable) -> Result<(), LoadError> {
    if table.is_empty() {
        return Err(LoadError::Validation(
            "points table has no usable rows".into(),
        ));
    }
    let mut seen = std::collections::HashSet::new();
    for team in table.iter() {
        if !seen.insert(team.id.to_lowercase()) {
            return Err(LoadError::Validation(format!(
                "duplicate team id `{}`",
                team.id
            )));
        }
        if team.won + team.lost > team.matches {
            return Err(LoadError::Validation(format!(
                "team `{}`: won + lost exceeds matches played",
                team.id
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Load the baseline snapshot from a CSV file, validate it and derive every
/// team's NRR from its aggregates.
pub fn load_table(path: &Path) -> Result<StandingsTable, LoadError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: display.clone(),
        source: e,
    })?;
    let mut table = load_table_from_reader(file).map_err(|e| LoadError::Csv {
        path: display,
        source: e,
    })?;
    validate(&table)?;
    recalc_table_nrr(&mut table);
    Ok(table)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "id,name,matches,won,lost,points,runs_for,balls_for,runs_against,balls_against\n";

    fn load(csv_body: &str) -> Result<StandingsTable, LoadError> {
        let data = format!("{HEADER}{csv_body}");
        let mut table =
            load_table_from_reader(data.as_bytes()).expect("reader should not fail outright");
        validate(&table)?;
        recalc_table_nrr(&mut table);
        Ok(table)
    }

    #[test]
    fn loads_rows_and_derives_nrr() {
        let table = load(
            "RR,Rajasthan Royals,4,3,1,6,720,480,640,480\n\
             DC,Delhi Capitals,4,1,3,2,640,480,720,480\n",
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        let rr = table.get(table.find_team_index("RR").unwrap()).unwrap();
        assert!((rr.nrr - 1.0).abs() < 1e-9);
        let dc = table.get(table.find_team_index("dc").unwrap()).unwrap();
        assert!((dc.nrr + 1.0).abs() < 1e-9);
    }

    #[test]
    fn skips_malformed_rows() {
        let table = load(
            "RR,Rajasthan Royals,4,3,1,6,720,480,640,480\n\
             DC,Delhi Capitals,not_a_number,1,3,2,640,480,720,480\n\
             GT,Gujarat Titans,4,2,2,4,660,480,650,480\n",
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.find_team_index("DC").is_none());
    }

    #[test]
    fn rejects_duplicate_ids_case_insensitively() {
        let err = load(
            "RR,Rajasthan Royals,4,3,1,6,720,480,640,480\n\
             rr,Royals Again,4,1,3,2,640,480,720,480\n",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Validation(_)));
    }

    #[test]
    fn rejects_impossible_counters() {
        let err = load("RR,Rajasthan Royals,4,3,2,6,720,480,640,480\n").unwrap_err();
        assert!(matches!(err, LoadError::Validation(_)));
    }

    #[test]
    fn rejects_empty_table() {
        let err = load("").unwrap_err();
        assert!(matches!(err, LoadError::Validation(_)));
    }

    #[test]
    fn zero_ball_aggregates_load_with_zero_nrr() {
        let table = load("NEW,Newcomers,0,0,0,0,0,0,0,0\n").unwrap();
        assert_eq!(table.get(0).unwrap().nrr, 0.0);
    }

    #[test]
    fn load_table_reports_missing_file() {
        let err = load_table(Path::new("/nonexistent/points.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
