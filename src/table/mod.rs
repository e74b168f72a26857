// Standings data model: per-team aggregates and the points table.
//
// The table is an externally supplied snapshot. Everything downstream treats
// it as read-only and clones it before mutating, so concurrent scenario
// evaluations can never observe each other's intermediate state.

pub mod loader;
pub mod rank;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Per-team types
// ---------------------------------------------------------------------------

/// Cumulative runs and legal deliveries on one side of a team's ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsAggregate {
    pub runs: u32,
    pub balls: u32,
}

/// One team's row in the points table.
///
/// `nrr` is derived: it is recomputed from the `for`/`against` aggregates
/// after every mutation and never carries independent state. Ties are not
/// stored; they are `matches - won - lost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub id: String,
    pub name: String,
    pub matches: u32,
    pub won: u32,
    pub lost: u32,
    pub points: u32,
    #[serde(rename = "for")]
    pub runs_for: InningsAggregate,
    #[serde(rename = "against")]
    pub runs_against: InningsAggregate,
    pub nrr: f64,
}

impl TeamStanding {
    /// Ties played, derived from the stored counters.
    pub fn ties(&self) -> u32 {
        self.matches - self.won - self.lost
    }
}

// ---------------------------------------------------------------------------
// The table
// ---------------------------------------------------------------------------

/// An ordered sequence of team standings. Ordering is a derived view; use
/// `rank::rank_table` to recompute it rather than mutating positions in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsTable(Vec<TeamStanding>);

impl StandingsTable {
    pub fn new(teams: Vec<TeamStanding>) -> Self {
        StandingsTable(teams)
    }

    pub fn teams(&self) -> &[TeamStanding] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TeamStanding> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TeamStanding> {
        self.0.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TeamStanding> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, TeamStanding> {
        self.0.iter_mut()
    }

    /// Resolve a team by id or display name, case-insensitively.
    pub fn find_team_index(&self, key: &str) -> Option<usize> {
        let needle = key.trim().to_lowercase();
        self.0.iter().position(|team| {
            team.id.to_lowercase() == needle || team.name.to_lowercase() == needle
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
