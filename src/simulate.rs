// One match outcome applied to the table.
//
// The mutator is copy-on-write: it clones the snapshot, credits both teams'
// aggregates symmetrically, awards points by run comparison, recomputes NRR
// for the whole table and returns it re-ranked. The input snapshot is never
// touched, so a search loop can replay thousands of hypothetical outcomes
// against the same baseline.

use crate::error::EngineError;
use crate::nrr::recalc_table_nrr;
use crate::overs::{balls_to_overs_string, parse_overs_str};
use crate::table::rank::rank_table;
use crate::table::{StandingsTable, TeamStanding};

pub const POINTS_PER_WIN: u32 = 2;
pub const POINTS_PER_TIE: u32 = 1;

// ---------------------------------------------------------------------------
// Inputs and outputs
// ---------------------------------------------------------------------------

/// Box score for a single completed match. Overs are boundary-format strings
/// and go through the codec before any arithmetic.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub team_a: String,
    pub team_b: String,
    pub runs_a: u32,
    pub overs_a: String,
    pub runs_b: u32,
    pub overs_b: String,
}

/// Where team A landed after a simulated outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedPosition {
    /// 1-based rank in the re-sorted table.
    pub position: usize,
    pub points: u32,
    /// Unrounded NRR after the simulated match.
    pub nrr: f64,
}

#[derive(Clone, Copy)]
enum MatchResult {
    Win,
    Loss,
    Tie,
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

/// Apply one match outcome to a snapshot and return the updated, re-ranked
/// table. `max_balls` is the match-length cap; innings longer than it are
/// rejected.
///
/// Fails with `TeamNotFound` when either identifier does not resolve,
/// `InvalidFormat` when an overs string does not parse, and `InvalidInput`
/// when the two identifiers resolve to the same team or an innings exceeds
/// the cap. On failure nothing is applied.
pub fn apply_match_outcome(
    table: &StandingsTable,
    outcome: &MatchOutcome,
    max_balls: u32,
) -> Result<StandingsTable, EngineError> {
    let mut updated = table.clone();

    let index_a = updated
        .find_team_index(&outcome.team_a)
        .ok_or_else(|| EngineError::TeamNotFound(outcome.team_a.clone()))?;
    let index_b = updated
        .find_team_index(&outcome.team_b)
        .ok_or_else(|| EngineError::TeamNotFound(outcome.team_b.clone()))?;
    if index_a == index_b {
        return Err(EngineError::InvalidInput(format!(
            "`{}` and `{}` resolve to the same team",
            outcome.team_a, outcome.team_b
        )));
    }

    let balls_a = parse_overs_str(&outcome.overs_a)?;
    let balls_b = parse_overs_str(&outcome.overs_b)?;
    if balls_a > max_balls || balls_b > max_balls {
        return Err(EngineError::InvalidInput(format!(
            "overs exceed the match limit of {}",
            balls_to_overs_string(max_balls)
        )));
    }

    let (result_a, result_b) = match outcome.runs_a.cmp(&outcome.runs_b) {
        std::cmp::Ordering::Greater => (MatchResult::Win, MatchResult::Loss),
        std::cmp::Ordering::Less => (MatchResult::Loss, MatchResult::Win),
        std::cmp::Ordering::Equal => (MatchResult::Tie, MatchResult::Tie),
    };

    if let Some(team) = updated.get_mut(index_a) {
        credit_innings(team, outcome.runs_a, balls_a, outcome.runs_b, balls_b, result_a);
    }
    if let Some(team) = updated.get_mut(index_b) {
        credit_innings(team, outcome.runs_b, balls_b, outcome.runs_a, balls_a, result_b);
    }

    recalc_table_nrr(&mut updated);
    Ok(rank_table(&updated))
}

fn credit_innings(
    team: &mut TeamStanding,
    runs_scored: u32,
    balls_faced: u32,
    runs_conceded: u32,
    balls_bowled: u32,
    result: MatchResult,
) {
    team.matches += 1;
    team.runs_for.runs += runs_scored;
    team.runs_for.balls += balls_faced;
    team.runs_against.runs += runs_conceded;
    team.runs_against.balls += balls_bowled;

    match result {
        MatchResult::Win => {
            team.won += 1;
            team.points += POINTS_PER_WIN;
        }
        MatchResult::Loss => {
            team.lost += 1;
        }
        MatchResult::Tie => {
            team.points += POINTS_PER_TIE;
        }
    }
}

/// Apply an outcome and report where team A ("your team") ends up.
pub fn position_after_match(
    table: &StandingsTable,
    outcome: &MatchOutcome,
    max_balls: u32,
) -> Result<SimulatedPosition, EngineError> {
    let updated = apply_match_outcome(table, outcome, max_balls)?;
    let index = updated
        .find_team_index(&outcome.team_a)
        .ok_or_else(|| EngineError::TeamNotFound(outcome.team_a.clone()))?;
    let team = updated
        .get(index)
        .ok_or_else(|| EngineError::TeamNotFound(outcome.team_a.clone()))?;
    Ok(SimulatedPosition {
        position: index + 1,
        points: team.points,
        nrr: team.nrr,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
