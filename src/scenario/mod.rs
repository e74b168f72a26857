// Scenario evaluation: which outcome range reaches the desired table
// position.
//
// Two kinds, selected by which side of the toss your team is on. Defending:
// your score is fixed, the opponent's hypothetical final score is searched
// over the strict-win domain [0, your_runs - 1]. Chasing: the opponent's
// score is fixed, your team chases target = opponent_runs + 1 and the balls
// consumed are searched over [1, match_balls]. Every trial runs against a
// fresh clone of the baseline.

pub mod search;

use serde::Serialize;

use crate::error::EngineError;
use crate::overs::{balls_to_overs_string, parse_overs_str};
use crate::simulate::{position_after_match, MatchOutcome};
use crate::table::StandingsTable;

/// Hard cap on search-domain size, so a malformed score or match length
/// cannot demand unbounded work.
pub const MAX_RUN_DOMAIN: u32 = 3600;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Which side of the toss your team is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    /// Your team batted first and set `your_runs`; ties and losses are out of
    /// the search domain by policy.
    Defending { your_runs: u32 },
    /// The opponent set `opponent_runs`; your team must chase one more.
    Chasing { opponent_runs: u32 },
}

#[derive(Debug, Clone)]
pub struct ScenarioRequest {
    pub your_team: String,
    pub opponent: String,
    /// Target rank, 1-based; must lie in 1..=table size.
    pub desired_position: usize,
    /// Full match length as an overs string, e.g. "20" or "20.0".
    pub match_overs: String,
    pub kind: ScenarioKind,
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Boundary values of the searched domain (runs conceded, or balls used)
/// with the NRR your team holds at each. NRR is unrounded here; display
/// rounding happens at the formatting boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryRange {
    pub low: u32,
    pub high: u32,
    pub nrr_at_low: f64,
    pub nrr_at_high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AchievableScenario {
    /// Restrict the opponent to between `restrict_to.low` and
    /// `restrict_to.high` runs in the full quota of overs.
    Defending {
        your_runs: u32,
        overs: String,
        restrict_to: BoundaryRange,
    },
    /// Chase `target` within the boundary ball counts; the overs strings are
    /// the same boundaries in overs form.
    Chasing {
        target: u32,
        chase_balls: BoundaryRange,
        chase_overs_low: String,
        chase_overs_high: String,
    },
}

/// A search that finds nothing is a valid negative result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioOutcome {
    Achievable(AchievableScenario),
    NotAchievable,
}

impl ScenarioOutcome {
    pub fn is_achievable(&self) -> bool {
        matches!(self, ScenarioOutcome::Achievable(_))
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate a scenario request against a read-only baseline snapshot.
///
/// `max_search_balls` is the configured defensive cap on the chasing domain;
/// a match length beyond it is rejected as `InvalidInput` rather than
/// searched.
pub fn evaluate_scenario(
    baseline: &StandingsTable,
    request: &ScenarioRequest,
    max_search_balls: u32,
) -> Result<ScenarioOutcome, EngineError> {
    if request.desired_position == 0 || request.desired_position > baseline.len() {
        return Err(EngineError::InvalidInput(format!(
            "desired position must be between 1 and {}",
            baseline.len()
        )));
    }

    let your_index = baseline
        .find_team_index(&request.your_team)
        .ok_or_else(|| EngineError::TeamNotFound(request.your_team.clone()))?;
    let opponent_index = baseline
        .find_team_index(&request.opponent)
        .ok_or_else(|| EngineError::TeamNotFound(request.opponent.clone()))?;
    if your_index == opponent_index {
        return Err(EngineError::InvalidInput(format!(
            "`{}` and `{}` resolve to the same team",
            request.your_team, request.opponent
        )));
    }

    let match_balls = parse_overs_str(&request.match_overs)?;
    if match_balls == 0 {
        return Err(EngineError::InvalidInput(
            "match length must be at least one ball".into(),
        ));
    }
    if match_balls > max_search_balls {
        return Err(EngineError::InvalidInput(format!(
            "match length of {} balls exceeds the search limit of {max_search_balls}",
            match_balls
        )));
    }

    match request.kind {
        ScenarioKind::Defending { your_runs } => {
            defending_range(baseline, request, your_runs, match_balls)
        }
        ScenarioKind::Chasing { opponent_runs } => {
            chasing_range(baseline, request, opponent_runs, match_balls)
        }
    }
}

/// Your team batted first for `your_runs`. Search opponent scores in
/// [0, your_runs - 1], both innings taking the full quota of overs.
fn defending_range(
    baseline: &StandingsTable,
    request: &ScenarioRequest,
    your_runs: u32,
    match_balls: u32,
) -> Result<ScenarioOutcome, EngineError> {
    if your_runs == 0 {
        // No strict-win outcome exists.
        return Ok(ScenarioOutcome::NotAchievable);
    }
    if your_runs > MAX_RUN_DOMAIN {
        return Err(EngineError::InvalidInput(format!(
            "a score of {your_runs} exceeds the search limit of {MAX_RUN_DOMAIN} runs"
        )));
    }

    let overs = balls_to_overs_string(match_balls);
    let trial = |opponent_runs: u32| {
        position_after_match(
            baseline,
            &defending_outcome(request, your_runs, opponent_runs, &overs),
            match_balls,
        )
    };

    let boundaries = search::binary_boundaries(0, your_runs - 1, |opponent_runs| {
        Ok(trial(opponent_runs)?.position <= request.desired_position)
    })?;
    let (low, high) = match boundaries {
        Some(pair) => pair,
        None => return Ok(ScenarioOutcome::NotAchievable),
    };

    Ok(ScenarioOutcome::Achievable(AchievableScenario::Defending {
        your_runs,
        overs: overs.clone(),
        restrict_to: BoundaryRange {
            low,
            high,
            nrr_at_low: trial(low)?.nrr,
            nrr_at_high: trial(high)?.nrr,
        },
    }))
}

fn defending_outcome(
    request: &ScenarioRequest,
    your_runs: u32,
    opponent_runs: u32,
    overs: &str,
) -> MatchOutcome {
    MatchOutcome {
        team_a: request.your_team.clone(),
        team_b: request.opponent.clone(),
        runs_a: your_runs,
        overs_a: overs.to_string(),
        runs_b: opponent_runs,
        overs_b: overs.to_string(),
    }
}

/// The opponent set `opponent_runs` in the full quota; your team chases
/// `opponent_runs + 1`. Search the balls consumed in [1, match_balls].
fn chasing_range(
    baseline: &StandingsTable,
    request: &ScenarioRequest,
    opponent_runs: u32,
    match_balls: u32,
) -> Result<ScenarioOutcome, EngineError> {
    if opponent_runs > MAX_RUN_DOMAIN {
        return Err(EngineError::InvalidInput(format!(
            "a score of {opponent_runs} exceeds the search limit of {MAX_RUN_DOMAIN} runs"
        )));
    }
    let target = opponent_runs + 1;
    let opponent_overs = balls_to_overs_string(match_balls);

    let trial = |balls: u32| {
        position_after_match(
            baseline,
            &MatchOutcome {
                team_a: request.your_team.clone(),
                team_b: request.opponent.clone(),
                runs_a: target,
                overs_a: balls_to_overs_string(balls),
                runs_b: opponent_runs,
                overs_b: opponent_overs.clone(),
            },
            match_balls,
        )
    };

    let boundaries = search::binary_boundaries(1, match_balls, |balls| {
        Ok(trial(balls)?.position <= request.desired_position)
    })?;
    let (low, high) = match boundaries {
        Some(pair) => pair,
        None => return Ok(ScenarioOutcome::NotAchievable),
    };

    Ok(ScenarioOutcome::Achievable(AchievableScenario::Chasing {
        target,
        chase_balls: BoundaryRange {
            low,
            high,
            nrr_at_low: trial(low)?.nrr,
            nrr_at_high: trial(high)?.nrr,
        },
        chase_overs_low: balls_to_overs_string(low),
        chase_overs_high: balls_to_overs_string(high),
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
