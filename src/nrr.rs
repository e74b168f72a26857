// Net run rate computation.
//
// NRR is run rate scored minus run rate conceded, with overs expressed as
// balls / 6. A side with no balls recorded has no meaningful rate; its term
// is zero rather than a division by zero.

use crate::overs::balls_to_decimal_overs;
use crate::table::StandingsTable;

/// Run rate scored minus run rate conceded. Unrounded; display rounding
/// happens only at the formatting boundary.
pub fn compute_nrr(runs_for: u32, balls_for: u32, runs_against: u32, balls_against: u32) -> f64 {
    run_rate(runs_for, balls_for) - run_rate(runs_against, balls_against)
}

fn run_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    runs as f64 / balls_to_decimal_overs(balls)
}

/// Overwrite every standing's `nrr` from its current aggregates. Pure
/// function of the `for`/`against` fields.
pub fn recalc_table_nrr(table: &mut StandingsTable) {
    for team in table.iter_mut() {
        team.nrr = compute_nrr(
            team.runs_for.runs,
            team.runs_for.balls,
            team.runs_against.runs,
            team.runs_against.balls,
        );
    }
}
