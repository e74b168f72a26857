// Presentation formatting. The engine keeps NRR unrounded; the three-decimal
// rounding and the user-facing sentences live here and nowhere else.

use crate::scenario::{AchievableScenario, ScenarioOutcome};
use crate::table::StandingsTable;

/// Display form of an NRR value.
pub fn format_nrr(nrr: f64) -> String {
    format!("{nrr:.3}")
}

/// Render a ranked table in the classic points-table layout.
pub fn render_table(table: &StandingsTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<6} {:<26} {:>3} {:>3} {:>3} {:>4} {:>8}\n",
        "Pos", "Id", "Team", "M", "W", "L", "Pts", "NRR"
    ));
    for (index, team) in table.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<6} {:<26} {:>3} {:>3} {:>3} {:>4} {:>8}\n",
            index + 1,
            team.id,
            team.name,
            team.matches,
            team.won,
            team.lost,
            team.points,
            format_nrr(team.nrr),
        ));
    }
    out
}

/// User-facing summary of a scenario outcome. NRR bounds are shown in
/// ascending order regardless of which domain boundary produced them.
pub fn scenario_message(your_name: &str, opponent_name: &str, outcome: &ScenarioOutcome) -> String {
    let scenario = match outcome {
        ScenarioOutcome::Achievable(scenario) => scenario,
        ScenarioOutcome::NotAchievable => {
            return "Cannot achieve desired position with these parameters".to_string();
        }
    };

    match scenario {
        AchievableScenario::Defending {
            your_runs,
            overs,
            restrict_to,
        } => {
            let (nrr_min, nrr_max) = ascending(restrict_to.nrr_at_low, restrict_to.nrr_at_high);
            format!(
                "If {your_name} scores {your_runs} runs in {overs} overs, {your_name} needs to \
                 restrict {opponent_name} between {} to {} runs in {overs}. Revised NRR of \
                 {your_name} will be between {} to {}.",
                restrict_to.low,
                restrict_to.high,
                format_nrr(nrr_min),
                format_nrr(nrr_max),
            )
        }
        AchievableScenario::Chasing {
            target,
            chase_balls,
            chase_overs_low,
            chase_overs_high,
        } => {
            let (nrr_min, nrr_max) = ascending(chase_balls.nrr_at_low, chase_balls.nrr_at_high);
            format!(
                "{your_name} needs to chase {target} between {chase_overs_low} and \
                 {chase_overs_high} overs. Revised NRR for {your_name} will be between {} to {}.",
                format_nrr(nrr_min),
                format_nrr(nrr_max),
            )
        }
    }
}

fn ascending(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
