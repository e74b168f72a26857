// Total order over the table: points, then NRR, then wins.

use std::cmp::Ordering;

use super::{StandingsTable, TeamStanding};

/// Tolerance for treating two NRR values as equal. Repeated division leaves
/// floating-point noise well below this; real NRR gaps sit far above it.
pub const NRR_EPSILON: f64 = 1e-9;

fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    match b.points.cmp(&a.points) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    let nrr_diff = b.nrr - a.nrr;
    if nrr_diff > NRR_EPSILON {
        return Ordering::Greater;
    }
    if nrr_diff < -NRR_EPSILON {
        return Ordering::Less;
    }
    b.won.cmp(&a.won)
}

/// Return a new table ordered by points desc, NRR desc (epsilon-tolerant),
/// wins desc. Remaining ties keep input order; `sort_by` is stable, and rank
/// positions feed the scenario search, so equal-key order must not flap
/// between runs.
pub fn rank_table(table: &StandingsTable) -> StandingsTable {
    let mut teams = table.teams().to_vec();
    teams.sort_by(compare_standings);
    StandingsTable::new(teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::InningsAggregate;

    fn team(id: &str, points: u32, nrr: f64, won: u32) -> TeamStanding {
        TeamStanding {
            id: id.into(),
            name: format!("Team {id}"),
            matches: 10,
            won,
            lost: 10 - won,
            points,
            runs_for: InningsAggregate { runs: 1, balls: 6 },
            runs_against: InningsAggregate { runs: 1, balls: 6 },
            nrr,
        }
    }

    fn order(table: &StandingsTable) -> Vec<String> {
        table.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn points_dominate() {
        let table = StandingsTable::new(vec![
            team("A", 4, 2.0, 2),
            team("B", 8, -1.0, 4),
            team("C", 6, 0.0, 3),
        ]);
        assert_eq!(order(&rank_table(&table)), ["B", "C", "A"]);
    }

    #[test]
    fn nrr_breaks_equal_points() {
        let table = StandingsTable::new(vec![
            team("A", 6, -0.25, 3),
            team("B", 6, 0.75, 3),
            team("C", 6, 0.5, 3),
        ]);
        assert_eq!(order(&rank_table(&table)), ["B", "C", "A"]);
    }

    #[test]
    fn wins_break_equal_nrr() {
        let mut first = team("A", 6, 0.5, 2);
        first.matches = 12;
        let table = StandingsTable::new(vec![first, team("B", 6, 0.5, 3)]);
        assert_eq!(order(&rank_table(&table)), ["B", "A"]);
    }

    #[test]
    fn near_equal_nrr_treated_as_equal() {
        // A difference below the epsilon must fall through to wins.
        let table = StandingsTable::new(vec![
            team("A", 6, 0.5, 2),
            team("B", 6, 0.5 + 1e-12, 3),
        ]);
        assert_eq!(order(&rank_table(&table)), ["B", "A"]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let table = StandingsTable::new(vec![
            team("A", 6, 0.5, 3),
            team("B", 6, 0.5, 3),
            team("C", 6, 0.5, 3),
        ]);
        assert_eq!(order(&rank_table(&table)), ["A", "B", "C"]);
    }

    #[test]
    fn sorter_is_pure_and_idempotent() {
        let table = StandingsTable::new(vec![
            team("A", 4, 2.0, 2),
            team("B", 8, -1.0, 4),
            team("C", 8, -1.0, 4),
        ]);
        let before = table.clone();
        let once = rank_table(&table);
        let twice = rank_table(&once);

        assert_eq!(table, before, "input table must not be mutated");
        assert_eq!(order(&once), order(&twice), "sorting its own output is a fixed point");
    }
}
