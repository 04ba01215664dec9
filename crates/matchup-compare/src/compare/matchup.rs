// Weekly head-to-head outcome from per-category win counts.

use crate::catalog::CategorySpec;
use crate::compare::wins;
use crate::data::ScoreboardRecord;

/// Result of one matchup week. Ties are explicit: a week where both teams
/// take the same number of categories belongs to neither of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    TeamOneWin,
    TeamTwoWin,
    Tie,
}

/// Decide one week by counting category wins on each side. A team with no
/// record for the week can neither win a category nor concede one, so a
/// one-sided week still lands on `Tie` at 0-0.
pub fn evaluate_week(
    team_one: Option<&ScoreboardRecord>,
    team_two: Option<&ScoreboardRecord>,
    active: &[&CategorySpec],
) -> Outcome {
    let mut one_wins = 0u32;
    let mut two_wins = 0u32;

    for spec in active {
        let v1 = measurement(team_one, spec.key);
        let v2 = measurement(team_two, spec.key);
        if wins::decide(spec, v1, &[v2]) {
            one_wins += 1;
        }
        if wins::decide(spec, v2, &[v1]) {
            two_wins += 1;
        }
    }

    if one_wins > two_wins {
        Outcome::TeamOneWin
    } else if two_wins > one_wins {
        Outcome::TeamTwoWin
    } else {
        Outcome::Tie
    }
}

fn measurement(record: Option<&ScoreboardRecord>, key: &str) -> Option<f64> {
    record.and_then(|r| r.measurements.get(key).copied())
}
