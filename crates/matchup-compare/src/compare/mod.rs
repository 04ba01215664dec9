// Comparison engine: weekly matrices, combined summaries, category win
// tallies and head-to-head outcomes for two selected teams.
//
// `compute` is a pure function over the league data it is handed: it builds
// a fresh result on every call, caches nothing, and never mutates its
// inputs. Callers decide when to recompute (the app does so on every
// accepted selection change).

pub mod matchup;
pub mod stats;
pub mod wins;

use crate::catalog::{self, CategorySpec};
use crate::data::{ScoreboardRecord, Team, PLACEHOLDER_TEAM_ID};

use matchup::Outcome;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One matrix row: a single team's weekly series for one category, with its
/// aggregates and win tally. Two of these exist per active category, in
/// selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Category display label heading the row, e.g. "PTS" or "FG%".
    pub row_header: String,
    /// Measurement column key for the category, e.g. "pts".
    pub category_key: String,
    pub category_id: i64,
    /// Name of the team this row belongs to.
    pub team_name: String,
    /// One slot per week `1..=current_week`; `None` where the team has no
    /// valid value for that week.
    pub weeks: Vec<Option<f64>>,
    pub mean: Option<f64>,
    pub stdev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Number of weeks in which this team strictly beat the opponent.
    pub wins: u32,
}

/// Mean and sample deviation over both teams' combined valid values for one
/// category.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub category_id: i64,
    pub mean: Option<f64>,
    pub stdev: Option<f64>,
}

/// One team's row of the head-to-head table: `true` marks a week this team
/// won. Cells for the same week are mutually exclusive across the two rows
/// by construction; a tied week is blank on both.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadToHeadRow {
    pub row_header: String,
    pub weeks: Vec<bool>,
}

/// Full output of one comparison.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComparisonResult {
    pub rows: Vec<ComparisonRow>,
    /// Per-category combined statistics, keyed by the category display label
    /// and kept in catalog order.
    pub summary: Vec<(String, SummaryEntry)>,
    pub head_to_head: Vec<HeadToHeadRow>,
}

impl ComparisonResult {
    /// The all-empty result returned for any invalid selection.
    pub fn empty() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Compare two teams across every active category and week `1..=current_week`.
///
/// Unless `selected` names two distinct, non-placeholder, known teams, the
/// result is empty; an invalid selection is a normal state of the UI, not an
/// error.
pub fn compute(
    teams: &[Team],
    records: &[ScoreboardRecord],
    settings: &[i64],
    selected: [i64; 2],
    current_week: u32,
) -> ComparisonResult {
    let [id_one, id_two] = selected;
    if id_one == PLACEHOLDER_TEAM_ID || id_two == PLACEHOLDER_TEAM_ID || id_one == id_two {
        return ComparisonResult::empty();
    }
    let (Some(team_one), Some(team_two)) = (
        teams.iter().find(|t| t.team_id == id_one),
        teams.iter().find(|t| t.team_id == id_two),
    ) else {
        return ComparisonResult::empty();
    };

    let active = catalog::select_active(settings);

    let week_record = |team_id: i64, week: u32| -> Option<&ScoreboardRecord> {
        records
            .iter()
            .find(|r| r.team_id == team_id && r.week == week)
    };
    let series_for = |team_id: i64, key: &str| -> Vec<Option<f64>> {
        (1..=current_week)
            .map(|week| week_record(team_id, week).and_then(|r| r.measurements.get(key).copied()))
            .collect()
    };

    let mut rows = Vec::with_capacity(active.len() * 2);
    let mut summary = Vec::with_capacity(active.len());

    for spec in &active {
        let series_one = series_for(id_one, spec.key);
        let series_two = series_for(id_two, spec.key);

        let wins_one = tally_wins(spec, &series_one, &series_two);
        let wins_two = tally_wins(spec, &series_two, &series_one);

        // Summary runs over the union of both teams' valid values.
        let mut combined = stats::filter_valid(&series_one);
        combined.extend(stats::filter_valid(&series_two));
        summary.push((
            spec.display.to_string(),
            SummaryEntry {
                category_id: spec.id,
                mean: stats::mean(&combined),
                stdev: stats::stdev(&combined),
            },
        ));

        rows.push(build_row(team_one, spec, series_one, wins_one));
        rows.push(build_row(team_two, spec, series_two, wins_two));
    }

    let mut one_cells = Vec::with_capacity(current_week as usize);
    let mut two_cells = Vec::with_capacity(current_week as usize);
    for week in 1..=current_week {
        let outcome = matchup::evaluate_week(
            week_record(id_one, week),
            week_record(id_two, week),
            &active,
        );
        one_cells.push(outcome == Outcome::TeamOneWin);
        two_cells.push(outcome == Outcome::TeamTwoWin);
    }
    let head_to_head = vec![
        HeadToHeadRow {
            row_header: team_one.full_team_name.clone(),
            weeks: one_cells,
        },
        HeadToHeadRow {
            row_header: team_two.full_team_name.clone(),
            weeks: two_cells,
        },
    ];

    ComparisonResult {
        rows,
        summary,
        head_to_head,
    }
}

/// Count the weeks in which `own` strictly beats `opponent` under the
/// category's direction. Slices are aligned week-for-week.
fn tally_wins(spec: &CategorySpec, own: &[Option<f64>], opponent: &[Option<f64>]) -> u32 {
    own.iter()
        .zip(opponent.iter())
        .filter(|(mine, theirs)| wins::decide(spec, **mine, &[**theirs]))
        .count() as u32
}

fn build_row(
    team: &Team,
    spec: &CategorySpec,
    weeks: Vec<Option<f64>>,
    wins: u32,
) -> ComparisonRow {
    let valid = stats::filter_valid(&weeks);
    ComparisonRow {
        row_header: spec.display.to_string(),
        category_key: spec.key.to_string(),
        category_id: spec.id,
        team_name: team.full_team_name.clone(),
        mean: stats::mean(&valid),
        stdev: stats::stdev(&valid),
        min: stats::min(&valid),
        max: stats::max(&valid),
        wins,
        weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn team(id: i64, name: &str) -> Team {
        Team {
            team_id: id,
            full_team_name: name.to_string(),
        }
    }

    fn record(team_id: i64, week: u32, values: &[(&str, f64)]) -> ScoreboardRecord {
        let measurements: HashMap<String, f64> =
            values.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        ScoreboardRecord {
            team_id,
            week,
            measurements,
        }
    }

    fn two_teams() -> Vec<Team> {
        vec![team(1, "Thunder Hawks"), team(2, "Crimson Tide")]
    }

    /// The points scenario: team one scores 100 then 90, team two 80 then 95.
    fn points_fixture() -> Vec<ScoreboardRecord> {
        vec![
            record(1, 1, &[("pts", 100.0)]),
            record(1, 2, &[("pts", 90.0)]),
            record(2, 1, &[("pts", 80.0)]),
            record(2, 2, &[("pts", 95.0)]),
        ]
    }

    #[test]
    fn points_scenario_full_result() {
        let teams = two_teams();
        let result = compute(&teams, &points_fixture(), &[0], [1, 2], 2);

        assert_eq!(result.rows.len(), 2);
        let row_one = &result.rows[0];
        let row_two = &result.rows[1];

        assert_eq!(row_one.row_header, "PTS");
        assert_eq!(row_one.category_key, "pts");
        assert_eq!(row_one.category_id, 0);
        assert_eq!(row_one.team_name, "Thunder Hawks");
        assert_eq!(row_one.weeks, vec![Some(100.0), Some(90.0)]);
        assert_eq!(row_one.wins, 1, "team one takes week 1 only");
        assert!((row_one.mean.unwrap() - 95.0).abs() < f64::EPSILON);
        assert_eq!(row_one.min, Some(90.0));
        assert_eq!(row_one.max, Some(100.0));
        // Sample deviation of [100, 90]: sqrt(50).
        assert!((row_one.stdev.unwrap() - 50.0_f64.sqrt()).abs() < 1e-12);

        assert_eq!(row_two.row_header, "PTS");
        assert_eq!(row_two.team_name, "Crimson Tide");
        assert_eq!(row_two.wins, 1, "team two takes week 2 only");
        assert!((row_two.mean.unwrap() - 87.5).abs() < f64::EPSILON);

        // Combined summary over [100, 90, 80, 95], keyed by the label.
        assert_eq!(result.summary.len(), 1);
        let (label, points) = &result.summary[0];
        assert_eq!(label, "PTS");
        assert!((points.mean.unwrap() - 91.25).abs() < f64::EPSILON);

        // Head to head: week 1 to team one, week 2 to team two.
        assert_eq!(result.head_to_head.len(), 2);
        assert_eq!(result.head_to_head[0].weeks, vec![true, false]);
        assert_eq!(result.head_to_head[1].weeks, vec![false, true]);
    }

    #[test]
    fn missing_turnovers_value_wins_nothing() {
        // Turnovers are lower-is-better; team two never reported, so a real
        // 2.0 must not lose to absence and absence must not win.
        let teams = two_teams();
        let records = vec![record(1, 1, &[("to", 2.0)]), record(2, 1, &[])];
        let result = compute(&teams, &records, &[11], [1, 2], 1);

        assert_eq!(result.rows[0].wins, 0);
        assert_eq!(result.rows[1].wins, 0);
        assert_eq!(result.head_to_head[0].weeks, vec![false]);
        assert_eq!(result.head_to_head[1].weeks, vec![false]);
    }

    #[test]
    fn placeholder_selection_is_empty() {
        let teams = two_teams();
        let records = points_fixture();
        assert_eq!(compute(&teams, &records, &[0], [0, 2], 2), ComparisonResult::empty());
        assert_eq!(compute(&teams, &records, &[0], [1, 0], 2), ComparisonResult::empty());
        assert_eq!(compute(&teams, &records, &[0], [0, 0], 2), ComparisonResult::empty());
    }

    #[test]
    fn same_team_selection_is_empty() {
        let teams = two_teams();
        let result = compute(&teams, &points_fixture(), &[0], [1, 1], 2);
        assert!(result.rows.is_empty());
        assert!(result.summary.is_empty());
        assert!(result.head_to_head.is_empty());
    }

    #[test]
    fn unknown_team_id_is_empty() {
        let teams = two_teams();
        let result = compute(&teams, &points_fixture(), &[0], [1, 99], 2);
        assert_eq!(result, ComparisonResult::empty());
    }

    #[test]
    fn two_rows_per_active_category() {
        let teams = two_teams();
        let records = vec![
            record(1, 1, &[("pts", 400.0), ("reb", 170.0), ("to", 40.0)]),
            record(2, 1, &[("pts", 380.0), ("reb", 185.0), ("to", 45.0)]),
        ];
        let result = compute(&teams, &records, &[0, 6, 11], [1, 2], 1);

        assert_eq!(result.rows.len(), 6);
        assert_eq!(result.summary.len(), 3);

        // Catalog order (pts, reb, to), team one before team two within each.
        let ids: Vec<i64> = result.rows.iter().map(|r| r.category_id).collect();
        assert_eq!(ids, vec![0, 0, 6, 6, 11, 11]);
        let headers: Vec<&str> = result.rows.iter().map(|r| r.row_header.as_str()).collect();
        assert_eq!(headers, vec!["PTS", "PTS", "REB", "REB", "TO", "TO"]);
        let teams_in_rows: Vec<&str> = result.rows.iter().map(|r| r.team_name.as_str()).collect();
        assert_eq!(
            teams_in_rows,
            vec![
                "Thunder Hawks",
                "Crimson Tide",
                "Thunder Hawks",
                "Crimson Tide",
                "Thunder Hawks",
                "Crimson Tide"
            ]
        );
    }

    #[test]
    fn row_header_is_the_category_label_not_the_team() {
        let teams = two_teams();
        let result = compute(&teams, &points_fixture(), &[0], [1, 2], 2);

        // Both rows of the pair head with the label; the team name travels
        // in its own field.
        for row in &result.rows {
            assert_eq!(row.row_header, "PTS");
            assert_eq!(row.category_key, "pts");
        }
        assert_eq!(result.rows[0].team_name, "Thunder Hawks");
        assert_eq!(result.rows[1].team_name, "Crimson Tide");
    }

    #[test]
    fn summary_is_keyed_by_display_label_in_catalog_order() {
        // Settings deliberately shuffled; labels must follow catalog order.
        let teams = two_teams();
        let records = vec![
            record(1, 1, &[("pts", 100.0), ("to", 12.0), ("fg_pct", 0.45)]),
            record(2, 1, &[("pts", 80.0), ("to", 14.0), ("fg_pct", 0.48)]),
        ];
        let result = compute(&teams, &records, &[19, 0, 11], [1, 2], 1);

        let labels: Vec<&str> = result.summary.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["PTS", "TO", "FG%"]);
    }

    #[test]
    fn wins_sum_equals_weeks_where_both_defined() {
        // Week 1: only team one. Week 2: both. Week 3: only team two.
        let teams = two_teams();
        let records = vec![
            record(1, 1, &[("pts", 100.0)]),
            record(1, 2, &[("pts", 90.0)]),
            record(2, 2, &[("pts", 95.0)]),
            record(2, 3, &[("pts", 88.0)]),
        ];
        let result = compute(&teams, &records, &[0], [1, 2], 3);

        let both_defined = result.rows[0]
            .weeks
            .iter()
            .zip(result.rows[1].weeks.iter())
            .filter(|(a, b)| a.is_some() && b.is_some())
            .count() as u32;
        assert_eq!(both_defined, 1);
        assert_eq!(result.rows[0].wins + result.rows[1].wins, both_defined);
    }

    #[test]
    fn missing_week_leaves_a_hole_not_a_zero() {
        let teams = two_teams();
        let records = vec![
            record(1, 2, &[("pts", 50.0)]),
            record(2, 1, &[("pts", 60.0)]),
            record(2, 2, &[("pts", 40.0)]),
        ];
        let result = compute(&teams, &records, &[0], [1, 2], 2);

        let row_one = &result.rows[0];
        assert_eq!(row_one.weeks, vec![None, Some(50.0)]);
        // Aggregates come from the single valid value, never a zero default.
        assert_eq!(row_one.mean, Some(50.0));
        assert_eq!(row_one.min, Some(50.0));
        assert_eq!(row_one.max, Some(50.0));
        assert_eq!(row_one.stdev, None, "one value has no sample deviation");
    }

    #[test]
    fn summary_unions_both_teams_valid_values() {
        // Team one has one valid week, team two has two; summary covers all
        // three values.
        let teams = two_teams();
        let records = vec![
            record(1, 1, &[("pts", 10.0)]),
            record(2, 1, &[("pts", 20.0)]),
            record(2, 2, &[("pts", 30.0)]),
        ];
        let result = compute(&teams, &records, &[0], [1, 2], 2);

        let (_, entry) = &result.summary[0];
        assert!((entry.mean.unwrap() - 20.0).abs() < f64::EPSILON);
        // Sample stdev of [10, 20, 30] is 10.
        assert!((entry.stdev.unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn minutes_never_produces_rows() {
        let teams = two_teams();
        let records = vec![
            record(1, 1, &[("pts", 100.0), ("mins", 1200.0)]),
            record(2, 1, &[("pts", 80.0), ("mins", 1250.0)]),
        ];
        let result = compute(&teams, &records, &[0, 40], [1, 2], 1);

        assert_eq!(result.rows.len(), 2);
        assert!(result.rows.iter().all(|r| r.category_id == 0));
        assert_eq!(result.summary.len(), 1);
    }

    #[test]
    fn unknown_settings_ids_are_ignored() {
        let teams = two_teams();
        let result = compute(&teams, &points_fixture(), &[0, 777], [1, 2], 2);
        assert_eq!(result.rows.len(), 2);
    }

    #[test]
    fn empty_settings_give_structure_without_categories() {
        let teams = two_teams();
        let result = compute(&teams, &points_fixture(), &[], [1, 2], 2);
        assert!(result.rows.is_empty());
        assert!(result.summary.is_empty());
        // Weeks still exist; with nothing to win they are all ties.
        assert_eq!(result.head_to_head[0].weeks, vec![false, false]);
        assert_eq!(result.head_to_head[1].weeks, vec![false, false]);
    }

    #[test]
    fn week_zero_produces_empty_series() {
        let teams = two_teams();
        let result = compute(&teams, &points_fixture(), &[0], [1, 2], 0);
        assert_eq!(result.rows.len(), 2);
        assert!(result.rows[0].weeks.is_empty());
        assert_eq!(result.rows[0].mean, None);
        assert_eq!(result.rows[0].wins, 0);
        assert!(result.head_to_head[0].weeks.is_empty());
    }

    #[test]
    fn other_teams_records_do_not_leak_in() {
        let mut teams = two_teams();
        teams.push(team(3, "Bystanders"));
        let mut records = points_fixture();
        records.push(record(3, 1, &[("pts", 999.0)]));
        let result = compute(&teams, &records, &[0], [1, 2], 2);

        // Summary over the two selected teams only.
        assert!((result.summary[0].1.mean.unwrap() - 91.25).abs() < f64::EPSILON);
        assert_eq!(result.rows.len(), 2);
    }

    #[test]
    fn compute_is_idempotent_and_does_not_mutate_inputs() {
        let teams = two_teams();
        let records = points_fixture();
        let teams_before = teams.clone();
        let records_before = records.clone();

        let first = compute(&teams, &records, &[0], [1, 2], 2);
        let second = compute(&teams, &records, &[0], [1, 2], 2);

        assert_eq!(first, second);
        assert_eq!(teams, teams_before);
        assert_eq!(records, records_before);
    }

    #[test]
    fn head_to_head_cells_are_mutually_exclusive() {
        let teams = two_teams();
        let records = vec![
            record(1, 1, &[("pts", 100.0), ("reb", 150.0), ("to", 30.0)]),
            record(2, 1, &[("pts", 90.0), ("reb", 160.0), ("to", 35.0)]),
            record(1, 2, &[("pts", 85.0), ("reb", 140.0), ("to", 30.0)]),
            record(2, 2, &[("pts", 95.0), ("reb", 155.0), ("to", 25.0)]),
        ];
        let result = compute(&teams, &records, &[0, 6, 11], [1, 2], 2);

        for week in 0..2 {
            assert!(
                !(result.head_to_head[0].weeks[week] && result.head_to_head[1].weeks[week]),
                "week {} marked won by both teams",
                week + 1
            );
        }
        // Week 1: team one takes pts and to, team two reb. Week 2: team two
        // takes all three.
        assert_eq!(result.head_to_head[0].weeks, vec![true, false]);
        assert_eq!(result.head_to_head[1].weeks, vec![false, true]);
    }
}
