// Static category catalog for head-to-head category leagues.
//
// Categories are keyed by the platform's external stat id. The catalog is
// the single source of truth for measurement keys, display names, decimal
// precision and scoring direction; league settings merely enable a subset.

/// Scoring direction for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Larger values beat smaller ones (points, rebounds, ...).
    HigherIsBetter,
    /// Smaller values beat larger ones (turnovers, fouls, ...).
    LowerIsBetter,
}

/// A single category definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySpec {
    /// External stat id, as used in league settings and scoreboard exports.
    pub id: i64,
    /// Measurement key in scoreboard records.
    pub key: &'static str,
    /// Human-readable name for table headers.
    pub display: &'static str,
    /// Decimal places the presentation layer formats values to.
    pub digits: u8,
    /// Which way wins point.
    pub direction: Direction,
}

/// Measurement key of the minutes category. Minutes are tracked on the
/// scoreboard but never compared, no matter what the league settings enable.
pub const MINUTES_KEY: &str = "mins";

/// Full catalog, ordered by ascending external id. Active-category selection
/// preserves this order regardless of the order ids appear in settings.
pub const CATALOG: &[CategorySpec] = &[
    CategorySpec { id: 0, key: "pts", display: "PTS", digits: 1, direction: Direction::HigherIsBetter },
    CategorySpec { id: 1, key: "blk", display: "BLK", digits: 1, direction: Direction::HigherIsBetter },
    CategorySpec { id: 2, key: "stl", display: "STL", digits: 1, direction: Direction::HigherIsBetter },
    CategorySpec { id: 3, key: "ast", display: "AST", digits: 1, direction: Direction::HigherIsBetter },
    CategorySpec { id: 4, key: "oreb", display: "OREB", digits: 1, direction: Direction::HigherIsBetter },
    CategorySpec { id: 5, key: "dreb", display: "DREB", digits: 1, direction: Direction::HigherIsBetter },
    CategorySpec { id: 6, key: "reb", display: "REB", digits: 1, direction: Direction::HigherIsBetter },
    CategorySpec { id: 7, key: "ejs", display: "EJ", digits: 1, direction: Direction::LowerIsBetter },
    CategorySpec { id: 9, key: "pf", display: "PF", digits: 1, direction: Direction::LowerIsBetter },
    CategorySpec { id: 11, key: "to", display: "TO", digits: 1, direction: Direction::LowerIsBetter },
    CategorySpec { id: 13, key: "fgm", display: "FGM", digits: 1, direction: Direction::HigherIsBetter },
    CategorySpec { id: 15, key: "ftm", display: "FTM", digits: 1, direction: Direction::HigherIsBetter },
    CategorySpec { id: 17, key: "tpm", display: "3PM", digits: 1, direction: Direction::HigherIsBetter },
    CategorySpec { id: 19, key: "fg_pct", display: "FG%", digits: 4, direction: Direction::HigherIsBetter },
    CategorySpec { id: 20, key: "ft_pct", display: "FT%", digits: 4, direction: Direction::HigherIsBetter },
    CategorySpec { id: 21, key: "tp_pct", display: "3P%", digits: 4, direction: Direction::HigherIsBetter },
    CategorySpec { id: 40, key: "mins", display: "MIN", digits: 1, direction: Direction::HigherIsBetter },
];

/// Look up a catalog entry by external id.
pub fn find(id: i64) -> Option<&'static CategorySpec> {
    CATALOG.iter().find(|c| c.id == id)
}

/// Return the active categories for the given league settings: every catalog
/// entry whose id is enabled, minus minutes, in catalog order. Settings ids
/// with no catalog entry are silently ignored.
pub fn select_active(settings: &[i64]) -> Vec<&'static CategorySpec> {
    CATALOG
        .iter()
        .filter(|c| settings.contains(&c.id) && c.key != MINUTES_KEY)
        .collect()
}
