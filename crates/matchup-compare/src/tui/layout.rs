// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the comparison dashboard:
//
// +--------------------------------------------------+
// | Title Bar (1 row)                                 |
// +----------------+---------------------------------+
// | Team Selector  | Weekly Comparison Matrix (fill)  |
// | (28 cols)      +---------------------------------+
// |                | Combined Summary (12 rows)       |
// |                +---------------------------------+
// |                | Head-to-Head (5 rows)            |
// +----------------+---------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: league name and current week.
    pub title_bar: Rect,
    /// Left column: team list with the selection cursor.
    pub team_list: Rect,
    /// Right column top: per-category weekly matrix.
    pub comparison: Rect,
    /// Right column middle: combined mean/stdev per category.
    pub summary: Rect,
    /// Right column bottom: week-by-week winners.
    pub head_to_head: Rect,
    /// Bottom row: selection state, notices, keyboard hints.
    pub status_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
///
/// The title and status bars take fixed single rows and the head-to-head
/// table a fixed strip (two team rows plus chrome); the comparison matrix
/// absorbs whatever height remains.
pub fn build_layout(area: Rect) -> AppLayout {
    let [title_bar, body, status_bar] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(10),
        Constraint::Length(1),
    ])
    .areas(area);

    let [team_list, results] =
        Layout::horizontal([Constraint::Length(28), Constraint::Min(40)]).areas(body);

    let [comparison, summary, head_to_head] = Layout::vertical([
        Constraint::Min(8),
        Constraint::Length(12),
        Constraint::Length(5),
    ])
    .areas(results);

    AppLayout {
        title_bar,
        team_list,
        comparison,
        summary,
        head_to_head,
        status_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn zones(layout: &AppLayout) -> [(&'static str, Rect); 6] {
        [
            ("title_bar", layout.title_bar),
            ("team_list", layout.team_list),
            ("comparison", layout.comparison),
            ("summary", layout.summary),
            ("head_to_head", layout.head_to_head),
            ("status_bar", layout.status_bar),
        ]
    }

    #[test]
    fn every_zone_is_nonzero_and_inside_the_area() {
        for area in [Rect::new(0, 0, 160, 50), Rect::new(0, 0, 72, 30)] {
            let layout = build_layout(area);
            for (name, rect) in zones(&layout) {
                assert!(rect.width > 0 && rect.height > 0, "{name} empty in {area:?}");
                assert!(rect.right() <= area.right(), "{name} spills right in {area:?}");
                assert!(rect.bottom() <= area.bottom(), "{name} spills down in {area:?}");
            }
        }
    }

    #[test]
    fn bars_are_single_rows_at_the_edges() {
        let area = Rect::new(0, 0, 160, 50);
        let layout = build_layout(area);
        assert_eq!(layout.title_bar.height, 1);
        assert_eq!(layout.title_bar.y, 0);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.bottom(), area.bottom());
    }

    #[test]
    fn summary_and_head_to_head_strips_are_fixed() {
        let layout = build_layout(Rect::new(0, 0, 160, 50));
        assert_eq!(layout.summary.height, 12);
        assert_eq!(layout.head_to_head.height, 5);
    }

    #[test]
    fn results_column_is_wider_than_the_selector() {
        let layout = build_layout(Rect::new(0, 0, 160, 50));
        assert_eq!(layout.team_list.width, 28);
        assert!(layout.comparison.width > layout.team_list.width);
    }

    #[test]
    fn results_sections_stack_and_share_a_width() {
        let layout = build_layout(Rect::new(0, 0, 160, 50));
        assert!(layout.comparison.y < layout.summary.y);
        assert!(layout.summary.y < layout.head_to_head.y);
        assert_eq!(layout.comparison.width, layout.summary.width);
        assert_eq!(layout.summary.width, layout.head_to_head.width);
    }

    #[test]
    fn selector_spans_the_full_body_height() {
        let layout = build_layout(Rect::new(0, 0, 160, 50));
        let results_height =
            layout.comparison.height + layout.summary.height + layout.head_to_head.height;
        assert_eq!(layout.team_list.height, results_height);
    }
}
