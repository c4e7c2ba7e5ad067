use std::fmt;

use super::model::{columns, Cell, GameTable};

// ---------------------------------------------------------------------------
// Control values
// ---------------------------------------------------------------------------

/// Which game results to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultMode {
    #[default]
    All,
    Win,
    Loss,
}

impl ResultMode {
    pub const ALL: [ResultMode; 3] = [ResultMode::All, ResultMode::Win, ResultMode::Loss];

    /// The `Result` code this mode selects, `None` for no restriction.
    fn code(self) -> Option<&'static str> {
        match self {
            ResultMode::All => None,
            ResultMode::Win => Some("W"),
            ResultMode::Loss => Some("L"),
        }
    }
}

impl fmt::Display for ResultMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultMode::All => write!(f, "All"),
            ResultMode::Win => write!(f, "Win"),
            ResultMode::Loss => write!(f, "Loss"),
        }
    }
}

/// Opponent selection: everything, or one exact team name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OpponentFilter {
    #[default]
    All,
    Team(String),
}

impl OpponentFilter {
    /// Label of the "no restriction" entry in the opponent selector.
    pub const ALL_LABEL: &'static str = "All";

    /// Interpret a selector entry, where `"All"` means no restriction.
    pub fn from_selection(selection: &str) -> Self {
        if selection == Self::ALL_LABEL {
            OpponentFilter::All
        } else {
            OpponentFilter::Team(selection.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            OpponentFilter::All => Self::ALL_LABEL,
            OpponentFilter::Team(name) => name,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter stages
// ---------------------------------------------------------------------------

/// Keep games whose `Result` matches the mode. Values other than `W`/`L`
/// only survive under [`ResultMode::All`].
pub fn by_result(table: &GameTable, mode: ResultMode) -> GameTable {
    let Some(code) = mode.code() else {
        return table.clone();
    };
    table.retain(|row| table.cell(row, columns::RESULT).and_then(Cell::as_str) == Some(code))
}

/// Keep games with `Points >= min_points`. Games without an integer score
/// never pass.
pub fn by_min_points(table: &GameTable, min_points: i64) -> GameTable {
    table.retain(|row| table.points(row).is_some_and(|p| p >= min_points))
}

/// Keep games against the selected opponent. Skipped when the table has no
/// `Opponent` column.
pub fn by_opponent(table: &GameTable, opponent: &OpponentFilter) -> GameTable {
    let OpponentFilter::Team(name) = opponent else {
        return table.clone();
    };
    if !table.has_column(columns::OPPONENT) {
        log::debug!("no {} column, opponent filter '{name}' skipped", columns::OPPONENT);
        return table.clone();
    }
    table.retain(|row| table.cell(row, columns::OPPONENT).and_then(Cell::as_str) == Some(name.as_str()))
}

/// Apply result, minimum-points and opponent filters, in that order.
///
/// Pure: `table` is untouched and row order is preserved. An empty result is
/// a valid outcome.
pub fn filter(
    table: &GameTable,
    mode: ResultMode,
    min_points: i64,
    opponent: &OpponentFilter,
) -> GameTable {
    let by_mode = by_result(table, mode);
    let by_points = by_min_points(&by_mode, min_points);
    by_opponent(&by_points, opponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::games;

    fn three_games() -> GameTable {
        games(&[("W", 95, "Celtics"), ("L", 112, "Knicks"), ("W", 118, "Celtics")])
    }

    fn labels(table: &GameTable) -> Vec<usize> {
        table.rows().iter().map(|r| r.index).collect()
    }

    #[test]
    fn win_above_hundred_keeps_only_third_game() {
        let table = three_games();
        let out = filter(&table, ResultMode::Win, 100, &OpponentFilter::All);
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows()[0], table.rows()[2]);
    }

    #[test]
    fn opponent_selects_exact_team() {
        let table = three_games();
        let out = filter(&table, ResultMode::All, 0, &OpponentFilter::from_selection("Knicks"));
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows()[0], table.rows()[1]);
    }

    #[test]
    fn mode_predicate_holds_and_order_is_preserved() {
        let table = games(&[
            ("L", 100, "A"),
            ("W", 101, "B"),
            ("T", 102, "C"),
            ("W", 103, "D"),
            ("L", 104, "E"),
        ]);
        for mode in ResultMode::ALL {
            let out = filter(&table, mode, 0, &OpponentFilter::All);
            assert!(out.len() <= table.len());
            let ids = labels(&out);
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(ids, sorted, "{mode} reordered rows");
            for row in out.rows() {
                let result = out.cell(row, "Result").and_then(Cell::as_str);
                match mode {
                    ResultMode::All => {}
                    ResultMode::Win => assert_eq!(result, Some("W")),
                    ResultMode::Loss => assert_eq!(result, Some("L")),
                }
            }
        }
        assert_eq!(labels(&filter(&table, ResultMode::All, 0, &OpponentFilter::All)).len(), 5);
        assert_eq!(labels(&filter(&table, ResultMode::Win, 0, &OpponentFilter::All)), vec![1, 3]);
        assert_eq!(labels(&filter(&table, ResultMode::Loss, 0, &OpponentFilter::All)), vec![0, 4]);
    }

    #[test]
    fn reapplying_the_same_filter_is_a_no_op() {
        let table = three_games();
        for mode in ResultMode::ALL {
            for min_points in [0, 100, 113, 200] {
                for opponent in ["All", "Celtics", "Knicks", "Heat"] {
                    let opponent = OpponentFilter::from_selection(opponent);
                    let once = filter(&table, mode, min_points, &opponent);
                    let twice = filter(&once, mode, min_points, &opponent);
                    assert_eq!(once, twice);
                }
            }
        }
    }

    #[test]
    fn raising_the_threshold_never_adds_games() {
        let table = three_games();
        for mode in ResultMode::ALL {
            let mut previous = labels(&filter(&table, mode, 0, &OpponentFilter::All));
            for min_points in (0..=130).step_by(5) {
                let current = labels(&filter(&table, mode, min_points, &OpponentFilter::All));
                assert!(current.iter().all(|i| previous.contains(i)));
                previous = current;
            }
        }
    }

    #[test]
    fn unmatched_filters_yield_an_empty_table() {
        let out = filter(&three_games(), ResultMode::Loss, 0, &OpponentFilter::from_selection("Celtics"));
        assert!(out.is_empty());
        assert_eq!(out.columns(), three_games().columns());
    }

    #[test]
    fn threshold_outside_data_range_is_applied_as_is() {
        let table = three_games();
        assert_eq!(filter(&table, ResultMode::All, -50, &OpponentFilter::All).len(), 3);
        assert!(filter(&table, ResultMode::All, 500, &OpponentFilter::All).is_empty());
    }

    #[test]
    fn missing_opponent_column_skips_the_stage() {
        let table = three_games().drop_columns(&["Opponent"]);
        let out = filter(&table, ResultMode::All, 0, &OpponentFilter::from_selection("Knicks"));
        assert_eq!(out, table);
    }

    #[test]
    fn filtering_leaves_the_source_untouched() {
        let table = three_games();
        let before = table.clone();
        let _ = filter(&table, ResultMode::Win, 110, &OpponentFilter::from_selection("Celtics"));
        assert_eq!(table, before);
    }

    #[test]
    fn selection_label_round_trips() {
        assert_eq!(OpponentFilter::from_selection("All"), OpponentFilter::All);
        assert_eq!(OpponentFilter::from_selection("Knicks").label(), "Knicks");
        assert_eq!(OpponentFilter::All.label(), "All");
    }
}
