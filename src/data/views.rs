use super::model::{columns, GameTable};

/// Points at or above which a game counts as high-scoring.
pub const HIGH_SCORING_POINTS: i64 = 110;

/// A fixed map location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Home venue marker shown on the map. Not derived from the data.
pub const HOME_VENUE: GeoPoint = GeoPoint {
    lat: 25.7617,
    lon: -80.1918,
};

/// High-scoring games of a table and how many there are.
#[derive(Debug, Clone, PartialEq)]
pub struct HighScoring {
    pub count: usize,
    pub games: GameTable,
}

/// Games of `table` with at least [`HIGH_SCORING_POINTS`] points.
pub fn high_scoring(table: &GameTable) -> HighScoring {
    let games = table.retain(|row| table.points(row).is_some_and(|p| p >= HIGH_SCORING_POINTS));
    HighScoring {
        count: games.len(),
        games,
    }
}

/// `(index label, points)` per game, in row order.
pub fn points_series(table: &GameTable) -> Vec<(usize, i64)> {
    table
        .rows()
        .iter()
        .filter_map(|row| table.points(row).map(|p| (row.index, p)))
        .collect()
}

/// Message shown when filtering removed games, `None` otherwise.
pub fn size_notice(filtered: &GameTable, full: &GameTable) -> Option<String> {
    (filtered.len() < full.len()).then(|| {
        format!(
            "Filtered down to {} games from {} total.",
            filtered.len(),
            full.len()
        )
    })
}

/// Sorted distinct opponents, or `None` when the table has no opponent column.
pub fn opponent_options(table: &GameTable) -> Option<Vec<String>> {
    table.unique_text(columns::OPPONENT)
}

/// Lowest and highest score in the table; the bounds of the points slider.
pub fn points_range(table: &GameTable) -> Option<(i64, i64)> {
    let mut points = table.rows().iter().filter_map(|row| table.points(row));
    let first = points.next()?;
    Some(points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter, OpponentFilter, ResultMode};
    use crate::data::model::tests::games;
    use crate::data::model::Cell;

    fn series() -> GameTable {
        games(&[
            ("W", 130, "Bucks"),
            ("L", 99, "Bucks"),
            ("W", 110, "Knicks"),
            ("W", 109, "Knicks"),
            ("L", 111, "Celtics"),
        ])
    }

    #[test]
    fn high_scoring_counts_games_at_or_above_threshold() {
        let table = series();
        let hs = high_scoring(&filter(&table, ResultMode::All, 0, &OpponentFilter::All));
        let expected = table
            .rows()
            .iter()
            .filter(|r| table.points(r).is_some_and(|p| p >= 110))
            .count();
        assert_eq!(hs.count, expected);
        assert_eq!(hs.count, 3);
        assert_eq!(hs.games.len(), hs.count);
    }

    #[test]
    fn high_scoring_uses_the_filtered_table() {
        let losses = filter(&series(), ResultMode::Loss, 0, &OpponentFilter::All);
        let hs = high_scoring(&losses);
        assert_eq!(hs.count, 1);
        assert_eq!(hs.games.rows()[0].index, 4);
    }

    #[test]
    fn points_series_follows_row_order() {
        let wins = filter(&series(), ResultMode::Win, 0, &OpponentFilter::All);
        assert_eq!(points_series(&wins), vec![(0, 130), (2, 110), (3, 109)]);
    }

    #[test]
    fn size_notice_only_when_games_were_removed() {
        let table = series();
        assert_eq!(size_notice(&table, &table), None);
        let wins = filter(&table, ResultMode::Win, 0, &OpponentFilter::All);
        assert_eq!(
            size_notice(&wins, &table).as_deref(),
            Some("Filtered down to 3 games from 5 total.")
        );
    }

    #[test]
    fn opponent_options_are_sorted_and_distinct() {
        assert_eq!(
            opponent_options(&series()),
            Some(vec!["Bucks".into(), "Celtics".into(), "Knicks".into()])
        );
        assert_eq!(opponent_options(&series().drop_columns(&["Opponent"])), None);
    }

    #[test]
    fn every_opponent_option_selects_its_games() {
        let mut rows: Vec<Vec<Cell>> = series()
            .rows()
            .iter()
            .map(|row| row.cells.clone())
            .collect();
        rows.push(vec![Cell::Text("W".into()), Cell::Integer(101), Cell::Null]);
        rows.push(vec![Cell::Text("L".into()), Cell::Integer(99), Cell::Integer(76)]);
        let table = GameTable::new(series().columns().to_vec(), rows);

        let options = opponent_options(&table).expect("opponent column");
        assert!(!options.contains(&"<null>".to_string()));
        assert!(!options.contains(&"76".to_string()));
        for option in options {
            let picked = filter(
                &table,
                ResultMode::All,
                0,
                &OpponentFilter::from_selection(&option),
            );
            assert!(!picked.is_empty(), "{option} selects nothing");
        }
    }

    #[test]
    fn points_range_spans_the_table() {
        assert_eq!(points_range(&series()), Some((99, 130)));
        assert_eq!(points_range(&GameTable::default()), None);
    }
}
