use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Column labels
// ---------------------------------------------------------------------------

/// Display labels of the columns the dashboard reads directly.
pub mod columns {
    pub const RESULT: &str = "Result";
    pub const POINTS: &str = "Points";
    pub const OPPONENT: &str = "Opponent";
}

// ---------------------------------------------------------------------------
// Cell – a single value in a game table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the dtypes a CSV reader would infer.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Float(f64),
    Null,
}

impl Cell {
    /// Infer the cell type from raw text.
    ///
    /// Zero-padded numbers such as game ids (`0042200101`) stay text so the
    /// padding survives display.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Cell::Null;
        }
        let digits = s.strip_prefix('-').unwrap_or(s);
        let zero_padded = digits.len() > 1 && digits.starts_with('0') && !digits.contains('.');
        if zero_padded {
            return Cell::Text(s.to_string());
        }
        if let Ok(i) = s.parse::<i64>() {
            return Cell::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return Cell::Float(f);
        }
        Cell::Text(s.to_string())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Integer(i) => write!(f, "{i}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// GameRow – one row of the table
// ---------------------------------------------------------------------------

/// A single game, with its index label and one cell per table column.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    /// Index label. Contiguous after load, kept as-is through filtering.
    pub index: usize,
    pub cells: Vec<Cell>,
}

// ---------------------------------------------------------------------------
// GameTable – ordered rows with named columns
// ---------------------------------------------------------------------------

/// An ordered table of games. Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameTable {
    columns: Vec<String>,
    rows: Vec<GameRow>,
}

impl GameTable {
    /// Build a table from raw cell rows, labelling them 0..n.
    ///
    /// Short rows are padded with nulls and long rows truncated so the table
    /// stays rectangular.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, mut cells)| {
                cells.resize(width, Cell::Null);
                GameRow { index, cells }
            })
            .collect();
        GameTable { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[GameRow] {
        &self.rows
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell of `row` in the named column, if the column exists.
    pub fn cell<'a>(&self, row: &'a GameRow, column: &str) -> Option<&'a Cell> {
        self.column_index(column).and_then(|i| row.cells.get(i))
    }

    /// Remove the named columns. Names that are not present are ignored.
    pub fn drop_columns(&self, names: &[&str]) -> GameTable {
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !names.contains(&self.columns[i].as_str()))
            .collect();
        GameTable {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| GameRow {
                    index: row.index,
                    cells: keep.iter().map(|&i| row.cells[i].clone()).collect(),
                })
                .collect(),
        }
    }

    /// Rename columns found in `mapping`; other columns keep their name.
    pub fn rename_columns(&self, mapping: &[(&str, &str)]) -> GameTable {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                mapping
                    .iter()
                    .find(|(from, _)| from == c)
                    .map(|(_, to)| to.to_string())
                    .unwrap_or_else(|| c.clone())
            })
            .collect();
        GameTable {
            columns,
            rows: self.rows.clone(),
        }
    }

    /// Relabel rows 0..n, keeping their order.
    pub fn reset_index(&self) -> GameTable {
        GameTable {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .enumerate()
                .map(|(index, row)| GameRow {
                    index,
                    cells: row.cells.clone(),
                })
                .collect(),
        }
    }

    /// New table with the rows satisfying `keep`, in their original order.
    pub fn retain<F>(&self, mut keep: F) -> GameTable
    where
        F: FnMut(&GameRow) -> bool,
    {
        GameTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|&row| keep(row)).cloned().collect(),
        }
    }

    /// Integer Points of a row, if the column exists and the cell is an integer.
    pub fn points(&self, row: &GameRow) -> Option<i64> {
        self.cell(row, columns::POINTS).and_then(Cell::as_i64)
    }

    /// Sorted unique text values of a column, or `None` if it is absent.
    /// Null and numeric cells are skipped.
    pub fn unique_text(&self, column: &str) -> Option<Vec<String>> {
        let idx = self.column_index(column)?;
        let unique: BTreeSet<String> = self
            .rows
            .iter()
            .filter_map(|row| row.cells[idx].as_str())
            .map(str::to_string)
            .collect();
        Some(unique.into_iter().collect())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Table with `Result`, `Points`, `Opponent` columns.
    pub(crate) fn games(rows: &[(&str, i64, &str)]) -> GameTable {
        GameTable::new(
            vec!["Result".into(), "Points".into(), "Opponent".into()],
            rows.iter()
                .map(|&(wl, pts, opp)| {
                    vec![
                        Cell::Text(wl.to_string()),
                        Cell::Integer(pts),
                        Cell::Text(opp.to_string()),
                    ]
                })
                .collect(),
        )
    }

    #[test]
    fn parse_infers_cell_types() {
        assert_eq!(Cell::parse(""), Cell::Null);
        assert_eq!(Cell::parse("112"), Cell::Integer(112));
        assert_eq!(Cell::parse("-7"), Cell::Integer(-7));
        assert_eq!(Cell::parse("0"), Cell::Integer(0));
        assert_eq!(Cell::parse("0.5"), Cell::Float(0.5));
        assert_eq!(Cell::parse("W"), Cell::Text("W".into()));
        assert_eq!(Cell::parse("2023-05-17"), Cell::Text("2023-05-17".into()));
    }

    #[test]
    fn parse_keeps_zero_padded_ids_as_text() {
        assert_eq!(Cell::parse("0042200101"), Cell::Text("0042200101".into()));
    }

    #[test]
    fn drop_columns_ignores_missing_names() {
        let table = games(&[("W", 100, "Bucks")]);
        let dropped = table.drop_columns(&["TEAM_ID", "TEAM_ABBREVIATION"]);
        assert_eq!(dropped, table);
    }

    #[test]
    fn drop_columns_removes_present_names() {
        let table = games(&[("W", 100, "Bucks"), ("L", 99, "Knicks")]);
        let dropped = table.drop_columns(&["Opponent", "TEAM_ID"]);
        assert_eq!(dropped.columns(), &["Result".to_string(), "Points".to_string()]);
        assert_eq!(dropped.rows()[1].cells, vec![Cell::Text("L".into()), Cell::Integer(99)]);
    }

    #[test]
    fn rename_passes_unmapped_columns_through() {
        let table = GameTable::new(vec!["PTS".into(), "EXTRA".into()], vec![]);
        let renamed = table.rename_columns(&[("PTS", "Points")]);
        assert_eq!(renamed.columns(), &["Points".to_string(), "EXTRA".to_string()]);
    }

    #[test]
    fn retain_keeps_labels_and_reset_relabels() {
        let table = games(&[("W", 90, "A"), ("L", 120, "B"), ("W", 130, "C")]);
        let kept = table.retain(|row| table.points(row).is_some_and(|p| p > 100));
        let labels: Vec<usize> = kept.rows().iter().map(|r| r.index).collect();
        assert_eq!(labels, vec![1, 2]);

        let reset = kept.reset_index();
        let labels: Vec<usize> = reset.rows().iter().map(|r| r.index).collect();
        assert_eq!(labels, vec![0, 1]);
    }

    #[test]
    fn unique_text_is_sorted_and_absent_column_is_none() {
        let table = games(&[("W", 90, "Knicks"), ("L", 120, "Celtics"), ("W", 130, "Knicks")]);
        assert_eq!(
            table.unique_text("Opponent"),
            Some(vec!["Celtics".to_string(), "Knicks".to_string()])
        );
        assert_eq!(table.unique_text("Arena"), None);
    }

    #[test]
    fn unique_text_skips_null_and_numeric_cells() {
        let table = GameTable::new(
            vec!["Opponent".into()],
            vec![
                vec![Cell::Text("Knicks".into())],
                vec![Cell::Null],
                vec![Cell::Integer(76)],
                vec![Cell::Float(1.5)],
            ],
        );
        assert_eq!(table.unique_text("Opponent"), Some(vec!["Knicks".to_string()]));
    }

    #[test]
    fn new_pads_short_rows() {
        let table = GameTable::new(vec!["a".into(), "b".into()], vec![vec![Cell::Integer(1)]]);
        assert_eq!(table.rows()[0].cells, vec![Cell::Integer(1), Cell::Null]);
    }
}
