use std::fs::File;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float64Type, Int32Type, Int64Type};
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::LoadError;
use super::model::{columns, Cell, GameTable};

/// Source columns every game file must carry.
pub const REQUIRED_COLUMNS: [&str; 14] = [
    "SEASON_ID",
    "GAME_ID",
    "TEAM_NAME",
    "MATCHUP",
    "GAME_DATE",
    "WL",
    "PTS",
    "REB",
    "AST",
    "STL",
    "BLK",
    "TOV",
    "PF",
    "PLUS_MINUS",
];

/// Technical identifiers removed before display, when present.
pub const IDENTIFIER_COLUMNS: [&str; 2] = ["TEAM_ID", "TEAM_ABBREVIATION"];

/// Source column → display label.
pub const COLUMN_LABELS: [(&str, &str); 15] = [
    ("SEASON_ID", "Season"),
    ("GAME_ID", "Game"),
    ("TEAM_NAME", "Team"),
    ("MATCHUP", "Matchup"),
    ("GAME_DATE", "Date"),
    ("WL", "Result"),
    ("PTS", "Points"),
    ("REB", "Rebounds"),
    ("AST", "Assists"),
    ("STL", "Steals"),
    ("BLK", "Blocks"),
    ("TOV", "Turnovers"),
    ("PF", "Fouls"),
    ("PLUS_MINUS", "PlusMinus"),
    ("OPPONENT", "Opponent"),
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a game table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.tsv` – header row, one game per line (recommended)
/// * `.json`         – `[{ "SEASON_ID": "42022", "PTS": 112, ... }, ...]`
/// * `.parquet`      – flat scalar columns
///
/// The result has identifier columns dropped, display labels applied and
/// rows indexed 0..n.
pub fn load_file(path: &Path) -> Result<GameTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let raw = match ext.as_str() {
        "csv" => read_delimited(path, b',')?,
        "tsv" => read_delimited(path, b'\t')?,
        "json" => read_json(path)?,
        "parquet" | "pq" => read_parquet(path)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };
    prepare(raw)
}

/// Validate a raw table and turn it into its display form.
pub fn prepare(raw: GameTable) -> Result<GameTable, LoadError> {
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !raw.has_column(c)) {
        return Err(LoadError::MissingColumn(missing.to_string()));
    }

    let table = raw
        .drop_columns(&IDENTIFIER_COLUMNS)
        .rename_columns(&COLUMN_LABELS);

    for row in table.rows() {
        if !table.points(row).is_some_and(|p| p >= 0) {
            return Err(LoadError::InvalidValue {
                row: row.index,
                column: columns::POINTS.to_string(),
                value: table
                    .cell(row, columns::POINTS)
                    .map(Cell::to_string)
                    .unwrap_or_default(),
            });
        }
    }

    Ok(table.reset_index())
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Delimited loader
// ---------------------------------------------------------------------------

fn read_delimited(path: &Path, delimiter: u8) -> Result<GameTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(open(path)?);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(Cell::parse).collect());
    }

    Ok(GameTable::new(headers, rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
/// Column order follows first appearance of each key.
fn read_json(path: &Path) -> Result<GameTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root
        .as_array()
        .ok_or_else(|| LoadError::Malformed("expected a top-level JSON array".into()))?;

    let mut headers: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| LoadError::Malformed(format!("row {i} is not a JSON object")))?;
        for key in obj.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .map(|rec| {
            headers
                .iter()
                .map(|h| rec.get(h).map(json_to_cell).unwrap_or(Cell::Null))
                .collect()
        })
        .collect();

    Ok(GameTable::new(headers, rows))
}

fn json_to_cell(val: &JsonValue) -> Cell {
    match val {
        JsonValue::String(s) => Cell::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Cell::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Cell::Float(f)
            } else {
                Cell::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => Cell::Text(b.to_string()),
        JsonValue::Null => Cell::Null,
        other => Cell::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn read_parquet(path: &Path) -> Result<GameTable, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build()?;

    let mut rows = Vec::new();
    for batch in reader {
        let batch = batch?;
        for row in 0..batch.num_rows() {
            rows.push(
                batch
                    .columns()
                    .iter()
                    .map(|col| arrow_to_cell(col, row))
                    .collect(),
            );
        }
    }

    Ok(GameTable::new(headers, rows))
}

/// Extract a single cell from an Arrow column at a given row.
fn arrow_to_cell(col: &ArrayRef, row: usize) -> Cell {
    if col.is_null(row) {
        return Cell::Null;
    }
    match col.data_type() {
        DataType::Utf8 => Cell::Text(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Cell::Text(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => Cell::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => Cell::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float64 => Cell::Float(col.as_primitive::<Float64Type>().value(row)),
        // Remaining scalar types go through their display form.
        _ => array_value_to_string(col.as_ref(), row)
            .map(|s| Cell::parse(&s))
            .unwrap_or(Cell::Null),
    }
}
