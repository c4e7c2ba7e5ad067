use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// One game in the raw input schema.
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct RawGame {
    season_id: String,
    team_id: i64,
    team_abbreviation: String,
    team_name: String,
    game_id: String,
    game_date: String,
    matchup: String,
    wl: String,
    pts: i64,
    reb: i64,
    ast: i64,
    stl: i64,
    blk: i64,
    tov: i64,
    pf: i64,
    plus_minus: i64,
    opponent: String,
}

/// (date, opponent abbreviation, home game, points for, points against)
type Fixture = (&'static str, &'static str, bool, i64, i64);

struct Series {
    round: u8,
    opponent: &'static str,
    games: &'static [Fixture],
}

const SCHEDULE: [Series; 4] = [
    Series {
        round: 1,
        opponent: "Bucks",
        games: &[
            ("2023-04-16", "MIL", false, 130, 117),
            ("2023-04-19", "MIL", false, 99, 138),
            ("2023-04-22", "MIL", true, 121, 99),
            ("2023-04-24", "MIL", true, 119, 114),
            ("2023-04-26", "MIL", false, 128, 126),
        ],
    },
    Series {
        round: 2,
        opponent: "Knicks",
        games: &[
            ("2023-04-30", "NYK", false, 108, 101),
            ("2023-05-02", "NYK", false, 105, 111),
            ("2023-05-06", "NYK", true, 105, 86),
            ("2023-05-08", "NYK", true, 109, 101),
            ("2023-05-10", "NYK", false, 103, 112),
            ("2023-05-12", "NYK", true, 96, 92),
        ],
    },
    Series {
        round: 3,
        opponent: "Celtics",
        games: &[
            ("2023-05-17", "BOS", false, 123, 116),
            ("2023-05-19", "BOS", false, 111, 105),
            ("2023-05-21", "BOS", true, 128, 102),
            ("2023-05-23", "BOS", true, 99, 116),
            ("2023-05-25", "BOS", false, 97, 110),
            ("2023-05-27", "BOS", true, 103, 104),
            ("2023-05-29", "BOS", false, 103, 84),
        ],
    },
    Series {
        round: 4,
        opponent: "Nuggets",
        games: &[
            ("2023-06-01", "DEN", false, 93, 104),
            ("2023-06-04", "DEN", false, 111, 108),
            ("2023-06-07", "DEN", true, 94, 109),
            ("2023-06-09", "DEN", true, 95, 108),
            ("2023-06-12", "DEN", false, 89, 94),
        ],
    },
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo + 1) as u64) as i64
    }
}

fn build_games(rng: &mut SimpleRng) -> Vec<RawGame> {
    let mut games = Vec::new();
    for series in &SCHEDULE {
        for (n, &(date, abbr, home, pts, against)) in series.games.iter().enumerate() {
            let matchup = if home {
                format!("MIA vs. {abbr}")
            } else {
                format!("MIA @ {abbr}")
            };
            games.push(RawGame {
                season_id: "42022".to_string(),
                team_id: 1610612748,
                team_abbreviation: "MIA".to_string(),
                team_name: "Miami Heat".to_string(),
                game_id: format!("0042200{}0{}", series.round, n + 1),
                game_date: date.to_string(),
                matchup,
                wl: if pts > against { "W" } else { "L" }.to_string(),
                pts,
                reb: rng.range(33, 50),
                ast: rng.range(17, 30),
                stl: rng.range(4, 11),
                blk: rng.range(1, 7),
                tov: rng.range(8, 17),
                pf: rng.range(15, 25),
                plus_minus: pts - against,
                opponent: series.opponent.to_string(),
            });
        }
    }
    games
}

fn write_csv(path: &Path, games: &[RawGame]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for game in games {
        writer.serialize(game).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &Path, games: &[RawGame]) -> Result<()> {
    fn text(games: &[RawGame], f: impl Fn(&RawGame) -> &str) -> ArrayRef {
        Arc::new(StringArray::from(games.iter().map(f).collect::<Vec<_>>()))
    }
    fn int(games: &[RawGame], f: impl Fn(&RawGame) -> i64) -> ArrayRef {
        Arc::new(Int64Array::from(games.iter().map(f).collect::<Vec<_>>()))
    }

    let columns: Vec<(&str, ArrayRef)> = vec![
        ("SEASON_ID", text(games, |g| g.season_id.as_str())),
        ("TEAM_ID", int(games, |g| g.team_id)),
        ("TEAM_ABBREVIATION", text(games, |g| g.team_abbreviation.as_str())),
        ("TEAM_NAME", text(games, |g| g.team_name.as_str())),
        ("GAME_ID", text(games, |g| g.game_id.as_str())),
        ("GAME_DATE", text(games, |g| g.game_date.as_str())),
        ("MATCHUP", text(games, |g| g.matchup.as_str())),
        ("WL", text(games, |g| g.wl.as_str())),
        ("PTS", int(games, |g| g.pts)),
        ("REB", int(games, |g| g.reb)),
        ("AST", int(games, |g| g.ast)),
        ("STL", int(games, |g| g.stl)),
        ("BLK", int(games, |g| g.blk)),
        ("TOV", int(games, |g| g.tov)),
        ("PF", int(games, |g| g.pf)),
        ("PLUS_MINUS", int(games, |g| g.plus_minus)),
        ("OPPONENT", text(games, |g| g.opponent.as_str())),
    ];

    let schema = Arc::new(Schema::new(
        columns
            .iter()
            .map(|(name, array)| Field::new(*name, array.data_type().clone(), false))
            .collect::<Vec<_>>(),
    ));
    let batch = RecordBatch::try_new(
        schema.clone(),
        columns.into_iter().map(|(_, array)| array).collect(),
    )
    .context("building RecordBatch")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating Parquet writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing Parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "miami_heat_2023.csv".to_string());
    let path = Path::new(&output);

    let mut rng = SimpleRng::new(42);
    let games = build_games(&mut rng);

    let is_parquet = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        write_parquet(path, &games)?;
    } else {
        write_csv(path, &games)?;
    }

    println!("Wrote {} games to {}", games.len(), path.display());
    Ok(())
}
