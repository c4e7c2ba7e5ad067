/// Data layer: core types, loading, filtering and derived views.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → drop ids → rename → GameTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  result → min points → opponent
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  views    │  high-scoring subset, points series, notices
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod views;
