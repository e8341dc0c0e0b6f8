/// Data layer: core types, loading, and column classification.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, schema from the first record
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  infer    │  numeric / ordinal / categorical per column
///   └──────────┘
/// ```

pub mod infer;
pub mod loader;
pub mod model;
