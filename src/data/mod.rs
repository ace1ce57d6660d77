/// Data layer: core types, loading, preparation and caching.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ prepare   │  main_category, imputed ratings, discount_percent
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ PreparedCache │  one Arc<ProductTable> per source signature
///   └──────────────┘
/// ```

pub mod cache;
pub mod loader;
pub mod model;
pub mod prepare;
pub mod stats;
