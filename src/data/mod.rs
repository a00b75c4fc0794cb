/// Data layer: reference tables, parsing, and the read-only repository.
///
/// Architecture:
/// ```text
///  data/male.csv   data/female.csv   (embedded or host-supplied)
///        │               │
///        ▼               ▼
///   ┌──────────┐
///   │  loader   │  parse CSV text → ReferenceDataset (bad rows dropped)
///   └──────────┘
///        │
///        ▼
///   ┌────────────────────┐
///   │ ReferenceRepository │  male + female tables, immutable
///   └────────────────────┘
///        │
///        ▼
///     engine::estimator    nearest-neighbour lookup
/// ```

pub mod loader;
pub mod model;
pub mod repository;
