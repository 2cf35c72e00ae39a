/// Data layer: core types, loading, and writing.
///
/// Architecture:
/// ```text
///  Output.txt / nodes .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SplineOutput
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SplineOutput │  control series + spline series
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  SplineOutput → solver text format
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod writer;
