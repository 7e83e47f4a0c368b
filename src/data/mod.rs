/// Table layer: core types and file readers.
///
/// Architecture:
/// ```text
///  .csv (`;` or `,`)      .arff
///        │                  │
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │  loader   │◄─────│   arff    │  parse file → Table
///   └──────────┘      └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  named columns, rows of Value
///   └──────────┘
/// ```

pub mod arff;
pub mod loader;
pub mod model;
