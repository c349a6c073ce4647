/// FileSleuth Core: classification, statistics and reporting.
///
/// This crate contains all business logic with zero CLI dependencies.
/// Everything runs synchronously on the caller's thread.
///
/// # Modules
///
/// - [`rules`]: Immutable language table, category rules and MIME lookup.
/// - [`analysis`]: Classification, per-file metadata, statistics, duplicates, naming patterns.
/// - [`model`]: Report types and display formatting.
/// - [`scanner`]: Directory walker producing the ordered input file list.
/// - [`config`]: JSON-loadable analyzer configuration.
/// - [`organize`]: Copy or move files into per-category folders.
/// - [`export`]: JSON, CSV and text report writers.
pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod organize;
pub mod rules;
pub mod scanner;

pub use config::AnalyzerConfig;
pub use error::{Error, Result};
pub use rules::RuleTable;
