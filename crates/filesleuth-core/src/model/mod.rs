/// Data model for FileSleuth reports.
///
/// Re-exports the per-file record, the report types and display helpers.
pub mod file_info;
pub mod size;
pub mod stats;

pub use file_info::FileInfo;
pub use stats::{average, DirectoryStatistics, LanguageStats, TOP_N};
