/// Analysis modules: classification, per-file metadata and the
/// aggregations built on top of them.

pub mod categories;
pub mod classify;
pub mod duplicates;
pub mod metadata;
pub mod patterns;
pub mod search;
pub mod statistics;
pub mod text;
pub mod top_files;

pub use categories::{category_breakdown, CategoryStats};
pub use classify::{classify, detect_language, detect_language_by_content, resolve_language};
pub use duplicates::{find_duplicates, DuplicateGroup};
pub use metadata::read_metadata;
pub use patterns::{find_patterns, NamePattern, DEFAULT_MIN_COUNT};
pub use search::{search_signatures, SignatureMatch};
pub use statistics::{directory_statistics, directory_statistics_with_limit};
pub use text::{count_lines, is_text_file};
pub use top_files::{largest_files, newest_files};
