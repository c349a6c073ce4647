/// Report types produced by the statistics aggregator.
///
/// All maps are `BTreeMap`s so that serialised reports are byte-for-byte
/// reproducible for the same input.
use super::file_info::FileInfo;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Maximum length of the `largest_files` / `newest_files` lists.
pub const TOP_N: usize = 10;

/// Per-language rollup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LanguageStats {
    pub file_count: u64,
    pub total_size: u64,
    pub total_lines: u64,
    pub average_size: f64,
    pub average_lines: f64,
    /// Largest file of this language (first encountered wins ties).
    pub largest_file: PathBuf,
    /// Distinct extensions seen for this language, sorted.
    pub extensions: Vec<String>,
}

/// Full statistics report for a set of files.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DirectoryStatistics {
    /// Number of paths that yielded a [`FileInfo`].
    pub total_files: u64,
    pub total_size: u64,
    pub total_lines: u64,
    pub average_size: f64,
    pub average_lines: f64,

    /// Extension (with dot, or empty) → file count.
    pub extensions: BTreeMap<String, u64>,
    /// MIME type → file count (files without a guess are not counted).
    pub mime_types: BTreeMap<String, u64>,
    /// Language → file count (files with no language are not counted).
    pub language_breakdown: BTreeMap<String, u64>,
    pub language_stats: BTreeMap<String, LanguageStats>,

    pub oldest_file: Option<FileInfo>,
    pub newest_file: Option<FileInfo>,
    pub largest_file: Option<FileInfo>,

    /// Up to [`TOP_N`] files, largest first.
    pub largest_files: Vec<FileInfo>,
    /// Up to [`TOP_N`] files, most recently modified first.
    pub newest_files: Vec<FileInfo>,
}

/// `total / count`, or `0.0` when `count` is zero.
#[inline]
pub fn average(total: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_zero_count_is_zero() {
        assert_eq!(average(0, 0), 0.0);
        assert_eq!(average(500, 0), 0.0);
    }

    #[test]
    fn average_divides() {
        assert_eq!(average(300, 2), 150.0);
        assert_eq!(average(1, 4), 0.25);
    }
}
