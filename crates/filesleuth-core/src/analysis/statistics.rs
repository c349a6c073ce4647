/// Directory statistics: the single-pass aggregation over a file list.
///
/// Input order is significant: oldest/newest/largest use strict comparisons
/// so the first file encountered wins ties, and the top-N lists are stable
/// sorts over the files in input order.
use super::metadata::read_metadata;
use super::text::{count_lines, is_text_file};
use super::top_files::{largest_files, newest_files};
use crate::model::{average, DirectoryStatistics, FileInfo, LanguageStats, TOP_N};
use crate::rules::RuleTable;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Running totals for one language, finalised into [`LanguageStats`].
#[derive(Default)]
struct LanguageAccumulator {
    file_count: u64,
    total_size: u64,
    total_lines: u64,
    largest: Option<(PathBuf, u64)>,
    extensions: BTreeSet<String>,
}

impl LanguageAccumulator {
    fn add(&mut self, info: &FileInfo, lines: u64) {
        self.file_count += 1;
        self.total_size += info.size;
        self.total_lines += lines;
        self.extensions.insert(info.extension.clone());
        if self.largest.as_ref().map_or(true, |(_, size)| info.size > *size) {
            self.largest = Some((info.path.clone(), info.size));
        }
    }

    fn finish(self) -> LanguageStats {
        LanguageStats {
            file_count: self.file_count,
            total_size: self.total_size,
            total_lines: self.total_lines,
            average_size: average(self.total_size, self.file_count),
            average_lines: average(self.total_lines, self.file_count),
            largest_file: self.largest.map(|(p, _)| p).unwrap_or_default(),
            extensions: self.extensions.into_iter().collect(),
        }
    }
}

/// Compute [`DirectoryStatistics`] for `paths`, in the given order.
///
/// Paths whose metadata cannot be read are logged and excluded from every
/// figure; the rest of the batch is unaffected.
pub fn directory_statistics<P: AsRef<Path>>(paths: &[P], rules: &RuleTable) -> DirectoryStatistics {
    directory_statistics_with_limit(paths, rules, TOP_N)
}

/// Same as [`directory_statistics`] with a custom length for the top lists.
pub fn directory_statistics_with_limit<P: AsRef<Path>>(
    paths: &[P],
    rules: &RuleTable,
    top_n: usize,
) -> DirectoryStatistics {
    let mut stats = DirectoryStatistics::default();
    let mut languages: BTreeMap<String, LanguageAccumulator> = BTreeMap::new();
    let mut infos: Vec<FileInfo> = Vec::with_capacity(paths.len());
    let mut skipped = 0usize;

    for path in paths {
        let path = path.as_ref();
        let info = match read_metadata(path, rules) {
            Ok(info) => info,
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                skipped += 1;
                continue;
            }
        };

        stats.total_files += 1;
        stats.total_size += info.size;
        *stats.extensions.entry(info.extension.clone()).or_default() += 1;
        if let Some(mime) = &info.mime_type {
            *stats.mime_types.entry(mime.clone()).or_default() += 1;
        }

        let lines = if is_text_file(path, rules) {
            count_lines(path)
        } else {
            0
        };
        stats.total_lines += lines;

        if let Some(language) = &info.language {
            *stats.language_breakdown.entry(language.clone()).or_default() += 1;
            languages
                .entry(language.clone())
                .or_default()
                .add(&info, lines);
        }

        if stats
            .oldest_file
            .as_ref()
            .map_or(true, |f| info.modified < f.modified)
        {
            stats.oldest_file = Some(info.clone());
        }
        if stats
            .newest_file
            .as_ref()
            .map_or(true, |f| info.modified > f.modified)
        {
            stats.newest_file = Some(info.clone());
        }
        if stats
            .largest_file
            .as_ref()
            .map_or(true, |f| info.size > f.size)
        {
            stats.largest_file = Some(info.clone());
        }

        debug!("{}: {} bytes, {lines} lines", path.display(), info.size);
        infos.push(info);
    }

    stats.average_size = average(stats.total_size, stats.total_files);
    stats.average_lines = average(stats.total_lines, stats.total_files);
    stats.language_stats = languages
        .into_iter()
        .map(|(name, acc)| (name, acc.finish()))
        .collect();
    stats.largest_files = largest_files(&infos, top_n);
    stats.newest_files = newest_files(&infos, top_n);

    info!(
        "Statistics: {} files, {} bytes, {} lines ({skipped} skipped)",
        stats.total_files, stats.total_size, stats.total_lines
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let p = dir.join(name);
        fs::write(&p, content).unwrap();
        p
    }

    /// Pin the modification time so ordering tests do not depend on how
    /// fast the files were written.
    fn set_mtime(path: &Path, t: SystemTime) {
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(t)
            .unwrap();
    }

    // ── totals and averages ──────────────────────────────────────────────

    #[test]
    fn empty_input_yields_zeroed_report() {
        let paths: Vec<PathBuf> = Vec::new();
        let stats = directory_statistics(&paths, &RuleTable::default());
        assert_eq!(stats.total_files, 0);
        assert_eq!(stats.average_size, 0.0);
        assert_eq!(stats.average_lines, 0.0);
        assert!(stats.largest_file.is_none());
        assert!(stats.largest_files.is_empty());
    }

    #[test]
    fn totals_and_averages() {
        let tmp = TempDir::new().unwrap();
        let a = write(tmp.path(), "a.py", "import os\nprint(1)\n"); // 19 bytes, 2 lines
        let b = write(tmp.path(), "b.py", "x = 1\n"); // 6 bytes, 1 line
        let c = write(tmp.path(), "c.rs", "fn main() {}\n"); // 13 bytes, 1 line

        let stats = directory_statistics(&[a, b, c], &RuleTable::default());
        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.total_size, 38);
        assert_eq!(stats.total_lines, 4);
        assert!((stats.average_size - 38.0 / 3.0).abs() < 1e-9);
        assert!((stats.average_lines - 4.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.extensions.get(".py"), Some(&2));
        assert_eq!(stats.extensions.get(".rs"), Some(&1));
        assert_eq!(stats.mime_types.get("text/x-python"), Some(&2));
    }

    #[test]
    fn missing_paths_are_excluded_from_totals() {
        let tmp = TempDir::new().unwrap();
        let a = write(tmp.path(), "a.txt", "hello\n");
        let missing = tmp.path().join("missing.txt");

        let stats = directory_statistics(&[missing, a.clone()], &RuleTable::default());
        assert_eq!(stats.total_files, 1);
        assert_eq!(stats.largest_files.len(), 1);
        assert_eq!(stats.largest_files[0].path, a);
    }

    // ── language buckets ─────────────────────────────────────────────────

    #[test]
    fn language_buckets_track_counts_sizes_and_extensions() {
        let tmp = TempDir::new().unwrap();
        let small = write(tmp.path(), "small.c", "int x;\n");
        let big = write(tmp.path(), "big.h", "int y;\nint z;\n");
        let notes = write(tmp.path(), "notes.unknownext", "");

        let stats = directory_statistics(&[small, big.clone(), notes], &RuleTable::default());
        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.language_breakdown.get("C"), Some(&2));
        assert_eq!(stats.language_breakdown.values().sum::<u64>(), 2);

        let c = &stats.language_stats["C"];
        assert_eq!(c.file_count, 2);
        assert_eq!(c.total_size, 21);
        assert_eq!(c.total_lines, 3);
        assert_eq!(c.average_size, 10.5);
        assert_eq!(c.average_lines, 1.5);
        assert_eq!(c.largest_file, big);
        assert_eq!(c.extensions, vec![".c".to_string(), ".h".to_string()]);
    }

    #[test]
    fn language_largest_file_first_wins_ties() {
        let tmp = TempDir::new().unwrap();
        let first = write(tmp.path(), "one.go", "package a\n");
        let second = write(tmp.path(), "two.go", "package b\n");

        let stats = directory_statistics(&[first.clone(), second], &RuleTable::default());
        assert_eq!(stats.language_stats["Go"].largest_file, first);
    }

    // ── oldest / newest / largest ────────────────────────────────────────

    #[test]
    fn oldest_newest_and_largest() {
        let tmp = TempDir::new().unwrap();
        let old = write(tmp.path(), "old.txt", "a");
        let new = write(tmp.path(), "new.txt", "bb");
        let big = write(tmp.path(), "big.txt", "cccccccc");
        let now = SystemTime::now();
        set_mtime(&old, now - Duration::from_secs(3_600));
        set_mtime(&new, now - Duration::from_secs(10));
        set_mtime(&big, now - Duration::from_secs(600));

        let stats = directory_statistics(&[big.clone(), old.clone(), new.clone()], &RuleTable::default());
        assert_eq!(stats.oldest_file.unwrap().path, old);
        assert_eq!(stats.newest_file.unwrap().path, new);
        assert_eq!(stats.largest_file.unwrap().path, big);

        let newest: Vec<_> = stats.newest_files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(newest, vec![new, big, old]);
    }

    /// With equal modification times the first path in input order is both
    /// the oldest and the newest file, and the newest list keeps input order.
    #[test]
    fn oldest_and_newest_first_wins_ties() {
        let tmp = TempDir::new().unwrap();
        let b = write(tmp.path(), "b.txt", "b");
        let a = write(tmp.path(), "a.txt", "a");
        let c = write(tmp.path(), "c.txt", "c");
        let t = SystemTime::now() - Duration::from_secs(60);
        for p in [&b, &a, &c] {
            set_mtime(p, t);
        }

        let stats = directory_statistics(&[b.clone(), a.clone(), c.clone()], &RuleTable::default());
        assert_eq!(stats.oldest_file.unwrap().path, b);
        assert_eq!(stats.newest_file.unwrap().path, b);

        let newest: Vec<_> = stats.newest_files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(newest, vec![b, a, c]);
    }

    /// With equal sizes the first path in input order is the largest file,
    /// including when every file is empty.
    #[test]
    fn largest_file_first_wins_ties() {
        let tmp = TempDir::new().unwrap();
        let a = write(tmp.path(), "a.bin", "");
        let b = write(tmp.path(), "b.bin", "");

        let stats = directory_statistics(&[b.clone(), a], &RuleTable::default());
        assert_eq!(stats.largest_file.unwrap().path, b);
    }

    #[test]
    fn top_lists_are_capped_at_ten() {
        let tmp = TempDir::new().unwrap();
        let paths: Vec<PathBuf> = (0..12)
            .map(|i| write(tmp.path(), &format!("f{i:02}.txt"), &"x".repeat(i + 1)))
            .collect();

        let stats = directory_statistics(&paths, &RuleTable::default());
        assert_eq!(stats.total_files, 12);
        assert_eq!(stats.largest_files.len(), 10);
        assert_eq!(stats.newest_files.len(), 10);
        assert_eq!(stats.largest_files[0].size, 12);
        assert!(stats
            .largest_files
            .windows(2)
            .all(|w| w[0].size >= w[1].size));
    }

    #[test]
    fn custom_top_limit() {
        let tmp = TempDir::new().unwrap();
        let paths: Vec<PathBuf> = (0..4)
            .map(|i| write(tmp.path(), &format!("f{i}.txt"), "x"))
            .collect();
        let stats = directory_statistics_with_limit(&paths, &RuleTable::default(), 2);
        assert_eq!(stats.largest_files.len(), 2);
    }
}
