/// Per-category size and count totals.
///
/// Every readable file is assigned exactly one category (possibly
/// [`UNCATEGORIZED`](crate::rules::UNCATEGORIZED)) and the totals are
/// returned largest category first.
use super::classify::classify;
use crate::rules::RuleTable;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Size and count totals for a single category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub total_size: u64,
    pub file_count: u64,
}

/// Compute per-category totals for `paths`.
///
/// Sorted by total size descending; equal sizes are ordered by name so the
/// output is deterministic.
pub fn category_breakdown<P: AsRef<Path>>(paths: &[P], rules: &RuleTable) -> Vec<CategoryStats> {
    let mut map: HashMap<&str, CategoryStats> = HashMap::with_capacity(rules.categories().len() + 1);

    for path in paths {
        let path = path.as_ref();
        let size = match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => meta.len(),
            Ok(_) => continue,
            Err(e) => {
                warn!("category breakdown: cannot stat {}: {e}", path.display());
                continue;
            }
        };

        let category = classify(path, rules);
        let entry = map.entry(category).or_insert_with(|| CategoryStats {
            category: category.to_string(),
            ..Default::default()
        });
        entry.total_size += size;
        entry.file_count += 1;
    }

    let mut results: Vec<CategoryStats> = map.into_values().collect();
    results.sort_by(|a, b| {
        b.total_size
            .cmp(&a.total_size)
            .then_with(|| a.category.cmp(&b.category))
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::UNCATEGORIZED;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, bytes: usize) -> PathBuf {
        let p = dir.join(name);
        fs::write(&p, vec![b'a'; bytes]).unwrap();
        p
    }

    #[test]
    fn aggregates_by_category() {
        let tmp = TempDir::new().unwrap();
        let paths = vec![
            write(tmp.path(), "main.rs", 100),
            write(tmp.path(), "lib.rs", 100),
            write(tmp.path(), "logo.png", 100),
        ];
        let stats = category_breakdown(&paths, &RuleTable::default());

        let rust = stats.iter().find(|s| s.category == "Rust").expect("Rust missing");
        let images = stats.iter().find(|s| s.category == "Images").expect("Images missing");
        assert_eq!(rust.file_count, 2);
        assert_eq!(rust.total_size, 200);
        assert_eq!(images.file_count, 1);
    }

    #[test]
    fn sorted_by_size_descending() {
        let tmp = TempDir::new().unwrap();
        let paths = vec![
            write(tmp.path(), "small.rs", 10),
            write(tmp.path(), "big.zip", 1_000),
            write(tmp.path(), "odd.unknownext", 50),
        ];
        let stats = category_breakdown(&paths, &RuleTable::default());
        let names: Vec<_> = stats.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Archives", UNCATEGORIZED, "Rust"]);
    }

    #[test]
    fn directories_and_missing_paths_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("sub");
        fs::create_dir(&dir).unwrap();
        let stats = category_breakdown(&[dir, tmp.path().join("nope.rs")], &RuleTable::default());
        assert!(stats.is_empty());
    }
}
