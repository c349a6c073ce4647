/// Likely-duplicate detection by size and file name.
///
/// Two-level grouping: files are bucketed by exact byte size, then each
/// multi-file bucket is split by file name. A group that survives both
/// levels (same size *and* same name, at least two paths) is reported.
///
/// No content hashing is done, so false positives are possible: this is a
/// cheap "probably the same file" signal, not a proof.
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A group of files that are likely duplicates of each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    /// Shared file name (case-sensitive, extension included).
    pub name: String,
    /// Size of each file in the group.
    pub size: u64,
    /// Paths in input order.
    pub files: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Display key, e.g. `"report.pdf (2048 bytes)"`.
    pub fn label(&self) -> String {
        format!("{} ({} bytes)", self.name, self.size)
    }
}

/// Insertion-ordered grouping; `groups` is in first-seen key order.
struct Grouped<K, V> {
    index: HashMap<K, usize>,
    groups: Vec<(K, Vec<V>)>,
}

impl<K: std::hash::Hash + Eq + Clone, V> Grouped<K, V> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&i) => self.groups[i].1.push(value),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![value]));
            }
        }
    }
}

/// Find likely duplicates among `paths`.
///
/// Groups are returned in the order their size was first seen, and within a
/// size in the order their name was first seen. Paths that cannot be
/// stat'ed are logged and ignored.
pub fn find_duplicates<P: AsRef<Path>>(paths: &[P]) -> Vec<DuplicateGroup> {
    let mut by_size: Grouped<u64, &Path> = Grouped::new();
    for path in paths {
        let path = path.as_ref();
        match std::fs::metadata(path) {
            Ok(meta) => by_size.push(meta.len(), path),
            Err(e) => warn!("duplicate check: cannot stat {}: {e}", path.display()),
        }
    }

    let mut duplicates = Vec::new();
    for (size, files) in by_size.groups {
        if files.len() < 2 {
            continue;
        }

        let mut by_name: Grouped<String, &Path> = Grouped::new();
        for path in files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            by_name.push(name, path);
        }

        duplicates.extend(
            by_name
                .groups
                .into_iter()
                .filter(|(_, group)| group.len() > 1)
                .map(|(name, group)| DuplicateGroup {
                    name,
                    size,
                    files: group.into_iter().map(Path::to_path_buf).collect(),
                }),
        );
    }
    duplicates
}
