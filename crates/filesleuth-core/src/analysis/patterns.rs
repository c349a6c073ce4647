/// Naming-pattern detection: families like `report1`, `report2`, `report3`.
///
/// The extension is stripped and the remaining stem is matched against
/// `^(.+?)(\d+)$`. Files without a trailing number never count toward a
/// pattern.
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Default minimum family size for a pattern to be reported.
pub const DEFAULT_MIN_COUNT: usize = 3;

static NUMERIC_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)(\d+)$").expect("numeric suffix regex is valid")
});

/// A detected family of numbered files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamePattern {
    /// Non-numeric prefix shared by the family.
    pub prefix: String,
    /// Paths in input order.
    pub files: Vec<PathBuf>,
}

impl NamePattern {
    /// Pattern key, e.g. `"report[0-9]+"`.
    pub fn key(&self) -> String {
        format!("{}[0-9]+", self.prefix)
    }
}

/// Group `paths` by numeric-suffix prefix and keep families with at least
/// `min_count` members, in first-seen order.
pub fn find_patterns<P: AsRef<Path>>(paths: &[P], min_count: usize) -> Vec<NamePattern> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut families: Vec<NamePattern> = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy()) else {
            continue;
        };
        let Some(caps) = NUMERIC_SUFFIX.captures(&stem) else {
            continue;
        };
        let prefix = &caps[1];

        match index.get(prefix) {
            Some(&i) => families[i].files.push(path.to_path_buf()),
            None => {
                index.insert(prefix.to_string(), families.len());
                families.push(NamePattern {
                    prefix: prefix.to_string(),
                    files: vec![path.to_path_buf()],
                });
            }
        }
    }

    families.retain(|f| f.files.len() >= min_count);
    families
}
