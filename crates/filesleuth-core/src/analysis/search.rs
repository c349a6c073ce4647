/// Signature search: literal substring counts over text files.
use super::text::{is_text_file, read_text};
use crate::rules::RuleTable;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One signature found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureMatch {
    pub path: PathBuf,
    pub signature: String,
    /// Non-overlapping occurrences.
    pub occurrences: usize,
}

/// Search text files in `paths` for each signature.
///
/// Non-text files are skipped quietly, unreadable ones with a warning.
/// Results follow input order, then signature order.
pub fn search_signatures<P: AsRef<Path>, S: AsRef<str>>(
    paths: &[P],
    signatures: &[S],
    rules: &RuleTable,
) -> Vec<SignatureMatch> {
    let signatures: Vec<&str> = signatures
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.is_empty())
        .collect();
    if signatures.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if !is_text_file(path, rules) {
            debug!("search: {} is not text", path.display());
            continue;
        }
        let content = match read_text(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("search: cannot read {}: {e}", path.display());
                continue;
            }
        };
        for sig in &signatures {
            let occurrences = content.matches(sig).count();
            if occurrences > 0 {
                matches.push(SignatureMatch {
                    path: path.to_path_buf(),
                    signature: sig.to_string(),
                    occurrences,
                });
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn counts_each_signature_per_file() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.py");
        let b = tmp.path().join("b.py");
        fs::write(&a, "TODO one\nTODO two\nFIXME\n").unwrap();
        fs::write(&b, "clean\n").unwrap();

        let found = search_signatures(&[a.clone(), b], &["TODO", "FIXME", ""], &RuleTable::default());
        assert_eq!(
            found,
            vec![
                SignatureMatch {
                    path: a.clone(),
                    signature: "TODO".into(),
                    occurrences: 2
                },
                SignatureMatch {
                    path: a,
                    signature: "FIXME".into(),
                    occurrences: 1
                },
            ]
        );
    }

    #[test]
    fn missing_files_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("gone.rs");
        assert!(search_signatures(&[gone], &["fn"], &RuleTable::default()).is_empty());
    }
}
