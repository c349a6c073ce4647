/// Per-file metadata extraction.
use crate::error::{Error, Result};
use crate::model::FileInfo;
use crate::rules::{guess_mime_type, language::extension_of, RuleTable};
use chrono::{DateTime, Local};
use compact_str::CompactString;
use std::path::Path;

/// Stat `path` and build its [`FileInfo`].
///
/// Symlinks are followed. Any filesystem error is returned as
/// [`Error::Io`]; batch callers log it and move on.
pub fn read_metadata(path: &Path, rules: &RuleTable) -> Result<FileInfo> {
    let meta = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;

    let modified = meta.modified().map_err(|e| Error::io(path, e))?;
    let created = meta.created().unwrap_or(modified);

    let extension = extension_of(path).unwrap_or_default();
    let mime_type = guess_mime_type(&extension).map(str::to_string);
    let language = rules
        .languages()
        .language_for_extension(&extension)
        .map(|r| r.name.clone());

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    Ok(FileInfo {
        name: CompactString::new(&name),
        path: path.to_path_buf(),
        size: meta.len(),
        created: DateTime::<Local>::from(created),
        modified: DateTime::<Local>::from(modified),
        extension,
        mime_type,
        language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_size_extension_mime_and_language() {
        let tmp = TempDir::new().unwrap();
        let p = tmp.path().join("Main.PY");
        fs::write(&p, "print('hi')\n").unwrap();

        let info = read_metadata(&p, &RuleTable::default()).unwrap();
        assert_eq!(info.name, "Main.PY");
        assert_eq!(info.path, p);
        assert_eq!(info.size, 12);
        assert_eq!(info.extension, ".py");
        assert_eq!(info.mime_type.as_deref(), Some("text/x-python"));
        assert_eq!(info.language.as_deref(), Some("Python"));
        assert!(info.created <= Local::now());
    }

    #[test]
    fn extensionless_file_has_empty_extension_and_no_language() {
        let tmp = TempDir::new().unwrap();
        let p = tmp.path().join("Dockerfile");
        fs::write(&p, "FROM scratch\n").unwrap();

        let info = read_metadata(&p, &RuleTable::default()).unwrap();
        assert_eq!(info.extension, "");
        assert_eq!(info.mime_type, None);
        assert_eq!(info.language, None);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let p = tmp.path().join("missing.rs");
        match read_metadata(&p, &RuleTable::default()) {
            Err(Error::Io { path, .. }) => assert_eq!(path, p),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
