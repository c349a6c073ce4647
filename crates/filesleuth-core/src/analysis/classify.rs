/// Category and language classification for individual files.
///
/// Category rules are evaluated in order; within a rule the extension is
/// checked first, then the name patterns, then the guessed MIME type. The
/// first rule that matches decides the category.
use super::text::read_text;
use crate::rules::{guess_mime_type, RuleTable, UNCATEGORIZED, UNKNOWN_LANGUAGE};
use std::path::Path;
use tracing::debug;

/// Category of the file at `path`, or [`UNCATEGORIZED`].
///
/// Directories and paths that do not exist are never categorised.
pub fn classify<'r>(path: &Path, rules: &'r RuleTable) -> &'r str {
    if !path.is_file() {
        return UNCATEGORIZED;
    }
    classify_name(path, rules)
}

/// Category decision from the path's name alone (no filesystem access).
pub fn classify_name<'r>(path: &Path, rules: &'r RuleTable) -> &'r str {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let mime = guess_mime_type(&ext);

    rules
        .categories()
        .iter()
        .find(|rule| rule.matches(&ext, &file_name, mime))
        .map(|rule| rule.name.as_str())
        .unwrap_or(UNCATEGORIZED)
}

/// Language of `path` by extension, or [`UNKNOWN_LANGUAGE`].
pub fn detect_language<'r>(path: &Path, rules: &'r RuleTable) -> &'r str {
    rules.languages().detect_language(path)
}

/// Language of `path` by signature scoring over its content.
///
/// Unreadable files yield [`UNKNOWN_LANGUAGE`].
pub fn detect_language_by_content<'r>(path: &Path, rules: &'r RuleTable) -> &'r str {
    match read_text(path) {
        Ok(text) => rules.languages().detect_from_content(&text),
        Err(e) => {
            debug!("{}: cannot read for content detection: {e}", path.display());
            UNKNOWN_LANGUAGE
        }
    }
}

/// Language by extension, falling back to content scoring when the
/// extension is unmapped (extensionless scripts, `Makefile`-style names).
pub fn resolve_language<'r>(path: &Path, rules: &'r RuleTable) -> &'r str {
    match detect_language(path, rules) {
        UNKNOWN_LANGUAGE => detect_language_by_content(path, rules),
        language => language,
    }
}
