/// Per-file attributes captured during a scan.
///
/// A `FileInfo` is created once per successfully read path and is never
/// persisted; the aggregation pass and the exporters only read it.
use chrono::{DateTime, Local};
use compact_str::CompactString;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    /// File name only (no directory part).
    pub name: CompactString,

    /// Path exactly as supplied by the caller.
    pub path: PathBuf,

    /// Logical size in bytes.
    pub size: u64,

    /// Creation time. Falls back to `modified` on platforms/filesystems
    /// that do not record a birth time.
    pub created: DateTime<Local>,

    pub modified: DateTime<Local>,

    /// Lowercase extension including the leading dot, or empty.
    pub extension: String,

    /// MIME type guessed from the extension.
    pub mime_type: Option<String>,

    /// Language resolved from the extension table; `None` when unmapped.
    pub language: Option<String>,
}
