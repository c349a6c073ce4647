/// Scanner module: turns a directory root into the ordered file list the
/// analyses consume.
///
/// Uses `jwalk` in serial, name-sorted mode: the resulting order is stable
/// across runs, which the first-wins tie-breaks in
/// [`directory_statistics`](crate::analysis::directory_statistics) rely on.
/// Ignored entries are pruned inside `process_read_dir`, so ignored
/// directories are never descended into.
use crate::error::{Error, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Files larger than this are skipped by default (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default ignore globs, matched against each entry's file name.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "__pycache__",
    ".git",
    ".github",
    ".gitignore",
    ".DS_Store",
    ".idea",
    ".vscode",
    ".env",
    "node_modules",
    "venv",
    "env",
    "dist",
    "build",
    "coverage",
    "logs",
    "temp",
    "tmp",
    ".log",
    ".tmp",
    ".cache",
    ".pyc",
    ".class",
    "*.backup",
    "*.swp",
    "*.bak",
    "*.swo",
];

/// What to collect during a walk.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Glob patterns matched against file and directory names.
    pub ignore_patterns: Vec<String>,
    /// Files strictly larger than this many bytes are skipped.
    pub max_file_size: u64,
    /// Keep only files whose name ends with one of these (e.g. ".py").
    pub extensions: Option<Vec<String>>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignore_patterns: DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            extensions: None,
        }
    }
}

/// Compiled ignore globs.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p.as_ref()).map_err(|source| Error::InvalidIgnorePattern {
                    pattern: p.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// `true` if `name` matches any pattern.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }
}

/// Walk `root` and return every regular file that survives the filters,
/// in sorted traversal order.
///
/// Unreadable directories and entries are logged and skipped; only a root
/// that is not a directory is an error.
pub fn collect_files(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let start = Instant::now();
    let ignore = IgnoreSet::new(&options.ignore_patterns)?;

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(move |depth, _path, _state, children| {
            // The root itself arrives with no depth; never prune it.
            if depth.is_none() {
                return;
            }
            children.retain(|entry| match entry {
                Ok(e) => !ignore.is_ignored(&e.file_name().to_string_lossy()),
                Err(_) => true,
            });
        });

    let mut files = Vec::new();
    let mut skipped_large = 0u64;
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!("scan: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = entry.file_name().to_string_lossy();
        if let Some(exts) = &options.extensions {
            if !exts.iter().any(|ext| name.ends_with(ext.as_str())) {
                continue;
            }
        }

        match std::fs::metadata(&path) {
            Ok(meta) if meta.len() > options.max_file_size => {
                debug!("scan: {} exceeds size cap", path.display());
                skipped_large += 1;
            }
            Ok(_) => files.push(path),
            Err(e) => warn!("scan: cannot stat {}: {e}", path.display()),
        }
    }

    info!(
        "Scanned {}: {} files ({skipped_large} over size cap) in {:?}",
        root.display(),
        files.len(),
        start.elapsed()
    );
    Ok(files)
}
