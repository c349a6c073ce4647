/// Analyzer configuration, loadable from a JSON file.
///
/// Every field has a default, so a config file only needs the keys it wants
/// to override. Categories are an ordered JSON array because rule order
/// decides which category wins.
///
/// ```json
/// {
///   "file_categories": [
///     { "name": "Notebooks", "extensions": ["ipynb"] },
///     { "name": "Backups", "patterns": ["backup"], "mime_types": [] }
///   ],
///   "max_file_size": 5242880
/// }
/// ```
use crate::analysis::DEFAULT_MIN_COUNT;
use crate::error::{Error, Result};
use crate::model::TOP_N;
use crate::rules::{default_categories, default_languages, CategoryRuleConfig, LanguageRule, RuleTable};
use crate::scanner::{ScanOptions, DEFAULT_IGNORE_PATTERNS, DEFAULT_MAX_FILE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Category rules in evaluation order. Empty means the built-in set.
    pub file_categories: Vec<CategoryRuleConfig>,
    /// Language table in scoring order. Empty means the built-in table.
    pub languages: Vec<LanguageRule>,
    pub ignore_patterns: Vec<String>,
    pub max_file_size: u64,
    /// Length of the largest/newest lists in the statistics report.
    pub top_n: usize,
    pub min_pattern_count: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            file_categories: Vec::new(),
            languages: Vec::new(),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            top_n: TOP_N,
            min_pattern_count: DEFAULT_MIN_COUNT,
        }
    }
}

impl AnalyzerConfig {
    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|e| match e {
            Error::Json(source) => Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Compile the immutable rule table.
    ///
    /// Empty language or category lists fall back to the built-in ones;
    /// default categories are derived from the effective language table.
    pub fn rule_table(&self) -> Result<RuleTable> {
        let languages = if self.languages.is_empty() {
            default_languages()
        } else {
            self.languages.clone()
        };
        let categories = if self.file_categories.is_empty() {
            default_categories(&languages)
        } else {
            self.file_categories.clone()
        };
        RuleTable::new(languages, &categories)
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            ignore_patterns: self.ignore_patterns.clone(),
            max_file_size: self.max_file_size,
            extensions: None,
        }
    }
}
