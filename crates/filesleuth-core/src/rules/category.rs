/// Category rules: extension, file-name pattern and MIME criteria.
///
/// Rules are declared as plain [`CategoryRuleConfig`] records (what a config
/// file holds) and compiled once into [`CategoryRule`] with normalised
/// extensions and pre-built case-insensitive regexes.
use super::language::LanguageRule;
use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sentinel category for files no rule matches.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Declarative form of a category rule. Every criterion is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRuleConfig {
    pub name: String,
    /// Extensions without the leading dot ("pdf").
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Regexes searched anywhere in the file name, case-insensitively.
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub mime_types: Vec<String>,
}

impl CategoryRuleConfig {
    fn with_extensions(name: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            ..Default::default()
        }
    }
}

/// A compiled, immutable category rule.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub name: String,
    extensions: HashSet<String>,
    name_patterns: Vec<Regex>,
    mime_types: HashSet<String>,
}

impl CategoryRule {
    /// Compile a rule. Fails if any name pattern is not a valid regex.
    pub fn compile(config: &CategoryRuleConfig) -> Result<Self> {
        let extensions = config
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_lowercase())
            .collect();

        let name_patterns = config
            .patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| Error::InvalidPattern {
                        category: config.name.clone(),
                        pattern: p.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: config.name.clone(),
            extensions,
            name_patterns,
            mime_types: config.mime_types.iter().cloned().collect(),
        })
    }

    /// `true` if the extension (lowercase, no dot) is listed.
    pub fn matches_extension(&self, ext: &str) -> bool {
        !ext.is_empty() && self.extensions.contains(ext)
    }

    pub fn matches_name(&self, file_name: &str) -> bool {
        self.name_patterns.iter().any(|re| re.is_match(file_name))
    }

    pub fn matches_mime(&self, mime: Option<&str>) -> bool {
        mime.is_some_and(|m| self.mime_types.contains(m))
    }

    /// Apply the three criteria in priority order: extension, name, MIME.
    pub fn matches(&self, ext: &str, file_name: &str, mime: Option<&str>) -> bool {
        self.matches_extension(ext) || self.matches_name(file_name) || self.matches_mime(mime)
    }
}

/// Built-in categories: one per language, then the general-purpose buckets.
pub fn default_categories(languages: &[LanguageRule]) -> Vec<CategoryRuleConfig> {
    let mut categories: Vec<CategoryRuleConfig> = languages
        .iter()
        .map(|lang| CategoryRuleConfig {
            name: lang.name.clone(),
            extensions: lang
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            ..Default::default()
        })
        .collect();

    categories.push(CategoryRuleConfig {
        name: "Documents".into(),
        extensions: ["pdf", "docx", "txt", "rtf", "md"]
            .iter()
            .map(|e| e.to_string())
            .collect(),
        patterns: vec![
            r"^readme\b".into(),
            r"^license\b".into(),
            r"^changelog\b".into(),
        ],
        mime_types: vec![],
    });
    categories.push(CategoryRuleConfig {
        name: "Images".into(),
        extensions: ["jpg", "jpeg", "png", "gif", "bmp", "svg"]
            .iter()
            .map(|e| e.to_string())
            .collect(),
        patterns: vec![],
        mime_types: vec!["image/webp".into(), "image/tiff".into(), "image/vnd.microsoft.icon".into()],
    });
    categories.push(CategoryRuleConfig::with_extensions(
        "Archives",
        &["zip", "rar", "7z", "tar", "gz"],
    ));
    categories.push(CategoryRuleConfig::with_extensions(
        "Data",
        &["csv", "json", "xlsx", "xml", "yml"],
    ));
    categories
}
