/// Programming-language table: extension lookup and naive signature scoring.
///
/// The table is ordered. Order matters in exactly one place: when two
/// languages score the same number of signature hits in
/// [`LanguageTable::detect_from_content`], the one defined first wins.
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Sentinel returned when no language can be determined.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// One programming language and how to recognise it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRule {
    pub name: String,
    /// Lowercase extensions including the leading dot (".py").
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Literal substrings whose presence in content suggests this language.
    #[serde(default)]
    pub signatures: Vec<String>,
    /// Line-comment (or comment-opening) token.
    #[serde(default)]
    pub comment: Option<String>,
}

impl LanguageRule {
    fn new(name: &str, extensions: &[&str], signatures: &[&str], comment: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            signatures: signatures.iter().map(|s| s.to_string()).collect(),
            comment: (!comment.is_empty()).then(|| comment.to_string()),
        }
    }
}

/// Ordered language rules plus an extension index.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    rules: Vec<LanguageRule>,
    by_extension: HashMap<String, usize>,
}

impl LanguageTable {
    /// Build a table, normalising extensions to lowercase with a leading dot.
    ///
    /// Fails with [`Error::ConflictingExtension`] if an extension is claimed
    /// by two different languages.
    pub fn new(mut rules: Vec<LanguageRule>) -> Result<Self> {
        for rule in rules.iter_mut() {
            for ext in rule.extensions.iter_mut() {
                *ext = normalise_extension(ext);
            }
        }

        let mut by_extension: HashMap<String, usize> = HashMap::new();
        for (i, rule) in rules.iter().enumerate() {
            for ext in &rule.extensions {
                match by_extension.get(ext) {
                    Some(&prev) if prev != i => {
                        return Err(Error::ConflictingExtension {
                            extension: ext.clone(),
                            first: rules[prev].name.clone(),
                            second: rule.name.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        by_extension.insert(ext.clone(), i);
                    }
                }
            }
        }
        Ok(Self {
            rules,
            by_extension,
        })
    }

    /// All rules in table order.
    pub fn rules(&self) -> &[LanguageRule] {
        &self.rules
    }

    /// Language names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    /// Look up a language by extension (with or without the dot, any case).
    pub fn language_for_extension(&self, ext: &str) -> Option<&LanguageRule> {
        if ext.is_empty() {
            return None;
        }
        self.by_extension
            .get(&normalise_extension(ext))
            .map(|&i| &self.rules[i])
    }

    /// Language of a path judged by its extension, or [`UNKNOWN_LANGUAGE`].
    pub fn detect_language(&self, path: &Path) -> &str {
        extension_of(path)
            .and_then(|ext| self.language_for_extension(&ext))
            .map(|r| r.name.as_str())
            .unwrap_or(UNKNOWN_LANGUAGE)
    }

    /// Score every language by literal signature occurrences in `content`.
    ///
    /// Returns the best-scoring language, [`UNKNOWN_LANGUAGE`] when nothing
    /// matched. Ties go to the language defined first.
    pub fn detect_from_content(&self, content: &str) -> &str {
        let mut best: Option<(&str, usize)> = None;
        for rule in &self.rules {
            let score: usize = rule
                .signatures
                .iter()
                .filter(|s| !s.is_empty())
                .map(|s| content.matches(s.as_str()).count())
                .sum();
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((rule.name.as_str(), score));
            }
        }
        best.map(|(name, _)| name).unwrap_or(UNKNOWN_LANGUAGE)
    }

    pub fn get(&self, language: &str) -> Option<&LanguageRule> {
        self.rules.iter().find(|r| r.name == language)
    }

    /// Extensions of a language, empty if the language is not in the table.
    pub fn extensions_of(&self, language: &str) -> &[String] {
        self.get(language).map(|r| r.extensions.as_slice()).unwrap_or_default()
    }

    pub fn signatures_of(&self, language: &str) -> &[String] {
        self.get(language).map(|r| r.signatures.as_slice()).unwrap_or_default()
    }

    pub fn comment_of(&self, language: &str) -> Option<&str> {
        self.get(language).and_then(|r| r.comment.as_deref())
    }

    /// Every extension known to the table (the "source code" set).
    pub fn source_extensions(&self) -> BTreeSet<&str> {
        self.by_extension.keys().map(String::as_str).collect()
    }

    /// `true` if the path's extension belongs to any language.
    pub fn is_source_code(&self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.by_extension.contains_key(&ext))
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        let rules = default_languages();
        let by_extension = rules
            .iter()
            .enumerate()
            .flat_map(|(i, r)| r.extensions.iter().map(move |e| (e.clone(), i)))
            .collect();
        Self {
            rules,
            by_extension,
        }
    }
}

/// Lowercase extension of `path` with a leading dot, `None` if it has none.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
}

fn normalise_extension(ext: &str) -> String {
    let lower = ext.trim().to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// The built-in language table, in scoring order.
pub fn default_languages() -> Vec<LanguageRule> {
    vec![
        LanguageRule::new("Python", &[".py"], &["def ", "class ", "import ", "from "], "#"),
        LanguageRule::new(
            "JavaScript",
            &[".js"],
            &["function ", "const ", "let ", "import ", "export "],
            "//",
        ),
        LanguageRule::new(
            "HTML",
            &[".html", ".htm"],
            &["<!DOCTYPE", "<html", "<head", "<body"],
            "<!--",
        ),
        LanguageRule::new(
            "CSS",
            &[".css", ".scss", ".sass", ".less"],
            &["body {", "@media", "#", "."],
            "/*",
        ),
        LanguageRule::new(
            "C",
            &[".c", ".h"],
            &["#include ", "int ", "void ", "char ", "float ", "double "],
            "//",
        ),
        LanguageRule::new(
            "C++",
            &[".cpp", ".hpp", ".cc", ".cxx"],
            &["#include ", "class ", "int ", "void ", "namespace "],
            "//",
        ),
        LanguageRule::new(
            "Java",
            &[".java"],
            &["public class", "import ", "package ", "public static void"],
            "//",
        ),
        LanguageRule::new("PHP", &[".php"], &["<?php", "function ", "class ", "$"], "//"),
        LanguageRule::new("Ruby", &[".rb"], &["def ", "require ", "class ", "module "], "#"),
        LanguageRule::new("Go", &[".go"], &["package ", "import ", "func ", "type "], "//"),
        LanguageRule::new(
            "Rust",
            &[".rs"],
            &["fn ", "use ", "struct ", "impl ", "pub "],
            "//",
        ),
        LanguageRule::new(
            "Swift",
            &[".swift"],
            &["import ", "func ", "class ", "var ", "let "],
            "//",
        ),
        LanguageRule::new(
            "Kotlin",
            &[".kt", ".kts"],
            &["fun ", "class ", "import ", "val ", "var "],
            "//",
        ),
        LanguageRule::new(
            "SQL",
            &[".sql"],
            &["SELECT ", "CREATE ", "INSERT ", "UPDATE ", "DELETE "],
            "--",
        ),
        LanguageRule::new(
            "Shell",
            &[".sh", ".bash"],
            &["#!/bin/bash", "#!/bin/sh", "function ", "export "],
            "#",
        ),
        LanguageRule::new("PowerShell", &[".ps1"], &["function ", "Get-", "Set-", "$"], "#"),
        LanguageRule::new("Markdown", &[".md", ".markdown"], &["# ", "## ", "* ", "- "], "<!--"),
        LanguageRule::new("TypeScript", &[".ts"], &["interface ", ": string", ": number"], "//"),
        LanguageRule::new("React", &[".jsx", ".tsx"], &["React", "useState", "className="], "//"),
        LanguageRule::new("C#", &[".cs"], &["using System", "namespace "], "//"),
        LanguageRule::new("JSON", &[".json"], &[], ""),
        LanguageRule::new("XML", &[".xml"], &["<?xml"], "<!--"),
        LanguageRule::new("Batch", &[".bat"], &["@echo off", "REM "], "REM"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── extension lookup ─────────────────────────────────────────────────

    #[test]
    fn python_extension_maps_to_python() {
        let table = LanguageTable::default();
        assert_eq!(table.detect_language(Path::new("src/x.py")), "Python");
    }

    #[test]
    fn lookup_is_case_insensitive_and_dot_optional() {
        let table = LanguageTable::default();
        assert_eq!(table.language_for_extension("RS").unwrap().name, "Rust");
        assert_eq!(table.language_for_extension(".Tsx").unwrap().name, "React");
    }

    #[test]
    fn unmapped_extension_is_unknown() {
        let table = LanguageTable::default();
        assert_eq!(table.detect_language(Path::new("x.unknownext")), UNKNOWN_LANGUAGE);
        assert_eq!(table.detect_language(Path::new("Makefile")), UNKNOWN_LANGUAGE);
    }

    #[test]
    fn default_table_has_one_language_per_extension() {
        let rules = default_languages();
        assert!(LanguageTable::new(rules).is_ok());
    }

    #[test]
    fn conflicting_extension_is_rejected() {
        let rules = vec![
            LanguageRule::new("A", &[".x"], &[], "#"),
            LanguageRule::new("B", &["X"], &[], "#"),
        ];
        match LanguageTable::new(rules) {
            Err(Error::ConflictingExtension {
                extension,
                first,
                second,
            }) => {
                assert_eq!(extension, ".x");
                assert_eq!(first, "A");
                assert_eq!(second, "B");
            }
            other => panic!("expected ConflictingExtension, got {other:?}"),
        }
    }

    // ── content detection ────────────────────────────────────────────────

    #[test]
    fn content_with_no_signatures_is_unknown() {
        let table = LanguageTable::default();
        assert_eq!(table.detect_from_content(""), UNKNOWN_LANGUAGE);
        assert_eq!(table.detect_from_content("plain words only"), UNKNOWN_LANGUAGE);
    }

    /// "def " scores one hit for both Python and Ruby; Python is defined
    /// first and must win the tie.
    #[test]
    fn tie_goes_to_first_defined_language() {
        let table = LanguageTable::default();
        assert_eq!(table.detect_from_content("def foo():"), "Python");
    }

    #[test]
    fn highest_score_wins() {
        let table = LanguageTable::default();
        let rust = "use std::fmt;\npub struct A;\nimpl A { pub fn new() {} }";
        assert_eq!(table.detect_from_content(rust), "Rust");
    }

    // ── helpers ──────────────────────────────────────────────────────────

    #[test]
    fn helper_lookups() {
        let table = LanguageTable::default();
        assert_eq!(table.extensions_of("Shell"), &[".sh".to_string(), ".bash".to_string()]);
        assert_eq!(table.comment_of("SQL"), Some("--"));
        assert!(table.signatures_of("Nope").is_empty());
        assert!(table.source_extensions().contains(".kts"));
        assert!(table.is_source_code(Path::new("build.gradle.kts")));
        assert!(!table.is_source_code(Path::new("photo.png")));
        assert_eq!(table.names().next(), Some("Python"));
    }
}
