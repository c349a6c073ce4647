/// Classification rules: the immutable configuration every analysis reads.
///
/// A [`RuleTable`] is built once (from defaults or from an
/// [`AnalyzerConfig`](crate::config::AnalyzerConfig)) and passed by
/// reference into the classifier, metadata reader and aggregator.
pub mod category;
pub mod language;
pub mod mime;

pub use category::{default_categories, CategoryRule, CategoryRuleConfig, UNCATEGORIZED};
pub use language::{default_languages, LanguageRule, LanguageTable, UNKNOWN_LANGUAGE};
pub use mime::guess_mime_type;

use crate::error::Result;

/// Language table plus ordered category rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    languages: LanguageTable,
    categories: Vec<CategoryRule>,
}

impl RuleTable {
    /// Compile a rule table from explicit language and category records.
    pub fn new(languages: Vec<LanguageRule>, categories: &[CategoryRuleConfig]) -> Result<Self> {
        let languages = LanguageTable::new(languages)?;
        let categories = categories
            .iter()
            .map(CategoryRule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            languages,
            categories,
        })
    }

    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    /// Category rules in evaluation order.
    pub fn categories(&self) -> &[CategoryRule] {
        &self.categories
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        let languages = LanguageTable::default();
        let categories = default_categories(languages.rules())
            .iter()
            .filter_map(|c| match CategoryRule::compile(c) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::error!("built-in category rule rejected: {e}");
                    None
                }
            })
            .collect();
        Self {
            languages,
            categories,
        }
    }
}
