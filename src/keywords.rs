//! Keyword catalog loading and target keyword selection.
//!
//! The catalog file is optional. When `[keywords].catalog` is unset the
//! catalog is empty; when it points at a missing file a warning is logged
//! and the catalog is empty. Any other read failure is an error.

use anyhow::{Context, Result};
use claims_content_core::{Category, KeywordCatalog};
use serde::Deserialize;

use crate::config::Config;

/// Target keywords as accepted on the HTTP boundary.
///
/// Either an explicit list, the string `"auto"` (use the catalog), or a
/// comma-separated string as submitted by the web form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TargetKeywords {
    List(Vec<String>),
    Text(String),
}

/// Absent keywords mean automatic selection from the catalog.
impl Default for TargetKeywords {
    fn default() -> Self {
        TargetKeywords::Text("auto".to_string())
    }
}

impl TargetKeywords {
    pub fn resolve(self, catalog: &KeywordCatalog) -> Vec<String> {
        match self {
            TargetKeywords::List(list) => list,
            TargetKeywords::Text(text) if text.trim().eq_ignore_ascii_case("auto") => {
                catalog.auto_keywords()
            }
            TargetKeywords::Text(text) => text
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

pub fn load_catalog(config: &Config) -> Result<KeywordCatalog> {
    let Some(path) = config.keywords.catalog.as_ref() else {
        return Ok(KeywordCatalog::default());
    };

    if !path.exists() {
        tracing::warn!(
            "Keyword catalog {} not found; automatic keywords are unavailable",
            path.display()
        );
        return Ok(KeywordCatalog::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keyword catalog: {}", path.display()))?;
    let catalog = KeywordCatalog::parse(&content);

    tracing::info!(
        primary = catalog.primary.len(),
        secondary = catalog.secondary.len(),
        long_tail = catalog.long_tail.len(),
        semantic = catalog.semantic.len(),
        "Loaded keyword catalog from {}",
        path.display()
    );

    Ok(catalog)
}

/// Print the catalog, one category per block.
pub fn run_keywords(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;

    if catalog.is_empty() {
        println!("No keywords loaded. Set [keywords].catalog in the config file.");
        return Ok(());
    }

    for category in Category::ALL {
        let list = catalog.list(category);
        println!("{} ({})", category.label(), list.len());
        for keyword in list {
            println!("  - {}", keyword);
        }
    }

    Ok(())
}
