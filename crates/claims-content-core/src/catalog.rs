//! SEO keyword catalog parsing.
//!
//! The catalog is a Markdown document with one `##` section per keyword
//! category:
//!
//! ```markdown
//! ## Primary Keywords
//!
//! 1. storm damage insurance claims
//! 2. hurricane damage claims
//!
//! ## Secondary Keywords
//!
//! ### Storm Types and Damage
//! - hail damage
//! - wind damage
//!
//! ## Long-Tail Keywords
//!
//! 1. "how to file a hurricane damage claim"
//!
//! ## Semantic Keywords and Related Terms
//!
//! - adjuster
//! ```
//!
//! `###` subsections belong to the enclosing `##` category. List items
//! may be bulleted (`-`, `*`) or numbered (`1.`); surrounding double
//! quotes are stripped. Sections with unrecognised titles are skipped.
//!
//! [`KeywordCatalog::usage`] checks a text against every category at
//! once and rates the overall keyword coverage.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::analyzer::round_to;
use crate::models::{KeywordHit, Rating};
use crate::tokenize;

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*]|\d+[.)])\s+(.+?)\s*$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Primary,
    Secondary,
    LongTail,
    Semantic,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Primary,
        Category::Secondary,
        Category::LongTail,
        Category::Semantic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Primary => "Primary",
            Category::Secondary => "Secondary",
            Category::LongTail => "Long-tail",
            Category::Semantic => "Semantic",
        }
    }

    fn from_title(title: &str) -> Option<Self> {
        let t = title.to_lowercase();
        if t.contains("primary") {
            Some(Category::Primary)
        } else if t.contains("secondary") {
            Some(Category::Secondary)
        } else if t.contains("long-tail") || t.contains("long tail") {
            Some(Category::LongTail)
        } else if t.contains("semantic") {
            Some(Category::Semantic)
        } else {
            None
        }
    }
}

/// How one catalog category is used in a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUsage {
    pub category: Category,
    /// Keywords in the category with at least one occurrence.
    pub found: usize,
    pub total: usize,
    /// Found keywords with their counts, in catalog order.
    pub hits: Vec<KeywordHit>,
}

/// Catalog coverage of a text across all four categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordUsage {
    pub categories: Vec<CategoryUsage>,
    /// Occurrences of all catalog keywords as a percentage of words.
    pub density: f64,
    pub status: Rating,
}

impl KeywordUsage {
    pub fn category(&self, category: Category) -> Option<&CategoryUsage> {
        self.categories.iter().find(|c| c.category == category)
    }

    fn found(&self, category: Category) -> usize {
        self.category(category).map_or(0, |c| c.found)
    }
}

/// Categorised target keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCatalog {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub long_tail: Vec<String>,
    pub semantic: Vec<String>,
}

impl KeywordCatalog {
    pub fn parse(markdown: &str) -> Self {
        let mut catalog = KeywordCatalog::default();
        let mut current: Option<Category> = None;

        for line in markdown.lines() {
            let trimmed = line.trim();
            if let Some(title) = trimmed.strip_prefix("## ") {
                current = Category::from_title(title);
                continue;
            }
            if trimmed.starts_with("# ") {
                current = None;
                continue;
            }

            let Some(category) = current else {
                continue;
            };
            let Some(caps) = LIST_ITEM.captures(line) else {
                continue;
            };
            let item = caps[1].trim_matches('"').trim();
            if item.is_empty() {
                continue;
            }

            catalog.list_mut(category).push(item.to_string());
        }

        catalog
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Primary => &mut self.primary,
            Category::Secondary => &mut self.secondary,
            Category::LongTail => &mut self.long_tail,
            Category::Semantic => &mut self.semantic,
        }
    }

    pub fn list(&self, category: Category) -> &[String] {
        match category {
            Category::Primary => &self.primary,
            Category::Secondary => &self.secondary,
            Category::LongTail => &self.long_tail,
            Category::Semantic => &self.semantic,
        }
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len() + self.long_tail.len() + self.semantic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keywords used when a caller asks for automatic selection: primary
    /// then secondary, case-insensitively deduplicated.
    pub fn auto_keywords(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .filter(|k| seen.insert(k.to_lowercase()))
            .cloned()
            .collect()
    }

    /// Count every catalog keyword in `text`, category by category.
    ///
    /// Phrases are matched on word boundaries, case-insensitively. A
    /// keyword listed in two categories counts in both.
    pub fn usage(&self, text: &str) -> KeywordUsage {
        let tokens = tokenize::words(text);
        let mut occurrences = 0;

        let categories: Vec<CategoryUsage> = Category::ALL
            .iter()
            .map(|&category| {
                let list = self.list(category);
                let hits: Vec<KeywordHit> = list
                    .iter()
                    .filter_map(|keyword| {
                        let phrase = tokenize::words(keyword);
                        if phrase.is_empty() {
                            return None;
                        }
                        let count = tokenize::count_phrase(&tokens, &phrase);
                        (count > 0).then(|| KeywordHit {
                            keyword: keyword.clone(),
                            occurrences: count,
                        })
                    })
                    .collect();
                occurrences += hits.iter().map(|h| h.occurrences).sum::<usize>();
                CategoryUsage {
                    category,
                    found: hits.len(),
                    total: list.len(),
                    hits,
                }
            })
            .collect();

        let density = if tokens.is_empty() {
            0.0
        } else {
            round_to(100.0 * occurrences as f64 / tokens.len() as f64, 2)
        };

        let mut usage = KeywordUsage {
            categories,
            density,
            status: Rating::NeedsImprovement,
        };
        usage.status = usage_rating(&usage);
        usage
    }
}

/// Excellent coverage uses two primary, five secondary, and one long-tail
/// keyword at 1-3% density; the lower ratings relax both.
fn usage_rating(usage: &KeywordUsage) -> Rating {
    let primary = usage.found(Category::Primary);
    let secondary = usage.found(Category::Secondary);
    let long_tail = usage.found(Category::LongTail);
    let density = usage.density;

    if primary >= 2 && secondary >= 5 && long_tail >= 1 && (1.0..=3.0).contains(&density) {
        Rating::Excellent
    } else if primary >= 1 && secondary >= 3 && (0.5..=4.0).contains(&density) {
        Rating::Good
    } else if primary >= 1 && secondary >= 2 && density <= 5.0 {
        Rating::Acceptable
    } else {
        Rating::NeedsImprovement
    }
}
