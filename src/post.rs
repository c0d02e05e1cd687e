//! Blog post loading.
//!
//! Supported formats:
//!
//! | Extension | Handling |
//! |-----------|----------|
//! | `.json` | Structured post from the blog generator, flattened to Markdown |
//! | `.md`, `.markdown` | Read as-is, minus `<!-- Image Suggestions: ... -->` comments |
//! | `.txt` | Read as-is |
//!
//! Flattening renders the title as `#`, section headings as `##`, and FAQ
//! questions as `###`, so the analyzer's structure check sees them.

use anyhow::{bail, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

use crate::config::ScanConfig;

static IMAGE_SUGGESTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--\s*Image Suggestions:.*?-->").expect("valid regex"));

/// A structured blog post as written by the blog generator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub title: String,
    pub introduction: String,
    pub sections: Vec<PostSection>,
    pub tips: Option<PostTips>,
    pub downloadable_resource: Option<DownloadableResource>,
    pub conclusion: String,
    pub faq: Vec<FaqEntry>,
    pub keywords: Vec<String>,
    pub metadata: Option<PostMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostSection {
    pub heading: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostTips {
    pub intro: String,
    pub list: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DownloadableResource {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostMetadata {
    pub focus_keywords: Vec<String>,
}

impl BlogPost {
    /// Render the post as Markdown, skipping empty parts.
    pub fn to_markdown(&self) -> String {
        let mut blocks: Vec<String> = Vec::new();
        let mut push = |block: String| {
            if !block.trim().is_empty() {
                blocks.push(block);
            }
        };

        if !self.title.trim().is_empty() {
            push(format!("# {}", self.title.trim()));
        }
        push(self.introduction.clone());

        for section in &self.sections {
            if !section.heading.trim().is_empty() {
                push(format!("## {}", section.heading.trim()));
            }
            push(section.content.clone());
        }

        if let Some(tips) = &self.tips {
            push(tips.intro.clone());
            push(
                tips.list
                    .iter()
                    .map(|t| format!("- {}", t))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        if let Some(resource) = &self.downloadable_resource {
            if !resource.title.trim().is_empty() {
                push(format!("Free Resource: {}", resource.title.trim()));
            }
            push(resource.description.clone());
        }

        push(self.conclusion.clone());

        for entry in &self.faq {
            if !entry.question.trim().is_empty() {
                push(format!("### {}", entry.question.trim()));
            }
            push(entry.answer.clone());
        }

        blocks.join("\n\n")
    }

    /// Keywords carried by the post itself, if any.
    pub fn embedded_keywords(&self) -> Vec<String> {
        if !self.keywords.is_empty() {
            return self.keywords.clone();
        }
        self.metadata
            .as_ref()
            .map(|m| m.focus_keywords.clone())
            .unwrap_or_default()
    }
}

/// Text ready for analysis, plus any keywords the file declared.
#[derive(Debug, Clone)]
pub struct LoadedPost {
    pub path: PathBuf,
    pub text: String,
    pub keywords: Vec<String>,
}

pub fn load_post(path: &Path) -> Result<LoadedPost> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read post: {}", path.display()))?;

    let (text, keywords) = match extension.as_str() {
        "json" => {
            let post: BlogPost = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse blog post JSON: {}", path.display()))?;
            (post.to_markdown(), post.embedded_keywords())
        }
        "md" | "markdown" => (strip_image_suggestions(&raw), Vec::new()),
        "txt" => (raw, Vec::new()),
        _ => bail!("Unsupported file format: {}", path.display()),
    };

    Ok(LoadedPost {
        path: path.to_path_buf(),
        text,
        keywords,
    })
}

pub fn strip_image_suggestions(markdown: &str) -> String {
    IMAGE_SUGGESTIONS.replace_all(markdown, "").into_owned()
}

/// Collect post files under `root`, sorted by path.
pub fn scan_posts(root: &Path, scan: &ScanConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let include_set = build_globset(&scan.include_globs)?;

    let mut excludes = vec!["**/.git/**".to_string(), "**/node_modules/**".to_string()];
    excludes.extend(scan.exclude_globs.iter().cloned());
    let exclude_set = build_globset(&excludes)?;

    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if exclude_set.is_match(&rel_str) || !include_set.is_match(&rel_str) {
            continue;
        }
        paths.push(path.to_path_buf());
    }

    paths.sort();
    Ok(paths)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("Invalid glob: {}", pattern))?);
    }
    Ok(builder.build()?)
}
