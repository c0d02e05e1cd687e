//! The `cct analyze` command.
//!
//! Analyzes a single post, every post under a directory, or text piped on
//! stdin (`-`), printing a summary or JSON reports and optionally saving
//! reports to `[reports].dir`. When a keyword catalog is configured,
//! each report also carries catalog coverage by category.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use claims_content_core::{Analyzer, ContentInput, KeywordCatalog, ScoreBand, Source};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::keywords::load_catalog;
use crate::post::{load_post, scan_posts, LoadedPost};
use crate::report::{write_report, TestReport};

/// Options for [`run_analyze`], mirroring the CLI flags.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Explicit target keywords; take precedence over everything else.
    pub keywords: Vec<String>,
    /// Use the keyword catalog when no explicit keywords are given.
    pub auto_keywords: bool,
    pub source: Source,
    pub json: bool,
    pub save: bool,
}

pub fn run_analyze(config: &Config, target: &str, opts: &AnalyzeOptions) -> Result<()> {
    let (posts, mut failures) = collect_posts(config, target)?;
    let total = posts.len() + failures.len();
    if total == 0 {
        println!("No posts found.");
        return Ok(());
    }

    let catalog = load_catalog(config)?;
    let analyzer = Analyzer::new(config.analysis.clone());
    let mut reports = Vec::with_capacity(posts.len());

    for post in &posts {
        let label = display_path(&post.path);
        let keywords = select_keywords(opts, &catalog, post);
        let input = ContentInput::new(post.text.clone(), keywords).with_source(opts.source);

        match analyzer.analyze_detailed(&input) {
            Ok(analysis) => {
                let mut report =
                    TestReport::new(label, opts.source, &post.text, analysis, Utc::now());
                if !catalog.is_empty() {
                    report = report.with_keyword_usage(catalog.usage(&post.text));
                }
                if opts.save {
                    let path = write_report(&config.reports.dir, &report)?;
                    if !opts.json {
                        println!("Saved report: {}", path.display());
                    }
                }
                reports.push(report);
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", label, e);
                failures.push(format!("{}: {}", label, e));
            }
        }
    }

    if opts.json {
        let json = if total == 1 && reports.len() == 1 {
            serde_json::to_string_pretty(&reports[0])?
        } else {
            serde_json::to_string_pretty(&reports)?
        };
        println!("{}", json);
    } else {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_summary(report);
        }
    }

    if !failures.is_empty() {
        bail!(
            "{} of {} posts could not be analyzed:\n  {}",
            failures.len(),
            total,
            failures.join("\n  ")
        );
    }

    Ok(())
}

/// Load the posts named by `target`.
///
/// A single file that cannot be loaded is an error. Inside a directory,
/// unloadable files are returned as failure messages so the rest of the
/// run continues.
fn collect_posts(config: &Config, target: &str) -> Result<(Vec<LoadedPost>, Vec<String>)> {
    if target == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read content from stdin")?;
        let post = LoadedPost {
            path: PathBuf::from("-"),
            text,
            keywords: Vec::new(),
        };
        return Ok((vec![post], Vec::new()));
    }

    let path = Path::new(target);
    if !path.exists() {
        bail!("No such file or directory: {}", path.display());
    }

    if !path.is_dir() {
        return Ok((vec![load_post(path)?], Vec::new()));
    }

    let files = scan_posts(path, &config.scan)?;
    tracing::info!("Found {} posts under {}", files.len(), path.display());

    let mut posts = Vec::with_capacity(files.len());
    let mut failures = Vec::new();
    for file in &files {
        match load_post(file) {
            Ok(post) => posts.push(post),
            Err(e) => {
                tracing::warn!("Skipping {}: {:#}", file.display(), e);
                failures.push(format!("{}: {:#}", display_path(file), e));
            }
        }
    }
    Ok((posts, failures))
}

fn select_keywords(opts: &AnalyzeOptions, catalog: &KeywordCatalog, post: &LoadedPost) -> Vec<String> {
    if !opts.keywords.is_empty() {
        opts.keywords.clone()
    } else if opts.auto_keywords {
        catalog.auto_keywords()
    } else {
        post.keywords.clone()
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn print_summary(report: &TestReport) {
    let r = &report.result;
    let m = &report.metrics;

    println!("{}", report.file);
    println!(
        "  SEO score:       {} / 100 ({})",
        r.seo_score,
        ScoreBand::from_score(r.seo_score).label()
    );
    println!(
        "  Readability:     {} ({}, {})",
        r.readability_grade,
        m.reading_level,
        m.readability_status.label()
    );
    println!(
        "  Words:           {} ({})",
        m.word_count,
        m.word_count_status.label()
    );
    println!("  Keyword density: {:.2}%", r.keyword_density);
    if r.detected_keywords.is_empty() {
        println!("  Detected:        none");
    } else {
        println!("  Detected:        {}", r.detected_keywords.join(", "));
    }
    if let Some(usage) = &report.keyword_usage {
        println!(
            "  Catalog usage:   {} ({:.2}% density)",
            usage.status.label(),
            usage.density
        );
        for c in &usage.categories {
            let found: Vec<String> = c
                .hits
                .iter()
                .map(|h| format!("{} x{}", h.keyword, h.occurrences))
                .collect();
            if found.is_empty() {
                println!("    {:<10} {}/{}", c.category.label(), c.found, c.total);
            } else {
                println!(
                    "    {:<10} {}/{}: {}",
                    c.category.label(),
                    c.found,
                    c.total,
                    found.join(", ")
                );
            }
        }
    }
    if !r.suggestions.is_empty() {
        println!("  Suggestions:");
        for s in &r.suggestions {
            println!("    - {}", s);
        }
    }
}
