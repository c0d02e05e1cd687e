//! Test reports.
//!
//! A [`TestReport`] records one analysis with enough context to compare
//! runs later: the file, when it was tested, and a SHA-256 of the text so
//! unchanged content can be recognised.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use claims_content_core::{
    AnalysisResult, DetailedAnalysis, KeywordHit, KeywordUsage, Source, TextMetrics,
};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    /// Analyzed file, or `-` for stdin.
    pub file: String,
    pub timestamp: DateTime<Utc>,
    pub source: Source,
    pub content_hash: String,
    pub result: AnalysisResult,
    pub metrics: TextMetrics,
    pub keyword_hits: Vec<KeywordHit>,
    /// Catalog coverage by category, present when a catalog is loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_usage: Option<KeywordUsage>,
}

impl TestReport {
    pub fn new(
        file: impl Into<String>,
        source: Source,
        text: &str,
        analysis: DetailedAnalysis,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            file: file.into(),
            timestamp,
            source,
            content_hash: content_hash(text),
            result: analysis.result,
            metrics: analysis.metrics,
            keyword_hits: analysis.keyword_hits,
            keyword_usage: None,
        }
    }

    pub fn with_keyword_usage(mut self, usage: KeywordUsage) -> Self {
        self.keyword_usage = Some(usage);
        self
    }
}

pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Write `report` as pretty JSON into `dir`, creating it if needed.
///
/// The file is named `test_<stem>_<YYYYmmdd_HHMMSS>.json` after the
/// analyzed file and the report timestamp.
pub fn write_report(dir: &Path, report: &TestReport) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory: {}", dir.display()))?;

    let stem = Path::new(&report.file)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty() && s != "-")
        .unwrap_or_else(|| "stdin".to_string());

    let name = format!(
        "test_{}_{}.json",
        stem,
        report.timestamp.format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(name);

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    tracing::debug!("Wrote report {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use claims_content_core::{Analyzer, ContentInput, KeywordCatalog};
    use tempfile::TempDir;

    fn report(file: &str) -> TestReport {
        let text = "Roof damage claims need photos.";
        let analysis = Analyzer::default()
            .analyze_detailed(&ContentInput::new(text, vec!["roof".into()]))
            .unwrap();
        let ts = Utc.with_ymd_and_hms(2025, 4, 10, 9, 30, 0).unwrap();
        TestReport::new(file, Source::Draft, text, analysis, ts)
    }

    #[test]
    fn test_content_hash_stable() {
        assert_eq!(content_hash("abc"), content_hash("abc"));
        assert_ne!(content_hash("abc"), content_hash("abd"));
        assert_eq!(content_hash("").len(), 64);
    }

    #[test]
    fn test_write_report_names_and_contents() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("results");
        let path = write_report(&dir, &report("posts/hurricane-guide.md")).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "test_hurricane-guide_20250410_093000.json"
        );

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["file"], "posts/hurricane-guide.md");
        assert_eq!(value["source"], "draft");
        assert_eq!(value["result"]["detectedKeywords"][0], "roof");
        assert!(value["metrics"]["wordCount"].as_u64().unwrap() > 0);
        assert!(value.get("keywordUsage").is_none());
    }

    #[test]
    fn test_keyword_usage_serialized_when_present() {
        let catalog = KeywordCatalog {
            primary: vec!["roof damage".into()],
            semantic: vec!["photos".into()],
            ..Default::default()
        };
        let usage = catalog.usage("Roof damage claims need photos.");
        let value = serde_json::to_value(report("a.md").with_keyword_usage(usage)).unwrap();

        let categories = value["keywordUsage"]["categories"].as_array().unwrap();
        assert_eq!(categories[0]["category"], "primary");
        assert_eq!(categories[0]["found"], 1);
        assert_eq!(categories[0]["hits"][0]["keyword"], "roof damage");
        assert_eq!(categories[2]["category"], "longTail");
        assert_eq!(categories[3]["found"], 1);
        assert_eq!(value["keywordUsage"]["status"], "Needs Improvement");
    }

    #[test]
    fn test_stdin_report_name() {
        let tmp = TempDir::new().unwrap();
        let path = write_report(tmp.path(), &report("-")).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("test_stdin_"));
    }
}
