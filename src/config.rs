use anyhow::{Context, Result};
use claims_content_core::AnalysisSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub keywords: KeywordsConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct KeywordsConfig {
    /// Markdown keyword catalog (`seo_keywords.md`). Optional.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7340".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportsConfig {
    #[serde(default = "default_reports_dir")]
    pub dir: PathBuf,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            dir: default_reports_dir(),
        }
    }
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("test_results")
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScanConfig {
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
        }
    }
}

fn default_include_globs() -> Vec<String> {
    vec![
        "**/*.md".to_string(),
        "**/*.markdown".to_string(),
        "**/*.json".to_string(),
        "**/*.txt".to_string(),
    ]
}

impl Config {
    /// Built-in defaults, used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&config)?;

    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to [`Config::minimal`].
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_minimal(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(
            "Config file {} not found, using built-in defaults",
            path.display()
        );
        Ok(Config::minimal())
    }
}

fn validate(config: &Config) -> Result<()> {
    config
        .analysis
        .validate()
        .context("Invalid [analysis] settings")?;

    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if config.scan.include_globs.is_empty() {
        anyhow::bail!("scan.include_globs must list at least one pattern");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("cct.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "");
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.analysis, AnalysisSettings::default());
        assert_eq!(cfg.server.bind, "127.0.0.1:7340");
        assert_eq!(cfg.reports.dir, PathBuf::from("test_results"));
        assert!(cfg.keywords.catalog.is_none());
    }

    #[test]
    fn test_partial_analysis_table() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
[analysis]
min_words = 600
density_max = 2.0

[keywords]
catalog = "data/seo_keywords.md"

[server]
bind = "0.0.0.0:9000"
"#,
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.analysis.min_words, 600);
        assert_eq!(cfg.analysis.density_max, 2.0);
        assert_eq!(cfg.analysis.presence_weight, 30);
        assert_eq!(
            cfg.keywords.catalog,
            Some(PathBuf::from("data/seo_keywords.md"))
        );
        assert_eq!(cfg.server.bind, "0.0.0.0:9000");
    }

    #[test]
    fn test_bad_weights_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[analysis]\npresence_weight = 50\n");
        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("sum to 100"));
    }

    #[test]
    fn test_huge_weight_is_error_not_panic() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            "[analysis]\npresence_weight = 4294967295\ndensity_weight = 61\n",
        );
        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("sum to 100"));
    }

    #[test]
    fn test_empty_include_globs_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[scan]\ninclude_globs = []\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tmp = TempDir::new().unwrap();
        let cfg = load_or_minimal(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.analysis.min_words, 1000);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[analysis\nmin_words = ");
        assert!(load_or_minimal(&path).is_err());
    }
}
