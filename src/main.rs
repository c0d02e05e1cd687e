//! # Claims Content CLI (`cct`)
//!
//! The `cct` binary tests blog content for SEO and readability, lists the
//! keyword catalog, and serves the analyzer over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! cct --config ./config/cct.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cct analyze <path>` | Analyze a post, a directory of posts, or stdin (`-`) |
//! | `cct keywords` | Print the keyword catalog |
//! | `cct serve` | Start the HTTP server |
//!
//! ## Examples
//!
//! ```bash
//! # Analyze one post against two keywords
//! cct analyze posts/hurricane-guide.md -k "hurricane damage" -k "insurance claim"
//!
//! # Analyze every generated post with catalog keywords and save reports
//! cct analyze generated_content/ --auto-keywords --save
//!
//! # Machine-readable output from stdin
//! cat draft.txt | cct analyze - --json
//! ```

use clap::{ArgAction, Parser, Subcommand};
use claims_content::analyze::{run_analyze, AnalyzeOptions};
use claims_content::{config, keywords, server};
use claims_content_core::Source;
use std::path::PathBuf;

/// Claims Content CLI: SEO and readability testing for insurance-claims
/// blog posts.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. When the file does not exist, built-in defaults are used.
#[derive(Parser)]
#[command(
    name = "cct",
    about = "Claims Content Tester: SEO and readability scoring for storm-damage claims blog posts",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/cct.toml")]
    config: PathBuf,

    /// Verbosity (-v, -vv, -vvv). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Analyze blog content.
    ///
    /// Accepts a `.md`, `.markdown`, `.json`, or `.txt` file, a directory
    /// (scanned with `[scan]` globs), or `-` to read from stdin.
    ///
    /// Keywords come from `--keyword` if given, else from the catalog with
    /// `--auto-keywords`, else from the post's own JSON metadata.
    Analyze {
        /// File, directory, or `-` for stdin.
        path: String,

        /// Target keyword or phrase. Repeatable.
        #[arg(short = 'k', long = "keyword")]
        keywords: Vec<String>,

        /// Use primary and secondary keywords from the catalog.
        #[arg(long)]
        auto_keywords: bool,

        /// Publication state of the content: `draft` or `published`.
        #[arg(long, default_value = "draft")]
        source: Source,

        /// Print JSON reports instead of a summary.
        #[arg(long)]
        json: bool,

        /// Save a JSON report per post to `[reports].dir`.
        #[arg(long)]
        save: bool,
    },

    /// Print the keyword catalog configured in `[keywords].catalog`.
    Keywords,

    /// Start the HTTP server on `[server].bind`.
    Serve,
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let cfg = config::load_or_minimal(&cli.config)?;

    match cli.command {
        Commands::Analyze {
            path,
            keywords,
            auto_keywords,
            source,
            json,
            save,
        } => {
            let opts = AnalyzeOptions {
                keywords,
                auto_keywords,
                source,
                json,
                save,
            };
            run_analyze(&cfg, &path, &opts)?;
        }
        Commands::Keywords => {
            keywords::run_keywords(&cfg)?;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
