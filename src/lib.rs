//! # Claims Content
//!
//! SEO and readability tester for storm-damage insurance-claims blog
//! content.
//!
//! The analysis itself lives in the pure `claims-content-core` crate. This
//! crate wraps it with configuration, post loading, report writing, a CLI,
//! and a JSON HTTP endpoint used by the admin dashboard.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌───────────────┐
//! │ Post loader  │──▶│ Content Analyzer │──▶│ Report writer │
//! │ md/json/txt  │   │  (core crate)    │   │  JSON files   │
//! └──────────────┘   └────────┬─────────┘   └───────────────┘
//!                             │
//!                  ┌──────────┴──────────┐
//!                  ▼                     ▼
//!             ┌──────────┐         ┌──────────┐
//!             │   CLI    │         │   HTTP   │
//!             │  (cct)   │         │ /api/test│
//!             └──────────┘         └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! cct analyze posts/hurricane-guide.md -k "hurricane damage" -k "insurance claim"
//! cct analyze generated_content/ --auto-keywords --save
//! cat draft.txt | cct analyze - --json
//! cct keywords
//! cct serve
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`keywords`] | Keyword catalog loading and target selection |
//! | [`post`] | Blog post loading (JSON, Markdown, text) |
//! | [`report`] | JSON test reports |
//! | [`analyze`] | The `analyze` command |
//! | [`server`] | HTTP server |

pub mod analyze;
pub mod config;
pub mod keywords;
pub mod post;
pub mod report;
pub mod server;
