//! Bundesliga Injury Dashboard Client Library
//!
//! Client side of the injury analysis dashboard: talks to the analysis API,
//! keeps one fetch-and-render controller per view, and renders results as
//! HTML, terminal tables or JSON.
//!
//! ## Features
//!
//! - **Overview**: every injury record with total, average and missed-games statistics
//! - **Team / Player Analysis**: the same report filtered to one team or player
//! - **Comparison**: side-by-side statistics for two teams or two players
//! - **Session Cache**: team and player lists fetched once per session
//! - **Inline Errors**: failed requests become an error message in the view's region
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use injury_dash::{Dashboard, HttpAnalysisApi, HtmlRenderer, Renderer};
//!
//! # async fn example() -> injury_dash::Result<()> {
//! let api = HttpAnalysisApi::new("http://127.0.0.1:5000")?;
//! let mut dash = Dashboard::new(Arc::new(api));
//! dash.init().await;
//! dash.load_overview().await;
//!
//! let html = HtmlRenderer::new()?.render_page(&dash.page())?;
//! println!("{}", html);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a different API without passing `--base-url`:
//! ```bash
//! export INJURY_DASH_API_URL=http://analysis.local:5000
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use analysis::{
    AnalysisApi, AnalysisReport, ComparisonResult, EntityKind, HttpAnalysisApi, InjuryRecord,
    StatisticsSummary,
};
pub use config::{Settings, API_URL_ENV_VAR, DEFAULT_BASE_URL};
pub use controller::{ViewController, ViewState};
pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use session::SessionCache;
pub use view::{Fragment, HtmlRenderer, JsonRenderer, Renderer, TextRenderer, ViewKind};
