//! Stock analysis client
//!
//! Talks to a stock analysis backend that computes moving averages, a
//! relative-strength rating and news sentiment for a ticker, and renders the
//! finished report for a terminal. The client itself computes nothing; it
//! validates the ticker, makes one request, and formats what comes back.
//!
//! # Architecture
//!
//! - [`input`]: sanitizes raw edits into a [`Ticker`] (A-Z only, max five letters)
//! - [`api`]: [`ReportSource`] trait and the reqwest-backed [`AnalyzerClient`]
//! - [`render`]: pure formatting of an [`AnalysisReport`] into text
//! - [`page`]: the controller tying them together, one request at a time
//!
//! # Example
//!
//! ```rust,ignore
//! use analyzer_client::{AnalyzerClient, InputEvent, Page, RenderOptions, ReportView};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AnalyzerClient::from_env()?;
//!     let mut page = Page::new();
//!
//!     page.handle(InputEvent::Edit("aapl".to_string()))?;
//!     page.search(&client).await?;
//!
//!     if let Some(report) = page.report() {
//!         let view = ReportView::new(report);
//!         println!("{}", analyzer_client::render_report(&view, &RenderOptions::default()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod page;
pub mod render;

// Re-export main types for convenience
pub use api::{AnalyzerClient, ReportSource};
pub use config::ClientConfig;
pub use error::{AnalyzerError, FetchError, Result, ValidationError};
pub use input::{InputEvent, TickerInput};
pub use model::{AnalysisReport, HealthStatus, Sentiment, SentimentLabel, Ticker};
pub use page::{Page, Phase, SubmitRejected};
pub use render::{ColorMode, RenderOptions, ReportView, render_error_banner, render_report};
