//! Client for the stock analysis backend

pub mod client;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{AnalyzerClient, ReportSource};

#[cfg(test)]
pub use client::MockReportSource;
