//! Wire types returned by the analysis backend

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest ticker symbol accepted
pub const MAX_TICKER_LEN: usize = 5;

/// Validated ticker symbol: 1-5 ASCII uppercase letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::Required);
        }
        if s.len() > MAX_TICKER_LEN || !s.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCharacters);
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full technical and sentiment report for one ticker.
///
/// Received wholesale and never modified; optional fields are `None` when
/// the backend had too little history to compute them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub prev_price: f64,
    pub price_change: f64,
    pub price_change_pct: f64,
    pub volume: f64,
    pub avg_volume_20d: f64,
    pub ema_21: f64,
    pub ema21_diff: Option<f64>,
    pub ema21_pct: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma50_diff: Option<f64>,
    pub sma50_pct: Option<f64>,
    pub sma_200: Option<f64>,
    pub sma200_diff: Option<f64>,
    pub sma200_pct: Option<f64>,
    pub rs_rating: Option<i64>,
    pub sentiment: Sentiment,
}

/// News sentiment block of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub sentiment_label: SentimentLabel,
    pub bullish_pct: Option<f64>,
    #[serde(default)]
    pub headlines: Vec<String>,
}

/// Backend sentiment label.
///
/// Anything other than `Bullish`/`Bearish` (`Neutral`, `N/A`, ...) is kept
/// verbatim in `Other` so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    Other(String),
}

impl From<String> for SentimentLabel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Bullish" => Self::Bullish,
            "Bearish" => Self::Bearish,
            _ => Self::Other(s),
        }
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        label.to_string()
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bullish => f.write_str("Bullish"),
            Self::Bearish => f.write_str("Bearish"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
