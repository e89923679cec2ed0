//! Display model of a report: formatted strings plus tones, no styling

use super::format::{
    DiffDisplay, NOT_AVAILABLE, Polarity, RsTier, VolumeLevel, VolumeSignal, fixed, fmt_diff,
    fmt_price, fmt_volume, position_label, rs_tier, sign_char, volume_signal,
};
use crate::model::{AnalysisReport, SentimentLabel};

/// Visual treatment of a rendered value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Caution,
    Muted,
    Neutral,
}

impl From<Option<Polarity>> for Tone {
    fn from(polarity: Option<Polarity>) -> Self {
        match polarity {
            Some(Polarity::Positive) => Self::Positive,
            Some(Polarity::Negative) => Self::Negative,
            None => Self::Muted,
        }
    }
}

impl From<RsTier> for Tone {
    fn from(tier: RsTier) -> Self {
        match tier {
            RsTier::Strong => Self::Positive,
            RsTier::Moderate => Self::Caution,
            RsTier::Weak => Self::Negative,
            RsTier::Unrated => Self::Muted,
        }
    }
}

impl From<VolumeLevel> for Tone {
    fn from(level: VolumeLevel) -> Self {
        match level {
            VolumeLevel::Elevated => Self::Caution,
            VolumeLevel::Depressed => Self::Muted,
            VolumeLevel::Normal => Self::Neutral,
        }
    }
}

impl From<&SentimentLabel> for Tone {
    fn from(label: &SentimentLabel) -> Self {
        match label {
            SentimentLabel::Bullish => Self::Positive,
            SentimentLabel::Bearish => Self::Negative,
            SentimentLabel::Other(_) => Self::Neutral,
        }
    }
}

/// One row of the technical signals table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovingAverageRow {
    pub label: &'static str,
    pub value: String,
    pub position: &'static str,
    pub distance: DiffDisplay,
    pub tone: Tone,
}

impl MovingAverageRow {
    fn new(label: &'static str, value: Option<f64>, diff: Option<f64>, pct: Option<f64>) -> Self {
        let distance = fmt_diff(diff, pct);
        Self {
            label,
            value: value.map_or_else(|| NOT_AVAILABLE.to_string(), fmt_price),
            position: position_label(distance.polarity),
            tone: distance.polarity.into(),
            distance,
        }
    }
}

/// Everything the report shows, already formatted
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub ticker: String,
    pub name: String,
    /// `85/99` or `N/A`
    pub rs_rating: String,
    pub rs_tier: RsTier,
    pub price: String,
    /// e.g. `▲ +$2.50 (+1.33%)`
    pub price_change: String,
    pub price_tone: Tone,
    pub volume: String,
    pub avg_volume: String,
    pub volume_signal: VolumeSignal,
    pub moving_averages: [MovingAverageRow; 3],
    pub sentiment_label: String,
    pub sentiment_tone: Tone,
    /// e.g. `72.5% bullish`, only when the backend sent a percentage
    pub bullish: Option<String>,
    pub headlines: Vec<String>,
}

impl ReportView {
    pub fn new(report: &AnalysisReport) -> Self {
        let up = report.price_change >= 0.0;
        let polarity = if up {
            Polarity::Positive
        } else {
            Polarity::Negative
        };
        let price_change = format!(
            "{} {}${} ({}{}%)",
            if up { '▲' } else { '▼' },
            sign_char(polarity),
            fixed(report.price_change.abs(), 2),
            if up { "+" } else { "" },
            fixed(report.price_change_pct, 2),
        );

        let tier = rs_tier(report.rs_rating);
        let sentiment = &report.sentiment;

        Self {
            ticker: report.ticker.clone(),
            name: report.name.clone(),
            rs_rating: report
                .rs_rating
                .map_or_else(|| NOT_AVAILABLE.to_string(), |r| format!("{r}/99")),
            rs_tier: tier,
            price: fmt_price(report.price),
            price_change,
            price_tone: Some(polarity).into(),
            volume: fmt_volume(report.volume),
            avg_volume: fmt_volume(report.avg_volume_20d),
            volume_signal: volume_signal(report.volume, report.avg_volume_20d),
            moving_averages: [
                MovingAverageRow::new(
                    "21 EMA",
                    Some(report.ema_21),
                    report.ema21_diff,
                    report.ema21_pct,
                ),
                MovingAverageRow::new(
                    "50 SMA",
                    report.sma_50,
                    report.sma50_diff,
                    report.sma50_pct,
                ),
                MovingAverageRow::new(
                    "200 SMA",
                    report.sma_200,
                    report.sma200_diff,
                    report.sma200_pct,
                ),
            ],
            sentiment_label: sentiment.sentiment_label.to_string(),
            sentiment_tone: (&sentiment.sentiment_label).into(),
            bullish: sentiment.bullish_pct.map(|p| format!("{p}% bullish")),
            headlines: sentiment.headlines.clone(),
        }
    }
}
