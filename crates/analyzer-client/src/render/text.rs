//! Terminal rendering of a report view

use super::format::RsTier;
use super::view::{ReportView, Tone};
use crate::error::FetchError;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use std::fmt;
use std::io::{self, IsTerminal};
use std::str::FromStr;

/// Shown while a request is in flight
pub const LOADING_MESSAGE: &str = "Fetching data...";

/// Banner text when a failure carries no message at all
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

const NO_HEADLINES: &str = "No recent headlines available.";

/// When to emit ANSI colours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "unknown color mode '{other}' (expected auto, always or never)"
            )),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub color: ColorMode,
}

/// Render the whole report.
///
/// ```text
/// AAPL
/// Apple Inc.
/// RS Rating: 85/99 (strong)
///
/// $189.84  ▲ +$2.50 (+1.33%)
/// Volume: 52.30M   20d avg: 60.12M   (-13% vs avg)
///
/// Technical Signals
/// <table>
///
/// News & Sentiment
/// Bullish   72.5% bullish
///   • headline
/// ```
pub fn render_report(view: &ReportView, options: &RenderOptions) -> String {
    let color = options.color.enabled();
    let style = |text: &str, tone: Tone| paint(text, tone, color);
    let mut out = String::new();

    out.push_str(&format!("{}\n{}\n", view.ticker, view.name));
    out.push_str(&format!("RS Rating: {}", style(&view.rs_rating, view.rs_tier.into())));
    if let Some(label) = tier_label(view.rs_tier) {
        out.push_str(&format!(" ({})", style(label, view.rs_tier.into())));
    }
    out.push_str("\n\n");

    out.push_str(&format!(
        "{}  {}\n",
        view.price,
        style(&view.price_change, view.price_tone)
    ));
    out.push_str(&format!(
        "Volume: {}   20d avg: {}   {}\n\n",
        view.volume,
        view.avg_volume,
        style(
            &format!("({})", view.volume_signal.label),
            view.volume_signal.level.into()
        )
    ));

    out.push_str("Technical Signals\n");
    out.push_str(&signals_table(view, color).to_string());
    out.push_str("\n\nNews & Sentiment\n");

    out.push_str(&style(&view.sentiment_label, view.sentiment_tone));
    if let Some(bullish) = &view.bullish {
        out.push_str("   ");
        out.push_str(bullish);
    }
    out.push('\n');

    if view.headlines.is_empty() {
        out.push_str(NO_HEADLINES);
        out.push('\n');
    } else {
        for headline in &view.headlines {
            out.push_str("  • ");
            out.push_str(headline);
            out.push('\n');
        }
    }

    out
}

/// Page-level banner for a failed fetch
pub fn render_error_banner(err: &FetchError) -> String {
    let message = err.message();
    if message.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        message
    }
}

fn signals_table(view: &ReportView, color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    table.set_header(vec![
        "Indicator",
        "Value",
        "Position",
        "Distance $",
        "Distance %",
    ]);

    for row in &view.moving_averages {
        table.add_row(vec![
            Cell::new(row.label),
            Cell::new(&row.value).set_alignment(CellAlignment::Right),
            toned(row.position, row.tone).set_alignment(CellAlignment::Center),
            toned(&row.distance.diff, row.tone).set_alignment(CellAlignment::Right),
            toned(&row.distance.pct, row.tone).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

fn toned(text: &str, tone: Tone) -> Cell {
    let cell = Cell::new(text);
    match tone_color(tone) {
        Some(color) => cell.fg(color),
        None => cell,
    }
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Positive => Some(Color::Green),
        Tone::Negative => Some(Color::Red),
        Tone::Caution => Some(Color::Yellow),
        Tone::Muted => Some(Color::DarkGrey),
        Tone::Neutral => None,
    }
}

/// Wrap text outside the table in the same foreground colours the table uses
fn paint(text: &str, tone: Tone, enabled: bool) -> String {
    let code = match tone_color(tone) {
        _ if !enabled => None,
        Some(Color::Green) => Some(32),
        Some(Color::Red) => Some(31),
        Some(Color::Yellow) => Some(33),
        Some(_) => Some(90),
        None => None,
    };
    match code {
        Some(code) => format!("\u{1b}[{code}m{text}\u{1b}[39m"),
        None => text.to_string(),
    }
}

fn tier_label(tier: RsTier) -> Option<&'static str> {
    match tier {
        RsTier::Strong => Some("strong"),
        RsTier::Moderate => Some("moderate"),
        RsTier::Weak => Some("weak"),
        RsTier::Unrated => None,
    }
}
