//! Report rendering
//!
//! `format` holds the number formatting rules, `view` turns a report into a
//! fully formatted `ReportView`, and `text` lays that view out for a terminal.

pub mod format;
pub mod text;
pub mod view;

pub use format::{DiffDisplay, NOT_AVAILABLE, Polarity, RsTier, VolumeLevel, VolumeSignal};
pub use text::{
    ColorMode, GENERIC_FAILURE, LOADING_MESSAGE, RenderOptions, render_error_banner,
    render_report,
};
pub use view::{MovingAverageRow, ReportView, Tone};
