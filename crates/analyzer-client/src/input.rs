//! Ticker input validation
//!
//! Mirrors a text field that only accepts letters: every edit is sanitized,
//! and a submit is allowed only for a non-empty value with no active error.

use crate::error::ValidationError;
use crate::model::{MAX_TICKER_LEN, Ticker};

/// Raw input events delivered to the ticker field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// New raw value of the whole field
    Edit(String),
    /// Confirm key (Enter)
    Confirm,
}

/// State of the ticker field: sanitized value plus the active error, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerInput {
    value: String,
    error: Option<ValidationError>,
}

impl TickerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitized value: A-Z only, at most five characters
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Error currently shown next to the field
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Apply a raw edit.
    ///
    /// Any disallowed character in `raw` raises `InvalidCharacters`; a clean
    /// edit clears whatever error was showing, including `Required`.
    pub fn edit(&mut self, raw: &str) {
        self.error = if raw.chars().all(|c| c.is_ascii_alphabetic()) {
            None
        } else {
            Some(ValidationError::InvalidCharacters)
        };

        self.value = raw
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .take(MAX_TICKER_LEN)
            .collect();
    }

    /// Whether the submit action is currently enabled
    pub fn can_submit(&self) -> bool {
        !self.value.is_empty() && self.error.is_none()
    }

    /// Attempt to submit the current value.
    ///
    /// An empty value sets `Required`. An active error blocks the submit
    /// and is left in place.
    pub fn submit(&mut self) -> Result<Ticker, ValidationError> {
        if self.value.is_empty() {
            self.error = Some(ValidationError::Required);
            return Err(ValidationError::Required);
        }
        if let Some(err) = self.error {
            return Err(err);
        }
        self.value.parse()
    }
}
