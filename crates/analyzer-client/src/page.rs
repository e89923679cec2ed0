//! Page controller: owns the ticker field and the request phase
//!
//! There is exactly one request in flight at most. While loading, edits are
//! ignored and submits are rejected, so a second fetch cannot start until the
//! first one resolves.

use crate::api::ReportSource;
use crate::error::{FetchError, ValidationError};
use crate::input::{InputEvent, TickerInput};
use crate::model::{AnalysisReport, Ticker};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Where the page is in the request lifecycle
#[derive(Debug, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        ticker: Ticker,
    },
    Failed(FetchError),
    Loaded(AnalysisReport),
}

/// Why a submit did not start a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("A request is already in flight")]
    Busy,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Default)]
pub struct Page {
    input: TickerInput,
    phase: Phase,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &TickerInput {
        &self.input
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.phase {
            Phase::Loaded(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Matches the enabled state of the submit button
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.input.can_submit()
    }

    /// Feed one input event. A confirm that passes validation returns the
    /// ticker the caller must now fetch.
    pub fn handle(&mut self, event: InputEvent) -> Result<Option<Ticker>, SubmitRejected> {
        match event {
            InputEvent::Edit(raw) => {
                self.edit(&raw);
                Ok(None)
            }
            InputEvent::Confirm => self.submit().map(Some),
        }
    }

    /// Apply a raw edit; ignored while the input is disabled
    pub fn edit(&mut self, raw: &str) {
        if self.is_loading() {
            debug!("edit ignored while loading");
            return;
        }
        self.input.edit(raw);
    }

    /// Start a request for the current value.
    ///
    /// On success the page moves to `Loading` and any previous report or
    /// error is dropped.
    pub fn submit(&mut self) -> Result<Ticker, SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::Busy);
        }
        let ticker = self.input.submit()?;
        info!(%ticker, "submitting analysis request");
        self.phase = Phase::Loading {
            ticker: ticker.clone(),
        };
        Ok(ticker)
    }

    /// Deliver the outcome of the in-flight request
    pub fn resolve(&mut self, outcome: Result<AnalysisReport, FetchError>) {
        let Phase::Loading { ticker } = &self.phase else {
            warn!("fetch outcome arrived with no request in flight; ignoring");
            return;
        };

        self.phase = match outcome {
            Ok(report) => {
                debug!(%ticker, "request resolved");
                Phase::Loaded(report)
            }
            Err(err) => {
                info!(%ticker, status = ?err.status(), error = %err, "request rejected");
                Phase::Failed(err)
            }
        };
    }

    /// Submit, fetch and resolve in one step. Holding `&mut self` for the
    /// whole await keeps requests from overlapping.
    pub async fn search(&mut self, source: &dyn ReportSource) -> Result<&Phase, SubmitRejected> {
        self.search_with(source, |_| {}).await
    }

    /// Same as [`Page::search`], calling `on_start` once the submit is
    /// accepted and before the request goes out.
    pub async fn search_with<F>(
        &mut self,
        source: &dyn ReportSource,
        on_start: F,
    ) -> Result<&Phase, SubmitRejected>
    where
        F: FnOnce(&Ticker),
    {
        let ticker = self.submit()?;
        on_start(&ticker);
        let outcome = source.fetch(&ticker).await;
        self.resolve(outcome);
        Ok(&self.phase)
    }
}
