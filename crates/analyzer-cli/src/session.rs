//! Interactive session and one-shot runs over a `ReportSource`

use crate::commands::Command;
use analyzer_client::render::LOADING_MESSAGE;
use analyzer_client::{
    Page, Phase, RenderOptions, ReportSource, ReportView, SubmitRejected,
    render_error_banner, render_report,
};
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "ticker> ";

pub fn print_banner<W: Write>(out: &mut W, base_url: &str) -> io::Result<()> {
    writeln!(out, "Stock Analyzer")?;
    writeln!(out, "Enter any US stock ticker for a full technical analysis.")?;
    writeln!(out, "Backend: {base_url}   (/help for commands)")?;
    writeln!(out)
}

/// REPL over one page. Each line is a full edit of the ticker field
/// followed by the confirm key.
pub struct Session<'a> {
    source: &'a dyn ReportSource,
    page: Page,
    options: RenderOptions,
}

impl<'a> Session<'a> {
    pub fn new(source: &'a dyn ReportSource, options: RenderOptions) -> Self {
        Self {
            source,
            page: Page::new(),
            options,
        }
    }

    #[cfg(test)]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Read lines until `/quit` or end of input
    pub async fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out, "\nGoodbye!")?;
                return Ok(());
            }

            match Command::parse(&line) {
                Ok(Command::Exit) => {
                    writeln!(out, "Goodbye!")?;
                    return Ok(());
                }
                Ok(Command::Help) => writeln!(out, "{}\n", Command::help_text())?,
                Ok(Command::Health) => {
                    let (_, line) = health_line(self.source).await;
                    writeln!(out, "{line}\n")?;
                }
                Ok(Command::Ticker { raw }) => self.search(&raw, out).await?,
                Err(err) => writeln!(out, "{err}\n")?,
            }
        }
    }

    async fn search<W: Write>(&mut self, raw: &str, out: &mut W) -> io::Result<()> {
        self.page.edit(raw);

        let mut announced = Ok(());
        let outcome = self
            .page
            .search_with(self.source, |_| {
                announced = writeln!(out, "{LOADING_MESSAGE}");
            })
            .await;
        announced?;

        match outcome {
            Ok(Phase::Loaded(report)) => {
                let view = ReportView::new(report);
                writeln!(out, "{}", render_report(&view, &self.options))?;
            }
            Ok(Phase::Failed(err)) => writeln!(out, "Error: {}\n", render_error_banner(err))?,
            Ok(Phase::Idle | Phase::Loading { .. }) => {}
            Err(SubmitRejected::Invalid(err)) => writeln!(out, "  ! {err}\n")?,
            Err(SubmitRejected::Busy) => debug!("submit while loading; ignored"),
        }
        Ok(())
    }
}

/// Validate, fetch and print a single ticker.
///
/// The report goes to `out`; validation and fetch errors go to `err`.
/// Returns whether a report was printed.
pub async fn analyze_once<W: Write, E: Write>(
    source: &dyn ReportSource,
    raw: &str,
    options: &RenderOptions,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    let mut page = Page::new();
    page.edit(raw);

    match page.search(source).await {
        Ok(Phase::Loaded(report)) => {
            write!(out, "{}", render_report(&ReportView::new(report), options))?;
            Ok(true)
        }
        Ok(Phase::Failed(fetch_err)) => {
            writeln!(err, "Error: {}", render_error_banner(fetch_err))?;
            Ok(false)
        }
        Ok(Phase::Idle | Phase::Loading { .. }) => Ok(false),
        Err(rejected) => {
            writeln!(err, "{rejected}")?;
            Ok(false)
        }
    }
}

/// Probe the backend; returns whether it answered and a one-line summary
pub async fn health_line(source: &dyn ReportSource) -> (bool, String) {
    match source.health().await {
        Ok(status) => (true, format!("Analysis service: {}", status.status)),
        Err(err) => (
            false,
            format!("Analysis service unavailable: {}", render_error_banner(&err)),
        ),
    }
}
