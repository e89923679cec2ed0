//! Stock Analyzer CLI
//!
//! Look up a ticker's technical and sentiment report from the analysis
//! backend.
//!
//! # Usage
//!
//! ```bash
//! # Point at the backend (defaults to http://localhost:8000)
//! export STOCK_ANALYZER_API_URL="http://localhost:8000"
//!
//! # One report
//! cargo run -p analyzer-cli -- analyze AAPL
//!
//! # Interactive session
//! cargo run -p analyzer-cli
//! ```

mod commands;
mod session;

use analyzer_client::{
    AnalyzerClient, ClientConfig, ColorMode, RenderOptions, config::BASE_URL_ENV,
};
use clap::{Parser, Subcommand};
use std::io;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stock-analyzer")]
#[command(about = "Technical and sentiment reports for US stock tickers", long_about = None)]
#[command(version)]
struct Args {
    /// Backend base URL [default: $STOCK_ANALYZER_API_URL or http://localhost:8000]
    #[arg(long)]
    base_url: Option<String>,

    /// Give up on a request after this many seconds (default: wait indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Colour output: auto, always or never
    #[arg(long, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print the report for one ticker
    Analyze {
        /// Ticker symbol, e.g. AAPL
        ticker: String,
    },
    /// Check that the analysis service is up
    Health,
    /// Start an interactive session (the default)
    Repl,
}

fn build_config(args: &Args) -> anyhow::Result<ClientConfig> {
    let mut builder = ClientConfig::builder();
    if let Some(url) = &args.base_url {
        builder = builder.base_url(url);
    }
    if let Some(secs) = args.timeout_secs {
        builder = builder.request_timeout(Duration::from_secs(secs));
    }
    Ok(builder.with_env_base_url().build()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    analyzer_utils::init_tracing("warn");

    let args = Args::parse();
    let config = build_config(&args)?;
    info!(base_url = %config.base_url, env = BASE_URL_ENV, "starting stock-analyzer");

    let client = AnalyzerClient::new(config)?;
    let options = RenderOptions { color: args.color };

    let stdout = io::stdout();
    let stderr = io::stderr();

    match args.command.unwrap_or(CliCommand::Repl) {
        CliCommand::Analyze { ticker } => {
            let ok = session::analyze_once(
                &client,
                &ticker,
                &options,
                &mut stdout.lock(),
                &mut stderr.lock(),
            )
            .await?;
            Ok(if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        CliCommand::Health => {
            let (healthy, line) = session::health_line(&client).await;
            println!("{line}");
            Ok(if healthy {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        CliCommand::Repl => {
            let mut out = stdout.lock();
            session::print_banner(&mut out, &client.config().base_url)?;

            let mut repl = session::Session::new(&client, options);
            repl.run(io::stdin().lock(), &mut out).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
