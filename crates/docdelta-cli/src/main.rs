//! docdelta CLI
//!
//! Command-line interface for the docdelta diff engine

use clap::{Parser, Subcommand};
use docdelta_core::logging_facility;
use docdelta_core::{DocDeltaError, ExError};
use docdelta_core_types::{RequestContext, TraceId};
use std::error::Error;
use std::path::PathBuf;

mod commands;
mod config;
mod input;
mod insights;

use config::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "docdelta")]
#[command(about = "docdelta - Whitespace-faithful document comparison", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./docdelta.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logging profile: dev, prod or test. Logs go to stderr.
    #[arg(long, global = true)]
    log_profile: Option<String>,

    /// Trace ID propagated from a calling system
    #[arg(long, global = true)]
    trace_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Flat change list with inline markers
    Diff(commands::diff::DiffArgs),
    /// Two-column aligned rows
    Align(commands::align::AlignArgs),
    /// Markdown summary with statistics and comparison key
    Summary(commands::summary::SummaryArgs),
}

/// Attach the run's correlation IDs to facility errors.
fn correlate(err: Box<dyn Error>, ctx: &RequestContext) -> Box<dyn Error> {
    let err = match err.downcast::<DocDeltaError>() {
        Ok(domain) => ExError::from(*domain),
        Err(other) => match other.downcast::<ExError>() {
            Ok(ex) => *ex,
            Err(other) => return other,
        },
    };
    let err = err.with_request_id(ctx.request_id.clone());
    match &ctx.trace_id {
        Some(trace_id) => Box::new(err.with_trace_id(trace_id.clone())),
        None => Box::new(err),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let cwd = std::env::current_dir()?;
    let config = CliConfig::load(cli.config.as_deref(), &cwd)?;
    if let Some(profile) = config.log_profile(cli.log_profile.as_deref())? {
        logging_facility::init(profile);
    }

    let mut ctx = RequestContext::new();
    if let Some(trace_id) = cli.trace_id {
        ctx = ctx.with_trace_id(TraceId::from_string(trace_id));
    }
    let span = tracing::info_span!(
        "request",
        request_id = %ctx.request_id,
        trace_id = ctx.trace_id.as_ref().map(TraceId::as_str),
    );
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args, &config),
        Commands::Align(args) => commands::align::execute(args, &config),
        Commands::Summary(args) => commands::summary::execute(args, &config),
    };
    result.map_err(|err| correlate(err, &ctx))
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
