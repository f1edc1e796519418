//! Markdown summary with statistics and cache key

use super::{print_json, CompareArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::insights::FileExplainer;
use clap::Args;
use docdelta_core::diff::verify::verify_comparison;
use docdelta_core::fingerprint::comparison_key;
use docdelta_core::render::render_summary;
use docdelta_core::{annotate, compare, log_op_end, log_op_start, Annotated, Comparison, DiffStats};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub compare: CompareArgs,

    /// JSON object of per-row insights keyed by row index
    #[arg(long)]
    pub insights: Option<PathBuf>,

    /// Check both views against their invariants before printing
    #[arg(long)]
    pub verify: bool,
}

#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    key: &'a str,
    stats: &'a DiffStats,
    comparison: &'a Comparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotated: Option<&'a Annotated>,
}

pub fn execute(args: SummaryArgs, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!("cli_summary");

    let input = args.compare.prepare(config, args.verify)?;
    let comparison = compare(input.text_a.expose(), input.text_b.expose());
    if input.verify {
        verify_comparison(input.text_a.expose(), input.text_b.expose(), &comparison)?;
    }
    let annotated = args
        .insights
        .map(|path| annotate(&comparison.rows, &FileExplainer::new(path)));
    let key = comparison_key(input.text_a.expose(), input.text_b.expose());

    match input.format {
        OutputFormat::Text => {
            print!("{}", render_summary(&comparison, annotated.as_ref()));
            println!();
            println!("Comparison key: `{}`", key);
        }
        OutputFormat::Json => print_json(&SummaryReport {
            key: &key,
            stats: &DiffStats::from_records(&comparison.records),
            comparison: &comparison,
            annotated: annotated.as_ref(),
        })?,
    }

    log_op_end!(
        "cli_summary",
        duration_ms = start.elapsed().as_millis() as u64,
        rows = comparison.rows.len()
    );
    Ok(())
}
