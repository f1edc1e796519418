//! Flat change list

use super::{print_json, CompareArgs};
use crate::config::{CliConfig, OutputFormat};
use clap::Args;
use docdelta_core::diff::verify::verify_records;
use docdelta_core::render::render_inline;
use docdelta_core::{compute_diff, log_op_end, log_op_start};
use std::time::Instant;

#[derive(Debug, Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub compare: CompareArgs,

    /// Check the output against its invariants before printing
    #[arg(long)]
    pub verify: bool,
}

pub fn execute(args: DiffArgs, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!("cli_diff");

    let input = args.compare.prepare(config, args.verify)?;
    let records = compute_diff(input.text_a.expose(), input.text_b.expose());
    if input.verify {
        verify_records(input.text_a.expose(), input.text_b.expose(), &records)?;
    }

    match input.format {
        OutputFormat::Text => println!("{}", render_inline(&records)),
        OutputFormat::Json => print_json(&records)?,
    }

    log_op_end!(
        "cli_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        records = records.len()
    );
    Ok(())
}
