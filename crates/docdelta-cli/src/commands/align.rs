//! Two-column aligned rows

use super::{print_json, CompareArgs};
use crate::config::{CliConfig, OutputFormat};
use clap::Args;
use docdelta_core::diff::verify::verify_rows;
use docdelta_core::render::render_rows;
use docdelta_core::{compute_aligned_diff, log_op_end, log_op_start};
use std::time::Instant;

#[derive(Debug, Args)]
pub struct AlignArgs {
    #[command(flatten)]
    pub compare: CompareArgs,

    /// Check the output against its invariants before printing
    #[arg(long)]
    pub verify: bool,
}

pub fn execute(args: AlignArgs, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!("cli_align");

    let input = args.compare.prepare(config, args.verify)?;
    let rows = compute_aligned_diff(input.text_a.expose(), input.text_b.expose());
    if input.verify {
        verify_rows(input.text_a.expose(), input.text_b.expose(), &rows)?;
    }

    match input.format {
        OutputFormat::Text => print!("{}", render_rows(&rows)),
        OutputFormat::Json => print_json(&rows)?,
    }

    log_op_end!(
        "cli_align",
        duration_ms = start.elapsed().as_millis() as u64,
        rows = rows.len()
    );
    Ok(())
}
