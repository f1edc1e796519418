//! Subcommands

pub mod align;
pub mod diff;
pub mod summary;

use crate::config::{CliConfig, OutputFormat};
use crate::input::read_pair;
use clap::Args;
use docdelta_core::InputLimits;
use docdelta_core_types::Sensitive;
use std::path::PathBuf;

/// Arguments shared by every comparison command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Original document (`-` for stdin)
    pub a: PathBuf,

    /// Revised document (`-` for stdin)
    pub b: PathBuf,

    /// Alignment table budget in cells; `0` disables the check
    #[arg(long)]
    pub max_cells: Option<u64>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Inputs after loading, limit checking and config resolution.
#[derive(Debug)]
pub struct Prepared {
    pub text_a: Sensitive<String>,
    pub text_b: Sensitive<String>,
    pub format: OutputFormat,
    pub verify: bool,
}

impl CompareArgs {
    pub fn prepare(
        &self,
        config: &CliConfig,
        verify_flag: bool,
    ) -> Result<Prepared, Box<dyn std::error::Error>> {
        let limits: InputLimits = config.limits(self.max_cells);
        let (text_a, text_b) = read_pair(&self.a, &self.b)?;
        limits.check_texts(text_a.expose(), text_b.expose())?;

        Ok(Prepared {
            text_a,
            text_b,
            format: config.format(self.format),
            verify: config.verify(verify_flag),
        })
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
