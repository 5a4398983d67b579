// `folio summarize` — print a heading-based summary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};

use folio_common::assist::generate_summary;

use crate::config::FolioConfig;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Markdown file to summarize.
    pub file: PathBuf,

    /// Character budget; defaults to the configured one.
    #[arg(long)]
    max_chars: Option<usize>,

    /// Force JSON output.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResult {
    pub file: String,
    pub summary: String,
}

pub fn run(args: SummarizeArgs) -> anyhow::Result<()> {
    let format = OutputFormat::detect(args.json);
    match summarize(&args) {
        Ok(result) => {
            output::print_output(format, &result, format_human)?;
            Ok(())
        }
        Err(e) => {
            output::print_anyhow_error(format, &e);
            Err(e)
        }
    }
}

fn summarize(args: &SummarizeArgs) -> anyhow::Result<SummarizeResult> {
    let config = FolioConfig::load()?;
    let max_chars = args.max_chars.unwrap_or(config.summary.max_chars);
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    Ok(SummarizeResult {
        file: args.file.display().to_string(),
        summary: generate_summary(&content, max_chars),
    })
}

fn format_human(result: &SummarizeResult) -> String {
    result.summary.clone()
}
