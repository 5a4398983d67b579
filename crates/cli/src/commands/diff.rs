// `folio diff` — compare two documents line by line.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};

use folio_common::diff::{compare_documents_with, DiffStrategy};
use folio_common::types::DocumentDiff;

use crate::config::FolioConfig;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Old version of the document.
    pub old: PathBuf,

    /// New version of the document.
    pub new: PathBuf,

    /// Diff algorithm (positional or myers); defaults to the configured one.
    #[arg(long)]
    strategy: Option<DiffStrategy>,

    /// Force JSON output.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffResult {
    pub old_file: String,
    pub new_file: String,
    pub strategy: String,
    pub diff: DocumentDiff,
}

pub fn run(args: DiffArgs) -> anyhow::Result<()> {
    let format = OutputFormat::detect(args.json);
    match compare(&args) {
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

fn compare(args: &DiffArgs) -> anyhow::Result<DiffResult> {
    let config = FolioConfig::load()?;
    let strategy = args.strategy.unwrap_or(config.diff.strategy);
    let old_content = std::fs::read_to_string(&args.old)
        .with_context(|| format!("failed to read {}", args.old.display()))?;
    let new_content = std::fs::read_to_string(&args.new)
        .with_context(|| format!("failed to read {}", args.new.display()))?;

    Ok(DiffResult {
        old_file: args.old.display().to_string(),
        new_file: args.new.display().to_string(),
        strategy: strategy.as_str().to_string(),
        diff: compare_documents_with(&old_content, &new_content, strategy),
    })
}

fn format_human(result: &DiffResult) -> String {
    let summary = &result.diff.summary;
    if summary.total_changes == 0 {
        return "Documents are identical.".into();
    }

    let mut lines = Vec::new();
    lines.push(format!(
        "{} -> {} ({}): +{} -{} ~{}",
        result.old_file,
        result.new_file,
        result.strategy,
        summary.added_lines,
        summary.removed_lines,
        summary.modified_lines
    ));
    for added in &result.diff.added {
        lines.push(format!("+ {:>4} {}", added.line, added.content));
    }
    for removed in &result.diff.removed {
        lines.push(format!("- {:>4} {}", removed.line, removed.content));
    }
    for modified in &result.diff.modified {
        lines.push(format!(
            "~ {:>4} {} -> {}",
            modified.line, modified.old_content, modified.new_content
        ));
    }
    lines.join("\n")
}
