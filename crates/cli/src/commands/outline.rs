// `folio outline` — show the heading outline.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};

use folio_common::outline::extract_outline;
use folio_common::types::OutlineItem;

use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct OutlineArgs {
    /// Markdown file to analyze.
    pub file: PathBuf,

    /// Force JSON output.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineResult {
    pub file: String,
    #[serde(default)]
    pub outline: Vec<OutlineItem>,
}

pub fn run(args: OutlineArgs) -> anyhow::Result<()> {
    let format = OutputFormat::detect(args.json);
    match analyze(&args.file) {
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

fn analyze(path: &Path) -> anyhow::Result<OutlineResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(OutlineResult { file: path.display().to_string(), outline: extract_outline(&content) })
}

fn format_human(result: &OutlineResult) -> String {
    if result.outline.is_empty() {
        return "No headings.".into();
    }
    let mut lines = Vec::new();
    lines.push(result.file.clone());
    for item in &result.outline {
        render_outline_node(&mut lines, item, 0);
    }
    lines.join("\n")
}

fn render_outline_node(lines: &mut Vec<String>, item: &OutlineItem, depth: usize) {
    let indent = "  ".repeat(depth);
    let prefix = if depth == 0 { "" } else { "├─ " };
    lines.push(format!("{indent}{prefix}{} [line {}]", item.text, item.line));
    for child in &item.children {
        render_outline_node(lines, child, depth + 1);
    }
}
