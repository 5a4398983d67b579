// `folio lint` — run the writing checks.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};

use folio_common::assist::{check_style_with, suggest_improvements};
use folio_common::types::WritingSuggestion;

use crate::config::FolioConfig;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct LintArgs {
    /// Markdown file to check.
    pub file: PathBuf,

    /// Line length threshold; defaults to the configured one.
    #[arg(long)]
    max_line_length: Option<usize>,

    /// Force JSON output.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintResult {
    pub file: String,
    #[serde(default)]
    pub suggestions: Vec<WritingSuggestion>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

pub fn run(args: LintArgs) -> anyhow::Result<()> {
    let format = OutputFormat::detect(args.json);
    match check(&args) {
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

fn check(args: &LintArgs) -> anyhow::Result<LintResult> {
    let config = FolioConfig::load()?;
    let max_line_length = args.max_line_length.unwrap_or(config.lint.max_line_length);
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    Ok(LintResult {
        file: args.file.display().to_string(),
        suggestions: check_style_with(&content, max_line_length),
        improvements: suggest_improvements(&content),
    })
}

fn format_human(result: &LintResult) -> String {
    if result.suggestions.is_empty() && result.improvements.is_empty() {
        return "No findings.".into();
    }

    let mut lines = Vec::new();
    for suggestion in &result.suggestions {
        let column = suggestion.span.map(|span| span.start + 1).unwrap_or(1);
        let mut line = format!(
            "{}:{}:{} {} {}",
            result.file,
            suggestion.line,
            column,
            suggestion.severity.as_str(),
            suggestion.message
        );
        if let Some(replacement) = &suggestion.replacement {
            line.push_str(&format!(" (try \"{replacement}\")"));
        }
        lines.push(line);
    }
    for tip in &result.improvements {
        lines.push(format!("tip: {tip}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::types::{Severity, SuggestionKind, SuggestionSpan};

    fn sample_result() -> LintResult {
        LintResult {
            file: "docs/guide.md".into(),
            suggestions: vec![
                WritingSuggestion {
                    kind: SuggestionKind::Style,
                    severity: Severity::Warning,
                    message: "Line exceeds 100 characters".into(),
                    line: 3,
                    span: Some(SuggestionSpan { start: 0, end: 132 }),
                    replacement: None,
                },
                WritingSuggestion {
                    kind: SuggestionKind::Spelling,
                    severity: Severity::Error,
                    message: "\"recieve\" may be misspelled".into(),
                    line: 9,
                    span: Some(SuggestionSpan { start: 14, end: 21 }),
                    replacement: Some("receive".into()),
                },
            ],
            improvements: vec!["Consider adding headings to structure the document".into()],
        }
    }

    #[test]
    fn human_format_lists_findings_with_positions() {
        let output = format_human(&sample_result());
        assert!(output.contains("docs/guide.md:3:1 warning Line exceeds 100 characters"));
        assert!(output.contains("docs/guide.md:9:15 error"));
        assert!(output.contains("(try \"receive\")"));
        assert!(output.contains("tip: Consider adding headings"));
    }

    #[test]
    fn human_format_clean_document() {
        let result =
            LintResult { file: "clean.md".into(), suggestions: vec![], improvements: vec![] };
        assert_eq!(format_human(&result), "No findings.");
    }

    #[test]
    fn json_format_roundtrips() {
        let result = sample_result();
        let mut buf = Vec::new();
        output::write_output(&mut buf, OutputFormat::Json, &result, format_human).unwrap();
        let parsed: LintResult = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.suggestions.len(), 2);
        assert_eq!(parsed.suggestions[1].replacement.as_deref(), Some("receive"));
        assert_eq!(parsed.improvements.len(), 1);
    }
}
