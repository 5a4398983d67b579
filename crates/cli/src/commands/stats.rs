// `folio stats` — show document statistics.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};

use folio_common::stats::calculate_statistics;
use folio_common::types::{DocumentStatistics, HeadingCounts};

use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Markdown file to analyze.
    pub file: PathBuf,

    /// Force JSON output.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResult {
    pub file: String,
    pub size_bytes: u64,
    pub statistics: DocumentStatistics,
}

pub fn run(args: StatsArgs) -> anyhow::Result<()> {
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

fn analyze(path: &Path) -> anyhow::Result<StatsResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(StatsResult {
        file: path.display().to_string(),
        size_bytes: content.len() as u64,
        statistics: calculate_statistics(&content),
    })
}

fn format_human(result: &StatsResult) -> String {
    let stats = &result.statistics;
    let rows = [
        ("Size", format_file_size(result.size_bytes)),
        ("Words", stats.word_count.to_string()),
        ("Characters", stats.character_count.to_string()),
        ("Lines", stats.line_count.to_string()),
        ("Paragraphs", stats.paragraph_count.to_string()),
        ("Headings", heading_breakdown(&stats.heading_counts)),
        ("Code blocks", stats.code_block_count.to_string()),
        ("Links", stats.link_count.to_string()),
        ("Images", stats.image_count.to_string()),
        ("Tables", stats.table_count.to_string()),
        ("Reading time", format!("{} min", stats.reading_time_minutes)),
        ("Writing time", format!("{} min", stats.writing_time_minutes)),
    ];

    let mut lines = vec![result.file.clone()];
    for (label, value) in rows {
        lines.push(format!("  {label:<14}{value}"));
    }
    lines.join("\n")
}

fn heading_breakdown(counts: &HeadingCounts) -> String {
    let levels = [
        ("h1", counts.h1),
        ("h2", counts.h2),
        ("h3", counts.h3),
        ("h4", counts.h4),
        ("h5", counts.h5),
        ("h6", counts.h6),
    ];
    let nonzero: Vec<String> = levels
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| format!("{name} {count}"))
        .collect();
    if nonzero.is_empty() {
        counts.total.to_string()
    } else {
        format!("{} ({})", counts.total, nonzero.join(", "))
    }
}

fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".into();
    }
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).log2() / 10.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rendered = format!("{value:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{rendered} {}", UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> StatsResult {
        StatsResult {
            file: "docs/guide.md".into(),
            size_bytes: 1536,
            statistics: DocumentStatistics {
                word_count: 345,
                character_count: 2100,
                line_count: 45,
                paragraph_count: 12,
                heading_counts: HeadingCounts {
                    h1: 1,
                    h2: 4,
                    h3: 3,
                    h4: 0,
                    h5: 0,
                    h6: 0,
                    total: 8,
                },
                code_block_count: 2,
                link_count: 5,
                image_count: 1,
                table_count: 0,
                reading_time_minutes: 2,
                writing_time_minutes: 6,
            },
        }
    }

    #[test]
    fn human_format_lists_every_metric() {
        let output = format_human(&sample_result());
        assert!(output.contains("docs/guide.md"));
        assert!(output.contains("1.5 KB"));
        assert!(output.contains("345"));
        assert!(output.contains("8 (h1 1, h2 4, h3 3)"));
        assert!(output.contains("2 min"));
    }

    #[test]
    fn heading_breakdown_skips_empty_levels() {
        let counts = HeadingCounts { h2: 3, total: 3, ..HeadingCounts::default() };
        assert_eq!(heading_breakdown(&counts), "3 (h2 3)");
        assert_eq!(heading_breakdown(&HeadingCounts::default()), "0");
    }

    #[test]
    fn file_sizes_use_binary_units() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1280), "1.25 KB");
        assert_eq!(format_file_size(1048576), "1 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn json_format_roundtrips() {
        let result = sample_result();
        let mut buf = Vec::new();
        output::write_output(&mut buf, OutputFormat::Json, &result, format_human).unwrap();
        let parsed: StatsResult = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.statistics, result.statistics);
        assert_eq!(parsed.size_bytes, 1536);
    }
}
