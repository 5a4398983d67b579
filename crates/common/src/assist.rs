// Rule-based writing assistance: style/spelling checks, document-level
// improvement suggestions, and a heading-based summary. No models, no I/O.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{Severity, SuggestionKind, SuggestionSpan, WritingSuggestion};

/// Line length (in chars) above which a style warning is raised.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 100;
/// Character budget for generated summaries.
pub const DEFAULT_SUMMARY_MAX_CHARS: usize = 200;

/// Check a document line by line with the default line-length threshold.
pub fn check_style(content: &str) -> Vec<WritingSuggestion> {
    check_style_with(content, DEFAULT_MAX_LINE_LENGTH)
}

/// Check a document line by line.
///
/// Emits a style warning for each line longer than `max_line_length` chars
/// and a spelling error for the first occurrence per line of each known typo.
pub fn check_style_with(content: &str, max_line_length: usize) -> Vec<WritingSuggestion> {
    let mut suggestions = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index as u32 + 1;
        let char_count = line.chars().count();

        if char_count > max_line_length {
            suggestions.push(WritingSuggestion {
                kind: SuggestionKind::Style,
                severity: Severity::Warning,
                message: format!(
                    "line exceeds {max_line_length} characters, consider splitting it"
                ),
                line: line_number,
                span: Some(SuggestionSpan { start: 0, end: char_count as u32 }),
                replacement: None,
            });
        }

        for (pattern, correction) in typo_patterns() {
            let Some(hit) = pattern.find(line) else {
                continue;
            };
            let start = line[..hit.start()].chars().count() as u32;
            let end = start + hit.as_str().chars().count() as u32;
            suggestions.push(WritingSuggestion {
                kind: SuggestionKind::Spelling,
                severity: Severity::Error,
                message: format!("'{}' may be a misspelling of '{correction}'", hit.as_str()),
                line: line_number,
                span: Some(SuggestionSpan { start, end }),
                replacement: Some((*correction).to_string()),
            });
        }
    }

    suggestions
}

/// Document-level advice: title presence, body length, fence language tags.
pub fn suggest_improvements(content: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !content.contains('#') {
        suggestions.push("consider adding a title heading".to_string());
    }

    let paragraph_count = paragraph_split_pattern()
        .split(content)
        .filter(|block| !block.trim().is_empty())
        .count();
    if paragraph_count < 3 {
        suggestions.push("document is short, consider adding more detail".to_string());
    }

    if has_untagged_code_fence(content) {
        suggestions.push("specify a language for fenced code blocks".to_string());
    }

    suggestions
}

/// Summarize a document into at most `max_chars` characters: the first five
/// heading lines when any exist, otherwise the leading body text.
pub fn generate_summary(content: &str, max_chars: usize) -> String {
    let headings: Vec<&str> = content.lines().filter(|line| line.starts_with('#')).collect();

    if headings.is_empty() {
        return content.chars().take(max_chars).collect();
    }

    let joined = headings
        .iter()
        .take(5)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    joined.chars().take(max_chars).collect()
}

// Opening fences only; a fence line whose info string is empty counts as
// untagged. Closing fences are skipped by tracking open/close state.
fn has_untagged_code_fence(content: &str) -> bool {
    let mut in_fence = false;
    let mut untagged = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with("```") {
            continue;
        }
        if in_fence {
            in_fence = false;
        } else {
            in_fence = true;
            if trimmed.trim_start_matches('`').trim().is_empty() {
                untagged = true;
            }
        }
    }

    untagged
}

fn paragraph_split_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\n{2,}").expect("paragraph pattern should compile"))
}

fn typo_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            [("teh", "the"), ("adn", "and"), ("taht", "that")]
                .into_iter()
                .map(|(typo, correction)| {
                    let pattern = Regex::new(&format!(r"(?i)\b{typo}\b"))
                        .expect("typo pattern should compile");
                    (pattern, correction)
                })
                .collect()
        })
        .as_slice()
}
