// Document statistics: regex-scan heuristics, deliberately not a markdown parse.
//
// The counts mirror what a quick editor-side scan reports: a `#` line inside a
// code fence still counts as a heading, and image syntax also matches the link
// pattern (so link_count >= image_count). Callers wanting exact CommonMark
// semantics need a real parser; this module trades that for predictability.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{DocumentStatistics, HeadingCounts};

/// Words per minute assumed when estimating reading time.
pub const READING_WORDS_PER_MINUTE: usize = 300;
/// Words per minute assumed when estimating writing time.
pub const WRITING_WORDS_PER_MINUTE: usize = 60;

/// Compute statistics for a document body. Never fails; empty input yields
/// all-zero counts.
pub fn calculate_statistics(content: &str) -> DocumentStatistics {
    let cjk_count = content.chars().filter(|c| is_cjk_ideograph(*c)).count();
    let ascii_word_count = ascii_word_pattern().find_iter(content).count();
    let word_count = cjk_count + ascii_word_count;

    let mut heading_counts = HeadingCounts::default();
    for line in content.lines() {
        let Some(caps) = heading_pattern().captures(line) else {
            continue;
        };
        let level = caps[1].len();
        match level {
            1 => heading_counts.h1 += 1,
            2 => heading_counts.h2 += 1,
            3 => heading_counts.h3 += 1,
            4 => heading_counts.h4 += 1,
            5 => heading_counts.h5 += 1,
            6 => heading_counts.h6 += 1,
            _ => continue,
        }
        heading_counts.total += 1;
    }

    let paragraph_count = paragraph_split_pattern()
        .split(content)
        .filter(|block| !block.trim().is_empty())
        .count();

    DocumentStatistics {
        word_count,
        character_count: content.chars().count(),
        line_count: content.lines().count(),
        paragraph_count,
        heading_counts,
        code_block_count: code_block_pattern().find_iter(content).count(),
        link_count: link_pattern().find_iter(content).count(),
        image_count: image_pattern().find_iter(content).count(),
        table_count: table_row_pattern().find_iter(content).count(),
        reading_time_minutes: word_count.div_ceil(READING_WORDS_PER_MINUTE),
        writing_time_minutes: word_count.div_ceil(WRITING_WORDS_PER_MINUTE),
    }
}

/// CJK unified ideographs, U+4E00..=U+9FA5. Each counts as one word.
fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

// ASCII-only on purpose: the regex crate's `\w` is Unicode-aware and would
// match CJK ideographs, double-counting against the dedicated CJK tally.
fn ascii_word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"[A-Za-z0-9_]+").expect("word pattern should compile"))
}

fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // A run of 7+ `#` never matches: the 7th character fails `\s`.
    PATTERN
        .get_or_init(|| Regex::new(r"^(#{1,6})\s+").expect("heading pattern should compile"))
}

fn paragraph_split_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\n{2,}").expect("paragraph pattern should compile"))
}

fn code_block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)```.*?```").expect("code block pattern should compile")
    })
}

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\[.*?\]\(.*?\)").expect("link pattern should compile"))
}

fn image_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("image pattern should compile"))
}

fn table_row_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\|.*?\|.*?\|").expect("table pattern should compile"))
}
