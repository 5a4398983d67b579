// Core analysis types shared across all Folio crates.

use serde::{Deserialize, Serialize};

/// Computed statistics for one document body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentStatistics {
    /// CJK ideographs plus ASCII word tokens, summed.
    pub word_count: usize,
    pub character_count: usize,
    pub line_count: usize,
    /// Blocks with non-whitespace content, split on blank lines.
    pub paragraph_count: usize,
    pub heading_counts: HeadingCounts,
    pub code_block_count: usize,
    pub link_count: usize,
    pub image_count: usize,
    pub table_count: usize,
    /// ceil(word_count / 300), in minutes.
    pub reading_time_minutes: usize,
    /// ceil(word_count / 60), in minutes.
    pub writing_time_minutes: usize,
}

/// Heading tallies by level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
    pub total: usize,
}

/// One entry in a document outline tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutlineItem {
    /// "heading-N" where N is the 0-based discovery index.
    pub id: String,
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text with surrounding whitespace trimmed.
    pub text: String,
    /// Source line (1-based).
    pub line: u32,
    #[serde(default)]
    pub children: Vec<OutlineItem>,
}

/// Line-oriented difference between two document bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentDiff {
    #[serde(default)]
    pub added: Vec<AddedLine>,
    #[serde(default)]
    pub removed: Vec<RemovedLine>,
    #[serde(default)]
    pub modified: Vec<ModifiedLine>,
    pub summary: DiffSummary,
}

/// A line present only in the new document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddedLine {
    /// Line number (1-based) in the new document.
    pub line: u32,
    pub content: String,
}

/// A line present only in the old document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemovedLine {
    /// Line number (1-based) in the old document.
    pub line: u32,
    pub content: String,
}

/// A line present in both documents with different content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModifiedLine {
    pub line: u32,
    pub old_content: String,
    pub new_content: String,
}

/// Per-bucket change counts for a diff.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffSummary {
    pub added_lines: usize,
    pub removed_lines: usize,
    pub modified_lines: usize,
    pub total_changes: usize,
}

/// A single finding from the writing assistant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WritingSuggestion {
    pub kind: SuggestionKind,
    pub severity: Severity,
    pub message: String,
    /// Source line (1-based).
    pub line: u32,
    /// Character span within the line, when the finding is span-anchored.
    pub span: Option<SuggestionSpan>,
    pub replacement: Option<String>,
}

/// Character offsets within one line (0-based, end exclusive).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionSpan {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Grammar,
    Style,
    Clarity,
    Tone,
    Spelling,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Style => "style",
            Self::Clarity => "clarity",
            Self::Tone => "tone",
            Self::Spelling => "spelling",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}
