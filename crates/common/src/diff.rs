// Line-oriented document diffing.
//
// Two strategies behind one interface. `Positional` is the compatibility
// behavior: index-aligned comparison, so a single inserted line near the top
// reports every following line as modified. `Myers` is a real shortest-edit-
// script diff at line granularity for callers that want minimal output. The
// strategy is always chosen explicitly; nothing swaps algorithms silently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AddedLine, DiffSummary, DocumentDiff, ModifiedLine, RemovedLine};

/// Diff algorithm selector.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiffStrategy {
    /// Index-aligned line comparison (the default).
    #[default]
    Positional,
    /// Shortest edit script over lines; reports only adds and removes.
    Myers,
}

impl DiffStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Myers => "myers",
        }
    }
}

impl fmt::Display for DiffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffStrategyError {
    #[error("unknown diff strategy '{0}', expected 'positional' or 'myers'")]
    Unknown(String),
}

impl FromStr for DiffStrategy {
    type Err = DiffStrategyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "positional" => Ok(Self::Positional),
            "myers" => Ok(Self::Myers),
            other => Err(DiffStrategyError::Unknown(other.to_string())),
        }
    }
}

/// Compare two document bodies with the positional strategy.
pub fn compare_documents(old_content: &str, new_content: &str) -> DocumentDiff {
    compare_documents_with(old_content, new_content, DiffStrategy::Positional)
}

/// Compare two document bodies with an explicit strategy.
pub fn compare_documents_with(
    old_content: &str,
    new_content: &str,
    strategy: DiffStrategy,
) -> DocumentDiff {
    match strategy {
        DiffStrategy::Positional => positional_diff(old_content, new_content),
        DiffStrategy::Myers => myers_diff(old_content, new_content),
    }
}

// Lines are split on '\n' (an empty body is one empty line), iterated over
// 0..max(old_len, new_len). A line absent on one side is an add or remove;
// present on both and unequal is a modify. Line numbers are 1-based.
fn positional_diff(old_content: &str, new_content: &str) -> DocumentDiff {
    let old_lines: Vec<&str> = old_content.split('\n').collect();
    let new_lines: Vec<&str> = new_content.split('\n').collect();

    let mut added = Vec::new();
    let mut removed = Vec::new();
    let mut modified = Vec::new();

    let max_len = old_lines.len().max(new_lines.len());
    for i in 0..max_len {
        let line = i as u32 + 1;
        match (old_lines.get(i), new_lines.get(i)) {
            (None, Some(new_line)) => {
                added.push(AddedLine { line, content: (*new_line).to_string() });
            }
            (Some(old_line), None) => {
                removed.push(RemovedLine { line, content: (*old_line).to_string() });
            }
            (Some(old_line), Some(new_line)) if old_line != new_line => {
                modified.push(ModifiedLine {
                    line,
                    old_content: (*old_line).to_string(),
                    new_content: (*new_line).to_string(),
                });
            }
            _ => {}
        }
    }

    finish_diff(added, removed, modified)
}

fn myers_diff(old_content: &str, new_content: &str) -> DocumentDiff {
    if old_content == new_content {
        return DocumentDiff::default();
    }

    let old_lines: Vec<&str> = old_content.split('\n').collect();
    let new_lines: Vec<&str> = new_content.split('\n').collect();
    let edits = myers_line_edits(&old_lines, &new_lines);

    let mut added = Vec::new();
    let mut removed = Vec::new();
    let mut old_line = 1u32;
    let mut new_line = 1u32;

    for edit in edits {
        match edit {
            LineEdit::Equal => {
                old_line += 1;
                new_line += 1;
            }
            LineEdit::Delete(content) => {
                removed.push(RemovedLine { line: old_line, content: content.to_string() });
                old_line += 1;
            }
            LineEdit::Insert(content) => {
                added.push(AddedLine { line: new_line, content: content.to_string() });
                new_line += 1;
            }
        }
    }

    finish_diff(added, removed, Vec::new())
}

fn finish_diff(
    added: Vec<AddedLine>,
    removed: Vec<RemovedLine>,
    modified: Vec<ModifiedLine>,
) -> DocumentDiff {
    let summary = DiffSummary {
        added_lines: added.len(),
        removed_lines: removed.len(),
        modified_lines: modified.len(),
        total_changes: added.len() + removed.len() + modified.len(),
    };
    DocumentDiff { added, removed, modified, summary }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEdit<'a> {
    Equal,
    Insert(&'a str),
    Delete(&'a str),
}

fn myers_line_edits<'a>(old_lines: &[&'a str], new_lines: &[&'a str]) -> Vec<LineEdit<'a>> {
    let old_len = old_lines.len();
    let new_len = new_lines.len();

    if old_len == 0 {
        return new_lines.iter().map(|line| LineEdit::Insert(line)).collect();
    }
    if new_len == 0 {
        return old_lines.iter().map(|line| LineEdit::Delete(line)).collect();
    }

    let max = old_len + new_len;
    let offset = max as isize;
    let mut v = vec![0isize; 2 * max + 1];
    let mut trace: Vec<Vec<isize>> = Vec::with_capacity(max + 1);
    let mut solved_d = 0usize;

    'outer: for d in 0..=max {
        trace.push(v.clone());

        let d_isize = d as isize;
        let mut k = -d_isize;
        while k <= d_isize {
            let k_idx = (k + offset) as usize;
            let mut x = if k == -d_isize
                || (k != d_isize && v[(k - 1 + offset) as usize] < v[(k + 1 + offset) as usize])
            {
                v[(k + 1 + offset) as usize]
            } else {
                v[(k - 1 + offset) as usize] + 1
            };
            let mut y = x - k;

            while x < old_len as isize
                && y < new_len as isize
                && old_lines[x as usize] == new_lines[y as usize]
            {
                x += 1;
                y += 1;
            }

            v[k_idx] = x;

            if x >= old_len as isize && y >= new_len as isize {
                solved_d = d;
                break 'outer;
            }

            k += 2;
        }
    }

    backtrack_line_edits(old_lines, new_lines, &trace, solved_d, offset)
}

fn backtrack_line_edits<'a>(
    old_lines: &[&'a str],
    new_lines: &[&'a str],
    trace: &[Vec<isize>],
    solved_d: usize,
    offset: isize,
) -> Vec<LineEdit<'a>> {
    let mut edits = Vec::new();
    let mut x = old_lines.len() as isize;
    let mut y = new_lines.len() as isize;

    for d in (0..=solved_d).rev() {
        let v = &trace[d];
        let k = x - y;
        let d_isize = d as isize;

        let prev_k = if d == 0 {
            0
        } else if k == -d_isize
            || (k != d_isize && v[(k - 1 + offset) as usize] < v[(k + 1 + offset) as usize])
        {
            k + 1
        } else {
            k - 1
        };
        let prev_x = if d == 0 { 0 } else { v[(prev_k + offset) as usize] };
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            edits.push(LineEdit::Equal);
            x -= 1;
            y -= 1;
        }

        if d == 0 {
            break;
        }

        if x == prev_x {
            edits.push(LineEdit::Insert(new_lines[(y - 1) as usize]));
            y -= 1;
        } else {
            edits.push(LineEdit::Delete(old_lines[(x - 1) as usize]));
            x -= 1;
        }
    }

    edits.reverse();
    edits
}
