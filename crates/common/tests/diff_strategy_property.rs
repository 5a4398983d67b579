// Randomized checks over both diff strategies: empty diffs on identical
// input, reconstruction from Myers scripts, and positional index bounds.

use folio_common::diff::{compare_documents_with, DiffStrategy};
use folio_common::types::DocumentDiff;
use proptest::prelude::*;

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z #]{0,8}", 0..10).prop_map(|lines| lines.join("\n"))
}

/// Replay a modification-free diff onto the old document's lines.
fn apply_line_diff(old: &str, diff: &DocumentDiff) -> Vec<String> {
    let mut lines: Vec<String> = old.split('\n').map(str::to_string).collect();

    let mut removals: Vec<_> = diff.removed.iter().collect();
    removals.sort_by(|a, b| b.line.cmp(&a.line));
    for removed in removals {
        lines.remove(removed.line as usize - 1);
    }

    let mut additions: Vec<_> = diff.added.iter().collect();
    additions.sort_by_key(|a| a.line);
    for added in additions {
        lines.insert(added.line as usize - 1, added.content.clone());
    }

    lines
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn identical_documents_diff_to_nothing_under_both_strategies(
        content in document_strategy(),
    ) {
        for strategy in [DiffStrategy::Positional, DiffStrategy::Myers] {
            let diff = compare_documents_with(&content, &content, strategy);
            prop_assert_eq!(diff.summary.total_changes, 0);
            prop_assert!(diff.added.is_empty());
            prop_assert!(diff.removed.is_empty());
            prop_assert!(diff.modified.is_empty());
        }
    }

    #[test]
    fn myers_scripts_replay_the_old_document_into_the_new(
        old in document_strategy(),
        new in document_strategy(),
    ) {
        let diff = compare_documents_with(&old, &new, DiffStrategy::Myers);
        prop_assert!(diff.modified.is_empty());

        let replayed = apply_line_diff(&old, &diff);
        let expected: Vec<String> = new.split('\n').map(str::to_string).collect();
        prop_assert_eq!(replayed, expected);
    }

    #[test]
    fn positional_buckets_stay_inside_their_documents(
        old in document_strategy(),
        new in document_strategy(),
    ) {
        let old_lines = old.split('\n').count();
        let new_lines = new.split('\n').count();
        let diff = compare_documents_with(&old, &new, DiffStrategy::Positional);

        // Index-aligned comparison: additions sit past the old document,
        // removals past the new one, modifications inside both.
        for added in &diff.added {
            prop_assert!(added.line as usize > old_lines);
            prop_assert!(added.line as usize <= new_lines);
        }
        for removed in &diff.removed {
            prop_assert!(removed.line as usize > new_lines);
            prop_assert!(removed.line as usize <= old_lines);
        }
        for modified in &diff.modified {
            prop_assert!(modified.line as usize <= old_lines.min(new_lines));
        }

        let summary = diff.summary;
        prop_assert_eq!(summary.added_lines, diff.added.len());
        prop_assert_eq!(summary.removed_lines, diff.removed.len());
        prop_assert_eq!(summary.modified_lines, diff.modified.len());
        prop_assert_eq!(
            summary.total_changes,
            diff.added.len() + diff.removed.len() + diff.modified.len()
        );
    }
}
