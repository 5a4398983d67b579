use folio_common::diff::{compare_documents_with, DiffStrategy};
use folio_common::types::DocumentDiff;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
struct GoldenCase {
    name: String,
    before: String,
    after: String,
    expected: DocumentDiff,
}

#[test]
fn positional_diff_golden_cases() {
    let cases_dir = golden_cases_dir();
    let cases = load_cases(&cases_dir);

    assert!(
        !cases.is_empty(),
        "no golden cases found in {}",
        cases_dir.display()
    );

    let mut failures = Vec::new();
    for case in cases {
        if let Err(message) = run_case(&case) {
            failures.push(message);
        }
    }

    if !failures.is_empty() {
        panic!(
            "{} golden case(s) failed:\n\n{}",
            failures.len(),
            failures.join("\n\n")
        );
    }
}

fn golden_cases_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tests/golden/cases")
}

fn load_cases(cases_dir: &Path) -> Vec<GoldenCase> {
    let mut case_dirs: Vec<PathBuf> = fs::read_dir(cases_dir)
        .unwrap_or_else(|error| panic!("failed to read {}: {error}", cases_dir.display()))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.is_dir() { Some(path) } else { None }
        })
        .collect();
    case_dirs.sort();
    case_dirs.into_iter().map(load_case).collect()
}

fn load_case(case_dir: PathBuf) -> GoldenCase {
    let name = case_dir
        .file_name()
        .and_then(|value| value.to_str())
        .unwrap_or("<unnamed-case>")
        .to_owned();

    let before_path = case_dir.join("before.md");
    let after_path = case_dir.join("after.md");
    let expected_path = case_dir.join("expected_diff.json");

    let before = read_required(&before_path);
    let after = read_required(&after_path);
    let expected = serde_json::from_str::<DocumentDiff>(&read_required(&expected_path))
        .unwrap_or_else(|error| {
            panic!(
                "failed to parse expected diff in {}: {error}",
                expected_path.display()
            )
        });

    GoldenCase { name, before, after, expected }
}

fn run_case(case: &GoldenCase) -> Result<(), String> {
    let actual = compare_documents_with(&case.before, &case.after, DiffStrategy::Positional);
    if actual != case.expected {
        return Err(format_diff_mismatch(&case.name, &case.expected, &actual));
    }
    Ok(())
}

fn format_diff_mismatch(case_name: &str, expected: &DocumentDiff, actual: &DocumentDiff) -> String {
    let expected_rendered = render_changes(expected);
    let actual_rendered = render_changes(actual);
    let max_len = expected_rendered.len().max(actual_rendered.len());

    let mut diff_lines = Vec::with_capacity(max_len);
    for index in 0..max_len {
        let expected_line = expected_rendered.get(index).map(String::as_str).unwrap_or("<none>");
        let actual_line = actual_rendered.get(index).map(String::as_str).unwrap_or("<none>");
        let marker = if expected_line == actual_line { " " } else { "!" };
        diff_lines.push(format!(
            "{marker} [{index}] expected: {expected_line}\n      actual:   {actual_line}"
        ));
    }

    format!(
        "case `{case_name}` diff mismatch.\nExpected changes:\n{}\nActual changes:\n{}\nDiff:\n{}",
        expected_rendered.join("\n"),
        actual_rendered.join("\n"),
        diff_lines.join("\n")
    )
}

fn render_changes(diff: &DocumentDiff) -> Vec<String> {
    let mut rendered = Vec::new();
    for added in &diff.added {
        rendered.push(format!("add(line={}, content={:?})", added.line, added.content));
    }
    for removed in &diff.removed {
        rendered.push(format!("remove(line={}, content={:?})", removed.line, removed.content));
    }
    for modified in &diff.modified {
        rendered.push(format!(
            "modify(line={}, old={:?}, new={:?})",
            modified.line, modified.old_content, modified.new_content
        ));
    }
    rendered.push(format!(
        "summary(+{} -{} ~{}, total={})",
        diff.summary.added_lines,
        diff.summary.removed_lines,
        diff.summary.modified_lines,
        diff.summary.total_changes
    ));
    rendered
}

fn read_required(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|error| panic!("failed to read {}: {error}", path.display()))
}
