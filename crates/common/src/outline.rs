// Outline extraction: one top-to-bottom scan, stack of open headings.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::OutlineItem;

/// Extract the heading tree from a document body.
///
/// For each heading line the stack is popped while its top has level >= the
/// new level, then the item attaches under the new stack top (or as a root
/// when the stack emptied). A heading that skips levels (H1 then H3) nests
/// directly under the shallower one; no synthetic intermediates are inserted.
pub fn extract_outline(content: &str) -> Vec<OutlineItem> {
    let mut roots: Vec<OutlineItem> = Vec::new();
    // (level, child index at that depth) for each open heading.
    let mut stack: Vec<(u8, usize)> = Vec::new();
    let mut next_id = 0usize;

    for (index, line) in content.lines().enumerate() {
        let Some(caps) = heading_line_pattern().captures(line) else {
            continue;
        };
        let level = caps[1].len() as u8;
        let item = OutlineItem {
            id: format!("heading-{next_id}"),
            level,
            text: caps[2].trim().to_string(),
            line: index as u32 + 1,
            children: Vec::new(),
        };
        next_id += 1;

        while stack.last().is_some_and(|&(open_level, _)| open_level >= level) {
            stack.pop();
        }

        let siblings = {
            let mut slot = &mut roots;
            for &(_, child_index) in &stack {
                slot = &mut slot[child_index].children;
            }
            slot
        };
        siblings.push(item);
        stack.push((level, siblings.len() - 1));
    }

    roots
}

fn heading_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading line pattern should compile")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_tree_with_sibling_pops() {
        let outline = extract_outline("# A\n## B\n### C\n## D\n");
        assert_eq!(outline.len(), 1);
        let a = &outline[0];
        assert_eq!(a.text, "A");
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].text, "B");
        assert_eq!(a.children[0].children[0].text, "C");
        assert_eq!(a.children[1].text, "D");
        assert!(a.children[1].children.is_empty());
    }

    #[test]
    fn level_skips_nest_under_the_shallower_heading() {
        let outline = extract_outline("# A\n### B\n## C");
        assert_eq!(outline.len(), 1);
        let a = &outline[0];
        assert_eq!(a.text, "A");
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].text, "B");
        assert_eq!(a.children[0].level, 3);
        assert_eq!(a.children[1].text, "C");
        assert_eq!(a.children[1].level, 2);
    }

    #[test]
    fn ids_follow_discovery_order_and_lines_are_one_based() {
        let outline = extract_outline("intro\n# First\ntext\n## Second\n");
        assert_eq!(outline[0].id, "heading-0");
        assert_eq!(outline[0].line, 2);
        assert_eq!(outline[0].children[0].id, "heading-1");
        assert_eq!(outline[0].children[0].line, 4);
    }

    #[test]
    fn equal_levels_become_siblings_at_the_root() {
        let outline = extract_outline("# A\n# B\n# C");
        assert_eq!(outline.len(), 3);
        assert!(outline.iter().all(|item| item.children.is_empty()));
    }

    #[test]
    fn non_heading_lines_and_deep_hashes_are_ignored() {
        let outline = extract_outline("plain\n####### too deep\n#nospace\n## Real\n");
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].text, "Real");
    }

    #[test]
    fn empty_input_yields_empty_outline() {
        assert!(extract_outline("").is_empty());
    }

    #[test]
    fn heading_text_is_trimmed() {
        let outline = extract_outline("#   Spaced out   ");
        assert_eq!(outline[0].text, "Spaced out");
    }
}
