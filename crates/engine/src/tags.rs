// Tag catalog with usage counts and keyword-based recommendations. A fresh
// manager is pre-seeded with the common tags every workspace starts from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ids::generate_id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentTag {
    pub id: String,
    pub name: String,
    /// Display color, hex notation.
    pub color: String,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_tags: Option<Vec<String>>,
}

/// Tag store keyed by tag id.
#[derive(Debug)]
pub struct TagManager {
    tags: HashMap<String, DocumentTag>,
}

impl TagManager {
    /// Seeds the catalog with the stock tags, all at count zero.
    pub fn new() -> Self {
        let mut tags = HashMap::new();
        for (id, name, color) in [
            ("tag-1", "Technical Documentation", "#409EFF"),
            ("tag-2", "API", "#67C23A"),
            ("tag-3", "Tutorial", "#E6A23C"),
            ("tag-4", "Guide", "#F56C6C"),
            ("tag-5", "Best Practices", "#909399"),
        ] {
            tags.insert(
                id.to_string(),
                DocumentTag {
                    id: id.to_string(),
                    name: name.to_string(),
                    color: color.to_string(),
                    count: 0,
                    related_tags: None,
                },
            );
        }
        Self { tags }
    }

    pub fn add_tag(&mut self, name: &str, color: &str) -> DocumentTag {
        let tag = DocumentTag {
            id: generate_id("tag"),
            name: name.to_string(),
            color: color.to_string(),
            count: 0,
            related_tags: None,
        };
        debug!(id = %tag.id, %name, "tag added");
        self.tags.insert(tag.id.clone(), tag.clone());
        tag
    }

    /// Every tag, most used first; ties break alphabetically by name.
    pub fn all_tags(&self) -> Vec<DocumentTag> {
        let mut tags: Vec<DocumentTag> = self.tags.values().cloned().collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        tags
    }

    pub fn tag(&self, tag_id: &str) -> Option<&DocumentTag> {
        self.tags.get(tag_id)
    }

    /// Tag names suggested for the content. Keyword matching is
    /// case-sensitive substring search, nothing smarter.
    pub fn recommend_tags(&self, content: &str) -> Vec<String> {
        let mut recommendations = Vec::new();

        if content.contains("API") || content.contains("interface") {
            recommendations.push("API".to_string());
        }
        if content.contains("function") || content.contains("class") {
            recommendations.push("Technical Documentation".to_string());
        }
        if content.contains("step") || content.contains("tutorial") {
            recommendations.push("Tutorial".to_string());
        }

        recommendations
    }

    /// Bump a tag's usage count. `false` if the id is unknown.
    pub fn increment_count(&mut self, tag_id: &str) -> bool {
        let Some(tag) = self.tags.get_mut(tag_id) else {
            return false;
        };
        tag.count += 1;
        true
    }
}

impl Default for TagManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_manager_carries_the_stock_tags() {
        let manager = TagManager::new();
        let tags = manager.all_tags();
        assert_eq!(tags.len(), 5);
        assert!(tags.iter().all(|t| t.count == 0));
        assert!(manager.tag("tag-2").is_some());
        assert_eq!(manager.tag("tag-2").map(|t| t.name.as_str()), Some("API"));
    }

    #[test]
    fn added_tags_join_the_catalog() {
        let mut manager = TagManager::new();
        let tag = manager.add_tag("Release Notes", "#336699");
        assert!(tag.id.starts_with("tag-"));
        assert_eq!(manager.all_tags().len(), 6);
        assert_eq!(manager.tag(&tag.id).map(|t| t.color.as_str()), Some("#336699"));
    }

    #[test]
    fn all_tags_sorts_by_usage_then_name() {
        let mut manager = TagManager::new();
        manager.increment_count("tag-3");
        manager.increment_count("tag-3");
        manager.increment_count("tag-5");

        let tags = manager.all_tags();
        assert_eq!(tags[0].name, "Tutorial");
        assert_eq!(tags[1].name, "Best Practices");
        // Unused tags follow alphabetically.
        assert_eq!(tags[2].name, "API");
    }

    #[test]
    fn recommendations_follow_content_keywords() {
        let manager = TagManager::new();

        let names = manager.recommend_tags("The API exposes one interface per resource.");
        assert_eq!(names, vec!["API".to_string()]);

        let names =
            manager.recommend_tags("Each function below maps to a class. See step 1 of the tutorial.");
        assert_eq!(
            names,
            vec!["Technical Documentation".to_string(), "Tutorial".to_string()]
        );

        // Matching is case-sensitive.
        assert!(manager.recommend_tags("api reference").is_empty());
        assert!(manager.recommend_tags("plain prose").is_empty());
    }

    #[test]
    fn increment_count_reports_unknown_ids() {
        let mut manager = TagManager::new();
        assert!(manager.increment_count("tag-1"));
        assert!(!manager.increment_count("tag-99"));
        assert_eq!(manager.tag("tag-1").map(|t| t.count), Some(1));
    }
}
