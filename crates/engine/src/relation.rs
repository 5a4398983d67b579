// Directed document-to-document links, stored per source document. The
// graph builder flattens one document's outgoing links into node/link lists
// ready for a renderer.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ids::generate_id;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Reference,
    Duplicate,
    Related,
    Parent,
    Child,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Duplicate => "duplicate",
            Self::Related => "related",
            Self::Parent => "parent",
            Self::Child => "child",
        }
    }
}

/// A directed link between two documents. `strength` is kept in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentRelation {
    pub id: String,
    pub source_document_id: String,
    pub target_document_id: String,
    pub kind: RelationKind,
    pub strength: f32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub kind: RelationKind,
    pub strength: f32,
}

/// Node/link view of one document's outgoing relations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Relation store keyed by source document id.
#[derive(Debug, Default)]
pub struct RelationManager {
    relations: HashMap<String, Vec<DocumentRelation>>,
}

impl RelationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a link from source to target. Out-of-range strengths are
    /// clamped rather than rejected.
    pub fn add_relation(
        &mut self,
        source_document_id: &str,
        target_document_id: &str,
        kind: RelationKind,
        strength: f32,
    ) -> DocumentRelation {
        let relation = DocumentRelation {
            id: generate_id("relation"),
            source_document_id: source_document_id.to_string(),
            target_document_id: target_document_id.to_string(),
            kind,
            strength: strength.clamp(0.0, 1.0),
            created_at: Utc::now(),
        };
        debug!(source = %source_document_id, target = %target_document_id, kind = kind.as_str(), "relation added");
        self.relations
            .entry(source_document_id.to_string())
            .or_default()
            .push(relation.clone());
        relation
    }

    /// Outgoing relations only. Links pointing at this document from other
    /// sources are not included.
    pub fn related_documents(&self, document_id: &str) -> &[DocumentRelation] {
        self.relations.get(document_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove every relation from source to target. `false` when nothing
    /// matched.
    pub fn remove_relation(&mut self, source_document_id: &str, target_document_id: &str) -> bool {
        let Some(relations) = self.relations.get_mut(source_document_id) else {
            return false;
        };
        let before = relations.len();
        relations.retain(|r| r.target_document_id != target_document_id);
        relations.len() != before
    }

    /// Build the render-ready graph centered on one document. The center
    /// node comes first; each target appears once even when several
    /// relations point at it.
    pub fn build_graph(&self, document_id: &str) -> RelationGraph {
        let mut nodes = vec![GraphNode {
            id: document_id.to_string(),
            label: "Current document".to_string(),
        }];
        let mut seen: HashSet<&str> = HashSet::from([document_id]);
        let mut links = Vec::new();

        for relation in self.related_documents(document_id) {
            if seen.insert(&relation.target_document_id) {
                nodes.push(GraphNode {
                    id: relation.target_document_id.clone(),
                    label: format!("Document {}", relation.target_document_id),
                });
            }
            links.push(GraphLink {
                source: document_id.to_string(),
                target: relation.target_document_id.clone(),
                kind: relation.kind,
                strength: relation.strength,
            });
        }

        RelationGraph { nodes, links }
    }
}
