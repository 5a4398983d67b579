// Position-anchored comments with threaded replies for a single document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ids::generate_id;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationStatus {
    Pending,
    Resolved,
    /// Declared for parity with the workflow model; this manager never
    /// produces it.
    Rejected,
}

impl AnnotationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }
}

/// Where in the document an annotation is anchored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotationPosition {
    /// Line (1-based).
    pub line: u32,
    /// Column (1-based).
    pub column: u32,
    /// The text the annotation was attached to.
    pub text: String,
}

/// An inline comment thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Annotation {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub position: AnnotationPosition,
    pub created_at: DateTime<Utc>,
    pub status: AnnotationStatus,
    pub replies: Vec<AnnotationReply>,
}

/// Append-only child of exactly one annotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotationReply {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new annotation; id, timestamp, status, and
/// replies are manager-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationDraft {
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub position: AnnotationPosition,
}

/// Caller-supplied fields for a new reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDraft {
    pub user_id: String,
    pub user_name: String,
    pub content: String,
}

/// Annotation store for one document. All lookups are linear scans, which is
/// fine at comments-on-one-document scale.
#[derive(Debug, Default)]
pub struct AnnotationManager {
    annotations: Vec<Annotation>,
}

impl AnnotationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, draft: AnnotationDraft) -> Annotation {
        let annotation = Annotation {
            id: generate_id("annotation"),
            user_id: draft.user_id,
            user_name: draft.user_name,
            content: draft.content,
            position: draft.position,
            created_at: Utc::now(),
            status: AnnotationStatus::Pending,
            replies: Vec::new(),
        };
        self.annotations.push(annotation.clone());
        debug!(id = %annotation.id, line = annotation.position.line, "annotation added");
        annotation
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Append a reply to an annotation; `false` if the annotation is unknown.
    pub fn reply(&mut self, annotation_id: &str, draft: ReplyDraft) -> bool {
        let Some(annotation) =
            self.annotations.iter_mut().find(|a| a.id == annotation_id)
        else {
            return false;
        };

        annotation.replies.push(AnnotationReply {
            id: generate_id("reply"),
            user_id: draft.user_id,
            user_name: draft.user_name,
            content: draft.content,
            created_at: Utc::now(),
        });
        debug!(id = %annotation_id, replies = annotation.replies.len(), "annotation reply added");
        true
    }

    /// Mark an annotation resolved; `false` if unknown. There is no path
    /// back to pending.
    pub fn resolve(&mut self, annotation_id: &str) -> bool {
        let Some(annotation) =
            self.annotations.iter_mut().find(|a| a.id == annotation_id)
        else {
            return false;
        };

        annotation.status = AnnotationStatus::Resolved;
        debug!(id = %annotation_id, "annotation resolved");
        true
    }

    /// Remove an annotation and its replies; `false` if unknown.
    pub fn remove(&mut self, annotation_id: &str) -> bool {
        let Some(index) = self.annotations.iter().position(|a| a.id == annotation_id) else {
            return false;
        };

        self.annotations.remove(index);
        debug!(id = %annotation_id, "annotation removed");
        true
    }

    pub fn clear(&mut self) {
        self.annotations.clear();
        debug!("annotations cleared");
    }
}
