// Presence and edit-stream tracking for co-editing sessions. State is
// per-document: who is connected, where their cursor sits, and the ordered
// stream of edit operations they have produced.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ids::generate_id;

/// Cursor location in editor coordinates (0-based line and column).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Selected region as absolute character offsets, end exclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collaborator {
    pub user_id: String,
    pub user_name: String,
    /// Presence color, hex notation.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_position: Option<CursorPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionRange>,
    pub is_online: bool,
    pub last_active_at: DateTime<Utc>,
}

/// Identity fields for a joining collaborator.
#[derive(Debug, Clone)]
pub struct CollaboratorProfile {
    pub user_id: String,
    pub user_name: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    Insert,
    Delete,
    Replace,
}

impl EditKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Delete => "delete",
            Self::Replace => "replace",
        }
    }
}

/// One edit in a document's operation stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditOperation {
    pub id: String,
    pub document_id: String,
    pub user_id: String,
    pub kind: EditKind,
    /// Absolute character offset the edit applies at.
    pub position: usize,
    /// Inserted or replacement text, for insert/replace edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Affected span length, for delete/replace edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    pub timestamp: DateTime<Utc>,
}

/// Caller-supplied fields of an operation; the manager assigns id and
/// timestamp.
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub document_id: String,
    pub user_id: String,
    pub kind: EditKind,
    pub position: usize,
    pub text: Option<String>,
    pub length: Option<usize>,
}

/// Per-document presence lists and operation streams.
#[derive(Debug, Default)]
pub struct CollaborationManager {
    collaborators: HashMap<String, Vec<Collaborator>>,
    operations: HashMap<String, Vec<EditOperation>>,
}

impl CollaborationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collaborator, or refresh an existing one. A rejoin only flips
    /// the record back online; name, color, and any cursor state survive.
    pub fn join(&mut self, document_id: &str, profile: CollaboratorProfile) -> Collaborator {
        let roster = self.collaborators.entry(document_id.to_string()).or_default();

        if let Some(existing) = roster.iter_mut().find(|c| c.user_id == profile.user_id) {
            existing.is_online = true;
            existing.last_active_at = Utc::now();
            debug!(%document_id, user_id = %existing.user_id, "collaborator rejoined");
            return existing.clone();
        }

        let collaborator = Collaborator {
            user_id: profile.user_id,
            user_name: profile.user_name,
            color: profile.color,
            cursor_position: None,
            selection: None,
            is_online: true,
            last_active_at: Utc::now(),
        };
        debug!(%document_id, user_id = %collaborator.user_id, "collaborator joined");
        roster.push(collaborator.clone());
        collaborator
    }

    /// Mark a collaborator offline, keeping the record so late joiners can
    /// still see who was here. `false` if the user was never present.
    pub fn leave(&mut self, document_id: &str, user_id: &str) -> bool {
        let Some(roster) = self.collaborators.get_mut(document_id) else {
            return false;
        };
        let Some(collaborator) = roster.iter_mut().find(|c| c.user_id == user_id) else {
            return false;
        };
        collaborator.is_online = false;
        collaborator.last_active_at = Utc::now();
        debug!(%document_id, %user_id, "collaborator left");
        true
    }

    /// Everyone who has ever joined the document, online or not.
    pub fn collaborators(&self, document_id: &str) -> &[Collaborator] {
        self.collaborators.get(document_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn online_collaborators(&self, document_id: &str) -> Vec<Collaborator> {
        self.collaborators(document_id)
            .iter()
            .filter(|c| c.is_online)
            .cloned()
            .collect()
    }

    /// Move a collaborator's cursor. A plain cursor move passes `None` and
    /// clears any selection. `false` if the user is not on the roster.
    pub fn update_cursor(
        &mut self,
        document_id: &str,
        user_id: &str,
        cursor: CursorPosition,
        selection: Option<SelectionRange>,
    ) -> bool {
        let Some(roster) = self.collaborators.get_mut(document_id) else {
            return false;
        };
        let Some(collaborator) = roster.iter_mut().find(|c| c.user_id == user_id) else {
            return false;
        };
        collaborator.cursor_position = Some(cursor);
        collaborator.selection = selection;
        collaborator.last_active_at = Utc::now();
        true
    }

    /// Append an edit to the document's operation stream.
    pub fn record_operation(&mut self, draft: EditDraft) -> EditOperation {
        let operation = EditOperation {
            id: generate_id("op"),
            document_id: draft.document_id,
            user_id: draft.user_id,
            kind: draft.kind,
            position: draft.position,
            text: draft.text,
            length: draft.length,
            timestamp: Utc::now(),
        };
        self.operations
            .entry(operation.document_id.clone())
            .or_default()
            .push(operation.clone());
        operation
    }

    /// Operation stream in application order, oldest first.
    pub fn operations(&self, document_id: &str) -> &[EditOperation] {
        self.operations.get(document_id).map(Vec::as_slice).unwrap_or(&[])
    }
}
