// Per-document, per-user capability grants. Default-deny: no record means no
// access. A grant is replaced wholesale on upsert, never merged flag by flag.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Editor,
    Reviewer,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Reviewer => "reviewer",
            Self::Viewer => "viewer",
        }
    }
}

/// The capability a permission check consults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    Read,
    Write,
    Delete,
    Share,
    Approve,
}

/// One user's grant on one document. Keyed by `(document_id, user_id)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentPermission {
    pub document_id: String,
    pub user_id: String,
    pub role: Role,
    pub can_read: bool,
    pub can_write: bool,
    pub can_delete: bool,
    pub can_share: bool,
    pub can_approve: bool,
    pub granted_at: DateTime<Utc>,
    pub granted_by: String,
}

/// Grant store keyed by document id.
#[derive(Debug, Default)]
pub struct PermissionManager {
    permissions: HashMap<String, Vec<DocumentPermission>>,
}

impl PermissionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a grant, replacing any existing record for the same user on
    /// the same document.
    pub fn set_permission(&mut self, permission: DocumentPermission) {
        debug!(
            document_id = %permission.document_id,
            user_id = %permission.user_id,
            role = permission.role.as_str(),
            "permission set"
        );
        let grants = self.permissions.entry(permission.document_id.clone()).or_default();
        match grants.iter_mut().find(|g| g.user_id == permission.user_id) {
            Some(existing) => *existing = permission,
            None => grants.push(permission),
        }
    }

    /// Default-deny capability check.
    pub fn check_permission(
        &self,
        document_id: &str,
        user_id: &str,
        action: PermissionAction,
    ) -> bool {
        let Some(grant) = self.grant(document_id, user_id) else {
            return false;
        };

        match action {
            PermissionAction::Read => grant.can_read,
            PermissionAction::Write => grant.can_write,
            PermissionAction::Delete => grant.can_delete,
            PermissionAction::Share => grant.can_share,
            PermissionAction::Approve => grant.can_approve,
        }
    }

    pub fn user_role(&self, document_id: &str, user_id: &str) -> Option<Role> {
        self.grant(document_id, user_id).map(|grant| grant.role)
    }

    /// Revoke a user's grant; `false` if none existed.
    pub fn remove_permission(&mut self, document_id: &str, user_id: &str) -> bool {
        let Some(grants) = self.permissions.get_mut(document_id) else {
            return false;
        };
        let before = grants.len();
        grants.retain(|g| g.user_id != user_id);
        let removed = grants.len() < before;
        if removed {
            debug!(%document_id, %user_id, "permission removed");
        }
        removed
    }

    pub fn document_permissions(&self, document_id: &str) -> &[DocumentPermission] {
        self.permissions.get(document_id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn grant(&self, document_id: &str, user_id: &str) -> Option<&DocumentPermission> {
        self.permissions.get(document_id)?.iter().find(|g| g.user_id == user_id)
    }
}
