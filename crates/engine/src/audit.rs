// Per-document audit trails, newest entry first. Each document keeps an
// independent capped list; pushing past the cap drops the oldest entry.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ids::generate_id;

pub const DEFAULT_MAX_LOGS_PER_DOCUMENT: usize = 1000;
pub const DEFAULT_LOG_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    View,
    Share,
    Approve,
    Reject,
    Publish,
    Download,
    Print,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::View => "view",
            Self::Share => "share",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Publish => "publish",
            Self::Download => "download",
            Self::Print => "print",
        }
    }
}

/// A recorded action against a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: String,
    pub document_id: String,
    pub user_id: String,
    pub user_name: String,
    pub action: AuditAction,
    pub details: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Caller-supplied fields of an entry; the manager assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub document_id: String,
    pub user_id: String,
    pub user_name: String,
    pub action: AuditAction,
    pub details: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Search criteria; unset fields match everything. Date bounds are
/// inclusive on both ends.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    pub action: Option<AuditAction>,
    pub user_id: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

/// Audit trails keyed by document id.
#[derive(Debug)]
pub struct AuditLogManager {
    logs: HashMap<String, Vec<AuditEntry>>,
    max_logs_per_document: usize,
}

impl AuditLogManager {
    pub fn new() -> Self {
        Self::with_max_logs(DEFAULT_MAX_LOGS_PER_DOCUMENT)
    }

    /// Zero falls back to the default; a cap of zero would drop every entry.
    pub fn with_max_logs(max_logs: usize) -> Self {
        Self {
            logs: HashMap::new(),
            max_logs_per_document: if max_logs == 0 {
                DEFAULT_MAX_LOGS_PER_DOCUMENT
            } else {
                max_logs
            },
        }
    }

    /// Record an event at the front of the document's trail, evicting the
    /// oldest entry once the cap is exceeded.
    pub fn log(&mut self, event: AuditEvent) -> AuditEntry {
        let entry = AuditEntry {
            id: generate_id("log"),
            document_id: event.document_id,
            user_id: event.user_id,
            user_name: event.user_name,
            action: event.action,
            details: event.details,
            ip_address: event.ip_address,
            user_agent: event.user_agent,
            timestamp: Utc::now(),
        };

        let trail = self.logs.entry(entry.document_id.clone()).or_default();
        trail.insert(0, entry.clone());
        if trail.len() > self.max_logs_per_document {
            trail.pop();
            debug!(document_id = %entry.document_id, "audit trail at capacity, oldest entry dropped");
        }

        entry
    }

    /// Up to `limit` most recent entries, newest first.
    pub fn logs(&self, document_id: &str, limit: usize) -> Vec<AuditEntry> {
        let Some(trail) = self.logs.get(document_id) else {
            return Vec::new();
        };
        trail.iter().take(limit).cloned().collect()
    }

    pub fn recent_logs(&self, document_id: &str) -> Vec<AuditEntry> {
        self.logs(document_id, DEFAULT_LOG_LIMIT)
    }

    /// Entries matching every set filter field, newest first.
    pub fn search(&self, document_id: &str, filter: &AuditFilter) -> Vec<AuditEntry> {
        let Some(trail) = self.logs.get(document_id) else {
            return Vec::new();
        };

        trail
            .iter()
            .filter(|entry| {
                if let Some(action) = filter.action {
                    if entry.action != action {
                        return false;
                    }
                }
                if let Some(user_id) = &filter.user_id {
                    if &entry.user_id != user_id {
                        return false;
                    }
                }
                if let Some(from) = filter.from {
                    if entry.timestamp < from {
                        return false;
                    }
                }
                if let Some(until) = filter.until {
                    if entry.timestamp > until {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }

    /// Drop every entry for the document.
    pub fn clear(&mut self, document_id: &str) {
        self.logs.insert(document_id.to_string(), Vec::new());
    }
}

impl Default for AuditLogManager {
    fn default() -> Self {
        Self::new()
    }
}
