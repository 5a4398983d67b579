// Bounded version history for a single document.
//
// Append-only: restore never rewrites history, it appends a copy. The
// retained list is FIFO-capped, but version numbers keep incrementing after
// eviction, so a number can refer to an evicted snapshot — lookups by such a
// number return `None` rather than remapping to a retained one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use folio_common::diff::compare_documents;
use folio_common::types::DocumentDiff;

use crate::ids::generate_id;

pub const DEFAULT_MAX_VERSIONS: usize = 50;

/// How a version came to exist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Create,
    Update,
    Restore,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Restore => "restore",
        }
    }
}

/// One immutable document snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentVersion {
    pub id: String,
    /// 1-based, strictly increasing per manager; never reused after eviction.
    pub version: u64,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub comment: Option<String>,
    pub change_type: ChangeType,
}

/// Size-bounded append-only snapshot store for one document.
#[derive(Debug)]
pub struct VersionManager {
    versions: Vec<DocumentVersion>,
    max_versions: usize,
    next_version: u64,
}

impl VersionManager {
    pub fn new(max_versions: usize) -> Self {
        Self { versions: Vec::new(), max_versions, next_version: 1 }
    }

    pub fn max_versions(&self) -> usize {
        self.max_versions
    }

    /// Append a new snapshot, evicting the oldest retained one past the cap.
    pub fn save_version(
        &mut self,
        content: &str,
        author: &str,
        comment: Option<String>,
    ) -> DocumentVersion {
        let change_type =
            if self.versions.is_empty() { ChangeType::Create } else { ChangeType::Update };
        let record = DocumentVersion {
            id: generate_id("version"),
            version: self.next_version,
            content: content.to_string(),
            author: author.to_string(),
            created_at: Utc::now(),
            comment,
            change_type,
        };
        self.next_version += 1;

        self.versions.push(record.clone());
        if self.versions.len() > self.max_versions {
            let evicted = self.versions.remove(0);
            debug!(version = evicted.version, "evicted oldest version past cap");
        }

        debug!(version = record.version, change_type = record.change_type.as_str(), "version saved");
        record
    }

    /// Retained snapshots, oldest first.
    pub fn versions(&self) -> &[DocumentVersion] {
        &self.versions
    }

    /// Lookup by the stored version number, not by list position.
    pub fn version(&self, number: u64) -> Option<&DocumentVersion> {
        self.versions.iter().find(|v| v.version == number)
    }

    /// Append a new snapshot copying version `number`'s content and author.
    ///
    /// The restore append is not subject to the cap; only `save_version`
    /// evicts. Returns `None` when `number` is not retained.
    pub fn restore_version(&mut self, number: u64) -> Option<DocumentVersion> {
        let source = self.version(number)?;
        let record = DocumentVersion {
            id: generate_id("version"),
            version: self.next_version,
            content: source.content.clone(),
            author: source.author.clone(),
            created_at: Utc::now(),
            comment: Some(format!("恢复到版本 v{number}")),
            change_type: ChangeType::Restore,
        };
        self.next_version += 1;
        self.versions.push(record.clone());

        debug!(from = number, version = record.version, "version restored");
        Some(record)
    }

    /// Positional diff between two retained versions; `None` if either is
    /// missing.
    pub fn compare_versions(&self, a: u64, b: u64) -> Option<DocumentDiff> {
        let first = self.version(a)?;
        let second = self.version(b)?;
        Some(compare_documents(&first.content, &second.content))
    }

    /// Drop all snapshots and restart numbering from 1.
    pub fn clear(&mut self) {
        self.versions.clear();
        self.next_version = 1;
        debug!("version history cleared");
    }
}

impl Default for VersionManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VERSIONS)
    }
}
