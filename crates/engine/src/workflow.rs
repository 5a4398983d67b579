// Linear approval pipelines, one instance per workflow id. Transitions are
// driven entirely by callers; there are no timers and no automatic advances.
//
// Approval addresses nodes by id without checking `current_node_id`, so
// out-of-order approval is possible. That permissiveness is part of the
// contract; callers wanting strict ordering enforce it themselves.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ids::generate_id;

/// Shared status enum for instances and nodes.
///
/// `Published` and `Archived` are reachable only through logic outside this
/// manager; they are declared for the embedding application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Draft,
    #[serde(rename = "pending")]
    PendingReview,
    InReview,
    Approved,
    Rejected,
    Published,
    Archived,
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::PendingReview => "pending",
            Self::InReview => "in_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Start,
    Review,
    Approve,
    End,
}

/// One stage in a pipeline. Order within the instance defines the sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub reviewers: Vec<String>,
    pub status: WorkflowStatus,
    pub comment: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<String>,
}

impl WorkflowNode {
    pub fn new(id: &str, name: &str, kind: NodeKind, reviewers: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            reviewers,
            status: WorkflowStatus::Draft,
            comment: None,
            reviewed_at: None,
            reviewed_by: None,
        }
    }
}

/// A pipeline bound to one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowInstance {
    pub id: String,
    pub document_id: String,
    pub nodes: Vec<WorkflowNode>,
    /// Empty when the instance was created with no nodes.
    pub current_node_id: String,
    pub status: WorkflowStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Pipeline store keyed by workflow id.
#[derive(Debug, Default)]
pub struct WorkflowManager {
    workflows: HashMap<String, WorkflowInstance>,
}

impl WorkflowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draft instance. An empty node list is accepted and leaves
    /// `current_node_id` empty; such an instance can never advance.
    pub fn create_workflow(
        &mut self,
        document_id: &str,
        nodes: Vec<WorkflowNode>,
        created_by: &str,
    ) -> WorkflowInstance {
        let instance = WorkflowInstance {
            id: generate_id("workflow"),
            document_id: document_id.to_string(),
            current_node_id: nodes.first().map(|n| n.id.clone()).unwrap_or_default(),
            nodes,
            status: WorkflowStatus::Draft,
            created_at: Utc::now(),
            created_by: created_by.to_string(),
            completed_at: None,
        };
        debug!(id = %instance.id, %document_id, nodes = instance.nodes.len(), "workflow created");
        self.workflows.insert(instance.id.clone(), instance.clone());
        instance
    }

    /// Move the instance (and its first node, when present) to pending
    /// review. `None` if the workflow id is unknown.
    pub fn submit_for_review(&mut self, workflow_id: &str) -> Option<WorkflowInstance> {
        let workflow = self.workflows.get_mut(workflow_id)?;

        workflow.status = WorkflowStatus::PendingReview;
        if let Some(first) = workflow.nodes.first_mut() {
            first.status = WorkflowStatus::PendingReview;
            workflow.current_node_id = first.id.clone();
        }

        debug!(id = %workflow_id, "workflow submitted for review");
        Some(workflow.clone())
    }

    /// Approve the named node, stamping the reviewer. A non-final node
    /// advances `current_node_id` and puts the next node in review; the
    /// final node completes the instance. `None` if the workflow or node is
    /// unknown.
    pub fn approve(
        &mut self,
        workflow_id: &str,
        node_id: &str,
        user_id: &str,
        comment: Option<String>,
    ) -> Option<WorkflowInstance> {
        let workflow = self.workflows.get_mut(workflow_id)?;
        let index = workflow.nodes.iter().position(|n| n.id == node_id)?;

        let node = &mut workflow.nodes[index];
        node.status = WorkflowStatus::Approved;
        node.reviewed_by = Some(user_id.to_string());
        node.reviewed_at = Some(Utc::now());
        node.comment = comment;

        if index + 1 < workflow.nodes.len() {
            let next = &mut workflow.nodes[index + 1];
            next.status = WorkflowStatus::InReview;
            workflow.current_node_id = next.id.clone();
            debug!(id = %workflow_id, node = %node_id, next = %workflow.current_node_id, "workflow node approved");
        } else {
            workflow.status = WorkflowStatus::Approved;
            workflow.completed_at = Some(Utc::now());
            debug!(id = %workflow_id, node = %node_id, "workflow approved");
        }

        Some(workflow.clone())
    }

    /// Reject the named node and the whole instance. Terminal: no further
    /// stage is advanced. `None` if the workflow or node is unknown.
    pub fn reject(
        &mut self,
        workflow_id: &str,
        node_id: &str,
        user_id: &str,
        comment: &str,
    ) -> Option<WorkflowInstance> {
        let workflow = self.workflows.get_mut(workflow_id)?;
        let node = workflow.nodes.iter_mut().find(|n| n.id == node_id)?;

        node.status = WorkflowStatus::Rejected;
        node.reviewed_by = Some(user_id.to_string());
        node.reviewed_at = Some(Utc::now());
        node.comment = Some(comment.to_string());
        workflow.status = WorkflowStatus::Rejected;

        debug!(id = %workflow_id, node = %node_id, "workflow rejected");
        Some(workflow.clone())
    }

    pub fn workflow(&self, workflow_id: &str) -> Option<&WorkflowInstance> {
        self.workflows.get(workflow_id)
    }

    /// Linear scan for an instance bound to the document. Uniqueness is not
    /// enforced; with several instances the match is unspecified.
    pub fn workflow_for_document(&self, document_id: &str) -> Option<&WorkflowInstance> {
        self.workflows.values().find(|w| w.document_id == document_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_nodes() -> Vec<WorkflowNode> {
        vec![
            WorkflowNode::new("n1", "Editorial review", NodeKind::Review, vec!["rev1".into()]),
            WorkflowNode::new("n2", "Technical review", NodeKind::Review, vec!["rev2".into()]),
            WorkflowNode::new("n3", "Final approval", NodeKind::Approve, vec!["lead".into()]),
        ]
    }

    #[test]
    fn created_workflows_start_as_drafts_at_the_first_node() {
        let mut manager = WorkflowManager::new();
        let instance = manager.create_workflow("doc-1", three_nodes(), "alice");

        assert_eq!(instance.status, WorkflowStatus::Draft);
        assert_eq!(instance.current_node_id, "n1");
        assert!(instance.completed_at.is_none());
        assert!(instance.nodes.iter().all(|n| n.status == WorkflowStatus::Draft));
    }

    #[test]
    fn a_three_node_pipeline_advances_linearly_to_approval() {
        let mut manager = WorkflowManager::new();
        let instance = manager.create_workflow("doc-1", three_nodes(), "alice");

        let submitted =
            manager.submit_for_review(&instance.id).expect("workflow should exist");
        assert_eq!(submitted.status, WorkflowStatus::PendingReview);
        assert_eq!(submitted.nodes[0].status, WorkflowStatus::PendingReview);
        assert_eq!(submitted.current_node_id, "n1");

        let after_first = manager
            .approve(&instance.id, "n1", "rev1", Some("looks good".to_string()))
            .expect("first approval should apply");
        assert_eq!(after_first.nodes[0].status, WorkflowStatus::Approved);
        assert_eq!(after_first.nodes[0].reviewed_by.as_deref(), Some("rev1"));
        assert!(after_first.nodes[0].reviewed_at.is_some());
        assert_eq!(after_first.current_node_id, "n2");
        assert_eq!(after_first.nodes[1].status, WorkflowStatus::InReview);
        assert_eq!(after_first.status, WorkflowStatus::PendingReview);
        assert!(after_first.completed_at.is_none());

        manager.approve(&instance.id, "n2", "rev2", None).expect("second approval");
        let done = manager
            .approve(&instance.id, "n3", "lead", None)
            .expect("final approval should apply");
        assert_eq!(done.status, WorkflowStatus::Approved);
        assert!(done.completed_at.is_some());
        assert!(done.nodes.iter().all(|n| n.status == WorkflowStatus::Approved));
    }

    #[test]
    fn zero_node_workflows_are_accepted_but_cannot_advance() {
        let mut manager = WorkflowManager::new();
        let instance = manager.create_workflow("doc-1", Vec::new(), "alice");
        assert_eq!(instance.current_node_id, "");

        let submitted =
            manager.submit_for_review(&instance.id).expect("workflow should exist");
        assert_eq!(submitted.status, WorkflowStatus::PendingReview);
        assert_eq!(submitted.current_node_id, "");
        assert!(manager.approve(&instance.id, "n1", "rev1", None).is_none());
    }

    #[test]
    fn approval_addresses_nodes_by_id_regardless_of_order() {
        let mut manager = WorkflowManager::new();
        let instance = manager.create_workflow("doc-1", three_nodes(), "alice");
        manager.submit_for_review(&instance.id);

        // n2 approved while n1 is still the current node.
        let updated = manager
            .approve(&instance.id, "n2", "rev2", None)
            .expect("out-of-order approval should apply");
        assert_eq!(updated.nodes[1].status, WorkflowStatus::Approved);
        assert_eq!(updated.current_node_id, "n3");
        assert_eq!(updated.nodes[2].status, WorkflowStatus::InReview);
        assert_eq!(updated.nodes[0].status, WorkflowStatus::PendingReview);
    }

    #[test]
    fn rejection_is_terminal_for_node_and_instance() {
        let mut manager = WorkflowManager::new();
        let instance = manager.create_workflow("doc-1", three_nodes(), "alice");
        manager.submit_for_review(&instance.id);

        let rejected = manager
            .reject(&instance.id, "n1", "rev1", "needs a rewrite")
            .expect("rejection should apply");
        assert_eq!(rejected.status, WorkflowStatus::Rejected);
        assert_eq!(rejected.nodes[0].status, WorkflowStatus::Rejected);
        assert_eq!(rejected.nodes[0].comment.as_deref(), Some("needs a rewrite"));
        assert!(rejected.completed_at.is_none());
    }

    #[test]
    fn unknown_workflows_and_nodes_return_none() {
        let mut manager = WorkflowManager::new();
        assert!(manager.submit_for_review("workflow-missing").is_none());
        assert!(manager.approve("workflow-missing", "n1", "rev", None).is_none());

        let instance = manager.create_workflow("doc-1", three_nodes(), "alice");
        assert!(manager.approve(&instance.id, "n9", "rev", None).is_none());
        assert!(manager.reject(&instance.id, "n9", "rev", "no").is_none());
    }

    #[test]
    fn lookup_by_document_scans_instances() {
        let mut manager = WorkflowManager::new();
        let instance = manager.create_workflow("doc-7", three_nodes(), "alice");

        let found = manager.workflow_for_document("doc-7").expect("instance should be found");
        assert_eq!(found.id, instance.id);
        assert!(manager.workflow_for_document("doc-8").is_none());
        assert!(manager.workflow(&instance.id).is_some());
    }

    #[test]
    fn pending_review_serializes_as_pending_on_the_wire() {
        let json = serde_json::to_string(&WorkflowStatus::PendingReview)
            .expect("status should serialize");
        assert_eq!(json, "\"pending\"");
        let json = serde_json::to_string(&WorkflowStatus::InReview)
            .expect("status should serialize");
        assert_eq!(json, "\"in_review\"");

        let parsed: WorkflowStatus =
            serde_json::from_str("\"pending\"").expect("status should deserialize");
        assert_eq!(parsed, WorkflowStatus::PendingReview);
    }
}
