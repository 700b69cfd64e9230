//! The editable join node.

use serde::{Deserialize, Serialize};

use crate::occurrence::EventOccurrence;
use crate::types::{JoinId, Relationship};

/// A join between a source and a target logrepo, as edited in the UI.
///
/// `children` holds the joins chained off this node's target logrepo.
/// Equality compares business data only; `id` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinNode {
    #[serde(default = "JoinId::generate")]
    pub id: JoinId,
    #[serde(default)]
    pub source_logrepo: Option<String>,
    #[serde(default)]
    pub source_field: Option<String>,
    #[serde(default)]
    pub target_logrepo_name: Option<String>,
    #[serde(default)]
    pub target_logrepo_field: Option<String>,
    #[serde(default)]
    pub relationship: Relationship,
    #[serde(default)]
    pub event_occurrence: Option<EventOccurrence>,
    /// Reserved. Passed through unchanged; new nodes start with `null`.
    #[serde(default)]
    pub filter: Option<serde_json::Value>,
    #[serde(default)]
    pub children: Vec<Self>,
}

/// Overrides applied on top of the defaults by [`JoinNode::create`].
///
/// Only fields set to `Some` change; everything else keeps its default.
#[derive(Debug, Clone, Default)]
pub struct JoinSpec {
    pub id: Option<JoinId>,
    pub source_logrepo: Option<String>,
    pub source_field: Option<String>,
    pub target_logrepo_name: Option<String>,
    pub target_logrepo_field: Option<String>,
    pub relationship: Option<Relationship>,
    /// `Some(None)` clears the default occurrence.
    pub event_occurrence: Option<Option<EventOccurrence>>,
    pub children: Option<Vec<JoinNode>>,
}

impl JoinNode {
    /// Creates a blank join: no linkage, one-to-one, one day before.
    pub fn new() -> Self {
        Self::create(JoinSpec::default())
    }

    /// Creates a join from the defaults, overridden field by field by `spec`.
    pub fn create(spec: JoinSpec) -> Self {
        Self {
            id: spec.id.unwrap_or_else(JoinId::generate),
            source_logrepo: spec.source_logrepo,
            source_field: spec.source_field,
            target_logrepo_name: spec.target_logrepo_name,
            target_logrepo_field: spec.target_logrepo_field,
            relationship: spec.relationship.unwrap_or_default(),
            event_occurrence: spec
                .event_occurrence
                .unwrap_or_else(|| Some(EventOccurrence::default())),
            filter: None,
            children: spec.children.unwrap_or_default(),
        }
    }

    /// Returns a copy of this node with `children` replaced.
    #[must_use]
    pub fn with_children(&self, children: Vec<Self>) -> Self {
        Self {
            children,
            ..self.clone_shallow()
        }
    }

    /// Clones every field except `children`, which is left empty.
    #[must_use]
    pub fn clone_shallow(&self) -> Self {
        Self {
            id: self.id.clone(),
            source_logrepo: self.source_logrepo.clone(),
            source_field: self.source_field.clone(),
            target_logrepo_name: self.target_logrepo_name.clone(),
            target_logrepo_field: self.target_logrepo_field.clone(),
            relationship: self.relationship,
            event_occurrence: self.event_occurrence,
            filter: self.filter.clone(),
            children: Vec::new(),
        }
    }

    /// Whether this node joins from the given logrepo.
    pub fn is_sourced_at(&self, logrepo: &str) -> bool {
        self.source_logrepo.as_deref() == Some(logrepo)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

impl Default for JoinNode {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for JoinNode {
    fn eq(&self, other: &Self) -> bool {
        self.source_logrepo == other.source_logrepo
            && self.source_field == other.source_field
            && self.target_logrepo_name == other.target_logrepo_name
            && self.target_logrepo_field == other.target_logrepo_field
            && self.relationship == other.relationship
            && self.event_occurrence == other.event_occurrence
            && self.filter == other.filter
            && self.children == other.children
    }
}
