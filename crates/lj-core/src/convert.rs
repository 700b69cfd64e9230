//! Conversion between backend join records and the editable tree.
//!
//! Reads arrive nested: each record lists its sub-joins under `joins` and
//! leaves its parent implicit. Writes go out flat: every join at every depth,
//! each naming its parent explicitly.

use crate::guard::{PathGuard, TraversalError, TraversalLimits};
use crate::join::{JoinNode, JoinSpec};
use crate::occurrence::{EventOccurrence, WindowEncoding, encode_window};
use crate::tree::check_tree;
use crate::types::Relationship;
use crate::wire::{ApiJoin, ApiJoinRecord};

impl JoinNode {
    /// Converts one backend record into a childless editor node.
    ///
    /// The backend record does not name its own parent, so `source_logrepo`
    /// comes from the caller. A fresh id is generated.
    pub fn from_api(join: &ApiJoin, source_logrepo: Option<&str>) -> Self {
        Self::create(JoinSpec {
            source_logrepo: source_logrepo.map(str::to_string),
            source_field: join.parent_field.clone(),
            target_logrepo_name: join.logrepo_name.clone(),
            target_logrepo_field: join.child_field.clone(),
            relationship: Some(Relationship::from_one_to_one(join.one_to_one)),
            event_occurrence: Some(Some(EventOccurrence::from_window(join.window()))),
            children: Some(Vec::new()),
            ..JoinSpec::default()
        })
    }

    /// Converts this node, without its children, into a write record.
    pub fn to_api_record(&self, encoding: WindowEncoding) -> ApiJoinRecord {
        let window = encode_window(self.event_occurrence.as_ref(), encoding);
        ApiJoinRecord {
            parent: self.source_logrepo.clone(),
            logrepo_name: self.target_logrepo_name.clone(),
            parent_field: self.source_field.clone(),
            child_field: self.target_logrepo_field.clone(),
            one_to_one: self.relationship.is_one_to_one(),
            time_range_start_before_hours: window.start_before_hours,
            time_range_end_after_hours: window.end_after_hours,
        }
    }
}

/// Builds the editor tree from read-API records joined off `root`.
///
/// Each level's records take the enclosing record's `logrepoName` as their
/// source. Sibling order is preserved.
pub fn parse_from_api(joins: &[ApiJoin], root: &str) -> Vec<JoinNode> {
    tracing::debug!(root, top_level = joins.len(), "parsing joins from API");
    from_api_level(joins, Some(root))
}

fn from_api_level(joins: &[ApiJoin], source: Option<&str>) -> Vec<JoinNode> {
    joins
        .iter()
        .map(|join| {
            let node = JoinNode::from_api(join, source);
            let children = from_api_level(&join.joins, join.logrepo_name.as_deref());
            JoinNode { children, ..node }
        })
        .collect()
}

/// Like [`parse_from_api`], but enforces `limits`.
pub fn parse_from_api_guarded(
    joins: &[ApiJoin],
    root: &str,
    limits: &TraversalLimits,
) -> Result<Vec<JoinNode>, TraversalError> {
    tracing::debug!(root, top_level = joins.len(), ?limits, "parsing joins from API");
    let mut guard = PathGuard::new(*limits, Some(root));
    from_api_level_guarded(joins, Some(root), 1, &mut guard)
}

fn from_api_level_guarded<'a>(
    joins: &'a [ApiJoin],
    source: Option<&str>,
    depth: usize,
    guard: &mut PathGuard<'a>,
) -> Result<Vec<JoinNode>, TraversalError> {
    let mut level = Vec::with_capacity(joins.len());
    for join in joins {
        let target = join.logrepo_name.as_deref();
        guard.enter(depth, target)?;
        let children = from_api_level_guarded(&join.joins, target, depth + 1, guard)?;
        guard.leave();
        level.push(JoinNode {
            children,
            ..JoinNode::from_api(join, source)
        });
    }
    Ok(level)
}

/// Collects every node of the tree, parents before their descendants.
///
/// Each call emits the whole level first, then each node's own flattened
/// subtree in order. Siblings' subtrees are never interleaved.
pub fn flatten_joins(joins: &[JoinNode]) -> Vec<&JoinNode> {
    let mut out = Vec::new();
    collect_level(joins, &mut out);
    out
}

fn collect_level<'a>(joins: &'a [JoinNode], out: &mut Vec<&'a JoinNode>) {
    out.extend(joins);
    for join in joins {
        collect_level(&join.children, out);
    }
}

/// Flattens the editor tree into write-API records.
///
/// `root` is the logrepo the tree hangs off. Records take their parent from
/// each node's own `sourceLogrepo`, so it only labels the trace. Nodes with
/// missing names are passed through with `null` linkage.
pub fn parse_to_api(
    joins: &[JoinNode],
    root: &str,
    encoding: WindowEncoding,
) -> Vec<ApiJoinRecord> {
    let records: Vec<_> = flatten_joins(joins)
        .into_iter()
        .map(|join| join.to_api_record(encoding))
        .collect();
    tracing::debug!(root, records = records.len(), ?encoding, "parsed joins to API");
    records
}

/// Like [`parse_to_api`], but checks the tree against `limits` first.
pub fn parse_to_api_guarded(
    joins: &[JoinNode],
    root: &str,
    encoding: WindowEncoding,
    limits: &TraversalLimits,
) -> Result<Vec<ApiJoinRecord>, TraversalError> {
    check_tree(joins, Some(root), limits)?;
    Ok(parse_to_api(joins, root, encoding))
}
