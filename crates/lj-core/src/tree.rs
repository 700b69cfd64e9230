//! Assembling a nested join tree from a flat working list, and back.
//!
//! Linkage is by name: a node's children are every node in the list whose
//! `sourceLogrepo` equals its `targetLogrepoName`. Each level re-scans the
//! whole list, so a target shared by several sources branches and the same
//! list entry can appear at more than one position.

use crate::guard::{PathGuard, TraversalError, TraversalLimits};
use crate::join::JoinNode;

/// Builds the tree of joins hanging off `root`.
///
/// `root` itself is not represented as a node. Relative order of the input is
/// kept at every level. Nodes without a target name get no children.
///
/// The walk is unguarded: a flat list whose names form a cycle recurses until
/// the stack is exhausted. Use [`build_tree_guarded`] for untrusted input.
pub fn build_tree(nodes: &[JoinNode], root: &str) -> Vec<JoinNode> {
    tracing::debug!(root, nodes = nodes.len(), "building join tree");
    build_level(nodes, root)
}

fn build_level(nodes: &[JoinNode], root: &str) -> Vec<JoinNode> {
    nodes
        .iter()
        .filter(|node| node.is_sourced_at(root))
        .map(|node| {
            let children = node
                .target_logrepo_name
                .as_deref()
                .map(|target| build_level(nodes, target))
                .unwrap_or_default();
            node.with_children(children)
        })
        .collect()
}

/// Like [`build_tree`], but enforces `limits`.
pub fn build_tree_guarded(
    nodes: &[JoinNode],
    root: &str,
    limits: &TraversalLimits,
) -> Result<Vec<JoinNode>, TraversalError> {
    tracing::debug!(root, nodes = nodes.len(), ?limits, "building join tree");
    let mut guard = PathGuard::new(*limits, Some(root));
    build_level_guarded(nodes, root, 1, &mut guard)
}

fn build_level_guarded<'a>(
    nodes: &'a [JoinNode],
    root: &str,
    depth: usize,
    guard: &mut PathGuard<'a>,
) -> Result<Vec<JoinNode>, TraversalError> {
    let mut level = Vec::new();
    for node in nodes.iter().filter(|node| node.is_sourced_at(root)) {
        let target = node.target_logrepo_name.as_deref();
        guard.enter(depth, target)?;
        let children = match target {
            Some(target) => build_level_guarded(nodes, target, depth + 1, guard)?,
            None => Vec::new(),
        };
        guard.leave();
        level.push(node.with_children(children));
    }
    Ok(level)
}

/// Checks an already nested tree against `limits` without copying it.
///
/// The path starts at `root`, so a node joining back into the root is a
/// cycle.
pub fn check_tree(
    tree: &[JoinNode],
    root: Option<&str>,
    limits: &TraversalLimits,
) -> Result<(), TraversalError> {
    if limits.is_unbounded() {
        return Ok(());
    }
    let mut guard = PathGuard::new(*limits, root);
    check_level(tree, 1, &mut guard)
}

fn check_level<'a>(
    nodes: &'a [JoinNode],
    depth: usize,
    guard: &mut PathGuard<'a>,
) -> Result<(), TraversalError> {
    for node in nodes {
        guard.enter(depth, node.target_logrepo_name.as_deref())?;
        check_level(&node.children, depth + 1, guard)?;
        guard.leave();
    }
    Ok(())
}

/// Flattens a tree into the editor's working list, parents first.
///
/// Each returned node has its `children` cleared. Feeding the result back to
/// [`build_tree`] with the same root reproduces the tree when the names are
/// unique.
pub fn flatten_tree(tree: &[JoinNode]) -> Vec<JoinNode> {
    let mut flat = Vec::new();
    collect_preorder(tree, &mut flat);
    flat
}

fn collect_preorder(nodes: &[JoinNode], out: &mut Vec<JoinNode>) {
    for node in nodes {
        out.push(node.clone_shallow());
        collect_preorder(&node.children, out);
    }
}
