//! Nests a flat editor working list under a root logrepo.

use std::io::Write;

use anyhow::{Context, Result};
use lj_core::{JoinNode, build_tree, build_tree_guarded};

use super::util::{parse_json_list, read_input, write_json};
use crate::{Config, RootArgs};

pub fn run<W: Write>(writer: &mut W, args: &RootArgs, config: &Config, pretty: bool) -> Result<()> {
    let input = read_input(args.input.input.as_deref())?;
    let tree = convert(&input, &args.root, config)?;
    write_json(writer, &tree, pretty)
}

/// Parses a flat working list and nests it under `root`.
///
/// With no limits configured, a list whose names form a cycle never returns.
pub fn convert(input: &str, root: &str, config: &Config) -> Result<Vec<JoinNode>> {
    let nodes: Vec<JoinNode> = parse_json_list(input, "join list")?;
    let limits = config.limits();
    if limits.is_unbounded() {
        return Ok(build_tree(&nodes, root));
    }
    build_tree_guarded(&nodes, root, &limits)
        .with_context(|| format!("cannot build join tree under {root}"))
}
