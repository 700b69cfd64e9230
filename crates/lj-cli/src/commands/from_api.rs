//! Converts nested read-API joins into the editor tree.

use std::io::Write;

use anyhow::{Context, Result};
use lj_core::{ApiJoin, JoinNode, parse_from_api, parse_from_api_guarded};

use super::util::{parse_json_list, read_input, write_json};
use crate::{Config, RootArgs};

pub fn run<W: Write>(writer: &mut W, args: &RootArgs, config: &Config, pretty: bool) -> Result<()> {
    let input = read_input(args.input.input.as_deref())?;
    let tree = convert(&input, &args.root, config)?;
    write_json(writer, &tree, pretty)
}

/// Parses read-API JSON and builds the tree under `root`.
pub fn convert(input: &str, root: &str, config: &Config) -> Result<Vec<JoinNode>> {
    let joins: Vec<ApiJoin> = parse_json_list(input, "read-API join")?;
    let limits = config.limits();
    if limits.is_unbounded() {
        return Ok(parse_from_api(&joins, root));
    }
    parse_from_api_guarded(&joins, root, &limits)
        .with_context(|| format!("rejected joins under {root}"))
}
