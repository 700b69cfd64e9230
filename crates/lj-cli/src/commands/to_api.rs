//! Flattens the editor tree into write-API records.

use std::io::Write;

use anyhow::{Context, Result};
use lj_core::{ApiJoinRecord, JoinNode, parse_to_api, parse_to_api_guarded};

use super::util::{parse_json_list, read_input, write_json};
use crate::{Config, RootArgs};

pub fn run<W: Write>(writer: &mut W, args: &RootArgs, config: &Config, pretty: bool) -> Result<()> {
    let input = read_input(args.input.input.as_deref())?;
    let records = convert(&input, &args.root, config)?;
    write_json(writer, &records, pretty)
}

/// Parses editor tree JSON and flattens it into write records.
pub fn convert(input: &str, root: &str, config: &Config) -> Result<Vec<ApiJoinRecord>> {
    let tree: Vec<JoinNode> = parse_json_list(input, "join tree")?;
    let limits = config.limits();
    if limits.is_unbounded() {
        return Ok(parse_to_api(&tree, root, config.window_encoding));
    }
    parse_to_api_guarded(&tree, root, config.window_encoding, &limits)
        .with_context(|| format!("rejected join tree under {root}"))
}
