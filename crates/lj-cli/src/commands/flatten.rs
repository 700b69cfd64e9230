//! Flattens the editor tree into a working list.

use std::io::Write;

use anyhow::Result;
use lj_core::{JoinNode, flatten_tree};

use super::util::{parse_json_list, read_input, write_json};
use crate::InputArgs;

pub fn run<W: Write>(writer: &mut W, args: &InputArgs, pretty: bool) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let tree: Vec<JoinNode> = parse_json_list(&input, "join tree")?;
    write_json(writer, &flatten_tree(&tree), pretty)
}
