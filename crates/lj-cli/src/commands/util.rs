//! Shared utilities for CLI commands.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Reads the whole input, from `path` or stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Parses a JSON array of `what` items.
pub fn parse_json_list<T: DeserializeOwned>(input: &str, what: &str) -> Result<Vec<T>> {
    serde_json::from_str(input).with_context(|| format!("invalid {what} JSON"))
}

/// Writes `value` as JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_input_reports_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/joins.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/joins.json"));
    }

    #[test]
    fn parse_json_list_names_the_input() {
        let err = parse_json_list::<serde_json::Value>("{", "read-API join").unwrap_err();
        assert_eq!(err.to_string(), "invalid read-API join JSON");
    }

    #[test]
    fn write_json_appends_newline() {
        let mut out = Vec::new();
        write_json(&mut out, &[1, 2], false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[1,2]\n");
    }
}
