//! Shared utilities for CLI commands.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use sed_core::Entry;

/// Reads entries from a JSON array file, or from stdin when `path` is `-`.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read entries from stdin")?;
        return parse_entries(&content).context("invalid entries on stdin");
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_entries(&content).with_context(|| format!("invalid entries in {}", path.display()))
}

/// Parses a JSON array of entries. Blank input is an empty list.
pub fn parse_entries(content: &str) -> Result<Vec<Entry>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let entries: Vec<Entry> = serde_json::from_str(content)?;
    tracing::debug!(count = entries.len(), "loaded entries");
    Ok(entries)
}
