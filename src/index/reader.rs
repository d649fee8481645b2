use crate::index::types::PageIndex;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a page index from a JSON file
pub fn load_index(path: &Path) -> Result<PageIndex> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open index file {}", path.display()))?;
    let reader = BufReader::new(file);
    let index: PageIndex = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse index file {}", path.display()))?;
    Ok(index)
}

/// Parse a page index from a JSON string
pub fn parse_index(json: &str) -> Result<PageIndex> {
    serde_json::from_str(json).context("Failed to parse index")
}
