use crate::index::types::PageIndex;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize an index the way it is stored on disk
///
/// Two-space indentation, keys in `surah, start, end` order, non-ASCII text
/// left unescaped and no trailing newline.
pub fn index_to_string(index: &PageIndex) -> Result<String> {
    serde_json::to_string_pretty(index).context("Failed to serialize index")
}

/// Write an index to a JSON file, replacing any existing file
pub fn write_index(path: &Path, index: &PageIndex) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, index)
        .with_context(|| format!("Failed to write index to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(())
}
