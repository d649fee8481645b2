//! The verse text corpus: one ayah per line.
//!
//! - [`glyphs`] - Glyph cleanup applied to the raw text

pub mod glyphs;

pub use glyphs::{clean_text, join_small_stops};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Options for preparing the corpus text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    pub clean_glyphs: bool,
    pub join_small_stops: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            clean_glyphs: true,
            join_small_stops: false,
        }
    }
}

/// Apply the enabled cleanup passes to raw text
pub fn prepare_text(raw: &str, options: CleanOptions) -> String {
    let text = if options.clean_glyphs {
        clean_text(raw)
    } else {
        raw.to_string()
    };

    if options.join_small_stops {
        join_small_stops(&text)
    } else {
        text
    }
}

/// Read the raw source text, clean it and write it to `text_path`
pub fn prepare_file(source_path: &Path, text_path: &Path, options: CleanOptions) -> Result<()> {
    let raw = fs::read_to_string(source_path)
        .with_context(|| format!("Failed to read corpus source {}", source_path.display()))?;
    let text = prepare_text(&raw, options);
    fs::write(text_path, text)
        .with_context(|| format!("Failed to write corpus text {}", text_path.display()))?;
    Ok(())
}

/// Corpus lines, trimmed, with blank lines dropped
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { lines }
    }

    /// Load a corpus from a UTF-8 text file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus text {}", path.display()))?;
        Ok(Self::from_text(&text))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// A line by 1-based absolute line number
    pub fn line(&self, line_no: i64) -> Option<&str> {
        let idx = usize::try_from(line_no).ok()?.checked_sub(1)?;
        self.lines.get(idx).map(String::as_str)
    }
}
