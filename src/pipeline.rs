//! The batch conversion: clean, count, convert, write.

use crate::corpus::{self, CleanOptions, Corpus};
use crate::index::{load_index, to_absolute, write_index, Conversion};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Input and output locations for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertJob {
    pub pages_path: PathBuf,
    pub output_path: PathBuf,
    pub source_path: PathBuf,
    pub text_path: PathBuf,
    /// `None` skips the cleanup step and reads `text_path` as is
    pub clean: Option<CleanOptions>,
}

/// What a conversion run produced
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    pub corpus_lines: usize,
    pub output_path: PathBuf,
    pub conversion: Conversion,
}

impl ConvertOutcome {
    pub fn is_consistent(&self) -> bool {
        self.conversion.is_consistent()
    }
}

/// Run the whole batch transform
///
/// Missing or malformed inputs are errors. A line count mismatch is not, it is
/// carried in the returned [`Conversion`].
pub fn run(job: &ConvertJob) -> Result<ConvertOutcome> {
    if let Some(options) = job.clean {
        corpus::prepare_file(&job.source_path, &job.text_path, options)?;
    }

    let corpus = Corpus::load(&job.text_path)?;
    let index = load_index(&job.pages_path)?;

    let conversion = to_absolute(&index, corpus.line_count())
        .with_context(|| format!("Failed to convert index {}", job.pages_path.display()))?;
    write_index(&job.output_path, &conversion.index)?;

    Ok(ConvertOutcome {
        corpus_lines: corpus.line_count(),
        output_path: job.output_path.clone(),
        conversion,
    })
}

/// Run only the glyph cleanup step
pub fn clean(source_path: &Path, text_path: &Path, options: CleanOptions) -> Result<usize> {
    corpus::prepare_file(source_path, text_path, options)?;
    Ok(Corpus::load(text_path)?.line_count())
}
