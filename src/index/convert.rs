//! Relative to absolute line range conversion.
//!
//! Every range in the input is numbered relative to some local origin. The
//! conversion walks pages, groups and ranges in their stored order and lays
//! each range directly after the previous one, so the output numbers lines
//! across the whole corpus.

use crate::index::types::{LineNo, Page, PageIndex, RangePosition, SurahRange};
use anyhow::{bail, Context, Result};

/// Result of converting an index to absolute line numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The converted index, same nesting as the input
    pub index: PageIndex,
    /// Line reached after the last range
    pub final_line: LineNo,
    /// Line count of the corpus the index is meant to cover
    pub expected_lines: LineNo,
    /// Ranges whose relative length was zero or negative
    pub degenerate: Vec<RangePosition>,
}

impl Conversion {
    /// Whether the accumulated line count matches the corpus
    pub fn is_consistent(&self) -> bool {
        self.final_line == self.expected_lines
    }

    /// Accumulated minus expected; positive when the index overshoots the corpus
    pub fn drift(&self) -> LineNo {
        self.final_line.saturating_sub(self.expected_lines)
    }
}

/// Convert a relative index into absolute, corpus-wide line numbers
///
/// Degenerate ranges (`end < start`) are not rejected. They are converted with
/// the same arithmetic as any other range, which moves the running line back,
/// and their positions are recorded in [`Conversion::degenerate`].
///
/// Fails when a range length or the running line leaves the `i64` range.
pub fn to_absolute(index: &PageIndex, corpus_lines: usize) -> Result<Conversion> {
    let mut current_line: LineNo = 0;
    let mut degenerate = Vec::new();
    let mut pages: Vec<Page> = Vec::with_capacity(index.pages.len());

    for (page_no, page) in index.pages.iter().enumerate() {
        let mut new_page = Vec::with_capacity(page.len());

        for (group_no, group) in page.iter().enumerate() {
            let mut new_group = Vec::with_capacity(group.len());

            for (range_no, range) in group.iter().enumerate() {
                let at = RangePosition {
                    page: page_no,
                    group: group_no,
                    range: range_no,
                };
                if range.is_degenerate() {
                    degenerate.push(at);
                }

                let Some(length) = range.len() else {
                    bail!(
                        "{}: surah {} range {}..{} is too long to number",
                        at, range.surah, range.start, range.end
                    );
                };
                let (Some(start), Some(end)) = (
                    current_line.checked_add(1),
                    current_line.checked_add(length),
                ) else {
                    bail!(
                        "{}: surah {} range overflows the line numbering after line {}",
                        at, range.surah, current_line
                    );
                };

                new_group.push(SurahRange::new(range.surah, start, end));
                current_line = end;
            }

            new_page.push(new_group);
        }

        pages.push(new_page);
    }

    let expected_lines =
        LineNo::try_from(corpus_lines).context("Corpus line count exceeds line numbering")?;

    Ok(Conversion {
        index: PageIndex::new(pages),
        final_line: current_line,
        expected_lines,
        degenerate,
    })
}
