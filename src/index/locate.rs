//! Page and line lookups over an absolute index.

use crate::index::types::{LineNo, PageIndex, SurahId};
use std::collections::HashMap;

/// Where an ayah lives in the mushaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AyahLocation {
    pub surah: SurahId,
    pub ayah: LineNo,
    /// Zero-based page index
    pub page: usize,
    /// Absolute 1-based corpus line
    pub line: LineNo,
}

/// What a page holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    /// Zero-based page index
    pub page: usize,
    /// Surah of the first range, shown in the page header
    pub surah: SurahId,
    pub first_line: LineNo,
    pub last_line: LineNo,
}

/// Lookup helper over an absolute index
pub struct Locator<'a> {
    index: &'a PageIndex,
    /// surah -> first line
    first_lines: HashMap<SurahId, LineNo>,
}

impl<'a> Locator<'a> {
    pub fn new(index: &'a PageIndex) -> Self {
        let mut first_lines = HashMap::new();
        for (_, range) in index.ranges() {
            first_lines.entry(range.surah).or_insert(range.start);
        }
        Self { index, first_lines }
    }

    /// Absolute line of the first ayah of a surah
    fn first_line_for_surah(&self, surah: SurahId) -> Option<LineNo> {
        self.first_lines.get(&surah).copied()
    }

    /// Page and absolute line of an ayah (1-based within its surah)
    pub fn locate_ayah(&self, surah: SurahId, ayah: LineNo) -> Option<AyahLocation> {
        if ayah < 1 {
            return None;
        }
        let line = self.first_line_for_surah(surah)?.checked_add(ayah - 1)?;

        // Only ranges of the same surah count, a line shared with a
        // neighbouring surah would point at the wrong verse
        let page = self
            .index
            .ranges()
            .find(|(_, range)| range.surah == surah && range.contains(line))
            .map(|(at, _)| at.page)?;

        Some(AyahLocation {
            surah,
            ayah,
            page,
            line,
        })
    }

    /// Surah, ayah and page of an absolute line
    pub fn locate_line(&self, line: LineNo) -> Option<AyahLocation> {
        let (at, range) = self.index.ranges().find(|(_, range)| range.contains(line))?;
        let first_line = self.first_line_for_surah(range.surah)?;
        let ayah = line.checked_sub(first_line)?.checked_add(1)?;

        Some(AyahLocation {
            surah: range.surah,
            ayah,
            page: at.page,
            line,
        })
    }

    /// Header surah and line span of a page
    pub fn describe_page(&self, page: usize) -> Option<PageSummary> {
        let mut ranges = self.index.page_ranges(page);
        let first = ranges.next()?;
        let last = ranges.last().unwrap_or(first);

        Some(PageSummary {
            page,
            surah: first.surah,
            first_line: first.start,
            last_line: last.end,
        })
    }
}
