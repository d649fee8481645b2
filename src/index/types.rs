use serde::{Deserialize, Serialize};

/// Surah identifier (1..=114 in a complete mushaf, not validated)
pub type SurahId = i64;

/// A line number, relative or absolute depending on the index it lives in
pub type LineNo = i64;

/// A run of lines belonging to one surah
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurahRange {
    pub surah: SurahId,
    pub start: LineNo,
    pub end: LineNo,
}

impl SurahRange {
    pub fn new(surah: SurahId, start: LineNo, end: LineNo) -> Self {
        Self { surah, start, end }
    }

    /// Number of lines covered, `end - start + 1`
    ///
    /// Zero or negative for degenerate ranges, `None` when the difference
    /// does not fit a line number.
    pub fn len(&self) -> Option<LineNo> {
        self.end.checked_sub(self.start)?.checked_add(1)
    }

    /// Exact line count, never overflows
    pub fn span(&self) -> i128 {
        self.end as i128 - self.start as i128 + 1
    }

    pub fn is_degenerate(&self) -> bool {
        self.end < self.start
    }

    /// Whether an absolute line falls inside this range
    pub fn contains(&self, line: LineNo) -> bool {
        self.start <= line && line <= self.end
    }
}

/// Ranges sharing a running offset
pub type RangeGroup = Vec<SurahRange>;

/// One mushaf page
pub type Page = Vec<RangeGroup>;

/// Location of a range in traversal order (all zero-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RangePosition {
    pub page: usize,
    pub group: usize,
    pub range: usize,
}

impl std::fmt::Display for RangePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Pages are shown 1-based, like the printed mushaf
        write!(
            f,
            "page {} group {} range {}",
            self.page + 1,
            self.group,
            self.range
        )
    }
}

/// The full Page -> RangeGroup -> SurahRange structure
///
/// Serialized as a bare JSON array of arrays of arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageIndex {
    pub pages: Vec<Page>,
}

impl PageIndex {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn group_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    pub fn range_count(&self) -> usize {
        self.pages.iter().flatten().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.range_count() == 0
    }

    /// Iterate every range in traversal order with its position
    pub fn ranges(&self) -> impl Iterator<Item = (RangePosition, &SurahRange)> {
        self.pages.iter().enumerate().flat_map(|(page, groups)| {
            groups.iter().enumerate().flat_map(move |(group, ranges)| {
                ranges.iter().enumerate().map(move |(range, r)| {
                    (RangePosition { page, group, range }, r)
                })
            })
        })
    }

    /// Ranges of one page, flattened across its groups
    pub fn page_ranges(&self, page: usize) -> impl Iterator<Item = &SurahRange> {
        self.pages.get(page).into_iter().flatten().flatten()
    }

    /// Sum of relative lengths over all ranges, `None` on overflow
    pub fn total_length(&self) -> Option<LineNo> {
        self.ranges()
            .try_fold(0 as LineNo, |total, (_, r)| total.checked_add(r.len()?))
    }
}
