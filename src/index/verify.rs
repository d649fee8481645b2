//! Invariant checks for an absolute page index.

use crate::index::types::{LineNo, PageIndex, RangePosition, SurahRange};
use std::fmt;

/// A broken invariant found in an absolute index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The first range does not start at line 1
    FirstStart { at: RangePosition, start: LineNo },
    /// A range does not begin right after the previous one
    Gap {
        at: RangePosition,
        expected: LineNo,
        found: LineNo,
    },
    /// The previous range ends on the last representable line
    NoRoomAfter { at: RangePosition, previous_end: LineNo },
    /// A range ends before it starts
    Inverted { at: RangePosition, range: SurahRange },
    /// The last line of the index is not the last line of the corpus
    LineCountMismatch { last_line: LineNo, corpus_lines: LineNo },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::FirstStart { at, start } => {
                write!(f, "{}: first range starts at line {} instead of 1", at, start)
            }
            Violation::Gap {
                at,
                expected,
                found,
            } => {
                write!(f, "{}: expected start {}, found {}", at, expected, found)
            }
            Violation::NoRoomAfter { at, previous_end } => write!(
                f,
                "{}: previous range ends at line {}, no line can follow it",
                at, previous_end
            ),
            Violation::Inverted { at, range } => write!(
                f,
                "{}: surah {} range ends at {} before it starts at {}",
                at, range.surah, range.end, range.start
            ),
            Violation::LineCountMismatch {
                last_line,
                corpus_lines,
            } => write!(
                f,
                "index ends at line {} but the corpus has {} lines",
                last_line, corpus_lines
            ),
        }
    }
}

/// Check an absolute index for contiguity and coverage
///
/// Pass `None` for `corpus_lines` to skip the coverage check.
pub fn verify(index: &PageIndex, corpus_lines: Option<usize>) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut previous_end: Option<LineNo> = None;

    for (at, range) in index.ranges() {
        match previous_end {
            None if range.start != 1 => violations.push(Violation::FirstStart {
                at,
                start: range.start,
            }),
            Some(end) => match end.checked_add(1) {
                Some(expected) if range.start != expected => violations.push(Violation::Gap {
                    at,
                    expected,
                    found: range.start,
                }),
                Some(_) => {}
                None => violations.push(Violation::NoRoomAfter {
                    at,
                    previous_end: end,
                }),
            },
            None => {}
        }

        if range.end < range.start {
            violations.push(Violation::Inverted { at, range: *range });
        }

        previous_end = Some(range.end);
    }

    if let Some(corpus_lines) = corpus_lines {
        let last_line = previous_end.unwrap_or(0);
        let corpus_lines = LineNo::try_from(corpus_lines).unwrap_or(LineNo::MAX);
        if last_line != corpus_lines {
            violations.push(Violation::LineCountMismatch {
                last_line,
                corpus_lines,
            });
        }
    }

    violations
}
