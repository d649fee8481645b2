use crate::index::reader::load_index;
use crate::index::types::{LineNo, PageIndex};
use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;

/// Shape summary of a page index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub pages: usize,
    pub groups: usize,
    pub ranges: usize,
    pub surahs: usize,
    pub first_line: Option<LineNo>,
    pub last_line: Option<LineNo>,
    /// Zero-based page with the most lines, and its line count
    pub densest_page: Option<(usize, i128)>,
    pub empty_pages: usize,
}

impl IndexStats {
    pub fn collect(index: &PageIndex) -> Self {
        let surahs: HashSet<_> = index.ranges().map(|(_, r)| r.surah).collect();
        let first_line = index.ranges().next().map(|(_, r)| r.start);
        let last_line = index.ranges().last().map(|(_, r)| r.end);

        let mut densest_page: Option<(usize, i128)> = None;
        let mut empty_pages = 0;
        for page in 0..index.page_count() {
            let lines: i128 = index.page_ranges(page).map(|r| r.span()).sum();
            if index.page_ranges(page).next().is_none() {
                empty_pages += 1;
                continue;
            }
            if densest_page.map(|(_, best)| lines > best).unwrap_or(true) {
                densest_page = Some((page, lines));
            }
        }

        Self {
            pages: index.page_count(),
            groups: index.group_count(),
            ranges: index.range_count(),
            surahs: surahs.len(),
            first_line,
            last_line,
            densest_page,
            empty_pages,
        }
    }
}

/// Display index statistics
pub fn show_stats(index_path: &Path) -> Result<()> {
    let index = load_index(index_path)?;
    let stats = IndexStats::collect(&index);

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Index file:       {}", index_path.display());
    println!("Pages:            {}", stats.pages);
    println!("Range groups:     {}", stats.groups);
    println!("Ranges:           {}", stats.ranges);
    println!("Surahs:           {}", stats.surahs);

    if stats.empty_pages > 0 {
        println!("Empty pages:      {}", stats.empty_pages);
    }

    println!();
    println!("First line:       {}", format_line(stats.first_line));
    println!("Last line:        {}", format_line(stats.last_line));

    if let Some((page, lines)) = stats.densest_page {
        println!("Densest page:     {} ({} lines)", page + 1, lines);
    }

    Ok(())
}

fn format_line(line: Option<LineNo>) -> String {
    line.map(|l| l.to_string()).unwrap_or_else(|| "-".to_string())
}
