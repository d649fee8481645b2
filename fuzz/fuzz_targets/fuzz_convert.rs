#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mushaf_index::index::{to_absolute, verify, PageIndex, SurahRange};

#[derive(Debug, Arbitrary)]
struct Layout {
    pages: Vec<Vec<Vec<(i16, u8)>>>,
}

fuzz_target!(|layout: Layout| {
    // Non-degenerate ranges always convert into a contiguous index
    let index = PageIndex::new(
        layout
            .pages
            .iter()
            .map(|page| {
                page.iter()
                    .map(|group| {
                        group
                            .iter()
                            .map(|&(surah, len)| {
                                SurahRange::new(surah as i64, 1, len as i64 + 1)
                            })
                            .collect()
                    })
                    .collect()
            })
            .collect(),
    );

    let Some(total) = index.total_length() else {
        return;
    };
    let total = total as usize;
    let conv = to_absolute(&index, total).expect("small ranges always convert");
    assert!(conv.is_consistent());
    assert!(verify(&conv.index, Some(total)).is_empty());
});
