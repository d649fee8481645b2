#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Cleanup never adds or removes lines
    let cleaned = mushaf_index::corpus::clean_text(data);
    assert_eq!(cleaned.matches('\n').count(), data.matches('\n').count());
    let _ = mushaf_index::corpus::join_small_stops(&cleaned);
});
