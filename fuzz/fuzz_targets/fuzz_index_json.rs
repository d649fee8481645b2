#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary JSON is rejected, fails conversion with an error, or
    // converts into the same shape
    if let Ok(index) = mushaf_index::index::parse_index(data) {
        if let Ok(conv) = mushaf_index::index::to_absolute(&index, 0) {
            assert_eq!(conv.index.range_count(), index.range_count());
            let _ = mushaf_index::index::verify(&conv.index, Some(0));
        }
    }
});
