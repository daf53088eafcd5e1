#![no_main]

use jefferson_core::Cylinder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing arbitrary text must never panic, and anything it accepts
    // must round-trip through the text form.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(cylinder) = Cylinder::from_text(text) {
            assert!(cylinder.len() >= 1);

            let reserialized = cylinder.to_text();
            let reparsed = Cylinder::from_text(&reserialized).unwrap();
            assert_eq!(reparsed, cylinder);

            // Every disk line is a 26-letter permutation.
            for id in 1..=cylinder.len() {
                let disk = cylinder.disk(id).unwrap();
                let mut sorted = *disk.as_bytes();
                sorted.sort_unstable();
                assert_eq!(&sorted, jefferson_core::ALPHABET);
            }
        }
    }
});
