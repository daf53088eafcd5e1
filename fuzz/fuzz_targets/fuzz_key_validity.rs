#![no_main]

use jefferson_core::Key;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let ids: Vec<usize> = data.iter().map(|&b| b as usize).collect();
    let len = ids.len();
    let key = Key::from(ids.clone());

    // The predicate must never panic, whatever the key holds.
    for n in 0..=len + 2 {
        let valid = key.is_valid_for(n);
        if valid {
            // Acceptance means sorted ids are exactly 1..=n.
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (1..=n).collect::<Vec<_>>());
        }
    }
});
