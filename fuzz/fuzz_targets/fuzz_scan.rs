#![no_main]

use eightbim::scan;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(scanned) = scan(data) {
        assert_eq!(scanned.consumed, data.len());
        assert_eq!(scanned.records.flatten(), data);
    }
});
