#![no_main]

use eightbim::{Record, Resource};
use libfuzzer_sys::fuzz_target;

// First two bytes pick the identifier, the rest is the payload.
fuzz_target!(|data: &[u8]| {
    let Some((id, payload)) = data.split_first_chunk::<2>() else {
        return;
    };
    let Ok(mut record) = Record::with_id(u16::from_be_bytes(*id), b"", payload) else {
        return;
    };

    if let Ok(resource) = Resource::decode(&record) {
        if let Ok(Some(bytes)) = resource.encode_payload() {
            let again = Record::with_id(record.id(), b"", &bytes).unwrap();
            assert_eq!(Resource::decode(&again).unwrap(), resource);
        }
        resource.write_into(&mut record).unwrap();
    }
});
