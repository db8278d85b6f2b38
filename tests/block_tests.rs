//! Record framing and scanner tests
//!
//! Golden byte layouts, multi-record blobs and framing failures.

use eightbim::block::record::{encoded_size, name_field_len};
use eightbim::codecs::{ColorSpace, IdSeed, SpotChannel, SpotColors};
use eightbim::{
    scan, Record, RecordList, RecordScanner, ResourceCodec, ResourceError, ResourceKind,
};
use rstest::*;

const SEED_42: [u8; 16] = [
    b'8', b'B', b'I', b'M', 0x04, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x2A,
];

// ============================================================================
// Golden records
// ============================================================================

#[test]
fn test_seed_golden() {
    let scanned = scan(&SEED_42).unwrap();
    assert_eq!(scanned.consumed, SEED_42.len());
    assert_eq!(scanned.records.len(), 1);

    let record = scanned.records.get(0).unwrap();
    assert_eq!(record.id(), 1044);
    assert_eq!(record.kind(), ResourceKind::IdSeedNumber);
    assert!(record.is_borrowed());

    let mut seed = IdSeed::decode(record).unwrap();
    assert_eq!(seed.seed, 42);

    let mut rewritten = record.clone();
    seed.write_into(&mut rewritten).unwrap();
    assert_eq!(rewritten.as_bytes(), &SEED_42);

    seed.seed = 43;
    seed.write_into(&mut rewritten).unwrap();
    assert_eq!(rewritten.as_bytes()[15], 43);
    assert!(!rewritten.is_borrowed());
}

#[rstest]
// odd name length: 1 + 3 is already even
#[case(b"abc".as_slice(), &[1, 2][..], b"8BIM\x04\x14\x03abc\x00\x00\x00\x02\x01\x02".as_slice())]
// even non-zero name length takes one pad byte
#[case(b"ab".as_slice(), &[1, 2][..], b"8BIM\x04\x14\x02ab\x00\x00\x00\x00\x02\x01\x02".as_slice())]
// odd payload takes one trailing pad byte
#[case(b"".as_slice(), &[9][..], b"8BIM\x04\x14\x00\x00\x00\x00\x00\x01\x09\x00".as_slice())]
fn test_padding_golden(#[case] name: &[u8], #[case] payload: &[u8], #[case] expected: &[u8]) {
    let record = Record::with_id(1044, name, payload).unwrap();
    assert_eq!(record.as_bytes(), expected);
    assert_eq!(record.encoded_size(), encoded_size(name.len(), payload.len()));

    let scanned = scan(expected).unwrap();
    let back = scanned.records.get(0).unwrap();
    assert_eq!(back.name_bytes(), name);
    assert_eq!(back.payload(), payload);
}

#[rstest]
#[case(0, 2)]
#[case(1, 2)]
#[case(2, 4)]
#[case(3, 4)]
#[case(255, 256)]
fn test_name_field_len(#[case] name_len: usize, #[case] expected: usize) {
    assert_eq!(name_field_len(name_len), expected);
}

// ============================================================================
// Multi-record blobs
// ============================================================================

#[fixture]
fn spot_and_seed() -> Vec<u8> {
    let mut spot = SpotColors::new();
    spot.push(SpotChannel::new(1, ColorSpace::Cmyk, [10, 20, 30, 40]));

    let mut list = RecordList::new();
    list.push(spot.to_record("").unwrap());
    list.push(IdSeed::new(42).to_record("").unwrap());
    list.flatten()
}

#[rstest]
fn test_two_records(spot_and_seed: Vec<u8>) {
    let scanned = scan(&spot_and_seed).unwrap();
    assert_eq!(scanned.records.len(), 2);
    assert_eq!(scanned.consumed, spot_and_seed.len());

    let kinds: Vec<_> = scanned.records.iter().map(Record::kind).collect();
    assert_eq!(
        kinds,
        [ResourceKind::AlternateSpotColors, ResourceKind::IdSeedNumber]
    );

    let spot = SpotColors::decode(scanned.records.get(0).unwrap()).unwrap();
    assert_eq!(spot.len(), 1);
    assert_eq!(spot.channels[0].components, [10, 20, 30, 40]);
    assert_eq!(scanned.records.flatten(), spot_and_seed);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn test_fresh_records_scan_back_in_order(#[case] k: usize) {
    let list: RecordList = (0..k)
        .map(|i| {
            let name = "n".repeat(i);
            Record::with_id(3000 + i as u16, name.as_bytes(), &vec![i as u8; i * 3]).unwrap()
        })
        .collect();
    let bytes = list.flatten();

    let scanned = scan(&bytes).unwrap();
    assert_eq!(scanned.records.len(), k);
    assert_eq!(scanned.consumed, bytes.len());
    for (i, record) in scanned.records.iter().enumerate() {
        assert_eq!(record.id(), 3000 + i as u16);
        assert_eq!(record.data_len(), i * 3);
    }
    assert_eq!(scanned.records, list);
}

#[test]
fn test_unknown_records_preserved() {
    let list: RecordList = [
        Record::with_id(1999, b"mystery", &[1, 2, 3]).unwrap(),
        Record::with_id(8000, b"", &[4; 10]).unwrap(),
    ]
    .into_iter()
    .collect();
    let bytes = list.flatten();

    let scanned = scan(&bytes).unwrap();
    assert_eq!(scanned.records.get(0).unwrap().kind(), ResourceKind::Unknown);
    assert_eq!(scanned.records.get(1).unwrap().kind(), ResourceKind::Unsupported);
    assert_eq!(scanned.records.flatten(), bytes);
}

#[test]
fn test_empty_buffer() {
    let scanned = scan(&[]).unwrap();
    assert!(scanned.records.is_empty());
    assert_eq!(scanned.consumed, 0);
}

// ============================================================================
// Framing failures
// ============================================================================

#[test]
fn test_bad_magic() {
    let mut bytes = SEED_42.to_vec();
    bytes[0] = b'X';
    assert!(matches!(
        scan(&bytes),
        Err(ResourceError::Framing { offset: 0, .. })
    ));
}

#[rstest]
#[case::trailing_garbage(&[0xAA, 0xBB][..])]
#[case::second_bad_magic(&b"XBIM\x04\x14\x00\x00\x00\x00\x00\x00"[..])]
#[case::truncated_header(&b"8BIM\x04"[..])]
fn test_corrupt_second_record(#[case] tail: &[u8]) {
    let mut bytes = SEED_42.to_vec();
    bytes.extend_from_slice(tail);
    match scan(&bytes) {
        Err(ResourceError::Framing { offset, .. }) => assert_eq!(offset, SEED_42.len()),
        other => panic!("expected framing error, got {other:?}"),
    }
}

#[test]
fn test_payload_overrun() {
    let mut bytes = SEED_42.to_vec();
    bytes[11] = 0x40;
    assert!(matches!(scan(&bytes), Err(ResourceError::Framing { .. })));
}

#[test]
fn test_missing_final_pad() {
    let record = Record::with_id(1999, b"", &[7]).unwrap();
    let bytes = record.as_bytes();
    assert!(matches!(
        scan(&bytes[..bytes.len() - 1]),
        Err(ResourceError::Framing { .. })
    ));
}

#[test]
fn test_scanner_stops_after_error() {
    let mut bytes = SEED_42.to_vec();
    bytes.extend_from_slice(b"XBIM");
    bytes.extend_from_slice(&SEED_42);

    let mut scanner = RecordScanner::new(&bytes);
    assert!(scanner.next().unwrap().is_ok());
    assert!(scanner.next().unwrap().is_err());
    assert!(scanner.next().is_none());
    assert_eq!(scanner.position(), SEED_42.len());
}
