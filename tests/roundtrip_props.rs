//! Round-trip properties for framing and every typed payload.

use eightbim::codecs::{
    AlphaIdentifiers, AlphaNames, DisplayEntry, DisplayInfo, IdSeed, SpotChannel, SpotColors,
    UnicodeAlphaNames, VersionInfo,
};
use eightbim::{scan, Record, RecordList, Resource, ResourceCodec};
use proptest::prelude::*;

fn spot_channel() -> impl Strategy<Value = SpotChannel> {
    (any::<u32>(), any::<u16>(), any::<[u16; 4]>()).prop_map(|(channel_id, color_space, components)| {
        SpotChannel {
            channel_id,
            color_space,
            components,
        }
    })
}

fn spot_colors() -> impl Strategy<Value = SpotColors> {
    (any::<u16>(), prop::collection::vec(spot_channel(), 0..8))
        .prop_map(|(version, channels)| SpotColors { version, channels })
}

fn alpha_names() -> impl Strategy<Value = AlphaNames> {
    (
        prop::collection::vec(prop::collection::vec(any::<u8>(), 1..=255), 0..6),
        any::<bool>(),
    )
        .prop_map(|(names, terminated)| {
            let mut out = AlphaNames::new();
            for name in &names {
                out.push_bytes(name).unwrap();
            }
            out.set_terminated(terminated);
            out
        })
}

fn unicode_alpha_names() -> impl Strategy<Value = UnicodeAlphaNames> {
    prop::collection::vec(("[^\\x00]{0,16}", any::<bool>()), 0..6).prop_map(|entries| {
        let mut out = UnicodeAlphaNames::new();
        for (name, nul_terminated) in &entries {
            out.push_entry(name, *nul_terminated).unwrap();
        }
        out
    })
}

fn version_info() -> impl Strategy<Value = VersionInfo> {
    (
        any::<u32>(),
        any::<u8>(),
        ".{0,24}",
        ".{0,24}",
        prop::collection::vec(any::<u8>(), 0..10),
    )
        .prop_map(
            |(version, merged_data, reader_name, writer_name, trailer)| VersionInfo {
                version,
                merged_data,
                reader_name,
                writer_name,
                trailer,
            },
        )
}

fn display_info() -> impl Strategy<Value = DisplayInfo> {
    prop::collection::vec(
        (any::<u16>(), any::<[u16; 4]>(), 0u16..=100, 0u8..=2, any::<u8>()),
        0..8,
    )
    .prop_map(|entries| DisplayInfo {
        entries: entries
            .into_iter()
            .map(|(color_space, color, opacity, kind, padding)| DisplayEntry {
                color_space,
                color,
                opacity,
                kind,
                padding,
            })
            .collect(),
    })
}

fn resource() -> impl Strategy<Value = Resource> {
    prop_oneof![
        spot_colors().prop_map(Resource::SpotColors),
        alpha_names().prop_map(Resource::AlphaNames),
        unicode_alpha_names().prop_map(Resource::UnicodeAlphaNames),
        prop::collection::vec(any::<u32>(), 0..16)
            .prop_map(|ids| Resource::AlphaIdentifiers(AlphaIdentifiers { ids })),
        any::<u32>().prop_map(|seed| Resource::IdSeed(IdSeed::new(seed))),
        version_info().prop_map(Resource::VersionInfo),
        display_info().prop_map(Resource::DisplayInfo),
    ]
}

fn value_roundtrip<T: ResourceCodec + PartialEq + std::fmt::Debug>(value: &T) {
    let record = value.to_record("").unwrap();
    let bytes = record.as_bytes().to_vec();
    let scanned = scan(&bytes).unwrap();
    let back = T::decode(scanned.records.get(0).unwrap()).unwrap();
    assert_eq!(&back, value);
}

fn bytes_roundtrip<T: ResourceCodec>(payload: &[u8]) {
    let value = T::decode_payload(payload).unwrap();
    assert_eq!(value.encode_payload().unwrap(), payload);
}

proptest! {
    #[test]
    fn prop_record_framing(
        id in any::<u16>(),
        name in prop::collection::vec(any::<u8>(), 0..=255),
        payload in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let record = Record::with_id(id, &name, &payload).unwrap();
        let scanned = scan(record.as_bytes()).unwrap();
        prop_assert_eq!(scanned.consumed, record.encoded_size());
        let back = scanned.records.get(0).unwrap();
        prop_assert_eq!(back.id(), id);
        prop_assert_eq!(back.name_bytes(), &name[..]);
        prop_assert_eq!(back.payload(), &payload[..]);
    }

    #[test]
    fn prop_spot_colors_value(value in spot_colors()) {
        value_roundtrip(&value);
    }

    #[test]
    fn prop_alpha_names_value(value in alpha_names()) {
        value_roundtrip(&value);
    }

    #[test]
    fn prop_unicode_alpha_names_value(value in unicode_alpha_names()) {
        value_roundtrip(&value);
    }

    #[test]
    fn prop_alpha_identifiers_value(ids in prop::collection::vec(any::<u32>(), 0..16)) {
        value_roundtrip(&AlphaIdentifiers { ids });
    }

    #[test]
    fn prop_id_seed_value(seed in any::<u32>()) {
        value_roundtrip(&IdSeed::new(seed));
    }

    #[test]
    fn prop_version_info_value(value in version_info()) {
        value_roundtrip(&value);
    }

    #[test]
    fn prop_display_info_value(value in display_info()) {
        value_roundtrip(&value);
    }

    #[test]
    fn prop_spot_colors_bytes(
        version in any::<u16>(),
        body in prop::collection::vec(any::<[u8; 14]>(), 0..8),
    ) {
        let mut payload = version.to_be_bytes().to_vec();
        payload.extend_from_slice(&(body.len() as u16).to_be_bytes());
        payload.extend(body.iter().flatten());
        bytes_roundtrip::<SpotColors>(&payload);
    }

    #[test]
    fn prop_alpha_names_bytes(value in alpha_names()) {
        let payload = value.encode_payload().unwrap();
        bytes_roundtrip::<AlphaNames>(&payload);
    }

    #[test]
    fn prop_unicode_alpha_names_bytes(value in unicode_alpha_names()) {
        let payload = value.encode_payload().unwrap();
        bytes_roundtrip::<UnicodeAlphaNames>(&payload);
    }

    #[test]
    fn prop_alpha_identifiers_bytes(words in prop::collection::vec(any::<[u8; 4]>(), 0..16)) {
        let payload: Vec<u8> = words.concat();
        bytes_roundtrip::<AlphaIdentifiers>(&payload);
    }

    #[test]
    fn prop_id_seed_bytes(payload in any::<[u8; 4]>()) {
        bytes_roundtrip::<IdSeed>(&payload);
    }

    #[test]
    fn prop_version_info_bytes(value in version_info()) {
        let payload = value.encode_payload().unwrap();
        bytes_roundtrip::<VersionInfo>(&payload);
    }

    #[test]
    fn prop_display_info_bytes(entries in prop::collection::vec(any::<[u8; 14]>(), 0..8)) {
        let payload: Vec<u8> = entries.concat();
        bytes_roundtrip::<DisplayInfo>(&payload);
    }

    #[test]
    fn prop_resource_list_rewrite(resources in prop::collection::vec(resource(), 0..6)) {
        let list: RecordList = resources
            .iter()
            .map(|resource| {
                let mut record = Record::new("", resource.kind()).unwrap();
                resource.write_into(&mut record).unwrap();
                record
            })
            .collect();
        let bytes = list.flatten();

        let scanned = scan(&bytes).unwrap();
        prop_assert_eq!(scanned.records.len(), resources.len());
        let decoded = scanned.records.decode_all(&Default::default()).unwrap();
        prop_assert_eq!(decoded, resources);
    }
}
