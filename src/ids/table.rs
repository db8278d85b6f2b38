//! Identifier catalogue
//!
//! Maps 8BIM resource identifiers (single values and ranges) to their
//! [`ResourceKind`]. The process-wide table is built once behind a
//! [`LazyLock`] from [`CATALOG`]; building validates every range, so a broken
//! literal fails the first lookup instead of misclassifying documents.

use super::{IdRange, ResourceKind};
use crate::error::{ResourceError, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

use ResourceKind::*;

/// `(kind, from, to)` triples, inclusive. The first entry listed for a kind
/// is its canonical range.
pub const CATALOG: &[(ResourceKind, u16, u16)] = &[
    // Photoshop 2.0: channels, rows, columns, depth, mode
    (Unsupported, 1000, 1000),
    // Macintosh print manager record
    (Unsupported, 1001, 1001),
    // Photoshop 2.0 indexed color table
    (Unsupported, 1003, 1003),
    (ResolutionInfo, 1005, 1005),
    // Pascal strings
    (AlphaNames, 1006, 1006),
    // obsolete DisplayInfo, superseded by 1077
    (Unsupported, 1007, 1007),
    // caption
    (Unsupported, 1008, 1008),
    // border information
    (Unsupported, 1009, 1009),
    // background color
    (Unsupported, 1010, 1010),
    (PageSetupBools, 1011, 1011),
    // grayscale and multichannel halftoning
    (Unsupported, 1012, 1012),
    (HalftoneInformation, 1013, 1013),
    // duotone halftoning
    (Unsupported, 1014, 1014),
    // grayscale and multichannel transfer function
    (Unsupported, 1015, 1015),
    (ColorTransferFunctions, 1016, 1016),
    // duotone transfer functions, duotone image info, dot range
    (Unsupported, 1017, 1017),
    (Unsupported, 1018, 1018),
    (Unsupported, 1019, 1019),
    (Unsupported, 1020, 1020),
    // EPS options
    (Unsupported, 1021, 1021),
    // quick mask
    (Unsupported, 1022, 1022),
    (Unsupported, 1023, 1023),
    (LayerStateInformation, 1024, 1024),
    // working path, not saved
    (Unsupported, 1025, 1025),
    (LayersGroupInformation, 1026, 1026),
    (Unsupported, 1027, 1027),
    (Iptc, 1028, 1028),
    // raw image mode, JPEG quality
    (Unsupported, 1029, 1029),
    (Unsupported, 1030, 1030),
    (GridAndGuideInformation, 1032, 1032),
    // Photoshop 4.0 thumbnail
    (Unsupported, 1033, 1033),
    (CopyrightFlag, 1034, 1034),
    // URL
    (Unsupported, 1035, 1035),
    (ThumbnailResource, 1036, 1036),
    (GlobalAngle, 1037, 1037),
    // old color samplers
    (Unsupported, 1038, 1038),
    // ICC profile
    (Unsupported, 1039, 1039),
    // watermark
    (Unsupported, 1040, 1040),
    (IccUntaggedProfile, 1041, 1041),
    // effects visible
    (Unsupported, 1042, 1042),
    (SpotHalftone, 1043, 1043),
    (IdSeedNumber, 1044, 1044),
    (UnicodeAlphaNames, 1045, 1045),
    // indexed color table count, transparency index
    (Unsupported, 1046, 1046),
    (Unsupported, 1047, 1047),
    (GlobalAltitude, 1049, 1049),
    (Slices, 1050, 1050),
    // workflow URL, jump to XPEP
    (Unsupported, 1051, 1051),
    (Unsupported, 1052, 1052),
    (AlphaIdentifiers, 1053, 1053),
    (UrlList, 1054, 1054),
    (VersionInfo, 1057, 1057),
    // EXIF 1, EXIF 3, XMP
    (Unsupported, 1058, 1058),
    (Unsupported, 1059, 1059),
    (Unsupported, 1060, 1060),
    (CaptionDigest, 1061, 1061),
    (PrintScale, 1062, 1062),
    (PixelAspectRatio, 1064, 1064),
    // layer comps, alternate duotone colors
    (Unsupported, 1065, 1065),
    (Unsupported, 1066, 1066),
    (AlternateSpotColors, 1067, 1067),
    (LayerSelectionIds, 1069, 1069),
    // HDR toning, print info
    (Unsupported, 1070, 1070),
    (Unsupported, 1071, 1071),
    (LayerGroupsEnabled, 1072, 1072),
    // color samplers, measurement scale, timeline, sheet disclosure
    (Unsupported, 1073, 1073),
    (Unsupported, 1074, 1074),
    (Unsupported, 1075, 1075),
    (Unsupported, 1076, 1076),
    (DisplayInfo, 1077, 1077),
    // onion skins, count information
    (Unsupported, 1078, 1078),
    (Unsupported, 1080, 1080),
    (PrintInformation, 1082, 1082),
    (PrintStyle, 1083, 1083),
    // NSPrintInfo, DEVMODE, auto save path and format, path selection state
    (Unsupported, 1084, 1084),
    (Unsupported, 1085, 1085),
    (Unsupported, 1086, 1086),
    (Unsupported, 1087, 1087),
    (Unsupported, 1088, 1088),
    (PathInformation, 2000, 2997),
    // clipping path name, origin path info
    (Unsupported, 2999, 2999),
    (Unsupported, 3000, 3000),
    (PluginResources, 4000, 4999),
    // Image Ready variables and data sets
    (Unsupported, 7000, 7000),
    (Unsupported, 7001, 7001),
    // Lightroom workflow
    (Unsupported, 8000, 8000),
    (PrintFlags, 10000, 10000),
];

static TABLE: LazyLock<RangeTable> = LazyLock::new(|| {
    RangeTable::new(CATALOG)
        .unwrap_or_else(|e| panic!("built-in identifier catalogue is invalid: {e}"))
});

/// Shared catalogue built from [`CATALOG`].
pub fn table() -> &'static RangeTable {
    &TABLE
}

/// Classifies `id` against the built-in catalogue.
pub fn classify(id: u16) -> ResourceKind {
    TABLE.classify(id)
}

/// Canonical identifier range for `kind` in the built-in catalogue.
pub fn canonical_range(kind: ResourceKind) -> Option<IdRange> {
    TABLE.canonical_range(kind)
}

/// Sorted, non-overlapping identifier ranges with a reverse index.
#[derive(Debug, Clone)]
pub struct RangeTable {
    entries: Vec<(IdRange, ResourceKind)>,
    canonical: HashMap<ResourceKind, IdRange>,
}

impl RangeTable {
    pub fn new(triples: &[(ResourceKind, u16, u16)]) -> Result<Self> {
        let mut entries = Vec::with_capacity(triples.len());
        let mut canonical = HashMap::new();

        for &(kind, from, to) in triples {
            let range = IdRange::new(from, to)?;
            if kind == Unknown {
                return Err(ResourceError::RangeConfig(format!(
                    "range {range} cannot map to {kind}"
                )));
            }
            canonical.entry(kind).or_insert(range);
            entries.push((range, kind));
        }

        entries.sort_by_key(|(range, _)| range.from());

        for pair in entries.windows(2) {
            let (a, ka) = pair[0];
            let (b, kb) = pair[1];
            if !a.precedes(&b) {
                return Err(ResourceError::RangeConfig(format!(
                    "range {a} ({ka}) overlaps {b} ({kb})"
                )));
            }
        }

        Ok(Self { entries, canonical })
    }

    pub fn classify(&self, id: u16) -> ResourceKind {
        match self.entries.binary_search_by(|(range, _)| range.locate(id)) {
            Ok(idx) => self.entries[idx].1,
            Err(_) => Unknown,
        }
    }

    pub fn canonical_range(&self, kind: ResourceKind) -> Option<IdRange> {
        self.canonical.get(&kind).copied()
    }

    /// Ranges in ascending identifier order.
    pub fn entries(&self) -> impl Iterator<Item = (IdRange, ResourceKind)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
