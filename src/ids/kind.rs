use serde::Serialize;
use std::fmt;

/// Semantic category an 8BIM identifier classifies to.
///
/// `Unsupported` covers identifiers that are documented but deliberately not
/// interpreted; `Unknown` is returned for identifiers missing from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ResourceKind {
    Unsupported,
    Unknown,
    ResolutionInfo,
    AlphaNames,
    PageSetupBools,
    HalftoneInformation,
    ColorTransferFunctions,
    DisplayInfo,
    LayerStateInformation,
    LayersGroupInformation,
    GridAndGuideInformation,
    CopyrightFlag,
    ThumbnailResource,
    GlobalAngle,
    IccUntaggedProfile,
    SpotHalftone,
    IdSeedNumber,
    UnicodeAlphaNames,
    GlobalAltitude,
    Slices,
    AlphaIdentifiers,
    UrlList,
    VersionInfo,
    PrintScale,
    PixelAspectRatio,
    AlternateSpotColors,
    LayerSelectionIds,
    LayerGroupsEnabled,
    PluginResources,
    PrintFlags,
    Iptc,
    CaptionDigest,
    PathInformation,
    PrintInformation,
    PrintStyle,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 35] = [
        Self::Unsupported,
        Self::Unknown,
        Self::ResolutionInfo,
        Self::AlphaNames,
        Self::PageSetupBools,
        Self::HalftoneInformation,
        Self::ColorTransferFunctions,
        Self::DisplayInfo,
        Self::LayerStateInformation,
        Self::LayersGroupInformation,
        Self::GridAndGuideInformation,
        Self::CopyrightFlag,
        Self::ThumbnailResource,
        Self::GlobalAngle,
        Self::IccUntaggedProfile,
        Self::SpotHalftone,
        Self::IdSeedNumber,
        Self::UnicodeAlphaNames,
        Self::GlobalAltitude,
        Self::Slices,
        Self::AlphaIdentifiers,
        Self::UrlList,
        Self::VersionInfo,
        Self::PrintScale,
        Self::PixelAspectRatio,
        Self::AlternateSpotColors,
        Self::LayerSelectionIds,
        Self::LayerGroupsEnabled,
        Self::PluginResources,
        Self::PrintFlags,
        Self::Iptc,
        Self::CaptionDigest,
        Self::PathInformation,
        Self::PrintInformation,
        Self::PrintStyle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unsupported => "Unsupported",
            Self::Unknown => "Unknown",
            Self::ResolutionInfo => "ResolutionInfo",
            Self::AlphaNames => "AlphaNames",
            Self::PageSetupBools => "PageSetupBools",
            Self::HalftoneInformation => "HalftoneInformation",
            Self::ColorTransferFunctions => "ColorTransferFunctions",
            Self::DisplayInfo => "DisplayInfo",
            Self::LayerStateInformation => "LayerStateInformation",
            Self::LayersGroupInformation => "LayersGroupInformation",
            Self::GridAndGuideInformation => "GridAndGuideInformation",
            Self::CopyrightFlag => "CopyrightFlag",
            Self::ThumbnailResource => "ThumbnailResource",
            Self::GlobalAngle => "GlobalAngle",
            Self::IccUntaggedProfile => "IccUntaggedProfile",
            Self::SpotHalftone => "SpotHalftone",
            Self::IdSeedNumber => "IdSeedNumber",
            Self::UnicodeAlphaNames => "UnicodeAlphaNames",
            Self::GlobalAltitude => "GlobalAltitude",
            Self::Slices => "Slices",
            Self::AlphaIdentifiers => "AlphaIdentifiers",
            Self::UrlList => "UrlList",
            Self::VersionInfo => "VersionInfo",
            Self::PrintScale => "PrintScale",
            Self::PixelAspectRatio => "PixelAspectRatio",
            Self::AlternateSpotColors => "AlternateSpotColors",
            Self::LayerSelectionIds => "LayerSelectionIds",
            Self::LayerGroupsEnabled => "LayerGroupsEnabled",
            Self::PluginResources => "PluginResources",
            Self::PrintFlags => "PrintFlags",
            Self::Iptc => "Iptc",
            Self::CaptionDigest => "CaptionDigest",
            Self::PathInformation => "PathInformation",
            Self::PrintInformation => "PrintInformation",
            Self::PrintStyle => "PrintStyle",
        }
    }

    /// True for kinds that have a typed payload codec in this crate.
    pub fn is_interpreted(&self) -> bool {
        matches!(
            self,
            Self::AlternateSpotColors
                | Self::AlphaNames
                | Self::UnicodeAlphaNames
                | Self::AlphaIdentifiers
                | Self::IdSeedNumber
                | Self::VersionInfo
                | Self::DisplayInfo
        )
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
