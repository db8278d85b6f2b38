use super::{
    AlphaIdentifiers, AlphaNames, DisplayInfo, IdSeed, ResourceCodec, SpotColors,
    UnicodeAlphaNames, VersionInfo,
};
use crate::block::Record;
use crate::error::Result;
use crate::ids::ResourceKind;
use serde::Serialize;
use std::fmt;

/// A record whose payload is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Opaque {
    pub id: u16,
    pub kind: ResourceKind,
    pub data_len: usize,
}

/// Decoded form of any record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Resource {
    SpotColors(SpotColors),
    AlphaNames(AlphaNames),
    UnicodeAlphaNames(UnicodeAlphaNames),
    AlphaIdentifiers(AlphaIdentifiers),
    IdSeed(IdSeed),
    VersionInfo(VersionInfo),
    DisplayInfo(DisplayInfo),
    Opaque(Opaque),
}

impl Resource {
    /// Decodes `record` with the codec for its kind. Kinds without a codec
    /// come back as [`Resource::Opaque`].
    pub fn decode(record: &Record<'_>) -> Result<Self> {
        Ok(match record.kind() {
            ResourceKind::AlternateSpotColors => Self::SpotColors(SpotColors::decode(record)?),
            ResourceKind::AlphaNames => Self::AlphaNames(AlphaNames::decode(record)?),
            ResourceKind::UnicodeAlphaNames => {
                Self::UnicodeAlphaNames(UnicodeAlphaNames::decode(record)?)
            }
            ResourceKind::AlphaIdentifiers => {
                Self::AlphaIdentifiers(AlphaIdentifiers::decode(record)?)
            }
            ResourceKind::IdSeedNumber => Self::IdSeed(IdSeed::decode(record)?),
            ResourceKind::VersionInfo => Self::VersionInfo(VersionInfo::decode(record)?),
            ResourceKind::DisplayInfo => Self::DisplayInfo(DisplayInfo::decode(record)?),
            _ => Self::opaque(record),
        })
    }

    pub fn opaque(record: &Record<'_>) -> Self {
        Self::Opaque(Opaque {
            id: record.id(),
            kind: record.kind(),
            data_len: record.data_len(),
        })
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::SpotColors(_) => SpotColors::KIND,
            Self::AlphaNames(_) => AlphaNames::KIND,
            Self::UnicodeAlphaNames(_) => UnicodeAlphaNames::KIND,
            Self::AlphaIdentifiers(_) => AlphaIdentifiers::KIND,
            Self::IdSeed(_) => IdSeed::KIND,
            Self::VersionInfo(_) => VersionInfo::KIND,
            Self::DisplayInfo(_) => DisplayInfo::KIND,
            Self::Opaque(o) => o.kind,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }

    /// Typed payload encoding; `None` for opaque records.
    pub fn encode_payload(&self) -> Result<Option<Vec<u8>>> {
        Ok(Some(match self {
            Self::SpotColors(v) => v.encode_payload()?,
            Self::AlphaNames(v) => v.encode_payload()?,
            Self::UnicodeAlphaNames(v) => v.encode_payload()?,
            Self::AlphaIdentifiers(v) => v.encode_payload()?,
            Self::IdSeed(v) => v.encode_payload()?,
            Self::VersionInfo(v) => v.encode_payload()?,
            Self::DisplayInfo(v) => v.encode_payload()?,
            Self::Opaque(_) => return Ok(None),
        }))
    }

    /// Writes the typed value back into `record`. Opaque values leave the
    /// record untouched.
    pub fn write_into(&self, record: &mut Record<'_>) -> Result<()> {
        match self {
            Self::SpotColors(v) => v.write_into(record),
            Self::AlphaNames(v) => v.write_into(record),
            Self::UnicodeAlphaNames(v) => v.write_into(record),
            Self::AlphaIdentifiers(v) => v.write_into(record),
            Self::IdSeed(v) => v.write_into(record),
            Self::VersionInfo(v) => v.write_into(record),
            Self::DisplayInfo(v) => v.write_into(record),
            Self::Opaque(_) => Ok(()),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpotColors(v) => v.fmt(f),
            Self::AlphaNames(v) => v.fmt(f),
            Self::UnicodeAlphaNames(v) => v.fmt(f),
            Self::AlphaIdentifiers(v) => v.fmt(f),
            Self::IdSeed(v) => v.fmt(f),
            Self::VersionInfo(v) => v.fmt(f),
            Self::DisplayInfo(v) => v.fmt(f),
            Self::Opaque(o) => write!(f, "[{}] {} bytes", o.kind, o.data_len),
        }
    }
}
