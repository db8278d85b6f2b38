//! Typed payload codecs.
//!
//! Each interpreted [`ResourceKind`] has a value type implementing
//! [`ResourceCodec`]. Decoding checks the record's kind and the payload
//! shape before reading any field; encoding is the exact inverse and writes
//! the new payload back through [`Record::rebuild`].

mod alpha_identifiers;
mod alpha_names;
mod color;
mod display_info;
mod id_seed;
mod names;
mod resource;
mod spot_colors;
mod unicode_alpha_names;
mod version_info;
mod wire;

pub use alpha_identifiers::AlphaIdentifiers;
pub use alpha_names::AlphaNames;
pub use color::{ColorSpace, DisplayKind};
pub use display_info::{DisplayEntry, DisplayInfo};
pub use id_seed::IdSeed;
pub use names::ChannelNames;
pub use resource::{Opaque, Resource};
pub use spot_colors::{SpotChannel, SpotColors};
pub use unicode_alpha_names::UnicodeAlphaNames;
pub use version_info::VersionInfo;

use crate::block::Record;
use crate::error::{ResourceError, Result};
use crate::ids::ResourceKind;
use tracing::trace;

/// Structured value for one interpreted resource kind.
pub trait ResourceCodec: Sized {
    const KIND: ResourceKind;

    /// Decodes a bare payload; the caller has already checked the kind.
    fn decode_payload(data: &[u8]) -> Result<Self>;

    fn encode_payload(&self) -> Result<Vec<u8>>;

    fn decode(record: &Record<'_>) -> Result<Self> {
        check_kind(record, Self::KIND)?;
        trace!(id = record.id(), kind = %Self::KIND, len = record.data_len(), "decoding payload");
        Self::decode_payload(record.payload())
    }

    /// Replaces `record`'s payload with this value's encoding.
    fn write_into(&self, record: &mut Record<'_>) -> Result<()> {
        check_kind(record, Self::KIND)?;
        let payload = self.encode_payload()?;
        record.rebuild(&payload)
    }

    /// Builds a fresh record carrying this value under the kind's canonical
    /// identifier.
    fn to_record(&self, name: &str) -> Result<Record<'static>> {
        let mut record = Record::new(name, Self::KIND)?;
        self.write_into(&mut record)?;
        Ok(record)
    }
}

pub(crate) fn check_kind(record: &Record<'_>, expected: ResourceKind) -> Result<()> {
    if record.kind() != expected {
        return Err(ResourceError::KindMismatch {
            expected,
            found: record.kind(),
            id: record.id(),
        });
    }
    Ok(())
}
