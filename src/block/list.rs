use super::Record;
use crate::codecs::Resource;
use crate::error::{ResourceError, Result};
use crate::ids::ResourceKind;
use crate::options::{DecodeOptions, DecodePolicy};
use tracing::warn;

/// Ordered, append-only sequence of records.
///
/// Order is preserved exactly: consumers of the container may depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordList<'a> {
    records: Vec<Record<'a>>,
}

impl<'a> RecordList<'a> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record<'a>) {
        self.records.push(record);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Record<'a>> {
        self.records.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Record<'a>> {
        self.records.get_mut(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<'a>> {
        self.records.iter()
    }

    /// Index of the first record of `kind`.
    pub fn position(&self, kind: ResourceKind) -> Option<usize> {
        self.records.iter().position(|r| r.kind() == kind)
    }

    pub fn find(&self, kind: ResourceKind) -> Option<&Record<'a>> {
        self.records.iter().find(|r| r.kind() == kind)
    }

    /// Sum of the members' encoded sizes.
    pub fn total_size(&self) -> usize {
        self.records.iter().map(Record::encoded_size).sum()
    }

    /// Concatenates every record's encoded bytes in list order.
    pub fn flatten(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total_size());
        for record in &self.records {
            out.extend_from_slice(record.as_bytes());
        }
        out
    }

    pub fn into_owned(self) -> RecordList<'static> {
        RecordList {
            records: self.records.into_iter().map(Record::into_owned).collect(),
        }
    }

    /// Hands every record to its typed codec.
    ///
    /// Under [`DecodePolicy::Abort`] the first failure is returned; under
    /// [`DecodePolicy::Preserve`] a failing record is kept as
    /// [`Resource::Opaque`] and decoding continues. With
    /// `verify_roundtrip` set, a value whose re-encoding differs from the
    /// stored payload counts as a failure.
    pub fn decode_all(&self, options: &DecodeOptions) -> Result<Vec<Resource>> {
        let mut out = Vec::with_capacity(self.records.len());
        for record in &self.records {
            let decoded = Resource::decode(record).and_then(|resource| {
                if options.verify_roundtrip {
                    check_roundtrip(record, &resource)?;
                }
                Ok(resource)
            });
            match decoded {
                Ok(resource) => out.push(resource),
                Err(e) if options.policy == DecodePolicy::Preserve => {
                    warn!(id = record.id(), error = %e, "keeping undecodable record opaque");
                    out.push(Resource::opaque(record));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }
}

fn check_roundtrip(record: &Record<'_>, resource: &Resource) -> Result<()> {
    match resource.encode_payload()? {
        Some(bytes) if bytes != record.payload() => Err(ResourceError::shape(
            resource.kind(),
            format!(
                "re-encoding record #{} gives {} bytes that differ from the stored {}",
                record.id(),
                bytes.len(),
                record.data_len()
            ),
        )),
        _ => Ok(()),
    }
}

impl<'a> FromIterator<Record<'a>> for RecordList<'a> {
    fn from_iter<I: IntoIterator<Item = Record<'a>>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for RecordList<'a> {
    type Item = Record<'a>;
    type IntoIter = std::vec::IntoIter<Record<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'l, 'a> IntoIterator for &'l RecordList<'a> {
    type Item = &'l Record<'a>;
    type IntoIter = std::slice::Iter<'l, Record<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
