use crate::error::{ResourceError, Result};
use crate::ids::{self, ResourceKind};
use std::borrow::Cow;
use std::fmt;

pub const MAGIC: [u8; 4] = *b"8BIM";

/// Magic plus identifier.
pub const PREFIX_LEN: usize = 4 + 2;

pub const MAX_NAME_LEN: usize = u8::MAX as usize;

/// Size of the Pascal-string name field, padded so the header ends on an
/// even offset: `1 + name_len` rounded up to even.
#[inline]
pub const fn name_field_len(name_len: usize) -> usize {
    let n = 1 + name_len;
    n + (n & 1)
}

/// Payload length including the pad byte that follows odd payloads.
#[inline]
pub const fn padded_len(len: usize) -> usize {
    len + (len & 1)
}

/// Offset of the payload from the start of the record.
#[inline]
pub const fn data_offset(name_len: usize) -> usize {
    PREFIX_LEN + name_field_len(name_len) + 4
}

/// Total on-wire size of a record.
#[inline]
pub const fn encoded_size(name_len: usize, data_len: usize) -> usize {
    data_offset(name_len) + padded_len(data_len)
}

/// One 8BIM block.
///
/// A scanned record borrows its bytes from the caller's buffer; a built or
/// rebuilt record owns them. Either way `as_bytes` yields the exact encoded
/// form, padding included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    id: u16,
    kind: ResourceKind,
    raw: Cow<'a, [u8]>,
    data_len: usize,
}

impl<'a> Record<'a> {
    /// Wraps an already framed record. `raw` must start with the magic and
    /// span exactly `encoded_size(name_len, data_len)` bytes.
    pub(crate) fn borrowed(raw: &'a [u8], id: u16, data_len: usize) -> Self {
        Self {
            id,
            kind: ids::classify(id),
            raw: Cow::Borrowed(raw),
            data_len,
        }
    }

    /// Creates an empty record for `kind`, using the first identifier of its
    /// canonical range.
    pub fn new(name: &str, kind: ResourceKind) -> Result<Record<'static>> {
        let range = ids::canonical_range(kind).ok_or(ResourceError::NoCanonicalId(kind))?;
        Record::with_id(range.from(), name.as_bytes(), &[])
    }

    /// Builds an owned record from its parts.
    pub fn with_id(id: u16, name: &[u8], payload: &[u8]) -> Result<Record<'static>> {
        let kind = ids::classify(id);
        let raw = encode(id, kind, name, payload)?;
        Ok(Record {
            id,
            kind,
            raw: Cow::Owned(raw),
            data_len: payload.len(),
        })
    }

    #[inline]
    pub fn id(&self) -> u16 {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    #[inline]
    pub fn name_bytes(&self) -> &[u8] {
        let len = self.raw[PREFIX_LEN] as usize;
        &self.raw[PREFIX_LEN + 1..PREFIX_LEN + 1 + len]
    }

    /// Name for display; non-UTF-8 bytes are replaced.
    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.name_bytes())
    }

    #[inline]
    pub fn payload(&self) -> &[u8] {
        let start = data_offset(self.name_bytes().len());
        &self.raw[start..start + self.data_len]
    }

    #[inline]
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    #[inline]
    pub fn encoded_size(&self) -> usize {
        self.raw.len()
    }

    /// Encoded record bytes, header and padding included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self.raw, Cow::Borrowed(_))
    }

    /// Detaches the record from the buffer it was scanned from.
    pub fn into_owned(self) -> Record<'static> {
        Record {
            id: self.id,
            kind: self.kind,
            raw: Cow::Owned(self.raw.into_owned()),
            data_len: self.data_len,
        }
    }

    /// Replaces the payload, keeping identifier and name. The record owns
    /// its bytes afterwards.
    pub fn rebuild(&mut self, payload: &[u8]) -> Result<()> {
        let raw = encode(self.id, self.kind, self.name_bytes(), payload)?;
        self.raw = Cow::Owned(raw);
        self.data_len = payload.len();
        Ok(())
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} '{}' {} {}/{}",
            self.id,
            self.name(),
            self.kind,
            self.data_len,
            self.encoded_size()
        )
    }
}

fn encode(id: u16, kind: ResourceKind, name: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    if name.len() > MAX_NAME_LEN {
        return Err(ResourceError::shape(
            kind,
            format!("name is {} bytes, at most {MAX_NAME_LEN} allowed", name.len()),
        ));
    }
    let data_len = u32::try_from(payload.len()).map_err(|_| {
        ResourceError::shape(kind, format!("payload of {} bytes is too large", payload.len()))
    })?;

    let mut out = Vec::with_capacity(encoded_size(name.len(), payload.len()));
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&id.to_be_bytes());
    out.push(name.len() as u8);
    out.extend_from_slice(name);
    if (1 + name.len()) & 1 != 0 {
        out.push(0);
    }
    out.extend_from_slice(&data_len.to_be_bytes());
    out.extend_from_slice(payload);
    if payload.len() & 1 != 0 {
        out.push(0);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_field_padding() {
        assert_eq!(name_field_len(0), 2);
        assert_eq!(name_field_len(1), 2);
        assert_eq!(name_field_len(2), 4);
        assert_eq!(name_field_len(3), 4);
        assert_eq!(name_field_len(255), 256);
    }

    #[test]
    fn test_seed_record_bytes() {
        let record = Record::with_id(1044, b"", &42u32.to_be_bytes()).unwrap();
        assert_eq!(
            record.as_bytes(),
            &[
                b'8', b'B', b'I', b'M', 0x04, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00,
                0x00, 0x00, 0x2A
            ]
        );
        assert_eq!(record.kind(), ResourceKind::IdSeedNumber);
        assert_eq!(record.encoded_size(), 16);
    }

    #[test]
    fn test_odd_name_and_odd_payload() {
        let record = Record::with_id(1006, b"a", &[1, 2, 3]).unwrap();
        // 6 + 2 (len byte + 'a') + 4 + 3 + 1 pad
        assert_eq!(record.encoded_size(), 16);
        assert_eq!(record.name_bytes(), b"a");
        assert_eq!(record.payload(), &[1, 2, 3]);
        assert_eq!(*record.as_bytes().last().unwrap(), 0);
    }

    #[test]
    fn test_rebuild_switches_to_owned() {
        let bytes = Record::with_id(1044, b"ab", &[0, 0, 0, 1])
            .unwrap()
            .as_bytes()
            .to_vec();
        let mut record = Record::borrowed(&bytes, 1044, 4);
        assert!(record.is_borrowed());
        record.rebuild(&[0, 0, 0, 2, 9]).unwrap();
        assert!(!record.is_borrowed());
        assert_eq!(record.payload(), &[0, 0, 0, 2, 9]);
        assert_eq!(record.name(), "ab");
        assert_eq!(record.encoded_size(), encoded_size(2, 5));
    }

    #[test]
    fn test_new_uses_canonical_id() {
        let record = Record::new("", ResourceKind::VersionInfo).unwrap();
        assert_eq!(record.id(), 1057);
        assert_eq!(record.data_len(), 0);
        assert!(matches!(
            Record::new("", ResourceKind::Unknown),
            Err(ResourceError::NoCanonicalId(ResourceKind::Unknown))
        ));
    }

    #[test]
    fn test_name_too_long() {
        let name = vec![b'x'; 256];
        assert!(matches!(
            Record::with_id(1044, &name, &[]),
            Err(ResourceError::Shape { .. })
        ));
    }
}
