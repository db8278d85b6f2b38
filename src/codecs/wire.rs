//! Big-endian field access over a payload slice.
//!
//! Every read is bounds checked and reports an overrun as a shape error for
//! the codec's kind, so decoders never index past the declared payload.

use crate::error::{ResourceError, Result};
use crate::ids::ResourceKind;

pub(crate) struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
    kind: ResourceKind,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8], kind: ResourceKind) -> Self {
        Self { data, pos: 0, kind }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn bytes(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(ResourceError::shape(
                self.kind,
                format!(
                    "{what} at offset {} needs {len} bytes, {} left",
                    self.pos,
                    self.remaining()
                ),
            ));
        }
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    pub fn u8(&mut self, what: &str) -> Result<u8> {
        Ok(self.bytes(1, what)?[0])
    }

    pub fn u16(&mut self, what: &str) -> Result<u16> {
        let b = self.bytes(2, what)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn u32(&mut self, what: &str) -> Result<u32> {
        let b = self.bytes(4, what)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads a `u32` unit count followed by that many UTF-16 code units.
    pub fn utf16_units(&mut self, what: &str) -> Result<Vec<u16>> {
        let count = self.u32(what)? as usize;
        let len = count.checked_mul(2).ok_or_else(|| {
            ResourceError::shape(self.kind, format!("{what} length {count} overflows"))
        })?;
        let raw = self.bytes(len, what)?;
        Ok(raw
            .chunks_exact(2)
            .map(|b| u16::from_be_bytes([b[0], b[1]]))
            .collect())
    }

    pub fn utf16_string(&mut self, what: &str) -> Result<String> {
        let units = self.utf16_units(what)?;
        decode_utf16(self.kind, &units)
    }
}

pub(crate) fn decode_utf16(kind: ResourceKind, units: &[u16]) -> Result<String> {
    String::from_utf16(units)
        .map_err(|_| ResourceError::shape(kind, "string is not valid UTF-16"))
}

/// Appends a `u32` unit count and the big-endian UTF-16 units of `s`.
pub(crate) fn put_utf16(out: &mut Vec<u8>, kind: ResourceKind, s: &str) -> Result<()> {
    let units: Vec<u16> = s.encode_utf16().collect();
    let count = u32::try_from(units.len())
        .map_err(|_| ResourceError::shape(kind, "string is too long"))?;
    out.extend_from_slice(&count.to_be_bytes());
    for unit in units {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    Ok(())
}
