use super::wire::{put_utf16, Reader};
use super::ResourceCodec;
use crate::error::{ResourceError, Result};
use crate::ids::ResourceKind;
use serde::Serialize;
use std::fmt;

const MIN_LEN: usize = 5;

/// Version info (1057).
///
/// Layout: `u32` version, one byte "has real merged data", two
/// length-prefixed UTF-16 names, then a trailer that normally holds a `u32`
/// file version. The flag byte and the trailer are stored raw so payloads
/// with unusual values still write back byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub version: u32,
    /// Raw flag byte; any non-zero value means true.
    pub merged_data: u8,
    pub reader_name: String,
    pub writer_name: String,
    pub trailer: Vec<u8>,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            version: 1,
            merged_data: 1,
            reader_name: String::new(),
            writer_name: String::new(),
            trailer: Vec::new(),
        }
    }
}

impl VersionInfo {
    pub fn new(reader_name: &str, writer_name: &str) -> Self {
        Self {
            reader_name: reader_name.to_owned(),
            writer_name: writer_name.to_owned(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn has_merged_data(&self) -> bool {
        self.merged_data != 0
    }

    pub fn set_merged_data(&mut self, merged: bool) {
        self.merged_data = merged as u8;
    }

    /// Leading `u32` of the trailer, when it is long enough to hold one.
    pub fn file_version(&self) -> Option<u32> {
        let bytes: [u8; 4] = self.trailer.get(..4)?.try_into().ok()?;
        Some(u32::from_be_bytes(bytes))
    }

    /// Replaces the file version. A trailer too short to hold one is
    /// discarded; bytes after an existing file version are kept.
    pub fn set_file_version(&mut self, file_version: u32) {
        if self.trailer.len() < 4 {
            self.trailer = file_version.to_be_bytes().to_vec();
        } else {
            self.trailer[..4].copy_from_slice(&file_version.to_be_bytes());
        }
    }
}

impl ResourceCodec for VersionInfo {
    const KIND: ResourceKind = ResourceKind::VersionInfo;

    fn decode_payload(data: &[u8]) -> Result<Self> {
        if data.len() < MIN_LEN {
            return Err(ResourceError::shape(
                Self::KIND,
                format!("needs at least {MIN_LEN} bytes, found {}", data.len()),
            ));
        }

        let mut r = Reader::new(data, Self::KIND);
        let version = r.u32("version")?;
        let merged_data = r.u8("merged data flag")?;
        let reader_name = r.utf16_string("reader name")?;
        let writer_name = r.utf16_string("writer name")?;
        let trailer = r.bytes(r.remaining(), "trailer")?.to_vec();

        Ok(Self {
            version,
            merged_data,
            reader_name,
            writer_name,
            trailer,
        })
    }

    fn encode_payload(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(
            MIN_LEN + 8 + 2 * (self.reader_name.len() + self.writer_name.len()) + self.trailer.len(),
        );
        out.extend_from_slice(&self.version.to_be_bytes());
        out.push(self.merged_data);
        put_utf16(&mut out, Self::KIND, &self.reader_name)?;
        put_utf16(&mut out, Self::KIND, &self.writer_name)?;
        out.extend_from_slice(&self.trailer);
        Ok(out)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[VERSION]{}; has_merged_data={}; reader={}; writer={}",
            self.version,
            self.has_merged_data(),
            self.reader_name,
            self.writer_name
        )?;
        match self.file_version() {
            Some(v) => write!(f, "; file_version={v}")?,
            None if !self.trailer.is_empty() => {
                write!(f, "; {} trailing bytes", self.trailer.len())?
            }
            None => {}
        }
        Ok(())
    }
}
