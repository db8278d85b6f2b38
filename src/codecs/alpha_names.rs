use super::names::ChannelNames;
use super::ResourceCodec;
use crate::error::{ResourceError, Result};
use crate::ids::ResourceKind;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Legacy alpha channel names (1006): a run of Pascal strings.
///
/// A zero length byte ends the list early; `terminated` records whether the
/// payload carried one so it can be written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphaNames {
    names: Vec<Vec<u8>>,
    terminated: bool,
}

impl AlphaNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[Vec<u8>] {
        &self.names
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn set_terminated(&mut self, terminated: bool) {
        self.terminated = terminated;
    }

    /// Appends a raw name; it must be 1 to 255 bytes.
    pub fn push_bytes(&mut self, name: &[u8]) -> Result<()> {
        if name.is_empty() || name.len() > u8::MAX as usize {
            return Err(ResourceError::shape(
                Self::KIND,
                format!("name of {} bytes cannot be a Pascal string entry", name.len()),
            ));
        }
        self.names.push(name.to_vec());
        Ok(())
    }
}

impl ChannelNames for AlphaNames {
    fn len(&self) -> usize {
        self.names.len()
    }

    fn name(&self, idx: usize) -> Option<Cow<'_, str>> {
        self.names.get(idx).map(|n| String::from_utf8_lossy(n))
    }

    fn push_name(&mut self, name: &str) -> Result<()> {
        self.push_bytes(name.as_bytes())
    }

    fn clear(&mut self) {
        self.names.clear();
        self.terminated = false;
    }
}

impl ResourceCodec for AlphaNames {
    const KIND: ResourceKind = ResourceKind::AlphaNames;

    fn decode_payload(data: &[u8]) -> Result<Self> {
        let mut names = Vec::new();
        let mut terminated = false;
        let mut pos = 0;

        while pos < data.len() {
            let n = data[pos] as usize;
            if n == 0 {
                pos += 1;
                terminated = true;
                break;
            }
            let end = pos + 1 + n;
            if end > data.len() {
                return Err(ResourceError::shape(
                    Self::KIND,
                    format!(
                        "entry at offset {pos} needs {n} bytes, {} left",
                        data.len() - pos - 1
                    ),
                ));
            }
            names.push(data[pos + 1..end].to_vec());
            pos = end;
        }

        if pos != data.len() {
            return Err(ResourceError::shape(
                Self::KIND,
                format!("list ends after {pos} of {} bytes", data.len()),
            ));
        }

        Ok(Self { names, terminated })
    }

    fn encode_payload(&self) -> Result<Vec<u8>> {
        let size = self.names.iter().map(|n| 1 + n.len()).sum::<usize>() + self.terminated as usize;
        let mut out = Vec::with_capacity(size);
        for name in &self.names {
            if name.is_empty() || name.len() > u8::MAX as usize {
                return Err(ResourceError::shape(
                    Self::KIND,
                    format!("name of {} bytes cannot be encoded", name.len()),
                ));
            }
            out.push(name.len() as u8);
            out.extend_from_slice(name);
        }
        if self.terminated {
            out.push(0);
        }
        Ok(out)
    }
}

impl Serialize for AlphaNames {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("AlphaNames", 2)?;
        s.serialize_field("names", &self.to_strings())?;
        s.serialize_field("terminated", &self.terminated)?;
        s.end()
    }
}

impl fmt::Display for AlphaNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALPHANAMES {} ({})", self.len(), self.to_strings().join(";"))
    }
}
