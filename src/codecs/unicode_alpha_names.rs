use super::names::ChannelNames;
use super::wire::{self, put_utf16, Reader};
use super::ResourceCodec;
use crate::error::{ResourceError, Result};
use crate::ids::ResourceKind;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Entry {
    name: String,
    /// The unit count included a closing U+0000.
    nul_terminated: bool,
}

/// Unicode alpha channel names (1045).
///
/// Each entry is a `u32` unit count followed by UTF-16BE units, normally
/// closed by a null unit that the count includes. The closing null is
/// remembered per entry; any other null unit is dropped on decode, so names
/// never contain U+0000.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnicodeAlphaNames {
    entries: Vec<Entry>,
}

impl UnicodeAlphaNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Self::new();
        for name in names {
            out.push_name(name.as_ref())?;
        }
        Ok(out)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Appends a name, choosing whether its entry carries the closing null.
    pub fn push_entry(&mut self, name: &str, nul_terminated: bool) -> Result<()> {
        if name.contains('\0') {
            return Err(ResourceError::shape(
                Self::KIND,
                "names cannot contain U+0000",
            ));
        }
        self.entries.push(Entry {
            name: name.to_owned(),
            nul_terminated,
        });
        Ok(())
    }

    pub fn is_nul_terminated(&self, idx: usize) -> Option<bool> {
        self.entries.get(idx).map(|e| e.nul_terminated)
    }
}

impl ChannelNames for UnicodeAlphaNames {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn name(&self, idx: usize) -> Option<Cow<'_, str>> {
        self.entries.get(idx).map(|e| Cow::Borrowed(e.name.as_str()))
    }

    /// New entries get the closing null Photoshop writes.
    fn push_name(&mut self, name: &str) -> Result<()> {
        self.push_entry(name, true)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl ResourceCodec for UnicodeAlphaNames {
    const KIND: ResourceKind = ResourceKind::UnicodeAlphaNames;

    fn decode_payload(data: &[u8]) -> Result<Self> {
        let mut r = Reader::new(data, Self::KIND);
        let mut entries = Vec::new();

        while !r.is_empty() {
            let mut units = r.utf16_units("name")?;
            let nul_terminated = units.last() == Some(&0);
            if nul_terminated {
                units.pop();
            }
            units.retain(|&u| u != 0);
            entries.push(Entry {
                name: wire::decode_utf16(Self::KIND, &units)?,
                nul_terminated,
            });
        }

        Ok(Self { entries })
    }

    fn encode_payload(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for entry in &self.entries {
            if entry.nul_terminated {
                let mut name = String::with_capacity(entry.name.len() + 1);
                name.push_str(&entry.name);
                name.push('\0');
                put_utf16(&mut out, Self::KIND, &name)?;
            } else {
                put_utf16(&mut out, Self::KIND, &entry.name)?;
            }
        }
        Ok(out)
    }
}

impl fmt::Display for UnicodeAlphaNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        write!(f, "UALPHANAMES {} ({})", self.len(), names.join(";"))
    }
}
