use super::color::{ColorSpace, DisplayKind, RawColorSpace};
use super::wire::Reader;
use super::ResourceCodec;
use crate::error::{ResourceError, Result};
use crate::ids::ResourceKind;
use serde::Serialize;
use std::fmt;

const ENTRY_LEN: usize = 14;

/// Display settings for one extra channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub color_space: u16,
    pub color: [u16; 4],
    /// 0 to 100
    pub opacity: u16,
    pub kind: u8,
    pub padding: u8,
}

impl Default for DisplayEntry {
    fn default() -> Self {
        Self {
            color_space: ColorSpace::Rgb.raw(),
            color: [0; 4],
            opacity: 100,
            kind: DisplayKind::Spot.raw(),
            padding: 0,
        }
    }
}

impl DisplayEntry {
    pub fn new(color_space: ColorSpace, color: [u16; 4], opacity: u16, kind: DisplayKind) -> Self {
        Self {
            color_space: color_space.raw(),
            color,
            opacity,
            kind: kind.raw(),
            padding: 0,
        }
    }

    pub fn display_kind(&self) -> Option<DisplayKind> {
        DisplayKind::from_raw(self.kind)
    }
}

/// Display info (1077): fixed 14-byte entries, one per extra channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayInfo {
    pub entries: Vec<DisplayEntry>,
}

impl DisplayInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: DisplayEntry) {
        self.entries.push(entry);
    }
}

impl ResourceCodec for DisplayInfo {
    const KIND: ResourceKind = ResourceKind::DisplayInfo;

    fn decode_payload(data: &[u8]) -> Result<Self> {
        if data.len() % ENTRY_LEN != 0 {
            return Err(ResourceError::shape(
                Self::KIND,
                format!("length {} is not a multiple of {ENTRY_LEN}", data.len()),
            ));
        }

        let mut r = Reader::new(data, Self::KIND);
        let mut entries = Vec::with_capacity(data.len() / ENTRY_LEN);
        while !r.is_empty() {
            let color_space = r.u16("color space")?;
            let mut color = [0u16; 4];
            for c in &mut color {
                *c = r.u16("color component")?;
            }
            entries.push(DisplayEntry {
                color_space,
                color,
                opacity: r.u16("opacity")?,
                kind: r.u8("kind")?,
                padding: r.u8("padding")?,
            });
        }

        Ok(Self { entries })
    }

    fn encode_payload(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.entries.len() * ENTRY_LEN);
        for e in &self.entries {
            out.extend_from_slice(&e.color_space.to_be_bytes());
            for c in e.color {
                out.extend_from_slice(&c.to_be_bytes());
            }
            out.extend_from_slice(&e.opacity.to_be_bytes());
            out.push(e.kind);
            out.push(e.padding);
        }
        Ok(out)
    }
}

impl fmt::Display for DisplayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[DISPLAYINFO](")?;
        for (i, e) in self.entries.iter().enumerate() {
            let [c0, c1, c2, c3] = e.color;
            write!(
                f,
                "{}{} {}% {} <{c0},{c1},{c2},{c3}>",
                if i == 0 { "" } else { ";" },
                RawColorSpace(e.color_space),
                e.opacity,
                e.kind
            )?;
        }
        f.write_str(")")
    }
}
