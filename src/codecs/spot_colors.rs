use super::color::{ColorSpace, RawColorSpace};
use super::wire::Reader;
use super::ResourceCodec;
use crate::error::{ResourceError, Result};
use crate::ids::ResourceKind;
use serde::Serialize;
use std::fmt;

const HEADER_LEN: usize = 4;
const CHANNEL_LEN: usize = 14;

/// One alternate spot color: channel id plus a color record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpotChannel {
    pub channel_id: u32,
    pub color_space: u16,
    pub components: [u16; 4],
}

impl SpotChannel {
    pub fn new(channel_id: u32, color_space: ColorSpace, components: [u16; 4]) -> Self {
        Self {
            channel_id,
            color_space: color_space.raw(),
            components,
        }
    }
}

/// Alternate spot colors (1067): version, then one color per extra channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotColors {
    pub version: u16,
    pub channels: Vec<SpotChannel>,
}

impl Default for SpotColors {
    fn default() -> Self {
        Self {
            version: 1,
            channels: Vec::new(),
        }
    }
}

impl SpotColors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, channel: SpotChannel) {
        self.channels.push(channel);
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl ResourceCodec for SpotColors {
    const KIND: ResourceKind = ResourceKind::AlternateSpotColors;

    fn decode_payload(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(ResourceError::shape(
                Self::KIND,
                format!("needs at least {HEADER_LEN} bytes, found {}", data.len()),
            ));
        }

        let mut r = Reader::new(data, Self::KIND);
        let version = r.u16("version")?;
        let count = r.u16("channel count")? as usize;

        let expected = HEADER_LEN + CHANNEL_LEN * count;
        if data.len() != expected {
            return Err(ResourceError::shape(
                Self::KIND,
                format!(
                    "{count} channels need {expected} bytes, found {}",
                    data.len()
                ),
            ));
        }

        let mut channels = Vec::with_capacity(count);
        for _ in 0..count {
            let channel_id = r.u32("channel id")?;
            let color_space = r.u16("color space")?;
            let mut components = [0u16; 4];
            for c in &mut components {
                *c = r.u16("color component")?;
            }
            channels.push(SpotChannel {
                channel_id,
                color_space,
                components,
            });
        }

        Ok(Self { version, channels })
    }

    fn encode_payload(&self) -> Result<Vec<u8>> {
        let count = u16::try_from(self.channels.len()).map_err(|_| {
            ResourceError::shape(
                Self::KIND,
                format!("{} channels exceed the 16-bit count", self.channels.len()),
            )
        })?;

        let mut out = Vec::with_capacity(HEADER_LEN + CHANNEL_LEN * self.channels.len());
        out.extend_from_slice(&self.version.to_be_bytes());
        out.extend_from_slice(&count.to_be_bytes());
        for ch in &self.channels {
            out.extend_from_slice(&ch.channel_id.to_be_bytes());
            out.extend_from_slice(&ch.color_space.to_be_bytes());
            for c in ch.components {
                out.extend_from_slice(&c.to_be_bytes());
            }
        }
        Ok(out)
    }
}

impl fmt::Display for SpotColors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[COLOR] v{}", self.version)?;
        for ch in &self.channels {
            let [c0, c1, c2, c3] = ch.components;
            write!(
                f,
                " [id={};spc={} ({c0};{c1};{c2};{c3})]",
                ch.channel_id,
                RawColorSpace(ch.color_space)
            )?;
        }
        Ok(())
    }
}
