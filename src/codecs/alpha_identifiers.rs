use super::ResourceCodec;
use crate::error::{ResourceError, Result};
use crate::ids::ResourceKind;
use serde::Serialize;
use std::fmt;

/// Alpha channel identifiers (1053), one `u32` per channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlphaIdentifiers {
    pub ids: Vec<u32>,
}

impl AlphaIdentifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: u32) {
        self.ids.push(id);
    }
}

impl ResourceCodec for AlphaIdentifiers {
    const KIND: ResourceKind = ResourceKind::AlphaIdentifiers;

    fn decode_payload(data: &[u8]) -> Result<Self> {
        if data.len() % 4 != 0 {
            return Err(ResourceError::shape(
                Self::KIND,
                format!("length {} is not a multiple of 4", data.len()),
            ));
        }
        let ids = data
            .chunks_exact(4)
            .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        Ok(Self { ids })
    }

    fn encode_payload(&self) -> Result<Vec<u8>> {
        Ok(self.ids.iter().flat_map(|id| id.to_be_bytes()).collect())
    }
}

impl fmt::Display for AlphaIdentifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.ids.iter().map(u32::to_string).collect();
        write!(f, "[ALPHAIDS]({})", ids.join(";"))
    }
}
