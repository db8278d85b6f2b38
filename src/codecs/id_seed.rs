use super::ResourceCodec;
use crate::error::{ResourceError, Result};
use crate::ids::ResourceKind;
use serde::Serialize;
use std::fmt;

/// Document-specific ID seed (1044): the base value new layer IDs start from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IdSeed {
    pub seed: u32,
}

impl IdSeed {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl ResourceCodec for IdSeed {
    const KIND: ResourceKind = ResourceKind::IdSeedNumber;

    fn decode_payload(data: &[u8]) -> Result<Self> {
        let bytes: [u8; 4] = data.try_into().map_err(|_| {
            ResourceError::shape(Self::KIND, format!("expected 4 bytes, found {}", data.len()))
        })?;
        Ok(Self::new(u32::from_be_bytes(bytes)))
    }

    fn encode_payload(&self) -> Result<Vec<u8>> {
        Ok(self.seed.to_be_bytes().to_vec())
    }
}

impl fmt::Display for IdSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[IDSEED] id={}", self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_bytes() {
        let seed = IdSeed::decode_payload(&[0, 0, 0, 42]).unwrap();
        assert_eq!(seed.seed, 42);
        assert_eq!(seed.encode_payload().unwrap(), vec![0, 0, 0, 42]);
        assert_eq!(seed.to_string(), "[IDSEED] id=42");
    }

    #[test]
    fn test_wrong_length() {
        for len in [0usize, 3, 5, 8] {
            assert!(matches!(
                IdSeed::decode_payload(&vec![0; len]),
                Err(ResourceError::Shape { .. })
            ));
        }
    }
}
