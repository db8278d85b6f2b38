use crate::ids::ResourceKind;
use thiserror::Error;

/// Errors raised while scanning, decoding or encoding resource blocks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Framing error at offset {offset}: {reason}")]
    Framing { offset: usize, reason: String },

    #[error("Malformed {kind} payload: {reason}")]
    Shape { kind: ResourceKind, reason: String },

    #[error("Record #{id} is {found}, expected {expected}")]
    KindMismatch {
        expected: ResourceKind,
        found: ResourceKind,
        id: u16,
    },

    #[error("Invalid identifier range table: {0}")]
    RangeConfig(String),

    #[error("No identifier is registered for {0}")]
    NoCanonicalId(ResourceKind),
}

impl ResourceError {
    pub(crate) fn framing(offset: usize, reason: impl Into<String>) -> Self {
        Self::Framing {
            offset,
            reason: reason.into(),
        }
    }

    pub(crate) fn shape(kind: ResourceKind, reason: impl Into<String>) -> Self {
        Self::Shape {
            kind,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResourceError>;
