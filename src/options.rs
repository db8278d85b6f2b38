//! Decode options

/// What to do with a record whose typed codec rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Fail the whole decode on the first bad record.
    Abort,
    /// Keep the bad record as an opaque blob and carry on.
    #[default]
    Preserve,
}

/// Options for decoding a scanned blob
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub policy: DecodePolicy,
    /// Re-encode every typed value and compare it with the stored payload
    pub verify_roundtrip: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            policy: DecodePolicy::Preserve,
            verify_roundtrip: false,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on the first undecodable record
    pub fn strict(mut self) -> Self {
        self.policy = DecodePolicy::Abort;
        self
    }

    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_roundtrip_check(mut self, verify: bool) -> Self {
        self.verify_roundtrip = verify;
        self
    }
}
