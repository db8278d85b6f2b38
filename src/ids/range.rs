use crate::error::{ResourceError, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Inclusive span of resource identifiers, `from <= to` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IdRange {
    from: u16,
    to: u16,
}

impl IdRange {
    pub fn new(from: u16, to: u16) -> Result<Self> {
        if from > to {
            return Err(ResourceError::RangeConfig(format!(
                "inverted range [{from};{to}]"
            )));
        }
        Ok(Self { from, to })
    }

    pub const fn single(id: u16) -> Self {
        Self { from: id, to: id }
    }

    #[inline]
    pub const fn from(&self) -> u16 {
        self.from
    }

    #[inline]
    pub const fn to(&self) -> u16 {
        self.to
    }

    #[inline]
    pub const fn contains(&self, id: u16) -> bool {
        self.from <= id && id <= self.to
    }

    /// `self` lies entirely before `other`.
    #[inline]
    pub const fn precedes(&self, other: &IdRange) -> bool {
        self.to < other.from
    }

    /// Orders disjoint ranges; `None` when they share at least one identifier.
    pub fn compare(&self, other: &IdRange) -> Option<Ordering> {
        if self.precedes(other) {
            Some(Ordering::Less)
        } else if other.precedes(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    /// Position of `id` relative to this range, for binary search over a
    /// sorted table. `Equal` means the range contains `id`.
    #[inline]
    pub(crate) fn locate(&self, id: u16) -> Ordering {
        if self.to < id {
            Ordering::Less
        } else if id < self.from {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}-{}", self.from, self.to)
        }
    }
}
