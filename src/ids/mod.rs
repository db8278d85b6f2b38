//! Resource identifiers and their classification

mod kind;
mod range;
mod table;

pub use kind::ResourceKind;
pub use range::IdRange;
pub use table::{canonical_range, classify, table, RangeTable, CATALOG};
