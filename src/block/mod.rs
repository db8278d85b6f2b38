//! 8BIM block framing: single records, the scanner and record lists.

mod list;
pub mod record;
mod scanner;

pub use list::RecordList;
pub use record::{Record, MAGIC};
pub use scanner::{scan, RecordScanner, Scan};
