//! eightbim - 8BIM image resource blocks
//!
//! Scans a byte buffer of concatenated "8BIM" records, classifies each
//! record's identifier, decodes the payloads of the kinds it understands and
//! writes them back byte for byte.
//!
//! ```no_run
//! use eightbim::{scan, DecodeOptions};
//!
//! # fn run(bytes: &[u8]) -> eightbim::Result<()> {
//! let scanned = scan(bytes)?;
//! for resource in scanned.records.decode_all(&DecodeOptions::default())? {
//!     println!("{resource}");
//! }
//! assert_eq!(scanned.records.flatten(), bytes);
//! # Ok(())
//! # }
//! ```

pub mod block;
pub mod codecs;
pub mod error;
pub mod ids;
pub mod io;
pub mod options;

pub use block::{scan, Record, RecordList, RecordScanner, Scan, MAGIC};
pub use codecs::{ChannelNames, Resource, ResourceCodec};
pub use error::{ResourceError, Result};
pub use ids::{canonical_range, classify, table, IdRange, ResourceKind};
pub use io::BlobFile;
pub use options::{DecodeOptions, DecodePolicy};
