use super::record::{self, Record, MAGIC, PREFIX_LEN};
use super::RecordList;
use crate::error::{ResourceError, Result};
use tracing::debug;

/// Walks a resource blob record by record.
///
/// Framing is positional, so the first error ends the iteration: nothing
/// after a corrupt record can be located.
pub struct RecordScanner<'a> {
    data: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> RecordScanner<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            failed: false,
        }
    }

    /// Bytes consumed by the records yielded so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    fn read_record(&self) -> Result<Record<'a>> {
        let start = self.pos;
        let rest = &self.data[start..];

        if rest.len() < MAGIC.len() {
            return Err(ResourceError::framing(
                start,
                format!("{} trailing bytes are too short for a record", rest.len()),
            ));
        }
        if rest[..4] != MAGIC {
            return Err(ResourceError::framing(
                start,
                format!("expected '8BIM' tag, found '{}'", rest[..4].escape_ascii()),
            ));
        }
        if rest.len() < PREFIX_LEN + 1 {
            return Err(ResourceError::framing(start, "truncated record header"));
        }

        let id = u16::from_be_bytes([rest[4], rest[5]]);
        let name_len = rest[PREFIX_LEN] as usize;
        let data_offset = record::data_offset(name_len);
        if rest.len() < data_offset {
            return Err(ResourceError::framing(
                start,
                format!("header of record #{id} needs {data_offset} bytes, {} left", rest.len()),
            ));
        }

        let len_at = data_offset - 4;
        let data_len = u32::from_be_bytes([
            rest[len_at],
            rest[len_at + 1],
            rest[len_at + 2],
            rest[len_at + 3],
        ]) as usize;

        let available = rest.len() - data_offset;
        if data_len > available {
            return Err(ResourceError::framing(
                start,
                format!("record #{id} declares {data_len} payload bytes, {available} left"),
            ));
        }
        let total = data_offset + record::padded_len(data_len);
        if total > rest.len() {
            return Err(ResourceError::framing(
                start,
                format!("record #{id} is missing the pad byte after its odd payload"),
            ));
        }

        let record = Record::borrowed(&rest[..total], id, data_len);
        debug!(
            offset = start,
            id,
            kind = %record.kind(),
            data_len,
            "scanned resource block"
        );
        Ok(record)
    }
}

impl<'a> Iterator for RecordScanner<'a> {
    type Item = Result<Record<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.data.len() {
            return None;
        }

        match self.read_record() {
            Ok(record) => {
                self.pos += record.encoded_size();
                Some(Ok(record))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for RecordScanner<'_> {}

/// Result of scanning a whole blob.
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    pub records: RecordList<'a>,
    pub consumed: usize,
}

/// Scans `data` into records. Every byte must belong to a record.
pub fn scan(data: &[u8]) -> Result<Scan<'_>> {
    let mut scanner = RecordScanner::new(data);
    let mut records = RecordList::new();

    for record in scanner.by_ref() {
        records.push(record?);
    }

    let consumed = scanner.position();
    if consumed != data.len() {
        return Err(ResourceError::framing(
            consumed,
            format!("consumed {consumed} of {} bytes", data.len()),
        ));
    }

    debug!(records = records.len(), bytes = consumed, "scan complete");
    Ok(Scan { records, consumed })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_block() -> Vec<u8> {
        vec![
            b'8', b'B', b'I', b'M', 0x04, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00,
            0x00, 0x2A,
        ]
    }

    #[test]
    fn test_scan_single_block() {
        let data = seed_block();
        let scan = scan(&data).unwrap();
        assert_eq!(scan.consumed, data.len());
        assert_eq!(scan.records.len(), 1);
        let record = scan.records.get(0).unwrap();
        assert_eq!(record.id(), 1044);
        assert!(record.is_borrowed());
        assert_eq!(record.payload(), &[0, 0, 0, 0x2A]);
    }

    #[test]
    fn test_scan_empty_buffer() {
        let scan = scan(&[]).unwrap();
        assert!(scan.records.is_empty());
        assert_eq!(scan.consumed, 0);
    }

    #[test]
    fn test_bad_magic_aborts() {
        let mut data = seed_block();
        data.extend_from_slice(&seed_block());
        data[16] = b'X';
        let err = scan(&data).unwrap_err();
        assert!(matches!(err, ResourceError::Framing { offset: 16, .. }));
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut data = seed_block();
        data.extend_from_slice(b"XBIM");
        data.extend_from_slice(&seed_block());
        let mut scanner = RecordScanner::new(&data);
        assert!(scanner.next().unwrap().is_ok());
        assert!(scanner.next().unwrap().is_err());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_truncated_payload() {
        let data = seed_block();
        let err = scan(&data[..14]).unwrap_err();
        assert!(matches!(err, ResourceError::Framing { offset: 0, .. }));
    }

    #[test]
    fn test_missing_pad_byte() {
        let mut data = vec![b'8', b'B', b'I', b'M', 0x03, 0xEE, 0x00, 0x00];
        data.extend_from_slice(&3u32.to_be_bytes());
        data.extend_from_slice(&[1, 2, 3]);
        assert!(scan(&data).is_err());
        data.push(0);
        assert_eq!(scan(&data).unwrap().records.len(), 1);
    }

    #[test]
    fn test_trailing_garbage() {
        let mut data = seed_block();
        data.extend_from_slice(&[0, 0]);
        assert!(matches!(
            scan(&data),
            Err(ResourceError::Framing { offset: 16, .. })
        ));
    }
}
