//! Readers for the two event-dump file formats.
//!
//! The JSON variant is one document holding an array of objects and is
//! read eagerly: the whole file is in memory before the first record is
//! touched. The msgpack variant is a bare concatenation of
//! self-delimiting map frames and is decoded lazily, one record per
//! frame, so only the current record is resident.
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::record::Record;

/// Read a whole JSON dataset into memory.
///
/// The file must contain a single JSON document whose top-level value
/// is an array of objects. Anything else is a decode error.
pub fn read_json_dataset(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("open {:?}", path))?;
    let records: Vec<Record> =
        serde_json::from_str(&text).with_context(|| format!("decode JSON dataset {:?}", path))?;
    Ok(records)
}

/// Lazy decoder over a concatenation of self-delimiting msgpack maps.
///
/// Yields one record per frame in source order. Iteration ends normally
/// when the source is exhausted on a frame boundary; a truncated or
/// corrupt frame, or a frame that does not decode to a map, yields an
/// `Err` item.
pub struct MsgpackRecords<R> {
    reader: R,
    frame: u64,
}

impl<R: BufRead> MsgpackRecords<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, frame: 0 }
    }

    fn next_record(&mut self) -> Result<Option<Record>> {
        // Running out of bytes is only legal between frames.
        if self.reader.fill_buf()?.is_empty() {
            return Ok(None);
        }
        let record: Record = rmp_serde::from_read(&mut self.reader)
            .with_context(|| format!("decode msgpack record {}", self.frame))?;
        self.frame += 1;
        Ok(Some(record))
    }
}

impl<R: BufRead> Iterator for MsgpackRecords<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Open `path` and return a lazy record iterator over its contents.
pub fn open_msgpack_records(path: impl AsRef<Path>) -> Result<MsgpackRecords<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("open {:?}", path))?;
    Ok(MsgpackRecords::new(BufReader::new(file)))
}
