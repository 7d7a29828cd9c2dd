// crates/ipgeodb-core/src/store.rs

//! # Record Store
//!
//! Sequential record streams. A database file is a bare concatenation
//! of bincode-encoded records; [`RecordReader`] walks one file
//! front-to-back in write order, and [`RecordWriter`] is the symmetric
//! write side used by tests, demos and database tooling.
//!
//! End of stream is a distinct, non-error signal: the reader reports it
//! as `Ok(None)` on the byte boundary before a record, so a file that
//! ends mid-record surfaces as a corrupt record instead of a clean end.

use crate::error::{GeoIpError, Result};
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Upper bound on a single encoded record. Keeps a corrupt length
/// prefix from ballooning into a giant allocation.
const RECORD_LIMIT: u64 = 1024 * 1024;

/// The one bincode configuration shared by reader and writer.
/// Varint encoding, so small ranges and geoids stay small on disk.
fn codec() -> impl Options + Copy {
    bincode::DefaultOptions::new().with_limit(RECORD_LIMIT)
}

/// Read side of one record file: a lazy, finite, non-restartable pass
/// over records of type `T` in file order.
///
/// The file handle lives as long as the reader and is released when it
/// is dropped, on every exit path.
pub struct RecordReader<T> {
    reader: BufReader<Box<dyn Read>>,
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> RecordReader<T> {
    /// Opens a record file for a single front-to-back scan.
    ///
    /// A file that cannot be opened reports
    /// [`GeoIpError::StoreUnavailable`]; the index and segment layers
    /// re-brand that into their own taxonomy.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| GeoIpError::StoreUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Centralized gzip logic, as in the write side.
        #[cfg(feature = "compact")]
        let stream: Box<dyn Read> = Box::new(GzDecoder::new(file));

        #[cfg(not(feature = "compact"))]
        let stream: Box<dyn Read> = Box::new(file);

        Ok(Self {
            reader: BufReader::new(stream),
            path: path.to_path_buf(),
            _records: PhantomData,
        })
    }

    /// The path this reader was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next record in file order, or `None` at end of stream.
    ///
    /// Malformed bytes, including a file truncated mid-record, report
    /// [`GeoIpError::CorruptRecord`].
    pub fn next_record(&mut self) -> Result<Option<T>> {
        // End-of-stream check on the record boundary, before decoding.
        let buffered = self.reader.fill_buf().map_err(|e| GeoIpError::CorruptRecord {
            path: self.path.clone(),
            source: bincode::ErrorKind::Io(e).into(),
        })?;
        if buffered.is_empty() {
            return Ok(None);
        }

        codec()
            .deserialize_from(&mut self.reader)
            .map(Some)
            .map_err(|e| GeoIpError::CorruptRecord {
                path: self.path.clone(),
                source: e,
            })
    }
}

/// Write side of one record file, symmetric with [`RecordReader`].
///
/// The query engine never writes; this exists so the test suite and the
/// demo programs can lay out databases in the exact on-disk format.
pub struct RecordWriter<T> {
    writer: Box<dyn Write>,
    path: PathBuf,
    _records: PhantomData<fn(&T)>,
}

impl<T: Serialize> RecordWriter<T> {
    /// Creates (or truncates) a record file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| GeoIpError::StoreUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let sink = BufWriter::new(file);

        #[cfg(feature = "compact")]
        let writer: Box<dyn Write> = Box::new(GzEncoder::new(sink, Compression::default()));

        #[cfg(not(feature = "compact"))]
        let writer: Box<dyn Write> = Box::new(sink);

        Ok(Self {
            writer,
            path: path.to_path_buf(),
            _records: PhantomData,
        })
    }

    /// Appends one record. Records come back from [`RecordReader`] in
    /// the order they were appended.
    pub fn append(&mut self, record: &T) -> Result<()> {
        codec()
            .serialize_into(&mut self.writer, record)
            .map_err(|e| GeoIpError::WriteFailed {
                path: self.path.clone(),
                source: e,
            })
    }

    /// Flushes and closes the stream. Under `compact` the gzip trailer
    /// is written when the encoder drops at the end of this call.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush().map_err(|e| GeoIpError::WriteFailed {
            path: self.path.clone(),
            source: bincode::ErrorKind::Io(e).into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeoidRecord;
    use tempfile::TempDir;

    fn write_records(path: &Path, records: &[GeoidRecord]) {
        let mut writer = RecordWriter::create(path).unwrap();
        for record in records {
            writer.append(record).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn round_trip_preserves_write_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("segment");
        let records = vec![
            GeoidRecord { low: 30, high: 40, geoid: 3 },
            GeoidRecord { low: 0, high: 10, geoid: 1 },
            GeoidRecord { low: 20, high: 25, geoid: 2 },
        ];
        write_records(&path, &records);

        let mut reader = RecordReader::<GeoidRecord>::open(&path).unwrap();
        let mut seen = Vec::new();
        while let Some(record) = reader.next_record().unwrap() {
            seen.push(record);
        }
        assert_eq!(seen, records);
    }

    #[test]
    fn end_of_stream_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty");
        write_records(&path, &[]);

        let mut reader = RecordReader::<GeoidRecord>::open(&path).unwrap();
        assert!(reader.next_record().unwrap().is_none());
        // stays at end on repeated polls
        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn missing_file_reports_store_unavailable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-file");
        match RecordReader::<GeoidRecord>::open(&path) {
            Err(GeoIpError::StoreUnavailable { path: p, .. }) => assert_eq!(p, path),
            Err(other) => panic!("expected StoreUnavailable, got {other:?}"),
            Ok(_) => panic!("expected StoreUnavailable, got a reader"),
        }
    }

    // Raw-bytes fixtures only make sense for uncompressed streams.
    #[cfg(not(feature = "compact"))]
    #[test]
    fn truncated_record_reports_corrupt_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("truncated");
        // 253 is the varint marker for a u64 to follow; the stream ends
        // before it does.
        std::fs::write(&path, [253u8]).unwrap();

        let mut reader = RecordReader::<GeoidRecord>::open(&path).unwrap();
        match reader.next_record() {
            Err(GeoIpError::CorruptRecord { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected CorruptRecord, got {other:?}"),
        }
    }
}
