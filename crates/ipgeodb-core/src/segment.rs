// crates/ipgeodb-core/src/segment.rs

//! # Segment Scanner
//!
//! Finds one record inside one segment file. The scanner knows nothing
//! about keys or ranges; the caller hands it the match predicate:
//! range containment for geoid segments, exact geoid equality for
//! location segments.

use crate::error::{GeoIpError, Result};
use crate::store::RecordReader;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Scans a segment file in file order and returns the first record
/// satisfying `matches`, or `Ok(None)` when the stream ends without a
/// match.
///
/// Whether an empty result is tolerable is the caller's decision: the
/// geoid stage treats it as "address in no listed subnetwork", the
/// location stage as a broken database. A missing segment file is
/// always fatal ([`GeoIpError::SegmentUnavailable`]): an index entry
/// named it, so it should exist.
pub fn find_record<T, F>(path: &Path, mut matches: F) -> Result<Option<T>>
where
    T: DeserializeOwned,
    F: FnMut(&T) -> bool,
{
    let mut records = RecordReader::<T>::open(path).map_err(|e| match e {
        GeoIpError::StoreUnavailable { path, source } => {
            GeoIpError::SegmentUnavailable { path, source }
        }
        other => other,
    })?;

    while let Some(record) = records.next_record()? {
        if matches(&record) {
            return Ok(Some(record));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeoidRecord;
    use crate::store::RecordWriter;
    use crate::traits::KeyedRange;
    use tempfile::TempDir;

    fn write_segment(path: &Path, records: &[GeoidRecord]) {
        let mut writer = RecordWriter::create(path).unwrap();
        for record in records {
            writer.append(record).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn returns_first_match_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("segment");
        write_segment(
            &path,
            &[
                GeoidRecord { low: 0, high: 100, geoid: 1 },
                GeoidRecord { low: 0, high: 100, geoid: 2 },
            ],
        );

        let hit = find_record::<GeoidRecord, _>(&path, |r| r.contains(50)).unwrap();
        assert_eq!(hit.unwrap().geoid, 1);
    }

    #[test]
    fn exhaustion_is_none_not_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("segment");
        write_segment(&path, &[GeoidRecord { low: 0, high: 10, geoid: 1 }]);

        let hit = find_record::<GeoidRecord, _>(&path, |r| r.contains(500)).unwrap();
        assert!(hit.is_none());
    }

    #[test]
    fn missing_segment_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("segment");
        match find_record::<GeoidRecord, _>(&path, |_| true) {
            Err(GeoIpError::SegmentUnavailable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected SegmentUnavailable, got {other:?}"),
        }
    }
}
