// crates/ipgeodb-core/src/index.rs

//! # Range Index
//!
//! Maps a lookup key to the segment expected to hold it. An index file
//! is a stream of [`IndexEntry`](crate::model::IndexEntry) records; the
//! ordinal position of an entry IS the id of the segment it points at.

use crate::error::{GeoIpError, Result};
use crate::model::SegmentId;
use crate::store::RecordReader;
use crate::traits::KeyedRange;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Scans an index file in file order and returns the ordinal position
/// of the first entry whose range contains `key`.
///
/// `Ok(None)` means the key lies outside every listed range, the
/// normal "no data for this key" outcome, not an error. A missing or
/// unreadable index file is fatal ([`GeoIpError::IndexUnavailable`]):
/// a valid database always carries its indexes.
///
/// Entries are not assumed sorted, and overlap is never checked; the
/// first containing entry in file order wins.
pub fn resolve_segment<R>(path: &Path, key: R::Key) -> Result<Option<SegmentId>>
where
    R: KeyedRange + DeserializeOwned,
{
    let mut entries = RecordReader::<R>::open(path).map_err(|e| match e {
        GeoIpError::StoreUnavailable { path, source } => {
            GeoIpError::IndexUnavailable { path, source }
        }
        other => other,
    })?;

    let mut segment: SegmentId = 0;
    while let Some(entry) = entries.next_record()? {
        if entry.contains(key) {
            return Ok(Some(segment));
        }
        segment += 1;
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IndexEntry;
    use crate::store::RecordWriter;
    use tempfile::TempDir;

    fn write_index(path: &Path, entries: &[IndexEntry<u128>]) {
        let mut writer = RecordWriter::create(path).unwrap();
        for entry in entries {
            writer.append(entry).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn segment_id_is_the_entry_ordinal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index");
        write_index(
            &path,
            &[
                IndexEntry { low: 0, high: 9 },
                IndexEntry { low: 10, high: 19 },
                IndexEntry { low: 20, high: 29 },
            ],
        );

        assert_eq!(resolve_segment::<IndexEntry<u128>>(&path, 5).unwrap(), Some(0));
        assert_eq!(resolve_segment::<IndexEntry<u128>>(&path, 10).unwrap(), Some(1));
        assert_eq!(resolve_segment::<IndexEntry<u128>>(&path, 29).unwrap(), Some(2));
    }

    #[test]
    fn miss_is_none_not_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index");
        write_index(&path, &[IndexEntry { low: 0, high: 9 }]);

        assert_eq!(resolve_segment::<IndexEntry<u128>>(&path, 100).unwrap(), None);
    }

    #[test]
    fn unsorted_entries_still_resolve() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index");
        // Sortedness is a property of the generator, not of the lookup.
        write_index(
            &path,
            &[
                IndexEntry { low: 50, high: 59 },
                IndexEntry { low: 0, high: 9 },
            ],
        );

        assert_eq!(resolve_segment::<IndexEntry<u128>>(&path, 5).unwrap(), Some(1));
        assert_eq!(resolve_segment::<IndexEntry<u128>>(&path, 55).unwrap(), Some(0));
    }

    #[test]
    fn overlapping_entries_resolve_to_first_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index");
        write_index(
            &path,
            &[
                IndexEntry { low: 0, high: 100 },
                IndexEntry { low: 40, high: 60 },
            ],
        );

        assert_eq!(resolve_segment::<IndexEntry<u128>>(&path, 50).unwrap(), Some(0));
    }

    #[test]
    fn missing_index_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index");
        match resolve_segment::<IndexEntry<u128>>(&path, 5) {
            Err(GeoIpError::IndexUnavailable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected IndexUnavailable, got {other:?}"),
        }
    }
}
