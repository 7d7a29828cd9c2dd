// crates/ipgeodb-core/src/db.rs

//! # Lookup Pipeline
//!
//! Chains two range lookups, address to geoid and then geoid to
//! location, into the single public entry point [`GeoIpDb::query`].
//! Each stage is a range-index scan that names a segment, followed by
//! a scan of that segment.

use crate::addr::{parse_ip, IpKey};
use crate::error::{GeoIpError, Result};
use crate::index;
use crate::layout::DatabaseLayout;
use crate::model::{GeoidKey, GeoidRecord, IndexEntry, IpInfo, LocationRecord};
use crate::segment;
use crate::traits::KeyedRange;
use log::debug;
use std::path::PathBuf;

/// Read-only handle on a segmented geolocation database.
///
/// Holds no open files and no state beyond the root directory; every
/// call opens, scans and releases exactly the files it needs. One value
/// can be cloned and shared freely across threads as long as the
/// database directory stays immutable underneath it.
#[derive(Debug, Clone)]
pub struct GeoIpDb {
    layout: DatabaseLayout,
}

impl GeoIpDb {
    /// A handle on the database rooted at `root`. Nothing is opened or
    /// validated here; the files are touched lazily, per query.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self {
            layout: DatabaseLayout::new(root),
        }
    }

    /// A handle on the stock `./database` directory.
    pub fn open_default() -> Self {
        Self::open(DatabaseLayout::default_root())
    }

    pub fn layout(&self) -> &DatabaseLayout {
        &self.layout
    }

    /// Geolocation data for a textual IP address.
    ///
    /// An address in no listed subnetwork returns the default-valued
    /// [`IpInfo`] (every field `"Unknown"`, no geoid); that is success,
    /// not error. Unparseable input reports
    /// [`GeoIpError::InvalidAddress`] before any file is opened.
    pub fn query(&self, address: &str) -> Result<IpInfo> {
        let key = parse_ip(address)?;
        let mut info = IpInfo::new(address);

        let Some(geoid) = self.resolve_geoid(key)? else {
            // No listed subnetwork covers this address; the defaults
            // ARE the answer.
            return Ok(info);
        };
        info.geoid = Some(geoid);

        let record = self.resolve_location(geoid)?;
        info.apply(&record);
        Ok(info)
    }

    /// Maps an IP integer to its geoid, or `None` when the address sits
    /// in no listed subnetwork.
    ///
    /// The segment file is opened only after the index names it. An
    /// index entry pointing at a segment that turns out not to contain
    /// the key is a tolerated data gap, reported as `None` like an
    /// index miss.
    fn resolve_geoid(&self, key: IpKey) -> Result<Option<GeoidKey>> {
        let index_path = self.layout.geoid_index(key.version);
        let Some(seg) = index::resolve_segment::<IndexEntry<u128>>(&index_path, key.value)?
        else {
            debug!("ip {} (v{}) outside every index range", key.value, key.version);
            return Ok(None);
        };

        let segment_path = self.layout.geoid_segment(key.version, seg);
        debug!("ip {} -> geoid segment {}", key.value, segment_path.display());

        let hit = segment::find_record::<GeoidRecord, _>(&segment_path, |r| r.contains(key.value))?;
        Ok(hit.map(|r| r.geoid))
    }

    /// Maps a geoid to its location record.
    ///
    /// A geoid produced by the geoid stage is guaranteed a match by
    /// construction of the database, so coming up empty at either step
    /// here means the database itself is broken
    /// ([`GeoIpError::DatabaseInconsistent`]), an explicit terminal
    /// state rather than an unbounded scan.
    fn resolve_location(&self, geoid: GeoidKey) -> Result<LocationRecord> {
        let index_path = self.layout.location_index();
        let seg = index::resolve_segment::<IndexEntry<GeoidKey>>(&index_path, geoid)?
            .ok_or_else(|| {
                GeoIpError::DatabaseInconsistent(format!(
                    "geoid {geoid} outside every location index range"
                ))
            })?;

        let segment_path = self.layout.location_segment(seg);
        debug!("geoid {} -> location segment {}", geoid, segment_path.display());

        // Location records match by exact geoid equality; only the
        // index above is range-shaped.
        segment::find_record::<LocationRecord, _>(&segment_path, |r| r.geoid == geoid)?
            .ok_or_else(|| {
                GeoIpError::DatabaseInconsistent(format!(
                    "location segment {seg} holds no record for geoid {geoid}"
                ))
            })
    }
}
