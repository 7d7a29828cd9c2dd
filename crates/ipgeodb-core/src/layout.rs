// crates/ipgeodb-core/src/layout.rs
use crate::addr::IpVersion;
use crate::model::SegmentId;
use std::path::{Path, PathBuf};

/// File naming scheme of an on-disk database.
///
/// A database is one flat directory:
///
/// ```text
/// index-geoid-ip4        ranges of IPv4 integers -> geoid segments
/// index-geoid-ip6        ranges of IPv6 integers -> geoid segments
/// geoid-ip{4|6}-{N}      (low, high, geoid) records
/// index-location         ranges of geoids -> location segments
/// location-{N}           (geoid, 13 fields) records
/// ```
///
/// Segment files are named by the ordinal position of the index entry
/// that points at them; nothing in the files records the coupling. It
/// is positional and global, a latent fragility of the layout, so all
/// path construction lives here and nowhere else.
#[derive(Debug, Clone)]
pub struct DatabaseLayout {
    root: PathBuf,
}

impl DatabaseLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The stock relative location a deployment drops the files into.
    pub fn default_root() -> PathBuf {
        PathBuf::from("database")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `index-geoid-ip{4|6}`: the range index over IP integers for one
    /// protocol version.
    pub fn geoid_index(&self, version: IpVersion) -> PathBuf {
        self.root.join(format!("index-geoid-ip{version}"))
    }

    /// `geoid-ip{4|6}-{segment}`: one geoid segment file.
    pub fn geoid_segment(&self, version: IpVersion, segment: SegmentId) -> PathBuf {
        self.root.join(format!("geoid-ip{version}-{segment}"))
    }

    /// `index-location`: the range index over geoids.
    pub fn location_index(&self) -> PathBuf {
        self.root.join("index-location")
    }

    /// `location-{segment}`: one location segment file.
    pub fn location_segment(&self, segment: SegmentId) -> PathBuf {
        self.root.join(format!("location-{segment}"))
    }
}
