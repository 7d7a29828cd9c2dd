// crates/ipgeodb-core/src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by database lookups.
///
/// "Key in no listed range" is deliberately NOT an error: it is the
/// normal outcome of querying a sparse database and is modelled as
/// `Ok(None)` inside the engine and as a default-valued
/// [`IpInfo`](crate::model::IpInfo) at the surface.
///
/// None of these are retried; the database is static, so a failed read
/// will not succeed on a second attempt.
#[derive(Debug, Error)]
pub enum GeoIpError {
    /// The query text is not a valid IPv4 or IPv6 address.
    /// Raised before any file is touched.
    #[error("invalid IP address ({0})")]
    InvalidAddress(String),

    /// A record file could not be opened. The index and segment layers
    /// re-brand this into [`IndexUnavailable`](Self::IndexUnavailable)
    /// or [`SegmentUnavailable`](Self::SegmentUnavailable).
    #[error("record file not found at {path}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record could not be decoded. Distinct from a missing file:
    /// the bytes are there, they just do not form a record.
    #[error("corrupt record in {path}")]
    CorruptRecord {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// A record could not be written. Only the write side of the store
    /// reports this.
    #[error("failed to write record to {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// An index file is missing or unreadable. A valid database always
    /// carries its indexes, so this is fatal to the whole lookup and
    /// distinct from "key not found".
    #[error("index file not found on database: {path}")]
    IndexUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A segment file named by an index entry is missing or unreadable.
    /// The path carries the IP version and segment ordinal, which is
    /// what a broken deployment needs for diagnosis.
    #[error("segment file not found on database: {path}")]
    SegmentUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An index pointed at a segment that yielded no match where one
    /// was structurally guaranteed.
    #[error("database inconsistent: {0}")]
    DatabaseInconsistent(String),
}

pub type Result<T> = std::result::Result<T, GeoIpError>;
