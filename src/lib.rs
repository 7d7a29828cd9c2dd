//! Umbrella crate for the ipgeodb workspace.
//!
//! Re-exports `ipgeodb-core` and provides a prelude for the demo
//! programs under `demos/`. Library users should depend on
//! `ipgeodb-core` directly.

pub use ipgeodb_core::*;

pub mod prelude {
    //! ipgeodb prelude: bring common types into scope for demos.

    #![allow(unused_imports)]

    pub use ipgeodb_core::{
        parse_ip, DatabaseLayout, GeoIpDb, GeoIpError, GeoidRecord, IndexEntry, IpInfo, IpKey,
        IpVersion, KeyedRange, LocationRecord, Result,
    };
    pub use ipgeodb_core::store::{RecordReader, RecordWriter};
}
