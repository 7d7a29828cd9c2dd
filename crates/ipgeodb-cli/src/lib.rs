//! ipgeodb-cli
//! ===========
//!
//! Command-line interface for the `ipgeodb-core` IP geolocation
//! database.
//!
//! This crate primarily provides a binary (`ipgeodb-cli`). We include a
//! small library target so that docs.rs renders a documentation page
//! and shows this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install ipgeodb-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! ipgeodb-cli --help
//! ipgeodb-cli query 1.2.3.4
//! ipgeodb-cli query 2001:db8::1 --json
//! ipgeodb-cli --database /var/lib/ipgeodb files 1.2.3.4
//! ```
//!
//! For programmatic access to the lookup engine, use the
//! [`ipgeodb-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the
// primary deliverable. The presence of this file enables a rendered
// page on docs.rs.
