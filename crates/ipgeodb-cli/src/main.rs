//! ipgeodb-cli — Command-line interface for ipgeodb-core
//!
//! This binary resolves IP addresses against a pre-built, segmented
//! geolocation database on disk. It prints a fixed multi-line text
//! rendering by default, or JSON with `--json`.
//!
//! Usage examples
//! --------------
//!
//! - Look up an address against the stock `./database` directory
//!   $ ipgeodb-cli query 1.2.3.4
//!
//! - Same lookup, JSON output
//!   $ ipgeodb-cli query 1.2.3.4 --json
//!
//! - Point at a database somewhere else
//!   $ ipgeodb-cli --database /var/lib/ipgeodb query 2001:db8::1
//!
//! - Show which index files a lookup would start from
//!   $ ipgeodb-cli files 1.2.3.4
//!
//! Stage-level traces are available through the standard `RUST_LOG`
//! environment variable, e.g. `RUST_LOG=debug ipgeodb-cli query ...`.
//!
//! Exit behavior
//! -------------
//!
//! An address in no listed subnetwork is NOT an error; it prints a
//! result with every field "Unknown". Invalid input, missing database
//! files and inconsistent databases abort with distinct messages.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use ipgeodb_core::{parse_ip, DatabaseLayout, GeoIpDb};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    // Determine the database root (default: ./database)
    let root = args
        .database
        .map(std::path::PathBuf::from)
        .unwrap_or_else(DatabaseLayout::default_root);
    let db = GeoIpDb::open(root);

    match args.command {
        #[cfg(feature = "json")]
        Commands::Query { address, json } => {
            let info = db.query(&address)?;
            if json {
                println!("{}", info.to_json()?);
            } else {
                println!("{info}");
            }
        }

        #[cfg(not(feature = "json"))]
        Commands::Query { address } => {
            let info = db.query(&address)?;
            println!("{info}");
        }

        Commands::Files { address } => {
            let key = parse_ip(&address)?;
            let layout = db.layout();
            println!("Database root: {}", layout.root().display());
            println!("Geoid index: {}", layout.geoid_index(key.version).display());
            println!("Location index: {}", layout.location_index().display());
        }
    }

    Ok(())
}
