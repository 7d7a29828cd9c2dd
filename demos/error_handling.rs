//! Error handling example for ipgeodb
//!
//! This example demonstrates the failure taxonomy: invalid input,
//! missing database files, and an inconsistent database, plus the one
//! outcome that is NOT an error, the default-valued result.

use ipgeodb::prelude::*;
use std::path::Path;

fn write_records<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut writer = RecordWriter::create(path)?;
    for record in records {
        writer.append(record)?;
    }
    writer.finish()
}

fn main() -> Result<()> {
    println!("=== ipgeodb Error Handling Example ===\n");

    // Example 1: invalid input never reaches the filesystem
    println!("--- Example 1: Invalid address text ---");
    let db = GeoIpDb::open("/nonexistent/database");
    match db.query("not-an-ip") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: a missing database is fatal, not empty
    println!("--- Example 2: Missing database directory ---");
    match db.query("1.2.3.4") {
        Ok(_) => println!("  unexpected success"),
        Err(e @ GeoIpError::IndexUnavailable { .. }) => println!("  ✗ {e}"),
        Err(e) => println!("  ✗ unexpected kind: {e}"),
    }
    println!();

    // A minimal real database for the remaining examples.
    let root = std::env::temp_dir().join("ipgeodb-error-handling");
    std::fs::create_dir_all(&root).expect("temp dir is writable");
    let db = GeoIpDb::open(&root);
    let layout = db.layout().clone();
    write_records(
        &layout.geoid_index(IpVersion::V4),
        &[IndexEntry { low: 0u128, high: 255 }],
    )?;
    write_records(
        &layout.geoid_segment(IpVersion::V4, 0),
        &[GeoidRecord { low: 0, high: 255, geoid: 42 }],
    )?;
    write_records(
        &layout.location_index(),
        &[IndexEntry { low: 0u64, high: 100 }],
    )?;
    // Deliberately wrong: segment 0 holds no record for geoid 42.
    let no_locations: [LocationRecord; 0] = [];
    write_records(&layout.location_segment(0), &no_locations)?;

    // Example 3: "no data" is a result, not an error
    println!("--- Example 3: Address in no listed subnetwork ---");
    let info = db.query("9.9.9.9")?;
    println!("  ✓ geoid = {:?}, city = {}", info.geoid, info.city_name);
    println!();

    // Example 4: an index pointing at data that is not there
    println!("--- Example 4: Inconsistent database ---");
    match db.query("0.0.0.7") {
        Ok(_) => println!("  unexpected success"),
        Err(e @ GeoIpError::DatabaseInconsistent(_)) => println!("  ✗ {e}"),
        Err(e) => println!("  ✗ unexpected kind: {e}"),
    }

    Ok(())
}
