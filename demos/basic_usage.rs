//! Basic usage example for ipgeodb
//!
//! This example demonstrates how to:
//! - Lay out a small database on disk
//! - Open it and query addresses
//! - Read the text and JSON renderings
//!
//! The database is written into a throwaway directory under the system
//! temp dir, so the example is self-contained.

use ipgeodb::prelude::*;
use std::path::Path;

fn write_records<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut writer = RecordWriter::create(path)?;
    for record in records {
        writer.append(record)?;
    }
    writer.finish()
}

fn build_demo_database(root: &Path) -> Result<GeoIpDb> {
    std::fs::create_dir_all(root).expect("temp dir is writable");
    let db = GeoIpDb::open(root);
    let layout = db.layout().clone();

    // One IPv4 subnetwork 1.2.3.0 - 1.2.3.255 mapping to geoid 5128581
    // (New York City), location stored in segment 0.
    let low = u128::from(u32::from("1.2.3.0".parse::<std::net::Ipv4Addr>().unwrap()));
    let high = u128::from(u32::from("1.2.3.255".parse::<std::net::Ipv4Addr>().unwrap()));

    write_records(
        &layout.geoid_index(IpVersion::V4),
        &[IndexEntry { low, high }],
    )?;
    write_records(
        &layout.geoid_segment(IpVersion::V4, 0),
        &[GeoidRecord { low, high, geoid: 5128581 }],
    )?;
    write_records(
        &layout.location_index(),
        &[IndexEntry { low: 5128581u64, high: 5128581 }],
    )?;
    write_records(
        &layout.location_segment(0),
        &[LocationRecord {
            geoid: 5128581,
            locale_code: "en".into(),
            continent_code: "NA".into(),
            continent_name: "North America".into(),
            country_iso_code: "US".into(),
            country_name: "United States".into(),
            subdiv1_iso_code: "NY".into(),
            subdiv1_name: "New York".into(),
            subdiv2_iso_code: "".into(),
            subdiv2_name: "".into(),
            city_name: "New York".into(),
            metro_code: "501".into(),
            time_zone: "America/New_York".into(),
            is_in_european_union: "false".into(),
        }],
    )?;

    Ok(db)
}

fn main() -> Result<()> {
    println!("=== ipgeodb Basic Usage Example ===\n");

    let root = std::env::temp_dir().join("ipgeodb-basic-usage");
    println!("Writing demo database to {} ...", root.display());
    let db = build_demo_database(&root)?;
    println!("✓ Database written\n");

    // Example 1: a full two-stage lookup
    println!("--- Example 1: Address inside a listed subnetwork ---");
    let info = db.query("1.2.3.4")?;
    println!("{info}\n");

    // Example 2: an address the database knows nothing about
    println!("--- Example 2: Address in no listed subnetwork ---");
    let info = db.query("9.9.9.9")?;
    println!("Geoid: {:?}", info.geoid);
    println!("City: {}", info.city_name);
    println!("(every field defaults to \"Unknown\")\n");

    // Example 3: JSON rendering
    println!("--- Example 3: JSON rendering ---");
    let info = db.query("1.2.3.4")?;
    println!("{}", info.to_json().expect("plain strings serialize"));

    Ok(())
}
