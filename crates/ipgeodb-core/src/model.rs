// crates/ipgeodb-core/src/model.rs
use crate::traits::KeyedRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identifier of a named place; the join key between IP ranges
/// and geolocation detail records.
pub type GeoidKey = u64;

/// Ordinal position of an index entry, doubling as the name of the
/// segment file that entry points at. See
/// [`DatabaseLayout`](crate::layout::DatabaseLayout) for the coupling.
pub type SegmentId = usize;

/// Sentinel stored in every result field that has no data.
pub const UNKNOWN: &str = "Unknown";

/// One range→segment mapping in an index file.
///
/// The target segment id is NOT stored: the Nth entry of an index file
/// names the Nth segment file. `K` is `u128` for the per-version IP
/// indexes and [`GeoidKey`] for the location index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry<K> {
    pub low: K,
    pub high: K,
}

impl<K: Copy + PartialOrd> KeyedRange for IndexEntry<K> {
    type Key = K;

    fn low(&self) -> K {
        self.low
    }

    fn high(&self) -> K {
        self.high
    }
}

/// One record of a `geoid-ip{4|6}-{segment}` file: an IP range and the
/// geoid every address in that range maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoidRecord {
    pub low: u128,
    pub high: u128,
    pub geoid: GeoidKey,
}

impl KeyedRange for GeoidRecord {
    type Key = u128;

    fn low(&self) -> u128 {
        self.low
    }

    fn high(&self) -> u128 {
        self.high
    }
}

/// One record of a `location-{segment}` file: a geoid plus the 13
/// geolocation fields, in write order. An empty string means "no data".
///
/// Within a location segment, records are matched by exact geoid
/// equality, not by range containment; only the index above the
/// segment is range-shaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub geoid: GeoidKey,
    pub locale_code: String,
    pub continent_code: String,
    pub continent_name: String,
    pub country_iso_code: String,
    pub country_name: String,
    pub subdiv1_iso_code: String,
    pub subdiv1_name: String,
    pub subdiv2_iso_code: String,
    pub subdiv2_name: String,
    pub city_name: String,
    pub metro_code: String,
    pub time_zone: String,
    pub is_in_european_union: String,
}

/// Geolocation data for one IP address.
///
/// Constructed with only the address set and every field at [`UNKNOWN`];
/// a successful location lookup overwrites the fields exactly once via
/// [`IpInfo::apply`]. An address that sits in no listed subnetwork keeps
/// the defaults; that is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpInfo {
    pub ip_address: String,
    pub geoid: Option<GeoidKey>,
    pub locale_code: String,
    pub continent_code: String,
    pub continent_name: String,
    pub country_iso_code: String,
    pub country_name: String,
    pub subdiv1_iso_code: String,
    pub subdiv1_name: String,
    pub subdiv2_iso_code: String,
    pub subdiv2_name: String,
    pub city_name: String,
    pub metro_code: String,
    pub time_zone: String,
    pub is_in_european_union: String,
}

fn or_unknown(field: &str) -> String {
    if field.is_empty() {
        UNKNOWN.to_string()
    } else {
        field.to_string()
    }
}

impl IpInfo {
    /// A fresh result for `ip_address` with every field at [`UNKNOWN`]
    /// and no geoid.
    pub fn new(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            geoid: None,
            locale_code: UNKNOWN.to_string(),
            continent_code: UNKNOWN.to_string(),
            continent_name: UNKNOWN.to_string(),
            country_iso_code: UNKNOWN.to_string(),
            country_name: UNKNOWN.to_string(),
            subdiv1_iso_code: UNKNOWN.to_string(),
            subdiv1_name: UNKNOWN.to_string(),
            subdiv2_iso_code: UNKNOWN.to_string(),
            subdiv2_name: UNKNOWN.to_string(),
            city_name: UNKNOWN.to_string(),
            metro_code: UNKNOWN.to_string(),
            time_zone: UNKNOWN.to_string(),
            is_in_european_union: UNKNOWN.to_string(),
        }
    }

    /// Copies the 13 geolocation fields out of a matched record.
    ///
    /// Every empty field normalizes to [`UNKNOWN`]; the rule is uniform
    /// across all 13 fields. The caller sets `geoid` separately, when
    /// the geoid stage succeeds.
    pub fn apply(&mut self, record: &LocationRecord) {
        self.locale_code = or_unknown(&record.locale_code);
        self.continent_code = or_unknown(&record.continent_code);
        self.continent_name = or_unknown(&record.continent_name);
        self.country_iso_code = or_unknown(&record.country_iso_code);
        self.country_name = or_unknown(&record.country_name);
        self.subdiv1_iso_code = or_unknown(&record.subdiv1_iso_code);
        self.subdiv1_name = or_unknown(&record.subdiv1_name);
        self.subdiv2_iso_code = or_unknown(&record.subdiv2_iso_code);
        self.subdiv2_name = or_unknown(&record.subdiv2_name);
        self.city_name = or_unknown(&record.city_name);
        self.metro_code = or_unknown(&record.metro_code);
        self.time_zone = or_unknown(&record.time_zone);
        self.is_in_european_union = or_unknown(&record.is_in_european_union);
    }
}

impl fmt::Display for IpInfo {
    /// Multi-line text rendering with fixed labels and ordering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IP address: {}", self.ip_address)?;
        writeln!(f, "Locale code: {}", self.locale_code)?;
        writeln!(f, "Continent: {} ({})", self.continent_name, self.continent_code)?;
        writeln!(f, "Country: {} ({})", self.country_name, self.country_iso_code)?;
        writeln!(f, "Subdivision 1: {} ({})", self.subdiv1_name, self.subdiv1_iso_code)?;
        writeln!(f, "Subdivision 2: {} ({})", self.subdiv2_name, self.subdiv2_iso_code)?;
        writeln!(f, "City: {}", self.city_name)?;
        writeln!(f, "Metro code: {}", self.metro_code)?;
        writeln!(f, "Time zone: {}", self.time_zone)?;
        write!(f, "Is in European Union: {}", self.is_in_european_union)
    }
}
