// crates/ipgeodb-core/src/render.rs

//! JSON view of a query result.
//!
//! Kept apart from the model so the `json` feature gates serde_json in
//! one place. The text rendering lives on `Display` in `model.rs`.

use crate::model::IpInfo;
use serde::Serialize;

/// `{code, name}` pair for the nested objects.
#[derive(Serialize)]
struct NamedCode<'a> {
    code: &'a str,
    name: &'a str,
}

/// Serialization view of [`IpInfo`].
///
/// Fields are declared in alphabetical key order; serde_json emits in
/// declaration order, which yields sorted keys without a re-sort pass.
#[derive(Serialize)]
struct IpInfoView<'a> {
    city: &'a str,
    continent: NamedCode<'a>,
    country: NamedCode<'a>,
    ip_address: &'a str,
    is_in_european_union: &'a str,
    locale_code: &'a str,
    metro_code: &'a str,
    subdivision1: NamedCode<'a>,
    subdivision2: NamedCode<'a>,
    time_zone: &'a str,
}

impl IpInfo {
    /// Renders the result as pretty-printed JSON: alphabetically sorted
    /// keys, 2-space indentation, the same field values as the text
    /// rendering. The geoid is an internal join key and stays out of
    /// the output.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&IpInfoView {
            city: &self.city_name,
            continent: NamedCode {
                code: &self.continent_code,
                name: &self.continent_name,
            },
            country: NamedCode {
                code: &self.country_iso_code,
                name: &self.country_name,
            },
            ip_address: &self.ip_address,
            is_in_european_union: &self.is_in_european_union,
            locale_code: &self.locale_code,
            metro_code: &self.metro_code,
            subdivision1: NamedCode {
                code: &self.subdiv1_iso_code,
                name: &self.subdiv1_name,
            },
            subdivision2: NamedCode {
                code: &self.subdiv2_iso_code,
                name: &self.subdiv2_name,
            },
            time_zone: &self.time_zone,
        })
    }
}
