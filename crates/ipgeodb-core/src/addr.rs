// crates/ipgeodb-core/src/addr.rs
use crate::error::{GeoIpError, Result};
use std::fmt;
use std::net::IpAddr;

/// IP protocol version of a parsed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Numeric tag used in database file names (`ip4` / `ip6`).
    pub fn number(self) -> u8 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// An IP address reduced to its integer form plus version tag.
///
/// Produced only by [`parse_ip`] and immutable afterwards. IPv4 values
/// occupy the low 32 bits; `u128` covers both versions so the lookup
/// pipeline stays version-agnostic past the file-naming boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpKey {
    pub value: u128,
    pub version: IpVersion,
}

/// Parses the textual form of an IPv4 or IPv6 address into an [`IpKey`].
///
/// Anything `std::net::IpAddr` rejects is reported as
/// [`GeoIpError::InvalidAddress`] carrying the offending text, before
/// any file I/O happens.
pub fn parse_ip(text: &str) -> Result<IpKey> {
    match text.parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => Ok(IpKey {
            value: u128::from(u32::from(addr)),
            version: IpVersion::V4,
        }),
        Ok(IpAddr::V6(addr)) => Ok(IpKey {
            value: u128::from(addr),
            version: IpVersion::V6,
        }),
        Err(_) => Err(GeoIpError::InvalidAddress(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ipv4_to_integer() {
        let key = parse_ip("1.2.3.4").unwrap();
        assert_eq!(key.version, IpVersion::V4);
        assert_eq!(key.value, 0x01020304);
    }

    #[test]
    fn parses_ipv4_low_values() {
        assert_eq!(parse_ip("0.0.0.15").unwrap().value, 15);
        assert_eq!(parse_ip("0.0.1.244").unwrap().value, 500);
    }

    #[test]
    fn parses_ipv6_to_integer() {
        let key = parse_ip("::1").unwrap();
        assert_eq!(key.version, IpVersion::V6);
        assert_eq!(key.value, 1);

        let key = parse_ip("2001:db8::1").unwrap();
        assert_eq!(key.value, 0x2001_0db8_0000_0000_0000_0000_0000_0001);
    }

    #[test]
    fn rejects_invalid_text() {
        for text in ["not-an-ip", "", "300.1.2.3", "1.2.3", "1.2.3.4.5", "::g"] {
            match parse_ip(text) {
                Err(GeoIpError::InvalidAddress(t)) => assert_eq!(t, text),
                other => panic!("expected InvalidAddress for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn version_numbers_match_file_naming() {
        assert_eq!(IpVersion::V4.number(), 4);
        assert_eq!(IpVersion::V6.number(), 6);
        assert_eq!(IpVersion::V6.to_string(), "6");
    }
}
