//! Protocol entries and their categories.
//!
//! A [`ProtocolConfig`] describes one deployed DeFi protocol: where its
//! contract lives and where collaborators can fetch TVL or subgraph data.

use chrono::NaiveDate;
use ethers_core::types::Address;
use ethers_core::utils::to_checksum;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogueError, Result};

/// Closed set of protocol categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolCategory {
    #[serde(rename = "DEX")]
    Dex,
    Lending,
    Yield,
    Bridge,
    Derivatives,
}

impl ProtocolCategory {
    /// Every category, in declaration order.
    pub const ALL: [ProtocolCategory; 5] = [
        ProtocolCategory::Dex,
        ProtocolCategory::Lending,
        ProtocolCategory::Yield,
        ProtocolCategory::Bridge,
        ProtocolCategory::Derivatives,
    ];

    /// Canonical name as used in catalogue documents.
    pub fn as_str(self) -> &'static str {
        match self {
            ProtocolCategory::Dex => "DEX",
            ProtocolCategory::Lending => "Lending",
            ProtocolCategory::Yield => "Yield",
            ProtocolCategory::Bridge => "Bridge",
            ProtocolCategory::Derivatives => "Derivatives",
        }
    }
}

impl fmt::Display for ProtocolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolCategory {
    type Err = CatalogueError;

    /// Exact, case-sensitive match on the canonical name.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogueError::UnknownCategory(s.to_string()))
    }
}

/// Metadata for one deployed protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolConfig {
    /// Display name
    pub name: String,

    /// Main contract address. Accepted in any case, written back
    /// EIP-55 checksummed.
    #[serde(serialize_with = "serialize_checksummed")]
    pub address: Address,

    /// Opaque ABI fragments. Carried for collaborators, never decoded here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<Vec<serde_json::Value>>,

    pub category: ProtocolCategory,

    /// Endpoint that reports TVL for this protocol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvl_endpoint: Option<String>,

    /// Subgraph / indexer URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgraph_url: Option<String>,

    pub is_active: bool,

    /// Mainnet launch date (ISO `YYYY-MM-DD`)
    pub launch_date: NaiveDate,
}

impl ProtocolConfig {
    /// Create an active entry with no data endpoints.
    pub fn new(
        name: impl Into<String>,
        address: Address,
        category: ProtocolCategory,
        launch_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            address,
            abi: None,
            category,
            tvl_endpoint: None,
            subgraph_url: None,
            is_active: true,
            launch_date,
        }
    }

    #[must_use]
    pub fn with_tvl_endpoint(mut self, url: impl Into<String>) -> Self {
        self.tvl_endpoint = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_subgraph_url(mut self, url: impl Into<String>) -> Self {
        self.subgraph_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// True when the entry uses the zero address as a stand-in.
    #[inline]
    pub fn has_placeholder_address(&self) -> bool {
        self.address.is_zero()
    }

    /// EIP-55 checksummed address.
    pub fn checksum_address(&self) -> String {
        to_checksum(&self.address, None)
    }
}

fn serialize_checksummed<S: Serializer>(
    address: &Address,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_checksum(address, None))
}

/// Parse an address in any case, with or without checksum.
///
/// Lenient: surrounding whitespace is ignored and the `0x` prefix is
/// optional in either case. Catalogue lookups use [`address_matches`].
pub fn parse_address(key: &str, value: &str) -> Result<Address> {
    let trimmed = value.trim();
    let hex = match trimmed.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => &trimmed[2..],
        _ => trimmed,
    };
    if hex.len() != 40 {
        return Err(CatalogueError::InvalidAddress {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Address::from_str(hex).map_err(|_| CatalogueError::InvalidAddress {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// True when `text` spells `address` exactly, ignoring ASCII case.
///
/// The `0x` prefix is required and nothing is trimmed.
pub fn address_matches(address: &Address, text: &str) -> bool {
    to_checksum(address, None).eq_ignore_ascii_case(text)
}

/// Compile-time description of a protocol entry.
///
/// Built-in tables are written as arrays of these and converted once by
/// [`ProtocolLiteral::to_entry`].
#[derive(Debug, Clone, Copy)]
pub struct ProtocolLiteral {
    pub key: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub category: ProtocolCategory,
    pub tvl_endpoint: Option<&'static str>,
    pub subgraph_url: Option<&'static str>,
    pub is_active: bool,
    pub launch_date: &'static str,
}

impl ProtocolLiteral {
    /// Convert to a typed `(key, entry)` pair.
    pub fn to_entry(&self) -> Result<(String, ProtocolConfig)> {
        let address = parse_address(self.key, self.address)?;
        let launch_date = NaiveDate::parse_from_str(self.launch_date, "%Y-%m-%d").map_err(|_| {
            CatalogueError::InvalidDate {
                key: self.key.to_string(),
                value: self.launch_date.to_string(),
            }
        })?;

        let config = ProtocolConfig {
            name: self.name.to_string(),
            address,
            abi: None,
            category: self.category,
            tvl_endpoint: self.tvl_endpoint.map(str::to_string),
            subgraph_url: self.subgraph_url.map(str::to_string),
            is_active: self.is_active,
            launch_date,
        };
        Ok((self.key.to_string(), config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LITERAL: ProtocolLiteral = ProtocolLiteral {
        key: "aerodrome",
        name: "Aerodrome Finance",
        address: "0xcF77a3Ba9A5CA399B7c97c74d54e5b1Beb874E43",
        category: ProtocolCategory::Dex,
        tvl_endpoint: Some("https://api.aerodrome.finance/api/v1/pairs"),
        subgraph_url: None,
        is_active: true,
        launch_date: "2023-08-28",
    };

    #[test]
    fn test_category_round_trips_through_str() {
        for category in ProtocolCategory::ALL {
            assert_eq!(category.as_str().parse::<ProtocolCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_parse_is_exact() {
        assert!("dex".parse::<ProtocolCategory>().is_err());
        let err = "Options".parse::<ProtocolCategory>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown protocol category: Options");
    }

    #[test]
    fn test_category_serde_names() {
        assert_eq!(serde_json::to_value(ProtocolCategory::Dex).unwrap(), "DEX");
        assert_eq!(serde_json::to_value(ProtocolCategory::Yield).unwrap(), "Yield");
    }

    #[test]
    fn test_literal_conversion() {
        let (key, entry) = LITERAL.to_entry().unwrap();
        assert_eq!(key, "aerodrome");
        assert_eq!(entry.name, "Aerodrome Finance");
        assert_eq!(entry.launch_date, NaiveDate::from_ymd_opt(2023, 8, 28).unwrap());
        assert_eq!(entry.checksum_address(), LITERAL.address);
        assert!(entry.subgraph_url.is_none());
    }

    #[test]
    fn test_literal_bad_date() {
        let literal = ProtocolLiteral { launch_date: "2023-13-01", ..LITERAL };
        assert!(matches!(literal.to_entry(), Err(CatalogueError::InvalidDate { .. })));
    }

    #[test]
    fn test_parse_address_any_case() {
        let upper = parse_address("x", "0xCF77A3BA9A5CA399B7C97C74D54E5B1BEB874E43").unwrap();
        let lower = parse_address("x", "0xcf77a3ba9a5ca399b7c97c74d54e5b1beb874e43").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_address_upper_case_prefix() {
        let upper = parse_address("x", "0XCF77A3BA9A5CA399B7C97C74D54E5B1BEB874E43").unwrap();
        assert_eq!(to_checksum(&upper, None), LITERAL.address);
        assert_eq!(parse_address("x", " cf77a3ba9a5ca399b7c97c74d54e5b1beb874e43\n").unwrap(), upper);
    }

    #[test]
    fn test_address_matches_is_exact_up_to_case() {
        let (_, entry) = LITERAL.to_entry().unwrap();
        assert!(address_matches(&entry.address, "0XCF77A3BA9A5CA399B7C97C74D54E5B1BEB874E43"));
        assert!(address_matches(&entry.address, "0xcf77a3ba9a5ca399b7c97c74d54e5b1beb874e43"));
        assert!(!address_matches(&entry.address, "cf77a3ba9a5ca399b7c97c74d54e5b1beb874e43"));
        assert!(!address_matches(&entry.address, " 0xcf77a3ba9a5ca399b7c97c74d54e5b1beb874e43"));
    }

    #[test]
    fn test_parse_address_rejects_short() {
        assert!(parse_address("x", "0x1234").is_err());
        assert!(parse_address("x", "0xzz77a3ba9a5ca399b7c97c74d54e5b1beb874e43").is_err());
    }

    #[test]
    fn test_placeholder_detection() {
        let entry = ProtocolConfig::new(
            "Beefy Finance",
            Address::zero(),
            ProtocolCategory::Yield,
            NaiveDate::from_ymd_opt(2023, 8, 15).unwrap(),
        );
        assert!(entry.has_placeholder_address());
    }

    #[test]
    fn test_optional_fields_skipped() {
        let (_, entry) = LITERAL.to_entry().unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["isActive"], true);
        assert_eq!(json["launchDate"], "2023-08-28");
        assert!(json.get("subgraphUrl").is_none());
        assert!(json.get("abi").is_none());
    }

    #[test]
    fn test_address_serializes_checksummed() {
        let entry = ProtocolConfig::new(
            "Aerodrome Finance",
            parse_address("x", "0xcf77a3ba9a5ca399b7c97c74d54e5b1beb874e43").unwrap(),
            ProtocolCategory::Dex,
            NaiveDate::from_ymd_opt(2023, 8, 28).unwrap(),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["address"], LITERAL.address);

        let back: ProtocolConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
