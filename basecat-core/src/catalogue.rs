//! Protocol catalogue and its query surface.
//!
//! The catalogue holds four source tables (DEX, Lending, Yield, Bridge).
//! Every query runs over the merged view produced by
//! [`ProtocolCatalogue::all_protocols`], which applies the tables in
//! [`MERGE_ORDER`]: on a key collision the later table wins, while the key
//! keeps the position of its first insertion.
//!
//! # Example
//!
//! ```rust
//! use basecat_core::{ProtocolCatalogue, ProtocolCategory};
//!
//! let catalogue = ProtocolCatalogue::builtin().unwrap();
//!
//! let lending = catalogue.protocols_by_category(ProtocolCategory::Lending);
//! assert!(lending.contains_key("aaveV3"));
//!
//! let aerodrome = catalogue
//!     .protocol_by_address("0xcf77a3ba9a5ca399b7c97c74d54e5b1beb874e43")
//!     .unwrap();
//! assert_eq!(aerodrome.name, "Aerodrome Finance");
//! ```

use ethers_core::types::Address;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, warn};

use crate::builtin;
use crate::error::{CatalogueError, Result};
use crate::protocol::{address_matches, ProtocolCategory, ProtocolConfig, ProtocolLiteral};
use crate::urls::{check_url, HTTP_SCHEMES};

/// One of the four source tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Dex,
    Lending,
    Yield,
    Bridge,
}

/// Order in which source tables are merged. Later tables win key collisions.
pub const MERGE_ORDER: [TableKind; 4] = [
    TableKind::Dex,
    TableKind::Lending,
    TableKind::Yield,
    TableKind::Bridge,
];

impl TableKind {
    /// Category every entry of this table must declare.
    pub fn category(self) -> ProtocolCategory {
        match self {
            TableKind::Dex => ProtocolCategory::Dex,
            TableKind::Lending => ProtocolCategory::Lending,
            TableKind::Yield => ProtocolCategory::Yield,
            TableKind::Bridge => ProtocolCategory::Bridge,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TableKind::Dex => "dex",
            TableKind::Lending => "lending",
            TableKind::Yield => "yield",
            TableKind::Bridge => "bridge",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Source table
// ============================================================================

/// Insertion-ordered mapping from protocol key to entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtocolTable {
    entries: Vec<(String, ProtocolConfig)>,
}

impl ProtocolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from literals, rejecting repeated keys.
    pub fn from_literals(kind: TableKind, literals: &[ProtocolLiteral]) -> Result<Self> {
        let mut table = Self::new();
        for literal in literals {
            let (key, config) = literal.to_entry()?;
            if table.contains_key(&key) {
                return Err(CatalogueError::DuplicateKey { key, table: kind });
            }
            table.insert(key, config);
        }
        Ok(table)
    }

    /// Insert or replace. A replaced key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, config: ProtocolConfig) -> Option<ProtocolConfig> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, config)),
            None => {
                self.entries.push((key, config));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, config: ProtocolConfig) -> Self {
        self.insert(key, config);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ProtocolConfig> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProtocolConfig)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for ProtocolTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for ProtocolTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = ProtocolTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of protocol keys to protocol entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
                let mut table = ProtocolTable::new();
                while let Some((key, config)) = map.next_entry::<String, ProtocolConfig>()? {
                    table.insert(key, config);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

// ============================================================================
// Merged view
// ============================================================================

/// Read-only, insertion-ordered view over catalogue entries.
///
/// Borrowed from a [`ProtocolCatalogue`]; entries cannot be mutated through it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtocolMap<'a> {
    entries: Vec<(&'a str, &'a ProtocolConfig)>,
}

impl<'a> ProtocolMap<'a> {
    /// Last write wins; an existing key keeps its slot.
    fn merge(&mut self, key: &'a str, config: &'a ProtocolConfig) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = config,
            None => self.entries.push((key, config)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a ProtocolConfig> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a ProtocolConfig)> + '_ {
        self.entries.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn values(&self) -> impl Iterator<Item = &'a ProtocolConfig> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    /// Keep the entries matching `predicate`, preserving order.
    #[must_use]
    pub fn filter(&self, predicate: impl Fn(&ProtocolConfig) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(_, v)| predicate(v))
                .copied()
                .collect(),
        }
    }
}

impl Serialize for ProtocolMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, config) in &self.entries {
            map.serialize_entry(key, config)?;
        }
        map.end()
    }
}

/// Keys that declare the same contract address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressConflict {
    pub address: Address,
    /// Keys in merge order
    pub keys: Vec<String>,
}

impl AddressConflict {
    /// True when the shared address is the zero placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.address.is_zero()
    }
}

// ============================================================================
// Catalogue
// ============================================================================

/// The four protocol tables and the queries over their union.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtocolCatalogue {
    #[serde(default)]
    dex: ProtocolTable,
    #[serde(default)]
    lending: ProtocolTable,
    #[serde(default, rename = "yield")]
    yields: ProtocolTable,
    #[serde(default)]
    bridge: ProtocolTable,
}

impl ProtocolCatalogue {
    /// Assemble a catalogue from explicit tables.
    pub fn new(
        dex: ProtocolTable,
        lending: ProtocolTable,
        yields: ProtocolTable,
        bridge: ProtocolTable,
    ) -> Self {
        Self {
            dex,
            lending,
            yields,
            bridge,
        }
    }

    /// The built-in Base mainnet protocol tables.
    pub fn builtin() -> Result<Self> {
        let catalogue = Self::new(
            ProtocolTable::from_literals(TableKind::Dex, builtin::DEX_PROTOCOLS)?,
            ProtocolTable::from_literals(TableKind::Lending, builtin::LENDING_PROTOCOLS)?,
            ProtocolTable::from_literals(TableKind::Yield, builtin::YIELD_PROTOCOLS)?,
            ProtocolTable::from_literals(TableKind::Bridge, builtin::BRIDGE_PROTOCOLS)?,
        );
        debug!("Built protocol catalogue with {} entries", catalogue.all_protocols().len());
        Ok(catalogue)
    }

    /// One source table.
    pub fn table(&self, kind: TableKind) -> &ProtocolTable {
        match kind {
            TableKind::Dex => &self.dex,
            TableKind::Lending => &self.lending,
            TableKind::Yield => &self.yields,
            TableKind::Bridge => &self.bridge,
        }
    }

    /// Union of all tables in [`MERGE_ORDER`].
    ///
    /// A key present in several tables maps to the entry of the last one.
    pub fn all_protocols(&self) -> ProtocolMap<'_> {
        let mut merged = ProtocolMap::default();
        for kind in MERGE_ORDER {
            for (key, config) in self.table(kind).iter() {
                merged.merge(key, config);
            }
        }
        merged
    }

    /// Entry for `key` in the merged view.
    pub fn get(&self, key: &str) -> Option<&ProtocolConfig> {
        self.all_protocols().get(key)
    }

    /// Merged entries whose category equals `category`.
    pub fn protocols_by_category(&self, category: ProtocolCategory) -> ProtocolMap<'_> {
        self.all_protocols().filter(|p| p.category == category)
    }

    /// Like [`protocols_by_category`](Self::protocols_by_category) for untyped
    /// input. Unrecognized names yield an empty map.
    pub fn protocols_by_category_name(&self, name: &str) -> ProtocolMap<'_> {
        match name.parse::<ProtocolCategory>() {
            Ok(category) => self.protocols_by_category(category),
            Err(_) => ProtocolMap::default(),
        }
    }

    /// Merged entries flagged active.
    pub fn active_protocols(&self) -> ProtocolMap<'_> {
        self.all_protocols().filter(|p| p.is_active)
    }

    /// First merged entry whose address equals `address`, ignoring case.
    ///
    /// The input must be the full `0x`-prefixed address; anything else
    /// finds nothing. When several entries share an address, the earliest
    /// in merge order is returned.
    pub fn protocol_by_address(&self, address: &str) -> Option<&ProtocolConfig> {
        self.all_protocols()
            .values()
            .find(|p| address_matches(&p.address, address))
    }

    /// [`protocol_by_address`](Self::protocol_by_address) for a parsed address.
    pub fn find_by_address(&self, address: &Address) -> Option<&ProtocolConfig> {
        self.all_protocols().values().find(|p| p.address == *address)
    }

    /// Every merged entry at `address`, in merge order. Matching follows
    /// [`protocol_by_address`](Self::protocol_by_address).
    pub fn protocols_by_address(&self, address: &str) -> ProtocolMap<'_> {
        self.all_protocols()
            .filter(|p| address_matches(&p.address, address))
    }

    /// Every merged entry at a parsed `address`, in merge order.
    pub fn find_all_by_address(&self, address: &Address) -> ProtocolMap<'_> {
        self.all_protocols().filter(|p| p.address == *address)
    }

    /// Merged entries whose category differs from the table they sit in,
    /// as `(key, table)` pairs.
    pub fn misplaced_entries(&self) -> Vec<(&str, TableKind)> {
        let mut misplaced = Vec::new();
        for kind in MERGE_ORDER {
            for (key, config) in self.table(kind).iter() {
                if config.category != kind.category() {
                    misplaced.push((key, kind));
                }
            }
        }
        misplaced
    }

    /// Groups of merged keys sharing one address, in first-seen order.
    pub fn address_conflicts(&self) -> Vec<AddressConflict> {
        let mut groups: Vec<AddressConflict> = Vec::new();
        for (key, config) in self.all_protocols().iter() {
            match groups.iter_mut().find(|g| g.address == config.address) {
                Some(group) => group.keys.push(key.to_string()),
                None => groups.push(AddressConflict {
                    address: config.address,
                    keys: vec![key.to_string()],
                }),
            }
        }
        groups.retain(|g| g.keys.len() > 1);
        groups
    }

    /// Keys defined in more than one source table.
    pub fn shadowed_keys(&self) -> Vec<&str> {
        let mut shadowed = Vec::new();
        for (i, kind) in MERGE_ORDER.iter().enumerate() {
            for key in self.table(*kind).keys() {
                let later = MERGE_ORDER[i + 1..]
                    .iter()
                    .any(|k| self.table(*k).contains_key(key));
                if later && !shadowed.contains(&key) {
                    shadowed.push(key);
                }
            }
        }
        shadowed
    }

    /// Check endpoint URLs and address uniqueness.
    ///
    /// Zero-address duplicates are placeholders and only logged. Keys
    /// shadowed by a later table and entries whose category differs from
    /// their table are logged as well.
    pub fn validate(&self) -> Result<()> {
        for kind in MERGE_ORDER {
            for (key, config) in self.table(kind).iter() {
                if let Some(url) = &config.tvl_endpoint {
                    check_url(&format!("{key}.tvlEndpoint"), url, HTTP_SCHEMES)?;
                }
                if let Some(url) = &config.subgraph_url {
                    check_url(&format!("{key}.subgraphUrl"), url, HTTP_SCHEMES)?;
                }
            }
        }

        for (key, kind) in self.misplaced_entries() {
            warn!("Protocol '{}' is listed in the {} table with a different category", key, kind);
        }

        for key in self.shadowed_keys() {
            warn!("Protocol key '{}' is defined in several tables; the later table wins", key);
        }

        for conflict in self.address_conflicts() {
            if conflict.is_placeholder() {
                warn!(
                    "Placeholder address shared by {}; address lookup returns '{}'",
                    conflict.keys.join(", "),
                    conflict.keys[0]
                );
                continue;
            }
            return Err(CatalogueError::DuplicateAddress {
                address: ethers_core::utils::to_checksum(&conflict.address, None),
                keys: conflict.keys,
            });
        }

        Ok(())
    }
}
