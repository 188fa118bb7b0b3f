use basecat_core::{
    BaseConfig, CatalogueError, ProtocolCatalogue, ProtocolCategory, ProtocolConfig, ProtocolTable,
    TableKind, MERGE_ORDER,
};
use chrono::NaiveDate;
use proptest::prelude::*;

const AERODROME: &str = "0xcF77a3Ba9A5CA399B7c97c74d54e5b1Beb874E43";
const ZERO: &str = "0x0000000000000000000000000000000000000000";

fn builtin() -> ProtocolCatalogue {
    ProtocolCatalogue::builtin().expect("built-in catalogue")
}

fn entry(name: &str, address: &str, category: ProtocolCategory) -> ProtocolConfig {
    ProtocolConfig::new(
        name,
        address.parse().unwrap(),
        category,
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    )
}

#[test]
fn test_all_protocols_contains_every_table_entry() {
    let catalogue = builtin();
    let merged = catalogue.all_protocols();

    assert_eq!(merged.len(), 9);
    for kind in MERGE_ORDER {
        for (key, config) in catalogue.table(kind).iter() {
            assert_eq!(merged.get(key), Some(config), "missing {key}");
        }
    }
}

#[test]
fn test_merged_iteration_follows_merge_order() {
    let catalogue = builtin();
    let keys: Vec<&str> = catalogue.all_protocols().keys().collect();
    assert_eq!(
        keys,
        vec![
            "uniswapV3", "aerodrome", "baseswap",
            "aaveV3", "compoundV3", "moonwell",
            "beefy", "yearn",
            "baseBridge",
        ]
    );
}

#[test]
fn test_later_table_wins_key_collision() {
    let catalogue = ProtocolCatalogue::new(
        ProtocolTable::new().with("router", entry("Dex Router", "0x1111111111111111111111111111111111111111", ProtocolCategory::Dex)),
        ProtocolTable::new().with("router", entry("Lending Router", "0x2222222222222222222222222222222222222222", ProtocolCategory::Lending)),
        ProtocolTable::new().with("router", entry("Yield Router", "0x3333333333333333333333333333333333333333", ProtocolCategory::Yield)),
        ProtocolTable::new(),
    );

    let merged = catalogue.all_protocols();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.get("router").unwrap().name, "Yield Router");
    assert_eq!(catalogue.get("router").unwrap().category, ProtocolCategory::Yield);
}

#[test]
fn test_address_lookup_is_find_first_while_merge_is_last_wins() {
    let shared = "0x4444444444444444444444444444444444444444";
    let catalogue = ProtocolCatalogue::new(
        ProtocolTable::new().with("early", entry("Early", shared, ProtocolCategory::Dex)),
        ProtocolTable::new(),
        ProtocolTable::new(),
        ProtocolTable::new().with("late", entry("Late", shared, ProtocolCategory::Bridge)),
    );

    assert_eq!(catalogue.protocol_by_address(shared).unwrap().name, "Early");

    let all: Vec<&str> = catalogue.protocols_by_address(shared).keys().collect();
    assert_eq!(all, vec!["early", "late"]);

    let err = catalogue.validate().unwrap_err();
    match err {
        CatalogueError::DuplicateAddress { keys, .. } => assert_eq!(keys, vec!["early", "late"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_zero_address_resolves_to_first_yield_entry() {
    let catalogue = builtin();
    let found = catalogue.protocol_by_address(ZERO).unwrap();
    assert_eq!(found.name, "Beefy Finance");
    assert_eq!(found.category, ProtocolCategory::Yield);

    let conflicts = catalogue.address_conflicts();
    assert_eq!(conflicts.len(), 1);
    assert!(conflicts[0].is_placeholder());
    assert_eq!(conflicts[0].keys, vec!["beefy", "yearn"]);
}

#[test]
fn test_builtin_catalogue_validates_despite_placeholders() {
    builtin().validate().unwrap();
}

#[test]
fn test_address_lookup_ignores_case() {
    let catalogue = builtin();
    let checksummed = catalogue.protocol_by_address(AERODROME).unwrap();
    let lower = catalogue.protocol_by_address(&AERODROME.to_lowercase()).unwrap();
    let upper = catalogue
        .protocol_by_address(&format!("0x{}", AERODROME[2..].to_uppercase()))
        .unwrap();

    assert_eq!(checksummed, lower);
    assert_eq!(checksummed, upper);
    assert_eq!(checksummed.name, "Aerodrome Finance");
}

#[test]
fn test_address_lookup_accepts_upper_case_prefix() {
    let bridge = builtin()
        .protocol_by_address("0X4200000000000000000000000000000000000010")
        .map(|p| p.name.clone());
    assert_eq!(bridge.as_deref(), Some("Base Bridge"));
}

#[test]
fn test_address_lookup_is_exact_apart_from_case() {
    let catalogue = builtin();
    let bridge = "0x4200000000000000000000000000000000000010";

    assert!(catalogue.protocol_by_address(&bridge[2..]).is_none());
    assert!(catalogue.protocol_by_address(&format!("  {bridge}\n")).is_none());
    assert!(catalogue.protocol_by_address(&format!("{bridge}00")).is_none());
    assert!(catalogue.protocols_by_address(&AERODROME[2..]).is_empty());
}

#[test]
fn test_unknown_address_is_none() {
    assert!(builtin()
        .protocol_by_address("0x9999999999999999999999999999999999999999")
        .is_none());
}

#[test]
fn test_derivatives_is_empty() {
    assert!(builtin()
        .protocols_by_category(ProtocolCategory::Derivatives)
        .is_empty());
}

#[test]
fn test_category_counts() {
    let catalogue = builtin();
    assert_eq!(catalogue.protocols_by_category(ProtocolCategory::Dex).len(), 3);
    assert_eq!(catalogue.protocols_by_category(ProtocolCategory::Lending).len(), 3);
    assert_eq!(catalogue.protocols_by_category(ProtocolCategory::Yield).len(), 2);
    assert_eq!(catalogue.protocols_by_category(ProtocolCategory::Bridge).len(), 1);
}

#[test]
fn test_active_filter_excludes_inactive() {
    let catalogue = ProtocolCatalogue::new(
        ProtocolTable::new()
            .with("live", entry("Live", "0x1111111111111111111111111111111111111111", ProtocolCategory::Dex))
            .with("sunset", entry("Sunset", "0x2222222222222222222222222222222222222222", ProtocolCategory::Dex).with_active(false)),
        ProtocolTable::new(),
        ProtocolTable::new(),
        ProtocolTable::new(),
    );

    let active = catalogue.active_protocols();
    assert_eq!(active.keys().collect::<Vec<_>>(), vec!["live"]);
    assert_eq!(active.filter(|p| p.is_active), active);
}

#[test]
fn test_all_inactive_yields_empty() {
    let catalogue = ProtocolCatalogue::new(
        ProtocolTable::new().with("sunset", entry("Sunset", "0x2222222222222222222222222222222222222222", ProtocolCategory::Dex).with_active(false)),
        ProtocolTable::new(),
        ProtocolTable::new(),
        ProtocolTable::new(),
    );
    assert!(catalogue.active_protocols().is_empty());
}

#[test]
fn test_all_protocols_is_pure() {
    let catalogue = builtin();
    assert_eq!(catalogue.all_protocols(), catalogue.all_protocols());

    let config = BaseConfig::base_mainnet().unwrap();
    assert_eq!(config, BaseConfig::base_mainnet().unwrap());
}

#[test]
fn test_tables_hold_only_their_category() {
    let catalogue = builtin();
    for kind in [TableKind::Dex, TableKind::Lending, TableKind::Yield, TableKind::Bridge] {
        assert!(catalogue
            .table(kind)
            .iter()
            .all(|(_, p)| p.category == kind.category()));
    }
}

#[test]
fn test_catalogue_is_shareable_across_threads() {
    let catalogue = std::sync::Arc::new(builtin());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalogue = catalogue.clone();
            std::thread::spawn(move || catalogue.active_protocols().len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 9);
    }
}

fn category_strategy() -> impl Strategy<Value = ProtocolCategory> {
    prop::sample::select(ProtocolCategory::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_category_filter_is_exact_subset(category in category_strategy()) {
        let catalogue = builtin();
        let all = catalogue.all_protocols();
        let filtered = catalogue.protocols_by_category(category);

        for (key, config) in filtered.iter() {
            prop_assert_eq!(config.category, category);
            prop_assert_eq!(all.get(key), Some(config));
        }
        let expected = all.values().filter(|p| p.category == category).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn prop_address_lookup_case_insensitive(mask in prop::collection::vec(any::<bool>(), 40)) {
        let catalogue = builtin();
        let hex: String = AERODROME[2..]
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();

        let found = catalogue.protocol_by_address(&format!("0x{hex}"));
        prop_assert_eq!(found.map(|p| p.name.as_str()), Some("Aerodrome Finance"));
    }
}
