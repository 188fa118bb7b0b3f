#![no_main]
use basecat_core::ProtocolCatalogue;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

static CATALOGUE: OnceLock<ProtocolCatalogue> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let catalogue = CATALOGUE.get_or_init(|| ProtocolCatalogue::builtin().unwrap());
    if let Ok(s) = std::str::from_utf8(data) {
        let first = catalogue.protocol_by_address(s);
        let all = catalogue.protocols_by_address(s);
        assert_eq!(first, all.values().next());
    }
});
