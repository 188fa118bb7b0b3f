#![no_main]
use basecat_core::BaseConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any accepted document must survive a render/parse cycle.
        if let Ok(config) = BaseConfig::from_json_str(s) {
            let rendered = config.to_json_string_pretty().unwrap();
            assert_eq!(BaseConfig::from_json_str(&rendered).unwrap(), config);
        }
    }
});
