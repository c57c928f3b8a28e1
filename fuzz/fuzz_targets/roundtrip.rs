#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Whatever decodes must re-encode and decode back to the same value.
    if let Ok((annot, _warnings)) = fsannot::decode(data) {
        let bytes = fsannot::encode(&annot, "fuzz.annot");
        let (again, warnings) = fsannot::decode(&bytes).expect("re-decode of encoder output");
        assert!(warnings.is_empty());
        assert_eq!(again, annot);
    }
});
