#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode to Ok or a typed error, never panic
    // and never allocate proportionally to a corrupt length field.
    let _ = fsannot::decode(data);
});
