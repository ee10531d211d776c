#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing and probing must never panic
    let _ = zenbmpdoc::BmpDocument::parse(data);
    let _ = zenbmpdoc::ImageInfo::from_bytes(data);
});
