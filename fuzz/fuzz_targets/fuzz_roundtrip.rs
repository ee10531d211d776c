#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmpdoc::*;

fuzz_target!(|data: &[u8]| {
    // If we can parse it, saving and parsing again must keep the grid and palette
    let Ok(mut doc) = BmpDocument::parse(data) else {
        return;
    };

    // Odd-width 4-bit images and similar cases legitimately fail to encode
    let Ok(saved) = doc.to_bytes() else { return };
    let Ok(mut reparsed) = BmpDocument::parse(&saved) else {
        panic!("saved document failed to parse");
    };

    assert_eq!(doc.pixels(), reparsed.pixels(), "roundtrip pixel mismatch");
    assert_eq!(doc.palette(), reparsed.palette(), "roundtrip palette mismatch");
    assert_eq!(doc.file_header(), reparsed.file_header());
    assert_eq!(doc.info_header(), reparsed.info_header());

    // A second save is byte-identical
    let again = reparsed.to_bytes().expect("re-encode of a saved document");
    assert_eq!(saved, again);
});
