#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(sig: &[u8; 2], le: bool, width: i32, height: i32, bits: u16, palette: u32, data: u32) -> Vec<u8> {
    let u16b = |v: u16| if le { v.to_le_bytes() } else { v.to_be_bytes() };
    let u32b = |v: u32| if le { v.to_le_bytes() } else { v.to_be_bytes() };
    let offset = 54 + palette * 4;
    let mut out = sig.to_vec();
    out.extend_from_slice(&u32b(offset + data)); // file size
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&u32b(offset)); // data offset
    out.extend_from_slice(&u32b(40)); // DIB header size
    out.extend_from_slice(&u32b(width as u32));
    out.extend_from_slice(&u32b(height as u32));
    out.extend_from_slice(&u16b(1)); // planes
    out.extend_from_slice(&u16b(bits));
    out.extend_from_slice(&u32b(0)); // compression
    out.extend_from_slice(&u32b(data)); // image size
    out.extend_from_slice(&u32b(2835));
    out.extend_from_slice(&u32b(2835));
    out.extend_from_slice(&u32b(palette));
    out.extend_from_slice(&u32b(0));
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1 24-bit, little-endian
    let mut bmp = header(b"BM", true, 1, 1, 24, 0, 4);
    bmp.extend_from_slice(&[0xff, 0x00, 0x00, 0x00]);
    fs::write(format!("{dir}/bmp24_1x1.bmp"), bmp).unwrap();

    // 2x2 24-bit, byte-swapped variant
    let mut bmp = header(b"MB", false, 2, 2, 24, 0, 16);
    bmp.extend_from_slice(&[0, 0, 255, 0, 255, 0, 0, 0, 255, 0, 0, 255, 255, 255, 0, 0]);
    fs::write(format!("{dir}/bmp24_2x2_be.bmp"), bmp).unwrap();

    // 4x2 4-bit with a 16-entry palette
    let mut bmp = header(b"BM", true, 4, 2, 4, 16, 8);
    for i in 0..16u8 {
        bmp.extend_from_slice(&[i * 17, i * 17, i * 17, 0]);
    }
    bmp.extend_from_slice(&[0x01, 0x23, 0, 0, 0xfe, 0xdc, 0, 0]);
    fs::write(format!("{dir}/bmp4_4x2.bmp"), bmp).unwrap();

    // 2x1 8-bit top-down with a 2-entry palette
    let mut bmp = header(b"BM", true, 2, -1, 8, 2, 4);
    bmp.extend_from_slice(&[0, 0, 0, 0, 255, 255, 255, 0]);
    bmp.extend_from_slice(&[1, 0, 0, 0]);
    fs::write(format!("{dir}/bmp8_topdown.bmp"), bmp).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut rle = header(b"BM", true, 1, 1, 8, 0, 4);
    rle[30] = 1; // BI_RLE8
    fs::write(format!("{dir}/rle8.bin"), rle).unwrap();

    println!("Generated seed corpus in {dir}/");
}
