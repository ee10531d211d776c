//! Helpers for building bitmap files in tests.
#![allow(dead_code)]

use zenbmpdoc::Endianness;

/// Byte offset of the DIB header size field.
pub const HEADER_SIZE_AT: usize = 14;
/// Byte offset of the compression field.
pub const COMPRESSION_AT: usize = 30;

fn put_u16(out: &mut Vec<u8>, endian: Endianness, v: u16) {
    match endian {
        Endianness::Little => out.extend_from_slice(&v.to_le_bytes()),
        Endianness::Big => out.extend_from_slice(&v.to_be_bytes()),
    }
}

fn put_u32(out: &mut Vec<u8>, endian: Endianness, v: u32) {
    match endian {
        Endianness::Little => out.extend_from_slice(&v.to_le_bytes()),
        Endianness::Big => out.extend_from_slice(&v.to_be_bytes()),
    }
}

pub fn patch_u32(data: &mut [u8], at: usize, endian: Endianness, v: u32) {
    let bytes = match endian {
        Endianness::Little => v.to_le_bytes(),
        Endianness::Big => v.to_be_bytes(),
    };
    data[at..at + 4].copy_from_slice(&bytes);
}

/// Assemble a complete uncompressed bitmap with consistent size fields.
pub fn build_bmp(
    endian: Endianness,
    width: i32,
    height: i32,
    bits: u16,
    palette: &[[u8; 4]],
    pixel_data: &[u8],
) -> Vec<u8> {
    let offset = 54 + palette.len() as u32 * 4;
    let mut out = Vec::new();
    out.extend_from_slice(match endian {
        Endianness::Little => b"BM",
        Endianness::Big => b"MB",
    });
    put_u32(&mut out, endian, offset + pixel_data.len() as u32);
    put_u16(&mut out, endian, 0);
    put_u16(&mut out, endian, 0);
    put_u32(&mut out, endian, offset);

    put_u32(&mut out, endian, 40);
    put_u32(&mut out, endian, width as u32);
    put_u32(&mut out, endian, height as u32);
    put_u16(&mut out, endian, 1);
    put_u16(&mut out, endian, bits);
    put_u32(&mut out, endian, 0);
    put_u32(&mut out, endian, pixel_data.len() as u32);
    put_u32(&mut out, endian, 2835);
    put_u32(&mut out, endian, 2835);
    put_u32(&mut out, endian, palette.len() as u32);
    put_u32(&mut out, endian, 0);

    for entry in palette {
        out.extend_from_slice(entry);
    }
    out.extend_from_slice(pixel_data);
    out
}

/// Grayscale ramp palette with `n` entries.
pub fn gray_palette(n: usize) -> Vec<[u8; 4]> {
    (0..n)
        .map(|i| {
            let v = (i * 255 / n.saturating_sub(1).max(1)) as u8;
            [v, v, v, 0]
        })
        .collect()
}

/// Deterministic xorshift byte stream.
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

/// Pixel data for a bitmap with zeroed row padding, filled from `noise`.
pub fn noise_plane(width: usize, height: usize, bits: u16, seed: u32) -> Vec<u8> {
    let stride = ((width * bits as usize + 31) >> 5) << 2;
    let content = (width * bits as usize).div_ceil(8);
    let mut data = vec![0u8; stride * height];
    let bytes = noise(content * height, seed);
    for (y, row) in bytes.chunks_exact(content.max(1)).take(height).enumerate() {
        data[y * stride..y * stride + content].copy_from_slice(&row[..content]);
        // Unused low nibble of an odd-width 4-bit row stays zero.
        if bits == 4 && width % 2 == 1 {
            data[y * stride + content - 1] &= 0xf0;
        }
    }
    data
}
