use crate::document::{ParsedHeaders, parse_headers};
use crate::endian::Endianness;
use crate::error::BitmapError;
use crate::header::PALETTE_START;
use crate::pixel::BitDepth;

/// Image metadata read from the headers alone, without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    /// Number of rows, regardless of orientation.
    pub height: u32,
    pub bit_depth: BitDepth,
    pub endianness: Endianness,
    /// Rows are stored top row first.
    pub top_down: bool,
    /// Palette entries implied by the pixel data offset.
    pub palette_len: usize,
}

impl ImageInfo {
    /// Probe headers. Fails on the same header problems as a full parse.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        let ParsedHeaders {
            endian,
            file,
            info,
            depth,
        } = parse_headers(data)?;
        Ok(Self {
            width: info.width as u32,
            height: info.row_count(),
            bit_depth: depth,
            endianness: endian,
            top_down: info.is_top_down(),
            palette_len: (file.pixel_data_offset as usize).saturating_sub(PALETTE_START) / 4,
        })
    }
}
