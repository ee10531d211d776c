//! File header and 40-byte info header.

use alloc::vec::Vec;

use crate::endian::{Endianness, FieldReader};
use crate::error::BitmapError;

/// Size of the file header in bytes.
pub const FILE_HEADER_LEN: usize = 14;
/// Size of the only supported info header (`BITMAPINFOHEADER`).
pub const INFO_HEADER_LEN: u32 = 40;
/// Offset of the first palette entry, right after both headers.
pub const PALETTE_START: usize = FILE_HEADER_LEN + INFO_HEADER_LEN as usize;

// ── Compression ─────────────────────────────────────────────────────

/// Storage mode recorded in the info header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Uncompressed, the only mode this crate reads and writes.
    Rgb,
    Rle8,
    Rle4,
    Bitfields,
    Jpeg,
    Png,
}

impl Compression {
    pub fn from_u32(num: u32) -> Result<Self, BitmapError> {
        Ok(match num {
            0 => Self::Rgb,
            1 => Self::Rle8,
            2 => Self::Rle4,
            3 => Self::Bitfields,
            4 => Self::Jpeg,
            5 => Self::Png,
            other => return Err(BitmapError::UnknownCompression(other)),
        })
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Self::Rgb => 0,
            Self::Rle8 => 1,
            Self::Rle4 => 2,
            Self::Bitfields => 3,
            Self::Jpeg => 4,
            Self::Png => 5,
        }
    }
}

// ── File header ─────────────────────────────────────────────────────

/// The 14-byte header that starts every bitmap file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileHeader {
    /// Two signature bytes, usually `BM`.
    pub signature: [u8; 2],
    /// Total size of the file. Recomputed on save.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte index where pixel data starts. The palette fills the space
    /// between the headers and this offset.
    pub pixel_data_offset: u32,
}

impl FileHeader {
    pub(crate) fn parse(data: &[u8], endian: Endianness) -> Result<Self, BitmapError> {
        let mut r = FieldReader::new(data, 0, endian);
        Ok(Self {
            signature: r.bytes()?,
            file_size: r.u32()?,
            reserved1: r.u16()?,
            reserved2: r.u16()?,
            pixel_data_offset: r.u32()?,
        })
    }

    pub(crate) fn write(&self, endian: Endianness, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.signature);
        endian.put_u32(out, self.file_size);
        endian.put_u16(out, self.reserved1);
        endian.put_u16(out, self.reserved2);
        endian.put_u32(out, self.pixel_data_offset);
    }
}

// ── Info header ─────────────────────────────────────────────────────

/// The 40-byte `BITMAPINFOHEADER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InfoHeader {
    /// Always 40.
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up files, negative for top-down. The grid keeps
    /// physical row order either way.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: Compression,
    /// Size of the pixel data. Recomputed on save.
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl InfoHeader {
    /// Parse the info header that follows the file header.
    ///
    /// The size field is checked first, then the remaining fields are read,
    /// then the compression mode is checked.
    pub(crate) fn parse(data: &[u8], endian: Endianness) -> Result<Self, BitmapError> {
        let mut size = FieldReader::new(data, FILE_HEADER_LEN, endian);
        let header_size = size.u32()?;
        if header_size != INFO_HEADER_LEN {
            return Err(BitmapError::InvalidHeaderSize(header_size));
        }

        let mut r = FieldReader::new(data, FILE_HEADER_LEN, endian);
        let header = Self {
            header_size: r.u32()?,
            width: r.i32()?,
            height: r.i32()?,
            planes: r.u16()?,
            bits_per_pixel: r.u16()?,
            compression: Compression::from_u32(r.u32()?)?,
            image_size: r.u32()?,
            x_pixels_per_meter: r.i32()?,
            y_pixels_per_meter: r.i32()?,
            colors_used: r.u32()?,
            important_colors: r.u32()?,
        };

        if header.compression != Compression::Rgb {
            return Err(BitmapError::UnsupportedCompression(header.compression));
        }
        if header.width < 0 {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "negative width {}",
                header.width
            )));
        }
        Ok(header)
    }

    pub(crate) fn write(&self, endian: Endianness, out: &mut Vec<u8>) {
        endian.put_u32(out, self.header_size);
        endian.put_i32(out, self.width);
        endian.put_i32(out, self.height);
        endian.put_u16(out, self.planes);
        endian.put_u16(out, self.bits_per_pixel);
        endian.put_u32(out, self.compression.to_u32());
        endian.put_u32(out, self.image_size);
        endian.put_i32(out, self.x_pixels_per_meter);
        endian.put_i32(out, self.y_pixels_per_meter);
        endian.put_u32(out, self.colors_used);
        endian.put_u32(out, self.important_colors);
    }

    /// Number of physical pixel rows, ignoring orientation.
    pub fn row_count(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// True when rows are stored top row first (negative height).
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }
}
