//! Color table for indexed images.
//!
//! Entries are stored on disk as four bytes in `b, g, r, a` order. On write
//! each entry is packed as a big-endian `u32` (`b << 24 | g << 16 | r << 8 | a`)
//! regardless of the file's own byte order, which leaves the bytes in
//! `b, g, r, a` order for both the little- and big-endian layouts.

use alloc::vec::Vec;

use crate::error::BitmapError;
use crate::header::PALETTE_START;

/// One palette entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorEntry {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl ColorEntry {
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Pure white in the color channels. Alpha is not considered.
    pub fn is_white(&self) -> bool {
        self.b == 255 && self.g == 255 && self.r == 255
    }

    fn to_be_word(self) -> u32 {
        u32::from(self.b) << 24 | u32::from(self.g) << 16 | u32::from(self.r) << 8 | u32::from(self.a)
    }
}

#[cfg(feature = "rgb")]
impl From<ColorEntry> for rgb::alt::BGRA8 {
    fn from(c: ColorEntry) -> Self {
        rgb::alt::BGRA8 {
            b: c.b,
            g: c.g,
            r: c.r,
            a: c.a,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::alt::BGRA8> for ColorEntry {
    fn from(c: rgb::alt::BGRA8) -> Self {
        Self::new(c.b, c.g, c.r, c.a)
    }
}

/// The palette of a bitmap.
///
/// Its length is fixed by the pixel data offset, so entries can be edited in
/// place but not added or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<ColorEntry>,
}

impl ColorTable {
    pub fn new(entries: Vec<ColorEntry>) -> Self {
        Self { entries }
    }

    /// Read the entries between the headers and `pixel_data_offset`.
    pub(crate) fn parse(data: &[u8], pixel_data_offset: usize) -> Result<Self, BitmapError> {
        if pixel_data_offset < PALETTE_START {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "pixel data offset {pixel_data_offset} points inside the headers"
            )));
        }
        let region = pixel_data_offset - PALETTE_START;
        if region % 4 != 0 {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "palette region of {region} bytes is not a whole number of entries"
            )));
        }
        let bytes = data
            .get(PALETTE_START..pixel_data_offset)
            .ok_or(BitmapError::UnexpectedEof)?;
        let entries = bytes
            .chunks_exact(4)
            .map(|c| ColorEntry::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self { entries })
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        out.reserve(self.entries.len() * 4);
        for entry in &self.entries {
            out.extend_from_slice(&entry.to_be_word().to_be_bytes());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColorEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [ColorEntry] {
        &mut self.entries
    }

    /// Index of the first pure-white entry, or `None` if there is none.
    pub fn find_white(&self) -> Option<usize> {
        self.entries.iter().position(ColorEntry::is_white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn find_white_ignores_alpha() {
        let table = ColorTable::new(vec![
            ColorEntry::new(0, 0, 0, 255),
            ColorEntry::new(255, 255, 255, 0),
            ColorEntry::new(10, 10, 10, 10),
        ]);
        assert_eq!(table.find_white(), Some(1));
    }

    #[test]
    fn find_white_reports_missing() {
        let table = ColorTable::new(vec![
            ColorEntry::new(255, 255, 254, 0),
            ColorEntry::new(0, 0, 0, 0),
        ]);
        assert_eq!(table.find_white(), None);
        assert_eq!(ColorTable::default().find_white(), None);
    }

    #[test]
    fn entries_keep_bgra_byte_order() {
        let mut data = vec![0u8; PALETTE_START];
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let table = ColorTable::parse(&data, PALETTE_START + 8).unwrap();
        assert_eq!(table.get(0), Some(&ColorEntry::new(1, 2, 3, 4)));
        assert_eq!(table.get(1), Some(&ColorEntry::new(5, 6, 7, 8)));

        let mut out = Vec::new();
        table.write(&mut out);
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn rejects_misaligned_region() {
        let data = vec![0u8; PALETTE_START + 6];
        assert!(matches!(
            ColorTable::parse(&data, PALETTE_START + 6),
            Err(BitmapError::InvalidHeader(_))
        ));
        assert!(matches!(
            ColorTable::parse(&data, 20),
            Err(BitmapError::InvalidHeader(_))
        ));
        assert!(matches!(
            ColorTable::parse(&data, PALETTE_START + 8),
            Err(BitmapError::UnexpectedEof)
        ));
    }
}
