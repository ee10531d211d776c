//! Byte order selection and endian-aware field access for the headers.
//!
//! Regular BMP files are little-endian. Files whose first signature byte is
//! not `'B'` are read as a byte-swapped variant where every header integer
//! is big-endian. Palette entries ignore this choice, see
//! [`crate::palette`].

use alloc::vec::Vec;

use crate::error::BitmapError;

/// Byte order of the header integers in a bitmap file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Standard layout, signature starts with `'B'`.
    #[default]
    Little,
    /// Inverted variant, signature starts with anything else.
    Big,
}

impl Endianness {
    /// Pick the byte order from the first byte of the file.
    pub fn from_signature_byte(first: u8) -> Self {
        if first == b'B' { Self::Little } else { Self::Big }
    }

    pub(crate) fn u16_from(self, b: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(b),
            Self::Big => u16::from_be_bytes(b),
        }
    }

    pub(crate) fn u32_from(self, b: [u8; 4]) -> u32 {
        match self {
            Self::Little => u32::from_le_bytes(b),
            Self::Big => u32::from_be_bytes(b),
        }
    }

    pub(crate) fn i32_from(self, b: [u8; 4]) -> i32 {
        match self {
            Self::Little => i32::from_le_bytes(b),
            Self::Big => i32::from_be_bytes(b),
        }
    }

    pub(crate) fn put_u16(self, out: &mut Vec<u8>, v: u16) {
        match self {
            Self::Little => out.extend_from_slice(&v.to_le_bytes()),
            Self::Big => out.extend_from_slice(&v.to_be_bytes()),
        }
    }

    pub(crate) fn put_u32(self, out: &mut Vec<u8>, v: u32) {
        match self {
            Self::Little => out.extend_from_slice(&v.to_le_bytes()),
            Self::Big => out.extend_from_slice(&v.to_be_bytes()),
        }
    }

    pub(crate) fn put_i32(self, out: &mut Vec<u8>, v: i32) {
        match self {
            Self::Little => out.extend_from_slice(&v.to_le_bytes()),
            Self::Big => out.extend_from_slice(&v.to_be_bytes()),
        }
    }
}

// ── Cursor for reading header fields from &[u8] ─────────────────────

pub(crate) struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
    endian: Endianness,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(data: &'a [u8], pos: usize, endian: Endianness) -> Self {
        Self { data, pos, endian }
    }

    pub(crate) fn bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let end = self.pos.checked_add(N).ok_or(BitmapError::UnexpectedEof)?;
        let slice = self
            .data
            .get(self.pos..end)
            .ok_or(BitmapError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(slice);
        self.pos = end;
        Ok(buf)
    }

    pub(crate) fn u16(&mut self) -> Result<u16, BitmapError> {
        Ok(self.endian.u16_from(self.bytes()?))
    }

    pub(crate) fn u32(&mut self) -> Result<u32, BitmapError> {
        Ok(self.endian.u32_from(self.bytes()?))
    }

    pub(crate) fn i32(&mut self) -> Result<i32, BitmapError> {
        Ok(self.endian.i32_from(self.bytes()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_selects_byte_order() {
        assert_eq!(Endianness::from_signature_byte(b'B'), Endianness::Little);
        assert_eq!(Endianness::from_signature_byte(b'M'), Endianness::Big);
        assert_eq!(Endianness::from_signature_byte(0), Endianness::Big);
    }

    #[test]
    fn reader_respects_byte_order() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut le = FieldReader::new(&data, 0, Endianness::Little);
        assert_eq!(le.u32().unwrap(), 0x0403_0201);
        let mut be = FieldReader::new(&data, 0, Endianness::Big);
        assert_eq!(be.u16().unwrap(), 0x0102);
        assert_eq!(be.u16().unwrap(), 0x0304);
        assert!(matches!(be.u16(), Err(BitmapError::UnexpectedEof)));
    }
}
