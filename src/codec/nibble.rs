//! 4-bit nibble expansion and packing.

use alloc::vec::Vec;

use crate::error::BitmapError;

/// Cursor over the 4-bit values of a byte slice, high nibble first.
///
/// Yields exactly `2 * bytes.len()` values and then stops. It cannot be
/// rewound; create a new cursor to start over.
#[derive(Clone, Debug)]
pub struct Nibbles<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Nibbles<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Iterator for Nibbles<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.pos >> 1)?;
        let nibble = if self.pos & 1 == 0 {
            byte >> 4
        } else {
            byte & 0x0f
        };
        self.pos += 1;
        Some(nibble)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.bytes.len() * 2 - self.pos;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Nibbles<'_> {}

impl core::iter::FusedIterator for Nibbles<'_> {}

/// Take the first `count` nibbles of `bytes`.
///
/// Fails with [`BitmapError::UnexpectedEof`] if `bytes` holds fewer than
/// `count` nibbles.
pub fn unpack_nibbles(bytes: &[u8], count: usize) -> Result<Vec<u8>, BitmapError> {
    if count > bytes.len().saturating_mul(2) {
        return Err(BitmapError::UnexpectedEof);
    }
    Ok(Nibbles::new(bytes).take(count).collect())
}

/// Pack pairs of palette indices into bytes, first of each pair in the high
/// nibble.
///
/// Only the low nibble of each value is used, so a value whose index is
/// replicated into both halves (`i << 4 | i`) packs the same as `i`.
pub fn pack_nibbles(values: &[u8]) -> Result<Vec<u8>, BitmapError> {
    if values.len() % 2 != 0 {
        return Err(BitmapError::OddNibbleCount(values.len()));
    }
    Ok(values
        .chunks_exact(2)
        .map(|pair| pack_pair(pair[0], pair[1]))
        .collect())
}

#[inline]
pub(crate) fn pack_pair(hi: u8, lo: u8) -> u8 {
    (hi & 0x0f) << 4 | (lo & 0x0f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn cursor_yields_high_then_low() {
        let v: Vec<u8> = Nibbles::new(&[0xab, 0x1f]).collect();
        assert_eq!(v, [0xa, 0xb, 0x1, 0xf]);
        let mut n = Nibbles::new(&[0x12]);
        assert_eq!(n.len(), 2);
        n.next();
        assert_eq!(n.len(), 1);
        n.next();
        assert_eq!(n.next(), None);
        assert_eq!(n.next(), None);
    }

    #[test]
    fn unpack_discards_trailing_nibbles() {
        assert_eq!(unpack_nibbles(&[0x12, 0x30], 3).unwrap(), [1, 2, 3]);
        assert_eq!(unpack_nibbles(&[], 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn unpack_past_end_fails() {
        assert!(matches!(
            unpack_nibbles(&[0x12], 3),
            Err(BitmapError::UnexpectedEof)
        ));
    }

    #[test]
    fn pack_rejects_odd_length() {
        assert!(matches!(
            pack_nibbles(&[1, 2, 3]),
            Err(BitmapError::OddNibbleCount(3))
        ));
    }

    #[test]
    fn pack_then_unpack_replicated_values() {
        let replicated: Vec<u8> = (0u8..16).map(|i| i << 4 | i).collect();
        let packed = pack_nibbles(&replicated).unwrap();
        assert_eq!(packed.len(), 8);
        let indices = unpack_nibbles(&packed, replicated.len()).unwrap();
        let restored: Vec<u8> = indices.iter().map(|&i| i << 4 | i).collect();
        assert_eq!(restored, replicated);
    }

    #[test]
    fn pack_then_unpack_indices() {
        let indices = vec![3, 0, 15, 7, 7, 1];
        let packed = pack_nibbles(&indices).unwrap();
        assert_eq!(packed, [0x30, 0xf7, 0x71]);
        assert_eq!(unpack_nibbles(&packed, 6).unwrap(), indices);
    }
}
