use alloc::vec::Vec;

use super::nibble::pack_pair;
use super::stride;
use crate::error::BitmapError;
use crate::grid::PixelGrid;
use crate::pixel::{BitDepth, Pixel};

/// Encode one row and append it to `out`, zero-padded to its stride.
///
/// The row is validated before anything is written, so on error `out` is
/// left untouched. Returns the number of bytes appended.
pub fn encode_row(row: &[Pixel], depth: BitDepth, out: &mut Vec<u8>) -> Result<usize, BitmapError> {
    let row_stride = stride(row.len(), depth.bits()).ok_or(BitmapError::DimensionsTooLarge {
        width: row.len() as u64,
        height: 1,
    })?;

    match depth.bytes_per_pixel() {
        None => {
            if row.len() % 2 != 0 {
                return Err(BitmapError::OddNibbleCount(row.len()));
            }
            check_cell_sizes(row, 1)?;
            let start = out.len();
            out.resize(start + row_stride, 0);
            let dst = &mut out[start..];
            for (byte, pair) in dst.iter_mut().zip(row.chunks_exact(2)) {
                *byte = pack_pair(pair[0].as_bytes()[0], pair[1].as_bytes()[0]);
            }
        }
        Some(bpp) => {
            check_cell_sizes(row, bpp)?;
            let start = out.len();
            out.resize(start + row_stride, 0);
            let dst = &mut out[start..];
            for (slot, pixel) in dst.chunks_exact_mut(bpp).zip(row) {
                slot.copy_from_slice(pixel.as_bytes());
            }
        }
    }
    Ok(row_stride)
}

fn check_cell_sizes(row: &[Pixel], expected: usize) -> Result<(), BitmapError> {
    match row.iter().find(|p| p.len() != expected) {
        Some(p) => Err(BitmapError::PixelSizeMismatch {
            expected,
            actual: p.len(),
        }),
        None => Ok(()),
    }
}

/// Encode every row of the grid, in order.
pub(crate) fn encode_rows(grid: &PixelGrid, depth: BitDepth, out: &mut Vec<u8>) -> Result<(), BitmapError> {
    for row in grid.rows() {
        encode_row(row, depth, out)?;
    }
    log::trace!("encoded {} rows at {} bpp", grid.height(), depth.bits());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn four_bit_pairs_share_a_byte() {
        let row = [1, 2, 3, 4].map(Pixel::index);
        let mut out = Vec::new();
        assert_eq!(encode_row(&row, BitDepth::Bpp4, &mut out).unwrap(), 4);
        assert_eq!(out, [0x12, 0x34, 0, 0]);
    }

    #[test]
    fn four_bit_takes_low_nibble_of_replicated_bytes() {
        let row = [0x11, 0xff].map(Pixel::index);
        let mut out = Vec::new();
        encode_row(&row, BitDepth::Bpp4, &mut out).unwrap();
        assert_eq!(out, [0x1f, 0, 0, 0]);
    }

    #[test]
    fn odd_four_bit_row_fails_without_writing() {
        let row = [1, 2, 3].map(Pixel::index);
        let mut out = vec![0xaa];
        assert!(matches!(
            encode_row(&row, BitDepth::Bpp4, &mut out),
            Err(BitmapError::OddNibbleCount(3))
        ));
        assert_eq!(out, [0xaa]);
    }

    #[test]
    fn byte_groups_are_copied_and_padded() {
        let row = [Pixel::bgr(0, 0, 255), Pixel::bgr(0, 255, 0)];
        let mut out = Vec::new();
        assert_eq!(encode_row(&row, BitDepth::Bpp24, &mut out).unwrap(), 8);
        assert_eq!(out, [0, 0, 255, 0, 255, 0, 0, 0]);
    }

    #[test]
    fn wrong_cell_size_fails() {
        let row = [Pixel::bgr(1, 2, 3)];
        let mut out = Vec::new();
        assert!(matches!(
            encode_row(&row, BitDepth::Bpp32, &mut out),
            Err(BitmapError::PixelSizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
        assert!(out.is_empty());
    }
}
