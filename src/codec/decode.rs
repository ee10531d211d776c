use alloc::vec::Vec;

use super::nibble::Nibbles;
use super::{content_len, stride};
use crate::error::BitmapError;
use crate::grid::PixelGrid;
use crate::pixel::{BitDepth, Pixel};

/// Decode one row of `width` pixels from its stored bytes.
///
/// `row` may include trailing padding; anything past the `width` pixels is
/// ignored. A row shorter than its pixel content fails with
/// [`BitmapError::UnexpectedEof`].
pub fn decode_row(row: &[u8], width: usize, depth: BitDepth) -> Result<Vec<Pixel>, BitmapError> {
    match depth.bytes_per_pixel() {
        None => {
            let nibbles = Nibbles::new(row);
            if nibbles.len() < width {
                return Err(BitmapError::UnexpectedEof);
            }
            Ok(nibbles.take(width).map(Pixel::index).collect())
        }
        Some(bpp) => {
            let needed = width.checked_mul(bpp).ok_or(BitmapError::UnexpectedEof)?;
            let content = row.get(..needed).ok_or(BitmapError::UnexpectedEof)?;
            content.chunks_exact(bpp).map(Pixel::from_bytes).collect()
        }
    }
}

/// Decode `height` rows starting at the front of `data`.
pub(crate) fn decode_rows(
    data: &[u8],
    width: usize,
    height: usize,
    depth: BitDepth,
) -> Result<PixelGrid, BitmapError> {
    let too_large = || BitmapError::DimensionsTooLarge {
        width: width as u64,
        height: height as u64,
    };
    let row_stride = stride(width, depth.bits()).ok_or_else(too_large)?;
    let row_content = content_len(width, depth.bits()).ok_or_else(too_large)?;

    if height == 0 {
        return Ok(PixelGrid::new());
    }
    // Zero-width rows consume no input, so nothing bounds their count.
    if width == 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "zero-width image with {height} rows"
        )));
    }

    // The final row may arrive without its padding.
    let needed = (height - 1)
        .checked_mul(row_stride)
        .and_then(|n| n.checked_add(row_content))
        .ok_or(BitmapError::UnexpectedEof)?;
    if data.len() < needed {
        return Err(BitmapError::UnexpectedEof);
    }

    let mut rows = Vec::with_capacity(height.min(data.len() / row_stride + 1));
    for y in 0..height {
        let start = y * row_stride;
        let end = (start + row_stride).min(data.len());
        rows.push(decode_row(&data[start..end], width, depth)?);
    }
    log::trace!("decoded {height} rows of {width} pixels, stride {row_stride}");
    PixelGrid::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_bit_row_stops_at_width() {
        let row = decode_row(&[0x12, 0x34, 0x00, 0x00], 3, BitDepth::Bpp4).unwrap();
        assert_eq!(row, [Pixel::index(1), Pixel::index(2), Pixel::index(3)]);
    }

    #[test]
    fn four_bit_row_past_end_fails() {
        assert!(matches!(
            decode_row(&[0x12], 3, BitDepth::Bpp4),
            Err(BitmapError::UnexpectedEof)
        ));
    }

    #[test]
    fn sixteen_bit_groups_are_opaque() {
        let row = decode_row(&[1, 2, 3, 4, 0, 0, 0, 0], 2, BitDepth::Bpp16).unwrap();
        assert_eq!(row[0].as_bytes(), [1, 2]);
        assert_eq!(row[1].as_bytes(), [3, 4]);
    }

    #[test]
    fn rows_use_stride_offsets() {
        // 1 pixel wide, 8-bit: stride 4, three padding bytes per row.
        let data = [7, 0xee, 0xee, 0xee, 9, 0xee, 0xee, 0xee];
        let grid = decode_rows(&data, 1, 2, BitDepth::Bpp8).unwrap();
        assert_eq!(grid.get(0, 0), Some(Pixel::index(7)));
        assert_eq!(grid.get(0, 1), Some(Pixel::index(9)));
    }

    #[test]
    fn truncated_pixel_data_fails() {
        let data = [0u8; 8 + 5];
        assert!(matches!(
            decode_rows(&data, 2, 2, BitDepth::Bpp24),
            Err(BitmapError::UnexpectedEof)
        ));
        // Missing padding on the last row is tolerated.
        let data = [0u8; 8 + 6];
        assert!(decode_rows(&data, 2, 2, BitDepth::Bpp24).is_ok());
    }

    #[test]
    fn huge_height_with_tiny_body_fails_before_allocating() {
        let data = [1u8, 0, 0, 0];
        assert!(matches!(
            decode_rows(&data, 1, i32::MAX as usize, BitDepth::Bpp8),
            Err(BitmapError::UnexpectedEof)
        ));
        assert!(matches!(
            decode_rows(&data, 8, usize::MAX, BitDepth::Bpp32),
            Err(BitmapError::UnexpectedEof)
        ));
    }

    #[test]
    fn zero_width_rows_are_rejected() {
        assert!(matches!(
            decode_rows(&[], 0, i32::MAX as usize, BitDepth::Bpp24),
            Err(BitmapError::InvalidHeader(_))
        ));
        assert!(decode_rows(&[], 0, 0, BitDepth::Bpp24).unwrap().is_empty());
    }
}
