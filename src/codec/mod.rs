//! Pixel plane codec: stride-padded row bytes to and from the pixel grid.
//!
//! Rows are laid out back to back starting at the pixel data offset, each
//! padded with zeros to a multiple of four bytes. Row 0 of the grid is the
//! first row in the file; orientation is left to the caller.
//!
//! * 4 bits per pixel: two palette indices per byte, high nibble first.
//! * 8, 16, 24, 32 bits per pixel: `bits / 8` opaque bytes per pixel.

mod decode;
mod encode;
pub mod nibble;

pub use decode::decode_row;
pub use encode::encode_row;
pub use nibble::{Nibbles, pack_nibbles, unpack_nibbles};

pub(crate) use decode::decode_rows;
pub(crate) use encode::encode_rows;

/// Padded byte length of one row: `((width * bits + 31) >> 5) << 2`.
///
/// Returns `None` when the row bit length overflows `usize`.
pub fn stride(width: usize, bits: u16) -> Option<usize> {
    let row_bits = width.checked_mul(usize::from(bits))?.checked_add(31)?;
    Some((row_bits >> 5) << 2)
}

/// Bytes of actual pixel content in a row, before padding.
pub(crate) fn content_len(width: usize, bits: u16) -> Option<usize> {
    Some(width.checked_mul(usize::from(bits))?.div_ceil(8))
}
