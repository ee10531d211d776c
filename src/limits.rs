use alloc::vec::Vec;
use core::mem::size_of;

use crate::error::BitmapError;
use crate::pixel::Pixel;

/// Ceilings applied to a bitmap's header before its pixel grid is built.
///
/// Every field defaults to `None`, meaning unbounded.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum cell count (width * rows).
    pub max_pixels: Option<u64>,
    /// Maximum heap bytes the decoded [`crate::PixelGrid`] may occupy,
    /// row vectors included. See [`Limits::grid_bytes`].
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Heap bytes of a decoded grid: a row vector per row plus its cells.
    pub fn grid_bytes(width: u32, rows: u32) -> u64 {
        let row = size_of::<Vec<Pixel>>() as u64 + u64::from(width) * size_of::<Pixel>() as u64;
        row.saturating_mul(u64::from(rows))
    }

    /// Reject a `width` x `rows` grid that breaks any ceiling.
    pub(crate) fn check(&self, width: u32, rows: u32) -> Result<(), BitmapError> {
        within("width", u64::from(width), self.max_width)?;
        within("height", u64::from(rows), self.max_height)?;
        within("pixel count", u64::from(width) * u64::from(rows), self.max_pixels)?;
        within("grid memory", Self::grid_bytes(width, rows), self.max_memory_bytes)
    }
}

fn within(what: &str, value: u64, ceiling: Option<u64>) -> Result<(), BitmapError> {
    match ceiling {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_bytes_counts_row_vectors() {
        let row_vec = size_of::<Vec<Pixel>>() as u64;
        assert_eq!(Limits::grid_bytes(0, 10), 10 * row_vec);
        assert_eq!(
            Limits::grid_bytes(3, 2),
            2 * (row_vec + 3 * size_of::<Pixel>() as u64)
        );
        assert_eq!(Limits::grid_bytes(u32::MAX, u32::MAX), u64::MAX);
    }

    #[test]
    fn memory_ceiling_sees_tall_thin_grids() {
        let limits = Limits {
            max_memory_bytes: Some(1 << 20),
            ..Default::default()
        };
        // One cell per row still pays for the row vector.
        let rows = (1u32 << 20) / size_of::<Pixel>() as u32;
        assert!(matches!(
            limits.check(1, rows),
            Err(BitmapError::LimitExceeded(_))
        ));
        assert!(limits.check(1, 1000).is_ok());
    }

    #[test]
    fn unset_ceilings_accept_anything() {
        assert!(Limits::default().check(u32::MAX, u32::MAX).is_ok());
    }
}
