//! Two-dimensional pixel grid with a uniform row length.

use alloc::vec::Vec;

use crate::error::BitmapError;
use crate::pixel::Pixel;

/// Rows of pixel cells, in the order they are stored in the file.
///
/// Every row has the same length. Rows are handed out mutably only as
/// fixed-length slices and whole-row insertion checks the length, so a grid
/// can never become ragged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelGrid {
    rows: Vec<Vec<Pixel>>,
}

impl PixelGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `width` x `height` grid filled with `fill`.
    pub fn filled(width: usize, height: usize, fill: Pixel) -> Self {
        Self {
            rows: (0..height).map(|_| alloc::vec![fill; width]).collect(),
        }
    }

    /// Build a grid from rows, rejecting rows of differing length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, BitmapError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(BitmapError::RaggedRow {
                    row,
                    expected,
                    actual: r.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Length of the first row, or 0 for an empty grid.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.rows.get(y)?.get(x).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), BitmapError> {
        let (width, height) = (self.width(), self.height());
        let cell = self
            .rows
            .get_mut(y)
            .and_then(|r| r.get_mut(x))
            .ok_or(BitmapError::OutOfBounds {
                x,
                y,
                width,
                height,
            })?;
        *cell = pixel;
        Ok(())
    }

    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    pub fn row_mut(&mut self, y: usize) -> Option<&mut [Pixel]> {
        self.rows.get_mut(y).map(Vec::as_mut_slice)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [Pixel]> + '_ {
        self.rows.iter_mut().map(Vec::as_mut_slice)
    }

    /// Append a row. On an empty grid any length is accepted and becomes the
    /// grid width.
    pub fn push_row(&mut self, row: Vec<Pixel>) -> Result<(), BitmapError> {
        self.check_row(self.rows.len(), &row)?;
        self.rows.push(row);
        Ok(())
    }

    pub fn insert_row(&mut self, y: usize, row: Vec<Pixel>) -> Result<(), BitmapError> {
        if y > self.rows.len() {
            return Err(BitmapError::OutOfBounds {
                x: 0,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.check_row(y, &row)?;
        self.rows.insert(y, row);
        Ok(())
    }

    pub fn remove_row(&mut self, y: usize) -> Option<Vec<Pixel>> {
        (y < self.rows.len()).then(|| self.rows.remove(y))
    }

    /// Keep only the first `height` rows.
    pub fn truncate(&mut self, height: usize) {
        self.rows.truncate(height);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn into_rows(self) -> Vec<Vec<Pixel>> {
        self.rows
    }

    fn check_row(&self, y: usize, row: &[Pixel]) -> Result<(), BitmapError> {
        if !self.rows.is_empty() && row.len() != self.width() {
            return Err(BitmapError::RaggedRow {
                row: y,
                expected: self.width(),
                actual: row.len(),
            });
        }
        Ok(())
    }
}

#[cfg(feature = "imgref")]
impl PixelGrid {
    /// Copy the grid into a contiguous [`imgref::ImgVec`].
    pub fn to_imgvec(&self) -> imgref::ImgVec<Pixel> {
        let buf: Vec<Pixel> = self.rows.iter().flatten().copied().collect();
        imgref::ImgVec::new(buf, self.width(), self.height())
    }

    /// Build a grid from an [`imgref::ImgRef`], dropping any stride padding.
    pub fn from_imgref(img: imgref::ImgRef<'_, Pixel>) -> Self {
        Self {
            rows: img.rows().map(<[Pixel]>::to_vec).collect(),
        }
    }
}
