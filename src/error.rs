use alloc::string::String;

use crate::header::Compression;

/// Errors from BMP parsing, editing, and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("empty input is not a bitmap")]
    EmptyInput,

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unsupported DIB header size {0}, only the 40-byte header is understood")]
    InvalidHeaderSize(u32),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("compression mode {0:?} is not supported, only uncompressed RGB")]
    UnsupportedCompression(Compression),

    #[error("unknown compression mode {0}")]
    UnknownCompression(u32),

    #[error("nibble packing needs an even number of cells, got {0}")]
    OddNibbleCount(usize),

    #[error("a pixel cell holds 1 to 4 bytes, got {0}")]
    InvalidCellLength(usize),

    #[error("pixel holds {actual} bytes, expected {expected}")]
    PixelSizeMismatch { expected: usize, actual: usize },

    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("{0} bits per pixel is not implemented")]
    UnsupportedBitDepth(u16),

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`BitmapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not a well-formed bitmap this crate understands.
    /// Parsing aborts and no document is produced.
    Structural,
    /// The caller handed in data that breaks an encoding precondition.
    Precondition,
    /// The input is valid but uses a feature this crate does not implement.
    NotImplemented,
    /// A configured [`crate::Limits`] ceiling or an arithmetic bound was hit.
    Limit,
    /// Reading or writing the underlying byte channel failed.
    Io,
}

impl BitmapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput
            | Self::UnexpectedEof
            | Self::InvalidHeaderSize(_)
            | Self::InvalidHeader(_)
            | Self::UnsupportedCompression(_)
            | Self::UnknownCompression(_) => ErrorKind::Structural,
            Self::OddNibbleCount(_)
            | Self::InvalidCellLength(_)
            | Self::PixelSizeMismatch { .. }
            | Self::RaggedRow { .. }
            | Self::OutOfBounds { .. } => ErrorKind::Precondition,
            Self::UnsupportedBitDepth(_) | Self::NotImplemented(_) => ErrorKind::NotImplemented,
            Self::DimensionsTooLarge { .. } | Self::LimitExceeded(_) => ErrorKind::Limit,
            #[cfg(feature = "std")]
            Self::Io(_) => ErrorKind::Io,
        }
    }
}
