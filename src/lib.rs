//! # zenbmpdoc
//!
//! Editable uncompressed BMP documents. A file is parsed into its headers,
//! palette and a grid of pixel cells; the grid and palette can be edited and
//! the document written back with its size fields recalculated.
//!
//! ## Supported Files
//!
//! - 40-byte `BITMAPINFOHEADER` only
//! - Uncompressed (`BI_RGB`) pixel data only
//! - 4 and 8 bits per pixel (indexed), 16, 24 and 32 bits per pixel (direct)
//! - Little-endian files (signature starting with `B`) and a byte-swapped
//!   variant where every header integer is big-endian
//!
//! Pixel cells are kept exactly as stored: 4-bit cells are palette indices,
//! byte-aligned cells are opaque groups of `bits / 8` bytes. Rows are kept in
//! file order; no vertical flip is applied.
//!
//! ## Non-Goals
//!
//! - RLE, bitfields, embedded JPEG/PNG
//! - 1 bit per pixel, OS/2 and V4/V5 headers
//! - Color conversion and resampling
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmpdoc::{BmpDocument, Pixel};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//! let mut doc = BmpDocument::parse(data)?;
//! if let Some(white) = doc.find_white() {
//!     doc.pixels_mut().set(0, 0, Pixel::index(white as u8))?;
//! }
//! let bytes = doc.to_bytes()?;
//! # Ok::<(), zenbmpdoc::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod document;
mod endian;
mod error;
mod grid;
mod header;
mod info;
mod limits;
mod palette;
mod pixel;

pub mod codec;

// Re-exports
pub use decode::DecodeRequest;
pub use document::BmpDocument;
pub use endian::Endianness;
pub use error::{BitmapError, ErrorKind};
pub use grid::PixelGrid;
pub use header::{Compression, FILE_HEADER_LEN, FileHeader, INFO_HEADER_LEN, InfoHeader, PALETTE_START};
pub use info::ImageInfo;
pub use limits::Limits;
pub use palette::{ColorEntry, ColorTable};
pub use pixel::{BitDepth, Pixel};
