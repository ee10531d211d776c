//! Editable bitmap document: parse, edit, recalculate, serialize.

use alloc::vec::Vec;
use core::fmt;

use crate::codec::{decode_rows, encode_rows, stride};
use crate::endian::Endianness;
use crate::error::BitmapError;
use crate::grid::PixelGrid;
use crate::header::{FileHeader, INFO_HEADER_LEN, InfoHeader};
use crate::limits::Limits;
use crate::palette::{ColorEntry, ColorTable};
use crate::pixel::BitDepth;

/// Headers shared by the full parse and the header-only probe.
pub(crate) struct ParsedHeaders {
    pub endian: Endianness,
    pub file: FileHeader,
    pub info: InfoHeader,
    pub depth: BitDepth,
}

pub(crate) fn parse_headers(data: &[u8]) -> Result<ParsedHeaders, BitmapError> {
    let first = *data.first().ok_or(BitmapError::EmptyInput)?;
    let endian = Endianness::from_signature_byte(first);
    let file = FileHeader::parse(data, endian)?;
    let info = InfoHeader::parse(data, endian)?;
    let depth = BitDepth::from_bits(info.bits_per_pixel)?;
    Ok(ParsedHeaders {
        endian,
        file,
        info,
        depth,
    })
}

/// A parsed bitmap whose pixel grid and palette can be edited and written
/// back.
///
/// Width and height are not tracked separately from the grid: they are
/// recomputed from the grid's shape when the document is serialized. Every
/// other header field is carried through unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpDocument {
    endian: Endianness,
    file_header: FileHeader,
    info_header: InfoHeader,
    depth: BitDepth,
    palette: ColorTable,
    pixels: PixelGrid,
}

impl BmpDocument {
    /// Parse a complete bitmap file.
    pub fn parse(data: &[u8]) -> Result<Self, BitmapError> {
        Self::parse_with_limits(data, None)
    }

    pub(crate) fn parse_with_limits(
        data: &[u8],
        limits: Option<&Limits>,
    ) -> Result<Self, BitmapError> {
        let ParsedHeaders {
            endian,
            file,
            info,
            depth,
        } = parse_headers(data)?;

        let offset = file.pixel_data_offset as usize;
        let palette = ColorTable::parse(data, offset)?;

        let width = info.width as u32;
        let height = info.row_count();
        if let Some(limits) = limits {
            limits.check(width, height)?;
        }

        let pixel_data = data.get(offset..).ok_or(BitmapError::UnexpectedEof)?;
        let pixels = decode_rows(pixel_data, width as usize, height as usize, depth)?;

        log::debug!(
            "parsed {width}x{height} bitmap, {} bpp, {endian:?}, {} palette entries",
            depth.bits(),
            palette.len()
        );

        Ok(Self {
            endian,
            file_header: file,
            info_header: info,
            depth,
            palette,
            pixels,
        })
    }

    /// Creating a bitmap from nothing is not supported; parse an existing
    /// file instead.
    pub fn create() -> Result<Self, BitmapError> {
        Err(BitmapError::NotImplemented("creating a blank bitmap"))
    }

    pub fn endianness(&self) -> Endianness {
        self.endian
    }

    /// The file header as of the last parse or save.
    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    /// The info header as of the last parse or save.
    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.depth
    }

    pub fn palette(&self) -> &ColorTable {
        &self.palette
    }

    /// Palette entries, editable in place. The palette length is fixed by
    /// the pixel data offset.
    pub fn palette_mut(&mut self) -> &mut [ColorEntry] {
        self.palette.entries_mut()
    }

    /// Index of the first pure-white palette entry.
    pub fn find_white(&self) -> Option<usize> {
        self.palette.find_white()
    }

    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelGrid {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> PixelGrid {
        self.pixels
    }

    /// Current grid width.
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Current grid height.
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Headers with the derived size fields brought in line with the grid.
    fn recalculated(&self) -> Result<(FileHeader, InfoHeader), BitmapError> {
        let rows = self.pixels.height();
        let cols = self.pixels.width();
        let too_large = || BitmapError::DimensionsTooLarge {
            width: cols as u64,
            height: rows as u64,
        };

        let row_stride = stride(cols, self.depth.bits()).ok_or_else(too_large)?;
        let image_size = row_stride
            .checked_mul(rows)
            .and_then(|s| u32::try_from(s).ok())
            .ok_or_else(too_large)?;
        let file_size = self
            .file_header
            .pixel_data_offset
            .checked_add(image_size)
            .ok_or_else(too_large)?;
        let width = i32::try_from(cols).map_err(|_| too_large())?;
        let height = i32::try_from(rows).map_err(|_| too_large())?;

        let mut info = self.info_header;
        info.header_size = INFO_HEADER_LEN;
        info.width = width;
        info.height = if self.info_header.is_top_down() {
            -height
        } else {
            height
        };
        info.image_size = image_size;

        let mut file = self.file_header;
        file.file_size = file_size;
        Ok((file, info))
    }

    /// Bring width, height, image size and file size in line with the grid.
    pub fn recalculate(&mut self) -> Result<(), BitmapError> {
        let (file, info) = self.recalculated()?;
        self.file_header = file;
        self.info_header = info;
        Ok(())
    }

    /// Serialize the document.
    ///
    /// Headers are recalculated first. If encoding fails the document is
    /// left exactly as it was.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>, BitmapError> {
        let (file, info) = self.recalculated()?;
        let mut out = Vec::with_capacity(file.file_size as usize);
        file.write(self.endian, &mut out);
        info.write(self.endian, &mut out);
        // The table fills the gap up to the offset, direct-color files included.
        self.palette.write(&mut out);
        encode_rows(&self.pixels, self.depth, &mut out)?;

        log::debug!(
            "serialized {}x{} bitmap, {} bytes",
            info.width,
            info.height,
            out.len()
        );

        self.file_header = file;
        self.info_header = info;
        Ok(out)
    }
}

#[cfg(feature = "std")]
impl BmpDocument {
    /// Read a bitmap to the end of `reader` and parse it.
    pub fn from_reader<R: std::io::Read>(mut reader: R) -> Result<Self, BitmapError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::parse(&data)
    }

    /// Read and parse the bitmap at `path`.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, BitmapError> {
        let data = std::fs::read(path)?;
        Self::parse(&data)
    }

    /// Serialize into `writer`.
    pub fn write_to<W: std::io::Write>(&mut self, mut writer: W) -> Result<(), BitmapError> {
        let bytes = self.to_bytes()?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Serialize to `path`, creating or truncating the file.
    pub fn save<P: AsRef<std::path::Path>>(&mut self, path: P) -> Result<(), BitmapError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl fmt::Display for BmpDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.file_header;
        let i = &self.info_header;
        writeln!(
            f,
            "file: signature={:?} size={} reserved=({}, {}) offset={}",
            core::str::from_utf8(&h.signature).unwrap_or("??"),
            h.file_size,
            h.reserved1,
            h.reserved2,
            h.pixel_data_offset
        )?;
        write!(
            f,
            "info: header_size={} width={} height={} planes={} bpp={} compression={:?} \
             image_size={} resolution=({}, {}) colors_used={} important_colors={}",
            i.header_size,
            i.width,
            i.height,
            i.planes,
            i.bits_per_pixel,
            i.compression,
            i.image_size,
            i.x_pixels_per_meter,
            i.y_pixels_per_meter,
            i.colors_used,
            i.important_colors
        )
    }
}
