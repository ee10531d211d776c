use crate::error::BitmapError;

/// Supported bits per pixel.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 4-bit palette indices, two per byte.
    Bpp4,
    /// 8-bit palette indices.
    Bpp8,
    /// 16-bit direct color, stored opaquely.
    Bpp16,
    /// 24-bit BGR.
    Bpp24,
    /// 32-bit BGRA/BGRX.
    Bpp32,
}

impl BitDepth {
    pub fn from_bits(bits: u16) -> Result<Self, BitmapError> {
        Ok(match bits {
            4 => Self::Bpp4,
            8 => Self::Bpp8,
            16 => Self::Bpp16,
            24 => Self::Bpp24,
            32 => Self::Bpp32,
            other => return Err(BitmapError::UnsupportedBitDepth(other)),
        })
    }

    pub fn bits(self) -> u16 {
        match self {
            Self::Bpp4 => 4,
            Self::Bpp8 => 8,
            Self::Bpp16 => 16,
            Self::Bpp24 => 24,
            Self::Bpp32 => 32,
        }
    }

    /// Bytes per pixel cell. `None` for packed sub-byte depths.
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            Self::Bpp4 => None,
            Self::Bpp8 => Some(1),
            Self::Bpp16 => Some(2),
            Self::Bpp24 => Some(3),
            Self::Bpp32 => Some(4),
        }
    }

    /// Whether the file carries a palette for this depth.
    pub fn is_indexed(self) -> bool {
        matches!(self, Self::Bpp4 | Self::Bpp8)
    }
}

/// One cell of the pixel grid.
///
/// For 4-bit images this is a single byte holding the palette index. For
/// byte-aligned depths it is the raw group of `bits / 8` bytes exactly as
/// stored in the file; channel order is not interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    bytes: [u8; 4],
    len: u8,
}

impl Pixel {
    /// A palette index cell for 4- and 8-bit images.
    pub const fn index(i: u8) -> Self {
        Self {
            bytes: [i, 0, 0, 0],
            len: 1,
        }
    }

    /// A raw cell of 1 to 4 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BitmapError> {
        if bytes.is_empty() || bytes.len() > 4 {
            return Err(BitmapError::InvalidCellLength(bytes.len()));
        }
        let mut buf = [0u8; 4];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: buf,
            len: bytes.len() as u8,
        })
    }

    /// A 24-bit cell from its stored `b, g, r` bytes.
    pub const fn bgr(b: u8, g: u8, r: u8) -> Self {
        Self {
            bytes: [b, g, r, 0],
            len: 3,
        }
    }

    /// A 32-bit cell from its stored `b, g, r, a` bytes.
    pub const fn bgra(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self {
            bytes: [b, g, r, a],
            len: 4,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The palette index for single-byte cells.
    pub fn index_value(&self) -> Option<u8> {
        (self.len == 1).then_some(self.bytes[0])
    }
}

impl core::fmt::Debug for Pixel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Pixel").field(&self.as_bytes()).finish()
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::alt::BGRA8> for Pixel {
    fn from(c: rgb::alt::BGRA8) -> Self {
        Self::bgra(c.b, c.g, c.r, c.a)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::alt::BGR8> for Pixel {
    fn from(c: rgb::alt::BGR8) -> Self {
        Self::bgr(c.b, c.g, c.r)
    }
}

#[cfg(feature = "rgb")]
impl Pixel {
    /// Read a 24- or 32-bit cell as BGRA. 24-bit cells report alpha 255.
    pub fn to_bgra8(&self) -> Option<rgb::alt::BGRA8> {
        let [b, g, r, a] = self.bytes;
        match self.len {
            3 => Some(rgb::alt::BGRA8 { b, g, r, a: 255 }),
            4 => Some(rgb::alt::BGRA8 { b, g, r, a }),
            _ => None,
        }
    }
}
