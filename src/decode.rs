use crate::document::BmpDocument;
use crate::error::BitmapError;
use crate::limits::Limits;

/// Builder for parsing a bitmap with optional resource limits.
///
/// ```no_run
/// use zenbmpdoc::{DecodeRequest, Limits};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits {
///     max_pixels: Some(4096 * 4096),
///     ..Default::default()
/// };
/// let doc = DecodeRequest::new(data).with_limits(&limits).decode()?;
/// # Ok::<(), zenbmpdoc::BitmapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or grid size exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self) -> Result<BmpDocument, BitmapError> {
        BmpDocument::parse_with_limits(self.data, self.limits)
    }
}
