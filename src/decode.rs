use enough::Stop;

use crate::error::PpmError;
use crate::image::PpmImage;
use crate::limits::Limits;

/// Builder for decoding P3 data.
///
/// ```
/// use plainppm::{DecodeRequest, Limits, Unstoppable};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let image = DecodeRequest::new(b"P3\n1 1\n255\n1 2 3\n")
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(image.rows[0][0].g, 2);
/// # Ok::<(), plainppm::PpmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    lenient: bool,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            lenient: false,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Permissive parsing: non-numeric tokens read as 0, excess row samples
    /// are dropped and samples above the max color value keep their low 8
    /// bits. Short rows and out-of-range headers are still errors.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<PpmImage, PpmError> {
        crate::p3::decode(self.data, self.limits, self.lenient, &stop)
    }
}

/// Decode P3 data with default settings.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<PpmImage, PpmError> {
    DecodeRequest::new(data).decode(stop)
}
