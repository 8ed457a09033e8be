use crate::error::PpmError;

/// Header information read without decoding the raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub max_value: u8,
}

impl ImageInfo {
    /// Parse the three P3 header lines of `data`.
    ///
    /// The header is always parsed strictly; pixel rows are not looked at.
    pub fn from_bytes(data: &[u8]) -> Result<ImageInfo, PpmError> {
        crate::p3::probe_header(data)
    }
}
