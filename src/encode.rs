use alloc::vec::Vec;
use enough::Stop;

use crate::error::PpmError;
use crate::image::PpmImage;

/// Builder for encoding P3 data.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    _private: (),
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encode(self, image: &PpmImage, stop: impl Stop) -> Result<Vec<u8>, PpmError> {
        crate::p3::encode(image, &stop)
    }
}

/// Encode `image` as P3 text.
pub fn encode(image: &PpmImage, stop: impl Stop) -> Result<Vec<u8>, PpmError> {
    EncodeRequest::new().encode(image, stop)
}
