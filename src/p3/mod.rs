//! Plain PPM (P3): ASCII RGB raster, one text line per image row.
//!
//! ```text
//! P3
//! <width> <height>
//! <max color value>
//! <r> <g> <b> <r> <g> <b> ...   (width * 3 integers, height lines)
//! ```

mod decode;
mod encode;

use crate::error::PpmError;
use crate::image::PpmImage;
use crate::info::ImageInfo;
use crate::limits::Limits;
use alloc::vec::Vec;
use enough::Stop;

/// Parsed P3 header (internal).
#[derive(Debug)]
pub(crate) struct P3Header {
    pub width: u32,
    pub height: u32,
    pub max_value: u8,
}

/// Probe header for ImageInfo without reading the raster.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, PpmError> {
    let text = decode::as_text(data)?;
    let header = decode::parse_header(&mut decode::LineReader::new(text), false)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        max_value: header.max_value,
    })
}

/// Decode P3 data (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    lenient: bool,
    stop: &dyn Stop,
) -> Result<PpmImage, PpmError> {
    let text = decode::as_text(data)?;
    let mut lines = decode::LineReader::new(text);
    let header = decode::parse_header(&mut lines, lenient)?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        let out_bytes = (header.width as usize)
            .checked_mul(header.height as usize)
            .and_then(|wh| wh.checked_mul(3))
            .ok_or(PpmError::DimensionsTooLarge {
                width: header.width,
                height: header.height,
            })?;
        limits.check_memory(out_bytes)?;
    }

    stop.check()?;

    let rows = decode::parse_rows(&mut lines, &header, lenient, stop)?;
    Ok(PpmImage {
        width: header.width,
        height: header.height,
        max_value: header.max_value,
        rows,
    })
}

/// Encode to P3 (called from EncodeRequest).
pub(crate) fn encode(image: &PpmImage, stop: &dyn Stop) -> Result<Vec<u8>, PpmError> {
    encode::encode_p3(image, stop)
}
