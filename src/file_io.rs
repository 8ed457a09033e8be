use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use enough::Unstoppable;

use crate::error::PpmError;
use crate::image::PpmImage;

/// Read and strictly decode the P3 file at `path`.
///
/// Use [`crate::DecodeRequest`] on the file contents for lenient parsing or
/// limits.
pub fn read_file(path: impl AsRef<Path>) -> Result<PpmImage, PpmError> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    let data = std::fs::read(path)?;
    crate::decode(&data, Unstoppable)
}

/// Encode `image` and write it to `path`, replacing any existing file.
pub fn write_file(path: impl AsRef<Path>, image: &PpmImage) -> Result<(), PpmError> {
    let path = path.as_ref();
    let encoded = crate::encode(image, Unstoppable)?;

    log::debug!("writing {} bytes to {}", encoded.len(), path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&encoded)?;
    writer.flush()?;
    Ok(())
}
