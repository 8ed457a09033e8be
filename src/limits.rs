use crate::error::PpmError;

/// Resource limits applied while decoding.
///
/// All fields default to `None` (no limit). Limits are checked once the
/// header is parsed, before any pixel row is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded pixel rows (3 bytes per pixel).
    pub max_memory_bytes: Option<u64>,
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), PpmError> {
    match limit {
        Some(max) if value > max => Err(PpmError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Limits from a CLI-style pair where `0` means unlimited.
    pub fn from_max_dimensions(max_width: u64, max_height: u64) -> Limits {
        Limits {
            max_width: (max_width != 0).then_some(max_width),
            max_height: (max_height != 0).then_some(max_height),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), PpmError> {
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )
    }

    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), PpmError> {
        exceeds("allocation of bytes", bytes as u64, self.max_memory_bytes)
    }
}
