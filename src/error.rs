use alloc::string::String;
use enough::StopReason;

/// Errors from P3 decoding, encoding and transforms.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PpmError {
    #[error("unsupported PPM format: {0:?}")]
    UnrecognizedFormat(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("line {line}: expected an integer, found {token:?}")]
    InvalidInteger { line: usize, token: String },

    #[error("row {row}: expected {expected} samples, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: sample {value} exceeds max color value {max}")]
    SampleOutOfRange { row: usize, value: u32, max: u8 },

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid color index {0}, it must be 0 (red), 1 (green) or 2 (blue)")]
    InvalidChannel(i64),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    /// File read or write failure, only produced by the `std` file helpers.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<StopReason> for PpmError {
    fn from(r: StopReason) -> Self {
        PpmError::Cancelled(r)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for PpmError {
    fn from(e: std::io::Error) -> Self {
        PpmError::Io(e.to_string())
    }
}
