//! P3 (plain PPM) text parser.

use alloc::string::ToString;
use alloc::vec::Vec;
use enough::Stop;
use rgb::RGB8;

use super::P3Header;
use crate::error::PpmError;

/// Line iterator that remembers 1-based line numbers for error messages.
pub(crate) struct LineReader<'a> {
    lines: core::iter::Enumerate<core::str::Lines<'a>>,
}

impl<'a> LineReader<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
        }
    }

    fn next_line(&mut self) -> Result<(usize, &'a str), PpmError> {
        self.lines
            .next()
            .map(|(idx, line)| (idx + 1, line))
            .ok_or(PpmError::UnexpectedEof)
    }
}

/// Interpret raw bytes as text, the format is ASCII only.
pub(crate) fn as_text(data: &[u8]) -> Result<&str, PpmError> {
    core::str::from_utf8(data)
        .map_err(|e| PpmError::InvalidData(alloc::format!("input is not text: {e}")))
}

/// Parse one decimal token.
///
/// In lenient mode anything that is not a non-negative integer reads as 0.
fn parse_int(token: &str, line: usize, lenient: bool) -> Result<u32, PpmError> {
    match token.parse::<u32>() {
        Ok(v) => Ok(v),
        Err(_) if lenient => {
            log::trace!("line {line}: treating {token:?} as 0");
            Ok(0)
        }
        Err(_) => Err(PpmError::InvalidInteger {
            line,
            token: token.to_string(),
        }),
    }
}

/// Read the three header lines: magic, dimensions, max color value.
pub(crate) fn parse_header(lines: &mut LineReader<'_>, lenient: bool) -> Result<P3Header, PpmError> {
    let (_, magic) = lines.next_line()?;
    let magic = magic.trim();
    if magic != "P3" {
        return Err(PpmError::UnrecognizedFormat(magic.to_string()));
    }

    let (line, dims) = lines.next_line()?;
    let fields: Vec<&str> = dims.split_whitespace().collect();
    if fields.len() < 2 || (fields.len() > 2 && !lenient) {
        return Err(PpmError::InvalidHeader(alloc::format!(
            "line {line}: expected width and height, found {:?}",
            dims.trim()
        )));
    }
    let width = parse_int(fields[0], line, lenient)?;
    let height = parse_int(fields[1], line, lenient)?;
    if width == 0 || height == 0 {
        return Err(PpmError::InvalidHeader(alloc::format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }

    let (line, max) = lines.next_line()?;
    let fields: Vec<&str> = max.split_whitespace().collect();
    if fields.is_empty() || (fields.len() > 1 && !lenient) {
        return Err(PpmError::InvalidHeader(alloc::format!(
            "line {line}: expected a single max color value, found {:?}",
            max.trim()
        )));
    }
    let max_value = parse_int(fields[0], line, lenient)?;
    let max_value = match u8::try_from(max_value) {
        Ok(v) if v > 0 => v,
        _ => {
            return Err(PpmError::InvalidHeader(alloc::format!(
                "max color value {max_value} is outside 1..=255"
            )));
        }
    };

    log::debug!("P3 header: {width}x{height}, max color value {max_value}");

    Ok(P3Header {
        width,
        height,
        max_value,
    })
}

/// Read `header.height` rows of exactly `header.width` RGB triples.
pub(crate) fn parse_rows(
    lines: &mut LineReader<'_>,
    header: &P3Header,
    lenient: bool,
    stop: &dyn Stop,
) -> Result<Vec<Vec<RGB8>>, PpmError> {
    let expected = (header.width as usize)
        .checked_mul(3)
        .ok_or(PpmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;

    let mut rows = Vec::new();
    let mut samples: Vec<u8> = Vec::new();

    for row in 0..header.height as usize {
        if row % 16 == 0 {
            stop.check()?;
        }
        let (line, text) = lines.next_line()?;
        let mut tokens = text.split_whitespace();

        samples.clear();
        for token in tokens.by_ref().take(expected) {
            samples.push(sample(token, line, row, header.max_value, lenient)?);
        }
        if samples.len() < expected {
            return Err(PpmError::MalformedRow {
                row,
                expected,
                found: samples.len(),
            });
        }
        let extra = tokens.count();
        if extra > 0 {
            if !lenient {
                return Err(PpmError::MalformedRow {
                    row,
                    expected,
                    found: expected + extra,
                });
            }
            log::warn!("row {row}: ignoring {extra} trailing samples");
        }

        rows.push(
            samples
                .chunks_exact(3)
                .map(|c| RGB8::new(c[0], c[1], c[2]))
                .collect(),
        );
    }

    Ok(rows)
}

fn sample(token: &str, line: usize, row: usize, max: u8, lenient: bool) -> Result<u8, PpmError> {
    let value = parse_int(token, line, lenient)?;
    if value > u32::from(max) && !lenient {
        return Err(PpmError::SampleOutOfRange { row, value, max });
    }
    // Lenient input keeps the low 8 bits.
    Ok((value & 0xff) as u8)
}
