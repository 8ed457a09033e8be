//! P3 writer.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::PpmError;
use crate::image::PpmImage;

/// Serialize `image` as P3 text.
///
/// Rows are written exactly as stored; `width` and `height` only feed the
/// header line.
pub(crate) fn encode_p3(image: &PpmImage, stop: &dyn Stop) -> Result<Vec<u8>, PpmError> {
    let header = format!(
        "P3\n{} {}\n{}\n",
        image.width, image.height, image.max_value
    );
    // Worst case "255 " per sample.
    let body = image.rows.iter().map(|r| r.len() * 12 + 1).sum::<usize>();
    let mut out = Vec::with_capacity(header.len() + body);
    out.extend_from_slice(header.as_bytes());

    for (row_idx, row) in image.rows.iter().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            push_sample(&mut out, px.r);
            push_sample(&mut out, px.g);
            push_sample(&mut out, px.b);
        }
        out.push(b'\n');
    }

    Ok(out)
}

/// Append `v` in decimal followed by a space.
fn push_sample(out: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        out.push(b'0' + v / 100);
    }
    if v >= 10 {
        out.push(b'0' + (v / 10) % 10);
    }
    out.push(b'0' + v % 10);
    out.push(b' ');
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use enough::Unstoppable;
    use rgb::RGB8;

    #[test]
    fn layout_matches_format() {
        let img = PpmImage {
            width: 2,
            height: 1,
            max_value: 255,
            rows: vec![vec![RGB8::new(10, 20, 30), RGB8::new(200, 100, 5)]],
        };
        let out = encode_p3(&img, &Unstoppable).unwrap();
        assert_eq!(
            core::str::from_utf8(&out).unwrap(),
            "P3\n2 1\n255\n10 20 30 200 100 5 \n"
        );
    }

    #[test]
    fn sample_digits() {
        let mut out = Vec::new();
        for v in [0u8, 7, 10, 99, 100, 255] {
            push_sample(&mut out, v);
        }
        assert_eq!(out, b"0 7 10 99 100 255 ");
    }

    #[test]
    fn does_not_validate_shape() {
        // Header says 3x2 but only one short row exists.
        let img = PpmImage {
            width: 3,
            height: 2,
            max_value: 15,
            rows: vec![vec![RGB8::new(1, 1, 1)]],
        };
        let out = encode_p3(&img, &Unstoppable).unwrap();
        assert_eq!(out, b"P3\n3 2\n15\n1 1 1 \n");
    }
}
