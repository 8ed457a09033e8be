use alloc::vec;
use alloc::vec::Vec;

use rgb::RGB8;

use crate::error::PpmError;

/// A decoded P3 image.
///
/// Rows are stored top to bottom, pixels left to right. Every row is
/// expected to hold exactly `width` pixels and there should be `height`
/// rows; the encoder writes whatever is present without re-checking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PpmImage {
    pub width: u32,
    pub height: u32,
    /// Format-declared ceiling for channel values.
    pub max_value: u8,
    pub rows: Vec<Vec<RGB8>>,
}

impl PpmImage {
    /// A `width` x `height` image filled with black.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero, such an image could not be
    /// decoded back.
    pub fn new(width: u32, height: u32, max_value: u8) -> PpmImage {
        assert!(
            width > 0 && height > 0,
            "image dimensions must be positive, got {width}x{height}"
        );
        PpmImage {
            width,
            height,
            max_value,
            rows: vec![vec![RGB8::new(0, 0, 0); width as usize]; height as usize],
        }
    }

    /// Build an image from existing rows, taking the dimensions from them.
    ///
    /// Returns [`PpmError::InvalidHeader`] if there are no rows or the rows
    /// are empty, and [`PpmError::MalformedRow`] if rows have differing
    /// lengths.
    pub fn from_rows(rows: Vec<Vec<RGB8>>, max_value: u8) -> Result<PpmImage, PpmError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(PpmError::InvalidHeader(alloc::format!(
                "dimensions must be positive, got {width}x{}",
                rows.len()
            )));
        }
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PpmError::MalformedRow {
                row,
                expected: width * 3,
                found: bad.len() * 3,
            });
        }
        Ok(PpmImage {
            width: width as u32,
            height: rows.len() as u32,
            max_value,
            rows,
        })
    }

    /// Iterate over every pixel, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = &RGB8> {
        self.rows.iter().flatten()
    }

    /// Mutable iteration over every pixel, row by row.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut RGB8> {
        self.rows.iter_mut().flatten()
    }

    /// Check that there are `height` rows of `width` pixels each.
    ///
    /// The fields are public, so a hand-edited image can drift from its
    /// declared dimensions; decoded images always pass.
    pub fn check_shape(&self) -> Result<(), PpmError> {
        let width = self.width as usize;
        if self.rows.len() != self.height as usize {
            return Err(PpmError::InvalidData(alloc::format!(
                "expected {} rows, found {}",
                self.height,
                self.rows.len()
            )));
        }
        match self.rows.iter().position(|r| r.len() != width) {
            Some(row) => Err(PpmError::MalformedRow {
                row,
                expected: width * 3,
                found: self.rows[row].len() * 3,
            }),
            None => Ok(()),
        }
    }

    /// Copy the rows into a contiguous [`imgref::ImgVec`].
    ///
    /// Fails with the [`PpmImage::check_shape`] error if the rows do not
    /// match `width` and `height`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> Result<imgref::ImgVec<RGB8>, PpmError> {
        self.check_shape()?;
        let buf: Vec<RGB8> = self.pixels().copied().collect();
        Ok(imgref::ImgVec::new(
            buf,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Build an image from a 2D pixel buffer.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, RGB8>, max_value: u8) -> PpmImage {
        PpmImage {
            width: img.width() as u32,
            height: img.height() as u32,
            max_value,
            rows: img.rows().map(<[RGB8]>::to_vec).collect(),
        }
    }
}

/// A color channel of an RGB pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    /// Mutable access to this channel of `px`.
    pub fn of_mut(self, px: &mut RGB8) -> &mut u8 {
        match self {
            Channel::Red => &mut px.r,
            Channel::Green => &mut px.g,
            Channel::Blue => &mut px.b,
        }
    }

    /// This channel's value in `px`.
    pub fn of(self, px: &RGB8) -> u8 {
        match self {
            Channel::Red => px.r,
            Channel::Green => px.g,
            Channel::Blue => px.b,
        }
    }
}

impl TryFrom<i64> for Channel {
    type Error = PpmError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Channel::Red),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Blue),
            _ => Err(PpmError::InvalidChannel(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_image_has_requested_shape() {
        let img = PpmImage::new(4, 3, 255);
        assert_eq!(img.rows.len(), 3);
        assert!(img.rows.iter().all(|r| r.len() == 4));
        assert_eq!(img.pixels().count(), 12);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows = vec![vec![RGB8::new(1, 2, 3); 2], vec![RGB8::new(1, 2, 3)]];
        match PpmImage::from_rows(rows, 255) {
            Err(PpmError::MalformedRow { row, expected, found }) => {
                assert_eq!((row, expected, found), (1, 6, 3));
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert!(matches!(
            PpmImage::from_rows(vec![], 255),
            Err(PpmError::InvalidHeader(_))
        ));
        assert!(matches!(
            PpmImage::from_rows(vec![vec![], vec![]], 255),
            Err(PpmError::InvalidHeader(_))
        ));
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn new_rejects_zero_width() {
        let _ = PpmImage::new(0, 3, 255);
    }

    #[test]
    fn check_shape_finds_drift() {
        let mut img = PpmImage::new(2, 2, 255);
        assert!(img.check_shape().is_ok());

        img.rows[1].pop();
        assert!(matches!(
            img.check_shape(),
            Err(PpmError::MalformedRow { row: 1, expected: 6, found: 3 })
        ));

        img.rows.pop();
        assert!(matches!(img.check_shape(), Err(PpmError::InvalidData(_))));
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_rejects_ragged_rows() {
        let mut img = PpmImage::new(3, 2, 255);
        img.rows[0].truncate(1);
        assert!(img.to_imgvec().is_err());
    }

    #[test]
    fn channel_selector_range() {
        assert_eq!(Channel::try_from(0).unwrap(), Channel::Red);
        assert_eq!(Channel::try_from(2).unwrap(), Channel::Blue);
        assert!(matches!(
            Channel::try_from(3),
            Err(PpmError::InvalidChannel(3))
        ));
        assert!(Channel::try_from(-1).is_err());
    }

    #[test]
    fn channel_accessors() {
        let mut px = RGB8::new(10, 20, 30);
        assert_eq!(Channel::Green.of(&px), 20);
        *Channel::Blue.of_mut(&mut px) = 0;
        assert_eq!(px, RGB8::new(10, 20, 0));
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_roundtrip() {
        let rows = vec![
            vec![RGB8::new(1, 2, 3), RGB8::new(4, 5, 6)],
            vec![RGB8::new(7, 8, 9), RGB8::new(10, 11, 12)],
        ];
        let img = PpmImage::from_rows(rows, 255).unwrap();
        let buf = img.to_imgvec().unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 2);
        let back = PpmImage::from_imgref(buf.as_ref(), 255);
        assert_eq!(back, img);
    }
}
