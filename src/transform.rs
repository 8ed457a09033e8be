//! In-place pixel transforms.
//!
//! Every transform takes the image by mutable reference and makes a single
//! pass over the rows. Channel arithmetic is on `u8` and wraps modulo 256
//! where it can leave the range.

use rgb::RGB8;

use crate::error::PpmError;
use crate::image::{Channel, PpmImage};

/// Replace each pixel with the integer mean of its channels.
pub fn grayscale(image: &mut PpmImage) {
    for px in image.pixels_mut() {
        let sum = u16::from(px.r) + u16::from(px.g) + u16::from(px.b);
        // At most 765 / 3, always fits.
        let gray = u8::try_from(sum / 3).unwrap_or(u8::MAX);
        *px = RGB8::new(gray, gray, gray);
    }
}

/// Mirror each row around the vertical center line.
///
/// ```text
/// old image     new image
/// ┌─────────┐   ┌─────────┐
/// │a b c d e│   │e d c b a│
/// │f g h i j│   │j i h g f│
/// └─────────┘   └─────────┘
/// ```
pub fn flip_horizontal(image: &mut PpmImage) {
    for row in &mut image.rows {
        row.reverse();
    }
}

/// Reverse the order of rows.
///
/// ```text
/// old image     new image
/// ┌─────────┐   ┌─────────┐
/// │a b c d e│   │f g h i j│
/// │f g h i j│   │a b c d e│
/// └─────────┘   └─────────┘
/// ```
pub fn flip_vertical(image: &mut PpmImage) {
    // Swaps the row vectors themselves, pixels are not copied.
    image.rows.reverse();
}

/// Invert every channel: `max_value - value`, wrapping below zero.
pub fn invert(image: &mut PpmImage) {
    let max = image.max_value;
    for px in image.pixels_mut() {
        *px = RGB8::new(
            max.wrapping_sub(px.r),
            max.wrapping_sub(px.g),
            max.wrapping_sub(px.b),
        );
    }
}

/// Set `channel` to zero in every pixel.
pub fn flatten_channel(image: &mut PpmImage, channel: Channel) {
    for px in image.pixels_mut() {
        *channel.of_mut(px) = 0;
    }
}

/// [`flatten_channel`] with a numeric selector (0 red, 1 green, 2 blue).
///
/// An out-of-range selector returns [`PpmError::InvalidChannel`] and leaves
/// the image untouched.
pub fn flatten_color(image: &mut PpmImage, selector: i64) -> Result<(), PpmError> {
    let channel = Channel::try_from(selector)?;
    flatten_channel(image, channel);
    Ok(())
}

/// Two-level posterize: channels below `max_value / 2` become 0, the rest
/// become `max_value`.
pub fn extreme_contrast(image: &mut PpmImage) {
    let max = image.max_value;
    let mid = max / 2;
    let level = |c: u8| if c < mid { 0 } else { max };
    for px in image.pixels_mut() {
        *px = RGB8::new(level(px.r), level(px.g), level(px.b));
    }
}

/// A transform selected by name, e.g. from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    Grayscale,
    FlipHorizontal,
    FlipVertical,
    Invert,
    /// Zero the channel with this index.
    FlattenColor(i64),
    ExtremeContrast,
}

impl Transform {
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Grayscale => "grayscale",
            Transform::FlipHorizontal => "flip-horizontal",
            Transform::FlipVertical => "flip-vertical",
            Transform::Invert => "invert",
            Transform::FlattenColor(_) => "flatten-color",
            Transform::ExtremeContrast => "extreme-contrast",
        }
    }

    /// Run the transform over `image`.
    ///
    /// Only [`Transform::FlattenColor`] can fail, and it does so before
    /// touching any pixel.
    pub fn apply(&self, image: &mut PpmImage) -> Result<(), PpmError> {
        log::debug!(
            "applying {} to {}x{} image",
            self.name(),
            image.width,
            image.height
        );
        match *self {
            Transform::Grayscale => grayscale(image),
            Transform::FlipHorizontal => flip_horizontal(image),
            Transform::FlipVertical => flip_vertical(image),
            Transform::Invert => invert(image),
            Transform::FlattenColor(selector) => flatten_color(image, selector)?,
            Transform::ExtremeContrast => extreme_contrast(image),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn two_by_one() -> PpmImage {
        PpmImage::from_rows(
            vec![vec![RGB8::new(10, 20, 30), RGB8::new(200, 100, 50)]],
            255,
        )
        .unwrap()
    }

    #[test]
    fn flip_horizontal_two_pixels() {
        let mut img = two_by_one();
        flip_horizontal(&mut img);
        assert_eq!(
            img.rows[0],
            vec![RGB8::new(200, 100, 50), RGB8::new(10, 20, 30)]
        );
    }

    #[test]
    fn flip_horizontal_odd_width_keeps_center() {
        let mut img = PpmImage::from_rows(
            vec![vec![RGB8::new(1, 1, 1), RGB8::new(2, 2, 2), RGB8::new(3, 3, 3)]],
            255,
        )
        .unwrap();
        flip_horizontal(&mut img);
        assert_eq!(img.rows[0][1], RGB8::new(2, 2, 2));
        assert_eq!(img.rows[0][0], RGB8::new(3, 3, 3));
    }

    #[test]
    fn flip_vertical_swaps_rows() {
        let mut img = PpmImage::from_rows(
            vec![
                vec![RGB8::new(1, 1, 1)],
                vec![RGB8::new(2, 2, 2)],
                vec![RGB8::new(3, 3, 3)],
            ],
            255,
        )
        .unwrap();
        flip_vertical(&mut img);
        let firsts: alloc::vec::Vec<u8> = img.rows.iter().map(|r| r[0].r).collect();
        assert_eq!(firsts, vec![3, 2, 1]);
    }

    #[test]
    fn grayscale_truncates() {
        let mut img = two_by_one();
        grayscale(&mut img);
        assert_eq!(img.rows[0][0], RGB8::new(20, 20, 20));
        assert_eq!(img.rows[0][1], RGB8::new(116, 116, 116));
    }

    #[test]
    fn grayscale_does_not_overflow() {
        let mut img = PpmImage::from_rows(vec![vec![RGB8::new(255, 255, 254)]], 255).unwrap();
        grayscale(&mut img);
        assert_eq!(img.rows[0][0], RGB8::new(254, 254, 254));
    }

    #[test]
    fn invert_uses_max_value() {
        let mut img = PpmImage::from_rows(vec![vec![RGB8::new(0, 40, 100)]], 100).unwrap();
        invert(&mut img);
        assert_eq!(img.rows[0][0], RGB8::new(100, 60, 0));
    }

    #[test]
    fn invert_wraps_above_max() {
        let mut img = PpmImage::from_rows(vec![vec![RGB8::new(101, 0, 0)]], 100).unwrap();
        invert(&mut img);
        assert_eq!(img.rows[0][0].r, 255);
    }

    #[test]
    fn flatten_red() {
        let mut img = two_by_one();
        flatten_color(&mut img, 0).unwrap();
        assert_eq!(img.rows[0][0], RGB8::new(0, 20, 30));
        assert_eq!(img.rows[0][1], RGB8::new(0, 100, 50));
    }

    #[test]
    fn flatten_invalid_selector_is_noop() {
        let mut img = two_by_one();
        let before = img.clone();
        assert!(matches!(
            flatten_color(&mut img, 5),
            Err(PpmError::InvalidChannel(5))
        ));
        assert_eq!(img, before);
    }

    #[test]
    fn extreme_contrast_threshold() {
        // max 255: mid is 127, so 127 itself goes up.
        let mut img = PpmImage::from_rows(vec![vec![RGB8::new(126, 127, 255)]], 255).unwrap();
        extreme_contrast(&mut img);
        assert_eq!(img.rows[0][0], RGB8::new(0, 255, 255));

        let mut img = PpmImage::from_rows(vec![vec![RGB8::new(4, 5, 9)]], 10).unwrap();
        extreme_contrast(&mut img);
        assert_eq!(img.rows[0][0], RGB8::new(0, 10, 10));
    }

    #[test]
    fn transform_dispatch() {
        let mut img = two_by_one();
        Transform::FlattenColor(2).apply(&mut img).unwrap();
        assert_eq!(img.rows[0][0], RGB8::new(10, 20, 0));

        let before = img.clone();
        assert!(Transform::FlattenColor(-1).apply(&mut img).is_err());
        assert_eq!(img, before);

        Transform::FlipHorizontal.apply(&mut img).unwrap();
        assert_eq!(img.rows[0][0], RGB8::new(200, 100, 0));
    }

    #[test]
    fn names_are_distinct() {
        let all = [
            Transform::Grayscale,
            Transform::FlipHorizontal,
            Transform::FlipVertical,
            Transform::Invert,
            Transform::FlattenColor(0),
            Transform::ExtremeContrast,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
