//! # plainppm
//!
//! Plain-text PPM (P3) decoder and encoder, with a handful of in-place
//! pixel transforms.
//!
//! ## Supported Formats
//!
//! - **P3** (plain PPM): ASCII RGB, 8-bit channels, max color value 1..=255,
//!   one text line per image row.
//!
//! ## Non-Goals
//!
//! - Binary PNM (P5, P6, P7) and any other image format
//! - Streaming decode
//! - Color management, gamma, alpha
//!
//! ## Strict and lenient decoding
//!
//! Decoding is strict by default: a token that is not an integer, a row with
//! the wrong number of samples, or a sample above the max color value is an
//! error. [`DecodeRequest::lenient`] reads bad tokens as 0, drops excess
//! samples and keeps the low 8 bits of oversized samples. Short rows are
//! always rejected.
//!
//! ## Usage
//!
//! ```
//! use plainppm::{decode, encode, transform, Unstoppable};
//!
//! let data = b"P3\n2 1\n255\n10 20 30 200 100 50\n";
//! let mut image = decode(data, Unstoppable)?;
//! transform::grayscale(&mut image);
//!
//! let out = encode(&image, Unstoppable)?;
//! assert_eq!(out, b"P3\n2 1\n255\n20 20 20 116 116 116 \n");
//! # Ok::<(), plainppm::PpmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod info;
mod limits;
mod p3;

pub mod transform;

mod decode;
mod encode;

#[cfg(feature = "std")]
mod file_io;

// Re-exports
pub use decode::{DecodeRequest, decode};
pub use encode::{EncodeRequest, encode};
pub use enough::{Stop, Unstoppable};
pub use error::PpmError;
pub use image::{Channel, PpmImage};
pub use info::ImageInfo;
pub use limits::Limits;
pub use rgb::RGB8;
pub use transform::Transform;

#[cfg(feature = "std")]
pub use file_io::{read_file, write_file};

#[cfg(feature = "imgref")]
pub use imgref;
