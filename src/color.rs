//! Color-mode normalization for JPEG output.
//!
//! JPEG carries no alpha channel, so anything with transparency is
//! composited over an explicit [`Background`] before encoding.

use crate::error::{CompressionError, Result};
use image::{ColorType, DynamicImage, RgbImage};
use std::fmt;
use std::str::FromStr;

/// Opaque fill color that transparent pixels are blended onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Background {
    pub const WHITE: Background = Background::new(255, 255, 255);
    pub const BLACK: Background = Background::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::WHITE
    }
}

impl FromStr for Background {
    type Err = CompressionError;

    /// Parses `#RRGGBB` or `RRGGBB` (hex digits, either case).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CompressionError::InvalidBackground(s.to_string());

        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Background::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Brings a decoded image into a layout the JPEG encoder accepts.
///
/// * 8-bit RGB and 8-bit grayscale pass through untouched.
/// * Anything with an alpha channel is flattened onto `background` as RGB.
/// * Remaining layouts (16-bit, float) are converted to 8-bit RGB, except
///   16-bit grayscale which stays grayscale.
///
/// Palette images never reach this point as such: the PNG decoder expands
/// them to RGB or RGBA.
pub fn normalize_color_mode(img: DynamicImage, background: Background) -> DynamicImage {
    match img.color() {
        ColorType::Rgb8 | ColorType::L8 => img,
        color if color.has_alpha() => flatten_alpha(&img, background),
        ColorType::L16 => DynamicImage::ImageLuma8(img.to_luma8()),
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

/// Composites every pixel over `background` and drops the alpha channel.
pub fn flatten_alpha(img: &DynamicImage, background: Background) -> DynamicImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut rgb = RgbImage::new(width, height);

    for (src, dst) in rgba.pixels().zip(rgb.pixels_mut()) {
        let [r, g, b, a] = src.0;
        dst.0 = [
            blend(r, background.r, a),
            blend(g, background.g, a),
            blend(b, background.b, a),
        ];
    }

    DynamicImage::ImageRgb8(rgb)
}

#[inline]
fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let alpha = alpha as u16;
    ((fg as u16 * alpha + bg as u16 * (255 - alpha) + 127) / 255) as u8
}
