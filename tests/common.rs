#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, ImageReader, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Opaque RGB image with enough texture to behave like a small photo.
pub fn write_photo(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x ^ y) % 256) as u8,
        ])
    })
    .save(path)
    .unwrap();
}

/// RGBA PNG whose left half is fully transparent.
pub fn write_transparent_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_fn(width, height, |x, y| {
        let alpha = if x < width / 2 { 0 } else { 255 };
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, alpha])
    })
    .save_with_format(path, ImageFormat::Png)
    .unwrap();
}

/// 4x2 indexed PNG: index 0 is fully transparent red, index 1 opaque green.
pub fn write_palette_png(path: &Path) {
    let file = File::create(path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), 4, 2);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(vec![255u8, 0, 0, 0, 255, 0]);
    encoder.set_trns(vec![0u8, 255]);

    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(&[0, 1, 0, 1, 1, 0, 1, 0]).unwrap();
    writer.finish().unwrap();
}

pub fn write_corrupt(path: &Path) {
    std::fs::write(path, b"\xFF\xD8\xFF\xE0 truncated garbage").unwrap();
}

/// Decodes an output file by sniffing its content rather than trusting the
/// extension.
pub fn decode_output(path: &Path) -> (Option<ImageFormat>, DynamicImage) {
    let reader = ImageReader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap();
    let format = reader.format();
    (format, reader.decode().unwrap())
}

pub fn count_lines_containing(output: &[u8], needle: &str) -> usize {
    String::from_utf8_lossy(output)
        .lines()
        .filter(|line| line.contains(needle))
        .count()
}
