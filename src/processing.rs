use crate::color::{normalize_color_mode, Background};
use crate::constants::{
    DEFAULT_MAX_SIZE, DEFAULT_QUALITY, MAX_JPEG_DIMENSION, MAX_QUALITY, MIN_QUALITY,
};
use crate::error::{CompressionError, Result};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView, ImageReader};
use jpeg_encoder::{ColorType as JpegColorType, Encoder};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionOptions {
    /// Longest edge, in pixels, an output image may have.
    pub max_size: u32,
    /// JPEG quality, 1 (smallest) to 100 (best).
    pub quality: u8,
    /// Fill for transparent pixels.
    pub background: Background,
}

impl CompressionOptions {
    pub fn new(
        max_size: Option<u32>,
        quality: Option<u8>,
        background: Option<Background>,
    ) -> Result<Self> {
        let max_size = max_size.unwrap_or(DEFAULT_MAX_SIZE);
        if max_size == 0 {
            return Err(CompressionError::InvalidMaxSize(max_size));
        }

        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressionError::InvalidQuality(quality));
        }

        Ok(Self {
            max_size,
            quality,
            background: background.unwrap_or_default(),
        })
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            quality: DEFAULT_QUALITY,
            background: Background::default(),
        }
    }
}

/// What happened to one successfully recompressed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    /// Input size in bytes.
    pub original_size: u64,
    /// Output size in bytes.
    pub compressed_size: u64,
    pub original_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
}

impl FileReport {
    pub fn was_resized(&self) -> bool {
        self.original_dimensions != self.output_dimensions
    }
}

/// Core image processing pipeline:
/// load -> normalize color mode -> resize -> encode -> save
///
/// # Arguments
/// * `input_path` - Path to the input image file
/// * `output_path` - Where the JPEG-encoded result is written. The extension is
///   not inspected; the content is always JPEG.
/// * `options` - Size, quality and background settings
///
/// # Returns
/// * `Ok(FileReport)` - Sizes and dimensions before and after
/// * `Err(CompressionError)` - If any step fails; nothing is written in that case
pub fn process_image_pipeline(
    input_path: &Path,
    output_path: &Path,
    options: &CompressionOptions,
) -> Result<FileReport> {
    let file_name = input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (img, original_size) = load_image_with_metadata(input_path)?;
    let original_dimensions = img.dimensions();
    crate::verbose!(
        "{}: decoded {}x{} {:?}",
        file_name,
        original_dimensions.0,
        original_dimensions.1,
        img.color()
    );

    let mut img = normalize_color_mode(img, options.background);

    if resize_image(&mut img, options) {
        crate::verbose!(
            "{}: resized to {}x{}",
            file_name,
            img.width(),
            img.height()
        );
    }

    let encoded = encode_jpeg(&img, options.quality)?;
    let compressed_size = save_atomically(&encoded, output_path)?;
    crate::verbose!("{}: wrote {}", file_name, output_path.display());

    Ok(FileReport {
        file_name,
        original_size,
        compressed_size,
        original_dimensions,
        output_dimensions: img.dimensions(),
    })
}

/// Loads an image file and returns it along with its size on disk.
///
/// The container format is sniffed from the file content first, so a JPEG
/// saved under a `.png` name still decodes.
pub fn load_image_with_metadata(input_path: &Path) -> Result<(DynamicImage, u64)> {
    let file_size = fs::metadata(input_path)?.len();
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;

    Ok((img, file_size))
}

/// Target dimensions for a longest-edge resize, or `None` when the image
/// already fits.
///
/// The longer edge becomes exactly `max_size`; the shorter edge is scaled by
/// the same factor and truncated, never below 1.
pub fn fit_dimensions(width: u32, height: u32, max_size: u32) -> Option<(u32, u32)> {
    let longest = width.max(height);
    if longest <= max_size {
        return None;
    }

    let scale = |edge: u32| (edge as u64 * max_size as u64 / longest as u64).max(1) as u32;
    Some((scale(width), scale(height)))
}

/// Downscales in place with Lanczos3 if the image exceeds `options.max_size`.
/// Returns whether a resize happened.
pub fn resize_image(img: &mut DynamicImage, options: &CompressionOptions) -> bool {
    match fit_dimensions(img.width(), img.height(), options.max_size) {
        Some((width, height)) => {
            *img = img.resize_exact(width, height, FilterType::Lanczos3);
            true
        }
        None => false,
    }
}

/// Encodes 8-bit RGB or grayscale pixels as a baseline JPEG with optimized
/// Huffman tables.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    if width > MAX_JPEG_DIMENSION || height > MAX_JPEG_DIMENSION {
        return Err(CompressionError::DimensionsTooLarge(
            width,
            height,
            MAX_JPEG_DIMENSION,
        ));
    }

    let color_type = match img.color() {
        ColorType::Rgb8 => JpegColorType::Rgb,
        ColorType::L8 => JpegColorType::Luma,
        other => return Err(CompressionError::UnsupportedColor(format!("{:?}", other))),
    };

    let mut buffer = Vec::new();
    let mut encoder = Encoder::new(&mut buffer, quality);
    encoder.set_optimized_huffman_tables(true);
    encoder.encode(img.as_bytes(), width as u16, height as u16, color_type)?;

    Ok(buffer)
}

/// Writes `bytes` to a temporary file next to `output_path`, then renames it
/// into place. Returns the size of the written file.
pub fn save_atomically(bytes: &[u8], output_path: &Path) -> Result<u64> {
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(output_path).map_err(|e| CompressionError::Io(e.error))?;

    Ok(fs::metadata(output_path)?.len())
}
