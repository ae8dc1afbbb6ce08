pub const DEFAULT_MAX_SIZE: u32 = 1200;

pub const DEFAULT_QUALITY: u8 = 75;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Fill used when an image with transparency is flattened for JPEG output.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Baseline JPEG stores dimensions as 16-bit values.
pub const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub const BYTES_PER_KIB: f64 = 1024.0;

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";
pub const PROGRESS_BAR_CHARS: &str = "#>-";
