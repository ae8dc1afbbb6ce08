use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("JPEG encoding error: {0}")]
    Encoding(#[from] jpeg_encoder::EncodingError),

    #[error("Image too large for JPEG: {0}x{1}. Maximum allowed: {2}x{2}")]
    DimensionsTooLarge(u32, u32, u32),

    #[error("Unsupported color type: {0}")]
    UnsupportedColor(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid maximum size: {0}. Must be greater than 0")]
    InvalidMaxSize(u32),

    #[error("Invalid background color: {0:?}. Expected #RRGGBB")]
    InvalidBackground(String),

    #[error("Input directory not found: {0}")]
    InputDirectoryNotFound(PathBuf),

    #[error("Input path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("Failed to list input directory: {0}")]
    DirectoryListing(#[from] walkdir::Error),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Category of a per-file failure, as reported in a batch summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Reading the input or writing the output failed.
    Io,
    /// The file could not be decoded as an image.
    Decode,
    /// The decoded image could not be encoded as JPEG.
    Encode,
    /// Configuration or directory problems that abort a whole run.
    Fatal,
}

impl CompressionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CompressionError::Io(_) => FailureKind::Io,
            CompressionError::ImageProcessing(image::ImageError::IoError(_)) => FailureKind::Io,
            CompressionError::ImageProcessing(_) => FailureKind::Decode,
            CompressionError::Encoding(_)
            | CompressionError::DimensionsTooLarge(..)
            | CompressionError::UnsupportedColor(_) => FailureKind::Encode,
            _ => FailureKind::Fatal,
        }
    }
}

pub type Result<T> = std::result::Result<T, CompressionError>;
