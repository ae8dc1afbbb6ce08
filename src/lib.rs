pub mod batch;
pub mod cli;
pub mod color;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;
pub mod utils;

pub use batch::{
    batch_compress_images, collect_image_files, generate_output_path, is_image_file,
    BatchSummary, FileOutcome, RunStats,
};
pub use color::{flatten_alpha, normalize_color_mode, Background};
pub use error::{CompressionError, FailureKind, Result};
pub use processing::{
    encode_jpeg, fit_dimensions, load_image_with_metadata, process_image_pipeline, resize_image,
    save_atomically, CompressionOptions, FileReport,
};
