//! Helpers shared by the processing pipeline and batch reporting.
use crate::constants::{BYTES_PER_KIB, PROGRESS_BAR_CHARS, PROGRESS_BAR_TEMPLATE};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Size in KiB, rendered with one decimal place (e.g. `"512.0"`).
pub fn format_kib(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / BYTES_PER_KIB)
}

/// Compression ratio as a percentage.
///
/// Positive means the output is smaller, negative means it grew. An empty
/// original yields `0.0`.
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

/// `"<filename>: <oldKB>KB -> <newKB>KB"`
pub fn format_success_line(file_name: &str, original_size: u64, compressed_size: u64) -> String {
    format!(
        "{}: {}KB -> {}KB",
        file_name,
        format_kib(original_size),
        format_kib(compressed_size)
    )
}

/// `"Error with <filename>: <message>"`
pub fn format_error_line(file_name: &str, message: &str) -> String {
    format!("Error with {}: {}", file_name, message)
}

/// `"Compressed <count> images to <outputDir>"`
pub fn format_summary_line(processed: usize, output_dir: &Path) -> String {
    format!("Compressed {} images to {}", processed, output_dir.display())
}

/// Aggregate savings line, e.g. `"Total saved: 33.3KB of 45.6KB (73.0% smaller)"`.
///
/// Worded so it never matches the per-file `"name: aKB -> bKB"` shape.
pub fn format_total_line(original_size: u64, compressed_size: u64) -> String {
    let ratio = calculate_compression_ratio(original_size, compressed_size);
    if compressed_size > original_size {
        format!(
            "Total grew: {}KB over {}KB ({:.1}% larger)",
            format_kib(compressed_size - original_size),
            format_kib(original_size),
            ratio.abs()
        )
    } else {
        format!(
            "Total saved: {}KB of {}KB ({:.1}% smaller)",
            format_kib(original_size - compressed_size),
            format_kib(original_size),
            ratio
        )
    }
}

/// Bar used while files are processed on a thread pool. Hidden in quiet mode.
pub fn create_progress_bar(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    match ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        Ok(style) => pb.set_style(style.progress_chars(PROGRESS_BAR_CHARS)),
        Err(_) => pb.set_style(ProgressStyle::default_bar()),
    }
    pb
}
