use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{CompressionError, FailureKind, Result};
use crate::processing::{process_image_pipeline, CompressionOptions, FileReport};
use crate::utils::{
    calculate_compression_ratio, create_progress_bar, format_error_line, format_success_line,
    format_summary_line, format_total_line,
};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Result of processing a single file in a batch.
#[derive(Debug)]
pub enum FileOutcome {
    Compressed(FileReport),
    Failed {
        file_name: String,
        error: CompressionError,
    },
}

impl FileOutcome {
    pub fn file_name(&self) -> &str {
        match self {
            FileOutcome::Compressed(report) => &report.file_name,
            FileOutcome::Failed { file_name, .. } => file_name,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Compressed(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            FileOutcome::Compressed(_) => None,
            FileOutcome::Failed { error, .. } => Some(error.kind()),
        }
    }

    /// The console line for this file.
    pub fn report_line(&self) -> String {
        match self {
            FileOutcome::Compressed(report) => format_success_line(
                &report.file_name,
                report.original_size,
                report.compressed_size,
            ),
            FileOutcome::Failed { file_name, error } => {
                format_error_line(file_name, &error.to_string())
            }
        }
    }
}

/// Counters accumulated over one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub processed: usize,
    pub failed: usize,
    pub total_original_bytes: u64,
    pub total_compressed_bytes: u64,
}

impl RunStats {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Compressed(report) => {
                self.processed += 1;
                self.total_original_bytes += report.original_size;
                self.total_compressed_bytes += report.compressed_size;
            }
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Number of accepted files that were attempted.
    pub fn attempted(&self) -> usize {
        self.processed + self.failed
    }

    pub fn compression_ratio(&self) -> f64 {
        calculate_compression_ratio(self.total_original_bytes, self.total_compressed_bytes)
    }
}

#[derive(Debug)]
pub struct BatchSummary {
    pub stats: RunStats,
    /// One entry per accepted file, in directory listing order.
    pub outcomes: Vec<FileOutcome>,
    pub output_dir: PathBuf,
}

/// Recompresses every JPEG/PNG directly inside `input_dir` into `output_dir`.
///
/// Files are handled in directory listing order. With `threads` greater than
/// one they are processed on a dedicated rayon pool and reported in the same
/// order once the pool is done; otherwise each file is reported as soon as it
/// finishes.
///
/// # Returns
/// * `Ok(BatchSummary)` - Always, once the listing succeeded; per-file failures
///   are recorded in `outcomes`
/// * `Err(CompressionError)` - If the input directory is missing or unreadable,
///   the output directory cannot be created, or the thread pool cannot be built
pub fn batch_compress_images(
    input_dir: &Path,
    output_dir: &Path,
    options: &CompressionOptions,
    threads: Option<usize>,
) -> Result<BatchSummary> {
    let start_time = Instant::now();

    validate_input_dir(input_dir)?;
    let image_files = collect_image_files(input_dir)?;

    fs::create_dir_all(output_dir)
        .map_err(|_| CompressionError::DirectoryCreationFailed(output_dir.to_path_buf()))?;

    crate::verbose!(
        "Found {} image files in {} (max size {}px, quality {}, background {})",
        image_files.len(),
        input_dir.display(),
        options.max_size,
        options.quality,
        options.background
    );

    let outcomes = match threads {
        Some(num_threads) if num_threads > 1 && image_files.len() > 1 => {
            process_parallel(&image_files, output_dir, options, num_threads)?
        }
        _ => process_sequential(&image_files, output_dir, options),
    };

    let mut stats = RunStats::default();
    for outcome in &outcomes {
        stats.record(outcome);
    }

    println!("\n{}", format_summary_line(stats.processed, output_dir));
    if stats.processed > 0 {
        crate::info!(
            "{}",
            format_total_line(stats.total_original_bytes, stats.total_compressed_bytes)
        );
    }
    crate::verbose!(
        "{} failed, finished in {:.2?}",
        stats.failed,
        start_time.elapsed()
    );

    Ok(BatchSummary {
        stats,
        outcomes,
        output_dir: output_dir.to_path_buf(),
    })
}

fn process_sequential(
    image_files: &[PathBuf],
    output_dir: &Path,
    options: &CompressionOptions,
) -> Vec<FileOutcome> {
    image_files
        .iter()
        .map(|input_path| {
            let outcome = process_single_image(input_path, output_dir, options);
            report_outcome(&outcome);
            outcome
        })
        .collect()
}

fn process_parallel(
    image_files: &[PathBuf],
    output_dir: &Path,
    options: &CompressionOptions,
    num_threads: usize,
) -> Result<Vec<FileOutcome>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| CompressionError::ThreadPool(e.to_string()))?;

    crate::verbose!("Using {} parallel threads for processing", num_threads);

    let progress = create_progress_bar(image_files.len() as u64, crate::logger::is_quiet());

    // par_iter().collect() keeps input order
    let outcomes: Vec<FileOutcome> = pool.install(|| {
        image_files
            .par_iter()
            .map(|input_path| {
                let outcome = process_single_image(input_path, output_dir, options);
                progress.inc(1);
                outcome
            })
            .collect()
    });

    progress.finish_and_clear();

    for outcome in &outcomes {
        report_outcome(outcome);
    }

    Ok(outcomes)
}

fn process_single_image(
    input_path: &Path,
    output_dir: &Path,
    options: &CompressionOptions,
) -> FileOutcome {
    let output_path = generate_output_path(input_path, output_dir);

    match process_image_pipeline(input_path, &output_path, options) {
        Ok(report) => FileOutcome::Compressed(report),
        Err(error) => FileOutcome::Failed {
            file_name: input_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| input_path.display().to_string()),
            error,
        },
    }
}

fn report_outcome(outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Compressed(report) => {
            crate::info!("{}", outcome.report_line());
            if report.compressed_size > report.original_size {
                crate::warn!(
                    "{} grew by {:.1}% after recompression",
                    report.file_name,
                    calculate_compression_ratio(report.original_size, report.compressed_size)
                        .abs()
                );
            }
        }
        FileOutcome::Failed { .. } => eprintln!("{}", outcome.report_line()),
    }
}

fn validate_input_dir(input_dir: &Path) -> Result<()> {
    if !input_dir.exists() {
        return Err(CompressionError::InputDirectoryNotFound(
            input_dir.to_path_buf(),
        ));
    }
    if !input_dir.is_dir() {
        return Err(CompressionError::NotADirectory(input_dir.to_path_buf()));
    }
    Ok(())
}

/// Lists the entries directly inside `input_dir` with an accepted extension,
/// in the order the filesystem yields them.
///
/// Directories are skipped. Anything else is kept, including dangling
/// symlinks, so that unreadable entries surface as per-file failures.
pub fn collect_image_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for entry in WalkDir::new(input_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();

        if !path.is_dir() && is_image_file(path) {
            image_files.push(entry.into_path());
        }
    }

    Ok(image_files)
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Output location for `input_path`: same file name, extension untouched,
/// inside `output_dir`.
pub fn generate_output_path(input_path: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(input_path.file_name().unwrap_or_default())
}
