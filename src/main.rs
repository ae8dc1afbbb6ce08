use anyhow::Context;
use clap::Parser;
use img_recompress::cli::Args;
use img_recompress::logger::{set_verbosity, Verbosity};
use img_recompress::{batch_compress_images, Background, CompressionOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            img_recompress::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Partial success still returns `Ok`; only fatal setup errors surface here.
fn run(args: &Args) -> anyhow::Result<()> {
    let background: Background = args
        .background
        .parse()
        .context("Invalid --background value")?;
    let options = CompressionOptions::new(args.max_size, args.quality, Some(background))
        .context("Invalid compression options")?;

    batch_compress_images(&args.input, &args.output, &options, args.threads)
        .with_context(|| format!("Failed to compress images from {}", args.input.display()))?;

    Ok(())
}
