use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_BACKGROUND;

#[derive(Parser, Debug)]
#[command(
    name = "img-recompress",
    about = "Downsize and recompress a directory of JPEG/PNG images to JPEG",
    long_about = "img-recompress reads every .jpg, .jpeg and .png file directly inside INPUT_DIR, \
                  shrinks it so its longest edge fits within --max-size, flattens any transparency \
                  onto --background and writes a JPEG-encoded copy with the same file name into \
                  OUTPUT_DIR. Files that fail are reported and skipped.",
    version,
    after_help = "EXAMPLES:\n  \
    img-recompress ./site/images ./site/images-compressed\n  \
    img-recompress ./photos ./out -m 1920 -q 85\n  \
    img-recompress ./icons ./out -b '#000000' -j 4"
)]
pub struct Args {
    #[arg(help = "Directory containing the images to compress")]
    pub input: PathBuf,

    #[arg(help = "Directory the compressed copies are written to (created if missing)")]
    pub output: PathBuf,

    #[arg(
        short = 'm',
        long,
        help = "Maximum longest edge in pixels (default: 1200)",
        long_help = "Images whose width or height exceeds this value are scaled down with \
                     Lanczos3 so the longer edge equals it exactly. Smaller images keep their size."
    )]
    pub max_size: Option<u32>,

    #[arg(
        short = 'q',
        long,
        help = "JPEG quality (1-100, default: 75)",
        long_help = "JPEG quality from 1 (smallest) to 100 (best). Huffman tables are always \
                     optimized, which shrinks files without changing pixels."
    )]
    pub quality: Option<u8>,

    #[arg(
        short = 'b',
        long,
        default_value = DEFAULT_BACKGROUND,
        help = "Fill color for transparent pixels (#RRGGBB)",
        long_help = "JPEG has no alpha channel. Images with transparency are composited over this \
                     color before encoding."
    )]
    pub background: String,

    #[arg(
        short = 'j',
        long,
        help = "Number of parallel threads (default: sequential)",
        long_help = "Process files on a pool of this many threads. Report lines are still printed \
                     in directory listing order once all files are done."
    )]
    pub threads: Option<usize>,

    #[arg(long, help = "Only print errors and the final summary")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print each pipeline step")]
    pub verbose: bool,
}
