// bases/tikbulk/src/args.rs
use clap::Parser;
use std::path::PathBuf;

/// TikBulk - Download TikTok videos in bulk.
///
/// URLs can be given as arguments, read from a file with --file, or both.
#[derive(Parser, Debug)]
#[command(name = "tikbulk", author, version, about, long_about)]
pub struct Args {
    /// TikTok video URLs to download
    pub urls: Vec<String>,

    /// Output directory for downloaded videos
    #[arg(short, long, default_value = "./downloads")]
    pub output: PathBuf,

    /// Video quality: best, worst, or a specific yt-dlp format
    #[arg(short, long, default_value = "best")]
    pub quality: String,

    /// File containing URLs (one per line)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
