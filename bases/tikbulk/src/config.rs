// bases/tikbulk/src/config.rs
use std::path::PathBuf;

use crate::args::Args;
use video_downloader::{RunConfig, RunError};

/// Configuration for one tikbulk invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// URLs given on the command line, in order
    pub urls: Vec<String>,

    /// Optional file with one URL per line
    pub url_file: Option<PathBuf>,

    /// Resolved output directory and quality
    pub run: RunConfig,

    pub verbose: bool,
}

impl Config {
    /// Create configuration from CLI arguments
    pub fn from_args(args: Args) -> Result<Self, RunError> {
        let run = RunConfig::new(&args.output, args.quality)?;

        Ok(Self {
            urls: args.urls,
            url_file: args.file,
            run,
            verbose: args.verbose,
        })
    }

    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "tikbulk=debug,video_downloader=debug"
        } else {
            "tikbulk=info,video_downloader=info"
        }
    }
}
