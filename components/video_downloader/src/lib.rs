// components/video_downloader/src/lib.rs
//! Bulk video downloads delegated to yt-dlp.
//!
//! [`collect`] turns command-line and file input into a [`UniqueUrls`] list,
//! and [`DownloadRunner`] works through it one URL at a time, counting
//! outcomes instead of stopping at the first failure.

pub mod collect;
mod runner;
mod types;
mod utils;
mod ytdlp;

pub use collect::{collect_urls, read_url_file, UniqueUrls};
pub use runner::{DownloadRunner, RunConfig, RunObserver};
pub use types::{DownloadError, InputError, Outcome, RunError, RunSummary};
pub use utils::output_template;
pub use ytdlp::{Downloader, YtDlp};
