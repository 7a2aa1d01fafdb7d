// components/video_downloader/src/utils.rs
use std::path::{Path, PathBuf};

/// Filename template handed to yt-dlp: the video title plus the container extension
const TITLE_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Build the yt-dlp output template for a directory
pub fn output_template(output_dir: &Path) -> PathBuf {
    output_dir.join(TITLE_TEMPLATE)
}
