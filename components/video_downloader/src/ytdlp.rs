// components/video_downloader/src/ytdlp.rs
use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;
use crate::types::DownloadError;
use crate::utils::output_template;
use async_trait::async_trait;

const YT_DLP: &str = "yt-dlp";

#[async_trait]
pub trait Downloader {
    /// Check if the downloader is available and has all required dependencies
    async fn check_available(&self) -> Result<(), DownloadError>;

    /// Download a single URL into `output_dir` using the given format selector
    async fn download(&self, url: &str, output_dir: &Path, quality: &str) -> Result<(), DownloadError>;
}

pub struct YtDlp;

/// Arguments for one yt-dlp invocation. `--` keeps a URL starting with `-` from being read as an option.
fn yt_dlp_args(url: &str, output_dir: &Path, quality: &str) -> Vec<OsString> {
    vec![
        "-f".into(),
        quality.into(),
        "-o".into(),
        output_template(output_dir).into_os_string(),
        "--".into(),
        url.into(),
    ]
}

#[async_trait]
impl Downloader for YtDlp {
    async fn check_available(&self) -> Result<(), DownloadError> {
        which::which(YT_DLP)
            .map(|path| {
                tracing::debug!("Using {}", path.display());
            })
            .map_err(|_| DownloadError::DependencyNotFound(YT_DLP))
    }

    async fn download(&self, url: &str, output_dir: &Path, quality: &str) -> Result<(), DownloadError> {
        let args = yt_dlp_args(url, output_dir, quality);
        tracing::debug!("Running {} {:?}", YT_DLP, args);

        // Inherit stdio so yt-dlp's own progress and warnings stay visible
        let status = Command::new(YT_DLP)
            .args(&args)
            .status()
            .await?;

        if !status.success() {
            return Err(DownloadError::DownloadFailed(
                format!("yt-dlp exited with status: {}", status)
            ));
        }

        Ok(())
    }
}


#[cfg(test)]
pub mod stub {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashSet;
    use std::path::PathBuf;

    /// Records every call and fails for a scripted set of URLs
    #[derive(Default)]
    pub struct DownloaderStub {
        failing: HashSet<String>,
        unavailable: bool,
        calls: Mutex<Vec<(String, PathBuf, String)>>,
    }

    impl DownloaderStub {
        pub fn failing_on(urls: &[&str]) -> Self {
            Self {
                failing: urls.iter().map(|u| u.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<(String, PathBuf, String)> {
            self.calls.lock().clone()
        }

        pub fn called_urls(&self) -> Vec<String> {
            self.calls.lock().iter().map(|(url, _, _)| url.clone()).collect()
        }
    }

    #[async_trait]
    impl Downloader for DownloaderStub {
        async fn check_available(&self) -> Result<(), DownloadError> {
            if self.unavailable {
                return Err(DownloadError::DependencyNotFound(YT_DLP));
            }
            Ok(())
        }

        async fn download(&self, url: &str, output_dir: &Path, quality: &str) -> Result<(), DownloadError> {
            self.calls
                .lock()
                .push((url.to_string(), output_dir.to_path_buf(), quality.to_string()));

            if self.failing.contains(url) {
                return Err(DownloadError::DownloadFailed(format!("Unsupported URL: {}", url)));
            }
            Ok(())
        }
    }
}
