// components/video_downloader/src/runner.rs
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::collect::UniqueUrls;
use crate::types::{DownloadError, Outcome, RunError, RunSummary};
use crate::ytdlp::{Downloader, YtDlp};

/// Settings fixed for the duration of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    output_dir: PathBuf,
    quality: String,
}

impl RunConfig {
    /// Resolve `output_dir` against the current directory; it need not exist yet
    pub fn new(output_dir: impl AsRef<Path>, quality: impl Into<String>) -> Result<Self, RunError> {
        let output_dir = output_dir.as_ref();
        let absolute = std::path::absolute(output_dir).map_err(|source| RunError::ResolvePath {
            path: output_dir.to_owned(),
            source,
        })?;

        Ok(Self {
            output_dir: dunce::simplified(&absolute).to_owned(),
            quality: quality.into(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }
}

/// Receives progress as the runner works through the URL list
pub trait RunObserver {
    /// Called before each attempt; `index` starts at 1
    fn on_attempt(&self, index: usize, total: usize, url: &str);

    fn on_success(&self, url: &str);

    fn on_failure(&self, url: &str, error: &DownloadError);
}

pub struct DownloadRunner {
    config: RunConfig,
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl DownloadRunner {
    /// Create a runner backed by yt-dlp
    pub async fn new(config: RunConfig) -> Result<Self, RunError> {
        Self::new_with_downloader(config, Arc::new(YtDlp)).await
    }

    /// Create a runner with a specific downloader implementation
    pub async fn new_with_downloader(
        config: RunConfig,
        downloader: Arc<dyn Downloader + Send + Sync>,
    ) -> Result<Self, RunError> {
        downloader.check_available().await.map_err(RunError::Setup)?;

        Ok(Self { config, downloader })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Download every URL in order. Per-URL failures are counted, never returned.
    pub async fn run(
        &self,
        urls: &UniqueUrls,
        observer: &dyn RunObserver,
    ) -> Result<RunSummary, RunError> {
        let total = urls.len();
        let mut summary = RunSummary::new(total);
        let mut dir_ready = false;

        for (index, url) in urls.iter().enumerate() {
            if !dir_ready {
                self.ensure_output_dir().await?;
                dir_ready = true;
            }

            observer.on_attempt(index + 1, total, url);
            let outcome = self.attempt(url, observer).await;
            summary.record(outcome);
        }

        tracing::debug!(
            "Run finished: {} succeeded, {} failed, {} total",
            summary.successful,
            summary.failed,
            summary.total
        );
        Ok(summary)
    }

    async fn attempt(&self, url: &str, observer: &dyn RunObserver) -> Outcome {
        match self
            .downloader
            .download(url, &self.config.output_dir, &self.config.quality)
            .await
        {
            Ok(()) => {
                observer.on_success(url);
                Outcome::Succeeded
            }
            Err(error) => {
                tracing::debug!("Download of {} failed: {}", url, error);
                observer.on_failure(url, &error);
                Outcome::Failed
            }
        }
    }

    async fn ensure_output_dir(&self) -> Result<(), RunError> {
        let path = &self.config.output_dir;
        tracing::debug!("Creating output directory {}", path.display());

        tokio::fs::create_dir_all(path)
            .await
            .map_err(|source| RunError::Filesystem {
                path: path.clone(),
                source,
            })
    }
}
