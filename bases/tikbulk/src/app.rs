// bases/tikbulk/src/app.rs
use std::sync::Arc;

use color_eyre::Result;
use video_downloader::{
    collect_urls, read_url_file, DownloadRunner, Downloader, RunError, RunSummary, YtDlp,
};

use crate::config::Config;
use crate::output::OutputHandler;

pub struct App {
    config: Config,
    output: OutputHandler,
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_downloader(config, Arc::new(YtDlp))
    }

    pub fn with_downloader(config: Config, downloader: Arc<dyn Downloader + Send + Sync>) -> Self {
        let output = OutputHandler::new(config.verbose);
        Self {
            config,
            output,
            downloader,
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::debug!("Configuration: {:?}", self.config);

        let runner = DownloadRunner::new_with_downloader(self.config.run.clone(), self.downloader.clone())
            .await
            .map_err(|error| match error {
                RunError::Setup(_) => color_eyre::Report::new(error)
                    .wrap_err("yt-dlp is not installed. Install it with: pip install yt-dlp"),
                other => other.into(),
            })?;

        let from_file = match &self.config.url_file {
            Some(path) => read_url_file(path).await?,
            None => Vec::new(),
        };
        let urls = collect_urls(self.config.urls.clone(), from_file)?;

        let run = runner.config();
        self.output.print_run_start(urls.len(), run.output_dir(), run.quality());

        let summary = runner.run(&urls, &self.output).await?;

        self.output.print_summary(&summary);
        Ok(summary)
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
