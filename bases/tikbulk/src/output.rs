// bases/tikbulk/src/output.rs
use std::path::Path;
use video_downloader::{DownloadError, RunObserver, RunSummary};

const SEPARATOR_WIDTH: usize = 50;

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_run_start(&self, unique: usize, output_dir: &Path, quality: &str) {
        println!("Found {} unique URL(s) to download", unique);
        println!("Output directory: {}", output_dir.display());
        println!("Quality: {}\n", quality);
    }

    pub fn print_summary(&self, summary: &RunSummary) {
        for line in summary_lines(summary) {
            println!("{}", line);
        }
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}

impl RunObserver for OutputHandler {
    fn on_attempt(&self, index: usize, total: usize, url: &str) {
        println!("[{}/{}] Downloading: {}", index, total, url);
    }

    fn on_success(&self, _url: &str) {
        println!("✓ Successfully downloaded\n");
    }

    fn on_failure(&self, url: &str, error: &DownloadError) {
        eprintln!("Error downloading {}: {}", url, error);
        println!("✗ Failed to download\n");
    }
}

fn summary_lines(summary: &RunSummary) -> Vec<String> {
    vec![
        "=".repeat(SEPARATOR_WIDTH),
        "Download complete!".to_string(),
        format!("Successful: {}", summary.successful),
        format!("Failed: {}", summary.failed),
        format!("Total: {}", summary.total),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_counts_in_order() {
        let summary = RunSummary { successful: 2, failed: 1, total: 3 };
        let lines = summary_lines(&summary);

        assert_eq!(lines[0], "=".repeat(50));
        assert_eq!(
            &lines[1..],
            ["Download complete!", "Successful: 2", "Failed: 1", "Total: 3"]
        );
    }
}
