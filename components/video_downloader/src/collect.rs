// components/video_downloader/src/collect.rs
use std::collections::HashSet;
use std::path::Path;

use crate::types::InputError;

/// Ordered, duplicate-free and non-empty list of URLs to download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueUrls(Vec<String>);

impl UniqueUrls {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Split text into URLs, one per line, trimmed and with blank lines skipped
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a URL list file; the handle is closed once the contents are consumed
pub async fn read_url_file(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| InputError::ReadFile {
            path: path.to_owned(),
            source,
        })?;

    let urls = parse_url_lines(&text);
    tracing::debug!("Read {} URL(s) from {}", urls.len(), path.display());
    Ok(urls)
}

/// Drop later duplicates, keeping the first occurrence of each URL in place
pub fn dedup_preserving_order(urls: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

/// Combine positional URLs with those from a file, in that order
pub fn collect_urls(
    positional: Vec<String>,
    from_file: Vec<String>,
) -> Result<UniqueUrls, InputError> {
    let all: Vec<String> = positional.into_iter().chain(from_file).collect();
    if all.is_empty() {
        return Err(InputError::NoUrls);
    }

    let unique = dedup_preserving_order(all);
    Ok(UniqueUrls(unique))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;
    use std::io::Write;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(&["A", "B", "A", "C", "B"], &["A", "B", "C"])]
    #[case(&["A", "A", "A"], &["A"])]
    #[case(&["C", "B", "A"], &["C", "B", "A"])]
    #[case(&[], &[])]
    fn dedup_keeps_first_occurrence(#[case] input: &[&str], #[case] expected: &[&str]) {
        assert_eq!(dedup_preserving_order(strings(input)), strings(expected));
    }

    #[test]
    fn lines_are_trimmed_and_blanks_dropped() {
        let urls = parse_url_lines("  urlA  \n\nurlB\n   \n\turlC\r\n");
        assert_eq!(urls, strings(&["urlA", "urlB", "urlC"]));
    }

    #[test]
    fn positional_urls_come_before_file_urls() {
        let urls = collect_urls(strings(&["U1", "U2"]), strings(&["U2", "U3"])).unwrap();
        assert_eq!(urls.as_slice(), strings(&["U1", "U2", "U3"]).as_slice());
        assert_eq!(urls.len(), 3);
    }

    #[test]
    fn no_urls_is_an_error() {
        assert_matches!(collect_urls(vec![], vec![]), Err(InputError::NoUrls));
    }

    #[test]
    fn whitespace_only_file_is_an_error() {
        let from_file = parse_url_lines("   \n\n\t\n");
        assert!(from_file.is_empty());
        assert_matches!(collect_urls(vec![], from_file), Err(InputError::NoUrls));
    }

    #[tokio::test]
    async fn reads_urls_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  https://www.tiktok.com/@user/video/1  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "https://www.tiktok.com/@user/video/2").unwrap();

        let urls = read_url_file(file.path()).await.unwrap();
        assert_eq!(
            urls,
            strings(&[
                "https://www.tiktok.com/@user/video/1",
                "https://www.tiktok.com/@user/video/2",
            ])
        );
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("urls.txt");

        let result = read_url_file(&missing).await;
        assert_matches!(result, Err(InputError::ReadFile { path, .. }) if path == missing);
    }
}
