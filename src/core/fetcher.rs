use crate::core::{InputSource, Storage};
use crate::domain::model::Day;
use crate::utils::error::Result;
use std::path::PathBuf;

pub const INPUT_FILE: &str = "input.txt";

/// 相對於資料目錄的快取路徑，例如 `day05/input.txt`
pub fn input_file(day: Day) -> String {
    format!("{}/{}", day.dir_name(), INPUT_FILE)
}

/// Returns cached puzzle input, downloading it on the first request for a day.
///
/// A cached file is never refreshed or verified: once `dayNN/input.txt`
/// exists it is returned as is.
pub struct InputFetcher<T: InputSource, S: Storage> {
    source: T,
    storage: S,
}

impl<T: InputSource, S: Storage> InputFetcher<T, S> {
    pub fn new(source: T, storage: S) -> Self {
        Self { source, storage }
    }

    pub fn input_path(&self, day: Day) -> PathBuf {
        self.storage.full_path(&input_file(day))
    }

    pub async fn get_input(&self, day: Day) -> Result<PathBuf> {
        let relative = input_file(day);
        let path = self.storage.full_path(&relative);

        if self.storage.exists(&relative).await {
            tracing::info!("📦 Input for day {} already cached", day);
            return Ok(path);
        }

        tracing::info!("⬇️  Downloading input for day {}", day);
        let body = self.source.fetch_input(day).await?;
        self.storage.write_file(&relative, &body).await?;

        tracing::debug!("Saved {} bytes to {}", body.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::parse_day;
    use crate::utils::error::AocError;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn full_path(&self, path: &str) -> PathBuf {
            Path::new("/repo/data").join(path)
        }

        async fn exists(&self, path: &str) -> bool {
            self.files.lock().await.contains_key(path)
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockSource {
        body: Vec<u8>,
        calls: Arc<AtomicUsize>,
    }

    impl MockSource {
        fn new(body: &[u8]) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let source = Self {
                body: body.to_vec(),
                calls: calls.clone(),
            };
            (source, calls)
        }
    }

    #[async_trait::async_trait]
    impl InputSource for MockSource {
        async fn fetch_input(&self, _day: Day) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone())
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl InputSource for FailingSource {
        async fn fetch_input(&self, _day: Day) -> Result<Vec<u8>> {
            Err(AocError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    #[test]
    fn test_input_file_layout() {
        assert_eq!(input_file(parse_day(5).unwrap()), "day05/input.txt");
        assert_eq!(input_file(parse_day(12).unwrap()), "day12/input.txt");
    }

    #[tokio::test]
    async fn test_cache_miss_downloads_and_writes() {
        let storage = MockStorage::new();
        let (source, calls) = MockSource::new(b"3   4\n4   3\n");
        let fetcher = InputFetcher::new(source, storage.clone());

        let path = fetcher.get_input(parse_day(1).unwrap()).await.unwrap();

        assert_eq!(path, PathBuf::from("/repo/data/day01/input.txt"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            storage.get_file("day01/input.txt").await.unwrap(),
            b"3   4\n4   3\n"
        );
    }

    #[tokio::test]
    async fn test_cache_hit_skips_source() {
        let storage = MockStorage::new();
        storage
            .write_file("day02/input.txt", b"cached")
            .await
            .unwrap();
        let (source, calls) = MockSource::new(b"fresh");
        let fetcher = InputFetcher::new(source, storage.clone());

        let day = parse_day(2).unwrap();
        let first = fetcher.get_input(day).await.unwrap();
        let second = fetcher.get_input(day).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first, fetcher.input_path(day));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(storage.get_file("day02/input.txt").await.unwrap(), b"cached");
    }

    #[tokio::test]
    async fn test_second_request_uses_cache() {
        let storage = MockStorage::new();
        let (source, calls) = MockSource::new(b"body");
        let fetcher = InputFetcher::new(source, storage);

        let day = parse_day(9).unwrap();
        fetcher.get_input(day).await.unwrap();
        fetcher.get_input(day).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_source_failure_writes_nothing() {
        let storage = MockStorage::new();
        let fetcher = InputFetcher::new(FailingSource, storage.clone());

        let result = fetcher.get_input(parse_day(4).unwrap()).await;

        assert!(result.is_err());
        assert!(storage.get_file("day04/input.txt").await.is_none());
    }
}
