use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::models::candidate::CandidateProfile;
use crate::store::{parse_records, StoreError};

/// Where the candidate fixture comes from. Implement this to add a backend
/// without touching the store or the handlers.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Human-readable origin, reported by `/health`.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Vec<CandidateProfile>, StoreError>;
}

/// A JSON array of candidates on local disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CandidateSource for FileSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    async fn load(&self) -> Result<Vec<CandidateProfile>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        parse_records(&bytes, &self.describe())
    }
}

/// The same JSON document served over HTTP (e.g. from a static asset host).
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CandidateSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<Vec<CandidateProfile>, StoreError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        debug!("Fetched {} bytes from {}", body.len(), self.url);
        parse_records(&body, &self.url)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use httpmock::prelude::*;

    use super::*;

    const TWO_RECORDS: &str = r#"[{"id": "a", "name": "Ada"}, {"id": 2, "name": "Grace"}]"#;

    #[tokio::test]
    async fn test_file_source_reads_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_RECORDS.as_bytes()).unwrap();

        let records = FileSource::new(file.path()).load().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Grace");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("nope.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[tokio::test]
    async fn test_file_source_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = FileSource::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[tokio::test]
    async fn test_http_source_fetches_document() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/candidates.json");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(TWO_RECORDS);
            })
            .await;

        let source = HttpSource::new(server.url("/candidates.json")).unwrap();
        let records = source.load().await.unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 2);
        assert_eq!(source.describe(), server.url("/candidates.json"));
    }

    #[tokio::test]
    async fn test_http_source_non_success_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/candidates.json");
                then.status(404);
            })
            .await;

        let source = HttpSource::new(server.url("/candidates.json")).unwrap();
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Status(404)));
    }
}
