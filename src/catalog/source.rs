//! Catalog data sources
//!
//! Retrieves the raw item list from a JSON document, either over HTTP or
//! from the local filesystem. A source is fetched once per session; there
//! is no retry, no cache and no timeout beyond what the transport imposes.

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

use super::Item;
use crate::{Result, ShowroomError};

/// Default catalog location, relative to the working directory
pub const DEFAULT_SOURCE: &str = "data.json";

/// Where the catalog document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Remote document fetched with a single GET
    Url(String),
    /// Local document read from disk
    Path(PathBuf),
}

impl SourceLocation {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            SourceLocation::Url(trimmed.to_string())
        } else {
            SourceLocation::Path(PathBuf::from(trimmed))
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        SourceLocation::Path(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Url(url) => write!(f, "{url}"),
            SourceLocation::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A place the catalog can be loaded from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Retrieve and decode the full item list
    async fn fetch(&self) -> Result<Vec<Item>>;

    /// Human-readable location, for logs and status lines
    fn describe(&self) -> String;
}

/// Catalog served over HTTP(S)
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Item>> {
        tracing::debug!("Fetching catalog from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch catalog from {}", self.url))?;

        if !response.status().is_success() {
            return Err(ShowroomError::Load(format!(
                "HTTP {} from {}",
                response.status(),
                self.url
            )));
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        parse_items(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Catalog stored on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Item>> {
        tracing::debug!("Reading catalog from {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ShowroomError::Load(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        parse_items(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Decode a catalog document.
///
/// The document must be a JSON array; anything else is a malformed
/// payload. Object elements are decoded leniently into an [`Item`]. Any
/// other element (string, number, array, `null`) becomes an item with
/// every field empty, so it still renders as a blank card.
pub fn parse_items(content: &str) -> Result<Vec<Item>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| ShowroomError::Load(format!("Malformed catalog payload: {e}")))?;

    let Value::Array(entries) = value else {
        return Err(ShowroomError::Load(
            "Malformed catalog payload: expected a JSON array of items".to_string(),
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(_) => serde_json::from_value(entry).map_err(|e| {
                ShowroomError::Load(format!("Malformed catalog entry at index {index}: {e}"))
            }),
            other => {
                tracing::debug!("Catalog entry at index {} is not an object: {}", index, other);
                Ok(Item::default())
            }
        })
        .collect()
}

/// Build the source matching a location
pub fn open_source(location: &SourceLocation) -> Result<Box<dyn CatalogSource>> {
    match location {
        SourceLocation::Url(url) => Ok(Box::new(HttpSource::new(url.clone())?)),
        SourceLocation::Path(path) => Ok(Box::new(FileSource::new(path.clone()))),
    }
}

#[cfg(test)]
mod source_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"[
        {"imagem": "fusca.jpg", "nome": "Fusca", "especificacoes": "1.3", "historia": "Alemanha", "link": "https://a"},
        {"imagem": "mustang.jpg", "nome": "Mustang", "especificacoes": "V8", "historia": "EUA", "link": "https://b"}
    ]"#;

    #[test]
    fn test_location_parse() {
        assert_eq!(
            SourceLocation::parse("https://cars.example.com/data.json"),
            SourceLocation::Url("https://cars.example.com/data.json".to_string())
        );
        assert_eq!(
            SourceLocation::parse("http://localhost:8000/data.json"),
            SourceLocation::Url("http://localhost:8000/data.json".to_string())
        );
        assert_eq!(
            SourceLocation::parse("catalog/data.json"),
            SourceLocation::Path(PathBuf::from("catalog/data.json"))
        );
        assert_eq!(SourceLocation::default().to_string(), DEFAULT_SOURCE);
    }

    #[test]
    fn test_parse_items_keeps_order_and_duplicates() {
        let doubled = format!("[{0}, {0}]", r#"{"nome": "Fusca"}"#);
        let items = parse_items(&doubled).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], items[1]);

        let items = parse_items(SAMPLE).unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Fusca", "Mustang"]);
    }

    #[test]
    fn test_parse_items_rejects_malformed_payloads() {
        assert!(matches!(parse_items("not json"), Err(ShowroomError::Load(_))));
        assert!(matches!(
            parse_items(r#"{"nome": "Fusca"}"#),
            Err(ShowroomError::Load(_))
        ));
    }

    #[test]
    fn test_parse_items_non_object_entries_are_blank() {
        for document in [
            r#"["Fusca"]"#,
            r#"[["Fusca", "f.jpg"]]"#,
            r#"[1969]"#,
            r#"[true]"#,
            r#"[null]"#,
        ] {
            let items = parse_items(document).unwrap();
            assert_eq!(items, vec![Item::default()], "document: {document}");
        }

        let items = parse_items(r#"[{"nome": "Opala"}, ["Fusca"], {"nome": "Mustang"}]"#).unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Opala", "", "Mustang"]);
    }

    #[test]
    fn test_parse_items_empty_array() {
        assert!(parse_items("[]").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_source_fetch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let source = FileSource::new(&path);
        let items = source.fetch().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Mustang");
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::new(temp_dir.path().join("missing.json"));

        let result = source.fetch().await;
        assert!(matches!(result, Err(ShowroomError::Load(_))));
    }

    /// Serve one canned HTTP response on a local port and return its URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        format!("http://{addr}/data.json")
    }

    #[tokio::test]
    async fn test_http_source_fetch() {
        let url = serve_once("200 OK", SAMPLE).await;
        let source = HttpSource::new(url).unwrap();

        let items = source.fetch().await.unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Fusca", "Mustang"]);
    }

    #[tokio::test]
    async fn test_http_source_error_status_is_load_error() {
        let url = serve_once("404 Not Found", "not here").await;
        let source = HttpSource::new(url).unwrap();

        match source.fetch().await {
            Err(ShowroomError::Load(message)) => assert!(message.contains("404"), "{message}"),
            other => panic!("expected a load error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_source_non_array_payload_is_load_error() {
        let url = serve_once("200 OK", r#"{"carros": []}"#).await;
        let source = HttpSource::new(url).unwrap();

        let result = source.fetch().await;
        assert!(matches!(result, Err(ShowroomError::Load(_))));
    }

    #[test]
    fn test_open_source_picks_transport() {
        let file = open_source(&SourceLocation::parse("data.json")).unwrap();
        assert_eq!(file.describe(), "data.json");

        let http = open_source(&SourceLocation::parse("https://cars.example.com/data.json")).unwrap();
        assert_eq!(http.describe(), "https://cars.example.com/data.json");
    }
}
