//! Catalog fetching and persistence
//!
//! One HTTP GET against the configured endpoint, streamed straight to the
//! output file. The body is never buffered in memory — catalogs can run to
//! hundreds of megabytes — so the response is consumed chunk by chunk as it
//! arrives and written through to disk.

use crate::error::{Error, Result};
use futures::StreamExt;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use url::Url;

/// Build the HTTP client used for the catalog request
///
/// The timeout covers the full request including body streaming; the
/// original endpoint can take several minutes to assemble the catalog,
/// hence the generous default of 600 seconds in [`Config`](crate::Config).
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(Error::Network)
}

/// Issue the catalog GET request and fail fast on a non-success status
///
/// Returns the response with its body still unread so the caller can stream
/// it. No retries — a failed request fails the run.
pub async fn fetch_catalog(client: &reqwest::Client, url: &Url) -> Result<reqwest::Response> {
    let response = client.get(url.clone()).send().await.map_err(|e| {
        if e.is_timeout() {
            tracing::error!(url = %url, "catalog request timed out");
        } else if e.is_connect() {
            tracing::error!(url = %url, error = %e, "connection to catalog endpoint failed");
        } else {
            tracing::error!(url = %url, error = %e, "catalog request failed");
        }
        Error::Network(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response)
}

/// Stream the response body to `path`, byte for byte
///
/// Creates or truncates the destination file. Returns the number of bytes
/// written. Any I/O or body-read error aborts the copy and is fatal for the
/// run; a partially written file may be left behind.
pub async fn persist_response(response: reqwest::Response, path: &Path) -> Result<u64> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;
    Ok(written)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client() -> reqwest::Client {
        build_client(Duration::from_secs(10)).unwrap()
    }

    #[tokio::test]
    async fn fetch_and_persist_round_trips_bytes() {
        let mock_server = MockServer::start().await;
        let body = br#"[{"product_id":"P1"},{"product_id":"P2"}]"#;

        Mock::given(method("GET"))
            .and(path("/catalog"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.as_slice()))
            .mount(&mock_server)
            .await;

        let temp_dir = tempdir().unwrap();
        let out = temp_dir.path().join("result.json");

        let url = Url::parse(&format!("{}/catalog", mock_server.uri())).unwrap();
        let response = fetch_catalog(&test_client(), &url).await.unwrap();
        let written = persist_response(response, &out).await.unwrap();

        assert_eq!(written, body.len() as u64);
        assert_eq!(std::fs::read(&out).unwrap(), body);
    }

    #[tokio::test]
    async fn persist_handles_empty_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let temp_dir = tempdir().unwrap();
        let out = temp_dir.path().join("result.json");

        let url = Url::parse(&format!("{}/empty", mock_server.uri())).unwrap();
        let response = fetch_catalog(&test_client(), &url).await.unwrap();
        let written = persist_response(response, &out).await.unwrap();

        assert_eq!(written, 0);
        assert_eq!(std::fs::read(&out).unwrap(), Vec::<u8>::new());
    }

    #[tokio::test]
    async fn persist_overwrites_existing_file() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/catalog"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"[]".as_slice()))
            .mount(&mock_server)
            .await;

        let temp_dir = tempdir().unwrap();
        let out = temp_dir.path().join("result.json");
        std::fs::write(&out, "stale contents from a previous much larger run").unwrap();

        let url = Url::parse(&format!("{}/catalog", mock_server.uri())).unwrap();
        let response = fetch_catalog(&test_client(), &url).await.unwrap();
        persist_response(response, &out).await.unwrap();

        assert_eq!(std::fs::read(&out).unwrap(), b"[]");
    }

    #[tokio::test]
    async fn non_success_status_fails_fast() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/catalog"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = Url::parse(&format!("{}/catalog", mock_server.uri())).unwrap();
        let err = fetch_catalog(&test_client(), &url).await.unwrap_err();

        match err {
            Error::HttpStatus { status, url: u } => {
                assert_eq!(status, 404);
                assert!(u.contains("/catalog"));
            }
            other => panic!("expected HttpStatus error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_status_fails_fast() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/catalog"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let url = Url::parse(&format!("{}/catalog", mock_server.uri())).unwrap();
        let err = fetch_catalog(&test_client(), &url).await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    }
}
