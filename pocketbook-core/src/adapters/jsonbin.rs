//! jsonbin API client
//!
//! Fetches the wallet snapshot from a jsonbin.io bin. The bin holds the full
//! document under a `record` key, with request metadata alongside it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::Snapshot;
use crate::ports::RemoteSource;

/// jsonbin API client
#[derive(Debug)]
pub struct JsonBinClient {
    client: Client,
    url: String,
    master_key: String,
}

/// jsonbin response envelope
#[derive(Debug, Deserialize)]
struct BinEnvelope {
    record: Snapshot,
}

impl JsonBinClient {
    /// Create a new client for a bin URL
    pub fn new(url: &str, master_key: &str) -> Result<Self> {
        let parsed =
            Url::parse(url).map_err(|e| Error::config(format!("Invalid API URL: {}", e)))?;

        if parsed.scheme() != "https" {
            return Err(Error::config("API URL must use HTTPS"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
            master_key: master_key.to_string(),
        })
    }

    /// Fetch the snapshot from the bin
    ///
    /// One GET with the static access key header. No retry, no backoff.
    pub async fn fetch(&self) -> Result<Snapshot> {
        let response = self
            .client
            .get(&self.url)
            .header("X-Master-Key", &self.master_key)
            .send()
            .await
            .map_err(map_request_error)?;

        check_response_status(&response)?;

        let envelope: BinEnvelope = response
            .json()
            .await
            .map_err(|e| Error::transport(format!("Failed to parse snapshot: {}", e)))?;

        Ok(envelope.record)
    }
}

/// Map request errors to user-friendly messages
fn map_request_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::transport("Connection timed out after 30 seconds")
    } else if error.is_connect() {
        Error::transport("Unable to connect to the snapshot endpoint")
    } else {
        Error::transport(format!("Snapshot request failed: {}", error))
    }
}

/// Check response status and return appropriate errors
fn check_response_status(response: &reqwest::Response) -> Result<()> {
    match response.status().as_u16() {
        200 => Ok(()),
        401 | 403 => Err(Error::transport(
            "Snapshot endpoint rejected the access key. Check the configured master key.",
        )),
        status => Err(Error::transport(format!(
            "Snapshot endpoint error: HTTP {}",
            status
        ))),
    }
}

#[async_trait]
impl RemoteSource for JsonBinClient {
    fn name(&self) -> &str {
        "jsonbin"
    }

    async fn fetch_snapshot(&self) -> Option<Snapshot> {
        match self.fetch().await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(error = %e, "snapshot fetch failed, continuing with cached data");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_valid_url() {
        let client = JsonBinClient::new("https://api.jsonbin.io/v3/b/abc123", "key");
        assert!(client.is_ok());
    }

    #[test]
    fn test_reject_http_url() {
        let result = JsonBinClient::new("http://api.jsonbin.io/v3/b/abc123", "key");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HTTPS"));
    }

    #[test]
    fn test_reject_malformed_url() {
        let result = JsonBinClient::new("not a url", "key");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid API URL"));
    }

    #[test]
    fn test_envelope_parses_record() {
        let envelope: BinEnvelope = serde_json::from_str(
            r#"{
                "record": {
                    "user": {"id": 1, "name": "John", "email": "john@example.com", "cards": []},
                    "transactions": {}
                },
                "metadata": {"id": "abc", "private": true, "createdAt": "2022-08-20T10:00:00Z"}
            }"#,
        )
        .unwrap();
        assert_eq!(envelope.record.user.name, "John");
    }
}
