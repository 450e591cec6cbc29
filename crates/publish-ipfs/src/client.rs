//! Blocking IPFS HTTP RPC client

use std::time::Duration;

use publish_core::{ContentStore, StoreError};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::{Error, Result};

/// Gateway used when no endpoint is configured.
pub const DEFAULT_GATEWAY: &str = "https://ipfs.forta.network";

/// Upper bound for a single request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Maximum number of response body bytes quoted in error messages.
const MAX_ERROR_BODY: usize = 512;

/// Response body of `/api/v0/add`.
#[derive(Debug, Deserialize)]
struct AddResponse {
    #[serde(rename = "Hash")]
    hash: String,
}

/// Content store backed by the IPFS HTTP RPC API.
///
/// Every call is a single request. Retries are left to the caller.
#[derive(Debug, Clone)]
pub struct IpfsClient {
    base_url: String,
    client: Client,
}

impl IpfsClient {
    /// Client for the node at `base_url`, e.g. `http://127.0.0.1:5001`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add and pin `content`, returning its CID.
    pub fn add(&self, content: &str) -> Result<String> {
        let url = self.endpoint("add?pin=true");
        let form = Form::new().part("file", Part::text(content.to_string()).file_name("file"));

        tracing::debug!(%url, bytes = content.len(), "Adding content to IPFS");
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|source| Error::Request {
                url: url.clone(),
                source,
            })?;
        let body = read_success_body(&url, response)?;
        parse_add_response(&url, &body)
    }

    /// Fetch the content stored under `address`.
    pub fn cat(&self, address: &str) -> Result<String> {
        let url = self.endpoint("cat");
        tracing::debug!(%url, address, "Fetching content from IPFS");
        let response = self
            .client
            .post(&url)
            .query(&[("arg", address)])
            .send()
            .map_err(|source| Error::Request {
                url: url.clone(),
                source,
            })?;
        read_success_body(&url, response)
    }

    fn endpoint(&self, command: &str) -> String {
        format!("{}/api/v0/{}", self.base_url, command)
    }
}

impl ContentStore for IpfsClient {
    fn publish(&self, content: &str) -> std::result::Result<String, StoreError> {
        self.add(content).map_err(StoreError::new)
    }
}

fn read_success_body(url: &str, response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().map_err(|source| Error::Request {
        url: url.to_string(),
        source,
    })?;
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body: truncate(&body, MAX_ERROR_BODY),
        });
    }
    Ok(body)
}

/// Extract the CID from an add response.
///
/// Nodes may stream one JSON object per line when wrapping directories; the
/// last line describes the root.
fn parse_add_response(url: &str, body: &str) -> Result<String> {
    let line = body
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| Error::Response {
            url: url.to_string(),
            message: "empty body".to_string(),
        })?;
    let parsed: AddResponse = serde_json::from_str(line).map_err(|e| Error::Response {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    if parsed.hash.is_empty() {
        return Err(Error::Response {
            url: url.to_string(),
            message: "empty Hash field".to_string(),
        });
    }
    Ok(parsed.hash)
}

fn truncate(body: &str, max: usize) -> String {
    match body.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
