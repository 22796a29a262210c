use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::{fmt::Debug, time::Duration};
use thiserror::Error;
use tracing::debug;

use crate::model::{RateEntry, RateTable};

/// Failure to obtain or decode the daily rate table.
///
/// Timeouts are kept distinct from other transport failures so callers can
/// tell a slow endpoint apart from an unreachable one.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("{url} returned status {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("response body is not a JSON object of currencies: {source}")]
    Json { source: serde_json::Error },

    #[error("currency entry '{code}' is invalid: {source}")]
    Entry {
        code: String,
        source: serde_json::Error,
    },
}

/// A source of the daily rate table. The interactive loop fetches through
/// this seam, so tests can substitute a canned table for the live endpoint.
#[async_trait]
pub trait RateSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<RateTable, FetchError>;
}

/// HTTP implementation of [`RateSource`] over the configured endpoint.
#[derive(Debug, Clone)]
pub struct RateFetcher {
    url: String,
    timeout: Duration,
    http: Client,
}

impl RateFetcher {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { url, timeout, http })
    }

    fn transport_error(&self, source: reqwest::Error) -> FetchError {
        if source.is_timeout() {
            FetchError::Timeout {
                url: self.url.clone(),
                timeout: self.timeout,
            }
        } else {
            FetchError::Request {
                url: self.url.clone(),
                source,
            }
        }
    }
}

#[async_trait]
impl RateSource for RateFetcher {
    async fn fetch(&self) -> Result<RateTable, FetchError> {
        debug!(url = %self.url, "fetching daily exchange rates");

        let res = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|source| self.transport_error(source))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| self.transport_error(source))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
                body: truncate_body(&body),
            });
        }

        let table = parse_rate_table(&body)?;
        debug!(currencies = table.len(), "parsed daily rate table");

        Ok(table)
    }
}

/// Parse a response body into a [`RateTable`], validating that every entry
/// carries the `name` and `rate` fields the converter relies on. Key order of
/// the top-level object is preserved, since it defines the menu numbering.
pub fn parse_rate_table(body: &str) -> Result<RateTable, FetchError> {
    let raw: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(body).map_err(|source| FetchError::Json { source })?;

    let mut pairs = Vec::with_capacity(raw.len());
    for (code, value) in raw {
        let entry: RateEntry = serde_json::from_value(value)
            .map_err(|source| FetchError::Entry { code: code.clone(), source })?;
        pairs.push((code, entry));
    }

    Ok(RateTable::from_entries(pairs))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
