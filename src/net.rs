// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Report fetcher.
//!
//! ```text
//! Fetcher::new()
//!   .url()
//!      |
//!      v
//!   fetch() --GET--> endpoint
//!      |
//!      +-- !2xx        -> NetworkError::HttpError { status, reason }
//!      +-- bad JSON    -> NetworkError::Parse
//!      +-- ok          -> RawReport
//!
//! Global client: OnceLock, connection pool, keep-alive
//! One attempt per call: no retry, no timeout, no cache.
//! ```

use reqwest::Client;
use std::sync::OnceLock;

use crate::error::{CheckEnvResult, NetworkError};
use crate::report::RawReport;

/// Endpoint used when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://172.22.2.251:8082/check-env.json";

/// Global HTTP client - initialized once, reused across all fetches.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("check-env/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Fetches the environment report from a single endpoint.
///
/// # Example
/// ```ignore
/// use check_env::net::Fetcher;
/// use check_env::report::transform;
///
/// let raw = Fetcher::new().url("http://config-host/check-env.json").fetch().await?;
/// let tabs = transform(raw);
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    url: String,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Create a fetcher pointing at [`DEFAULT_ENDPOINT`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: global_client().clone(),
            url: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Set the URL to fetch from.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// The URL this fetcher will request.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the report.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is empty or malformed.
    /// - The request fails at the transport level.
    /// - The server answers with a non-success status code.
    /// - The body is not a JSON report with a `data` object.
    pub async fn fetch(&self) -> CheckEnvResult<RawReport> {
        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| NetworkError::InvalidUrl(format!("{}: {e}", self.url)))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: self.url.clone(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(NetworkError::Reqwest)?;
        let report = RawReport::from_slice(&body).map_err(|source| NetworkError::Parse {
            url: self.url.clone(),
            source,
        })?;
        Ok(report)
    }
}
