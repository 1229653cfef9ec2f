// SPDX-License-Identifier: GPL-3.0-only

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Thin HTTP layer: one GET per call against the configured base URL,
/// decoded into a typed record. No retries, no caching, no auth.
///
/// Failures are classified so callers can tell "the server said no"
/// ([`Error::Transport`]) from "the server said yes but the body is
/// malformed" ([`Error::Decode`]).
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| Error::Request {
                endpoint: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Issues exactly one GET against `base_url + endpoint` and decodes
    /// the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, i64)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| Error::Request {
                endpoint: endpoint.to_string(),
                source,
            })?;

        if response.status() != StatusCode::OK {
            tracing::warn!(%url, status = %response.status(), "request refused");
            return Err(Error::Transport {
                status: response.status().as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let body = response.text().await.map_err(|source| Error::Request {
            endpoint: endpoint.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| Error::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}
