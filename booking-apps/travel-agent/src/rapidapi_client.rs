//!  Booking Travel Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # RapidAPI Client
//!
//! Effectful (network) transport for the Booking.com RapidAPI endpoints.
//! Every outcome is normalized into either the parsed JSON payload or an
//! [`ErrorEnvelope`].
//!
//! A client is one-shot: it owns its HTTP session and [`RapidApiClient::request`]
//! consumes it, so the session is released on every exit path and cannot be
//! reused for a second call.

use std::fmt;

use booking_query_retry::RetryPolicy;
use serde_json::Value;
use wreq::redirect::Policy;

use crate::config::ApiConfig;
use crate::error_envelope::{ErrorEnvelope, http_error_text};

/// Scalar query parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => write!(f, "{}", s),
            QueryValue::Integer(n) => write!(f, "{}", n),
            QueryValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Text(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Text(s)
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Integer(n)
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        QueryValue::Integer(n.into())
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Flag(b)
    }
}

pub type QueryParams = Vec<(&'static str, QueryValue)>;

pub fn build_request_url(base_url: &str, endpoint: &str, params: &[(&str, QueryValue)]) -> String {
    let mut url = format!("{}{}", base_url, endpoint);
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(&value.to_string())
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }
    url
}

pub struct RapidApiClient {
    session: wreq::Client,
    config: ApiConfig,
    retries_enabled: bool,
}

impl RapidApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ErrorEnvelope> {
        let session = wreq::Client::builder()
            // 3xx is an upstream error like any other non-2xx status
            .redirect(Policy::none())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ErrorEnvelope::transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            session,
            config,
            retries_enabled: false,
        })
    }

    pub fn from_env() -> Result<Self, ErrorEnvelope> {
        Self::new(ApiConfig::from_env())
    }

    /// Retry transport failures (never HTTP statuses) with the default
    /// [`RetryPolicy`]. Disabled unless asked for.
    pub fn with_retries(self, retries_enabled: bool) -> Self {
        Self {
            retries_enabled,
            ..self
        }
    }

    pub fn retries_enabled(&self) -> bool {
        self.retries_enabled
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issues one GET to `endpoint` and consumes the client.
    pub async fn request(
        self,
        endpoint: &str,
        params: &[(&str, QueryValue)],
    ) -> Result<Value, ErrorEnvelope> {
        debug_assert!(!endpoint.is_empty(), "endpoint must not be empty");

        let Self {
            session,
            config,
            retries_enabled,
        } = self;
        let url = build_request_url(&config.base_url, endpoint, params);
        let policy = if retries_enabled {
            RetryPolicy::default()
        } else {
            RetryPolicy::single_attempt()
        };

        tracing::info!("Making API request to {} with params: {:?}", endpoint, params);

        let sent = policy
            .run(|| {
                let request = session
                    .get(&url)
                    .header("X-RapidAPI-Key", config.api_key.as_str())
                    .header("X-RapidAPI-Host", config.api_host.as_str())
                    .header("Content-Type", "application/json");
                async move { request.send().await }
            })
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) => return Err(transport_failure(endpoint, params, e)),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Err(transport_failure(endpoint, params, e)),
        };
        tracing::debug!(
            "HTTP Status: {} {}, body {} bytes",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            body.len()
        );

        if status.is_success() {
            return Ok(match serde_json::from_str::<Value>(&body) {
                Ok(payload) => payload,
                Err(_) => {
                    tracing::debug!("Response body of {} is not JSON", endpoint);
                    Value::String(body)
                }
            });
        }

        let http_error = http_error_text(status.as_u16(), status.canonical_reason(), &url);
        let envelope = ErrorEnvelope::from_http_status(&http_error, status.as_u16(), &body);
        tracing::error!(
            "API request to {} failed with status {}: {}",
            endpoint,
            status.as_u16(),
            envelope.to_json()
        );
        Err(envelope)
    }
}

fn transport_failure(endpoint: &str, params: &[(&str, QueryValue)], e: wreq::Error) -> ErrorEnvelope {
    let envelope = ErrorEnvelope::transport(e.to_string());
    tracing::error!(
        "Exception raised from the API endpoint {} with params: {:?}. Error: {}",
        endpoint,
        params,
        envelope.to_json()
    );
    envelope
}
