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

//! # RapidAPI Configuration
//!
//! Environment-sourced settings for the Booking.com RapidAPI endpoints.

use std::time::Duration;

pub const API_KEY_VAR: &str = "RAPIDAPI_KEY";
pub const API_HOST_VAR: &str = "RAPIDAPI_HOST";
pub const API_TIMEOUT_VAR: &str = "API_TIMEOUT_IN_SECONDS";
pub const API_BASE_URL_VAR: &str = "RAPIDAPI_BASE_URL";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_host: String,
    /// Scheme and authority every endpoint path is appended to
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        let api_host = api_host.into();
        Self {
            api_key: api_key.into(),
            base_url: format!("https://{}", api_host),
            api_host,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..self
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Reads `RAPIDAPI_KEY`, `RAPIDAPI_HOST`, `API_TIMEOUT_IN_SECONDS` and the
    /// optional `RAPIDAPI_BASE_URL` override from the process environment.
    ///
    /// Missing credentials are not an error here: the upstream rejects the
    /// call and the rejection surfaces as an HTTP error envelope.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_VAR).unwrap_or_default();
        let api_host = lookup(API_HOST_VAR).unwrap_or_default();
        let timeout = parse_timeout(lookup(API_TIMEOUT_VAR).as_deref());

        let config = Self::new(api_key, api_host).with_timeout(timeout);
        match lookup(API_BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            Some(base_url) => config.with_base_url(base_url.trim()),
            None => config,
        }
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&secs| secs > 0);
    match secs {
        Some(secs) => Duration::from_secs(secs),
        None => {
            if let Some(raw) = raw {
                tracing::warn!(
                    "Ignoring invalid {}={:?}, using {}s",
                    API_TIMEOUT_VAR,
                    raw,
                    DEFAULT_TIMEOUT_SECS
                );
            }
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_reads_credentials_and_derives_base_url() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            (API_HOST_VAR, "booking-com.p.rapidapi.com"),
            (API_TIMEOUT_VAR, "25"),
        ]));
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.api_host, "booking-com.p.rapidapi.com");
        assert_eq!(config.base_url, "https://booking-com.p.rapidapi.com");
        assert_eq!(config.timeout, Duration::from_secs(25));
    }

    #[test]
    fn test_timeout_defaults_when_unset_or_invalid() {
        for raw in [None, Some("abc"), Some("0"), Some("-3"), Some("")] {
            assert_eq!(
                parse_timeout(raw),
                Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                "raw = {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_base_url_override_drops_trailing_slash() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (API_HOST_VAR, "booking-com.p.rapidapi.com"),
            (API_BASE_URL_VAR, "http://127.0.0.1:4010/"),
        ]));
        assert_eq!(config.base_url, "http://127.0.0.1:4010");
        assert_eq!(config.api_host, "booking-com.p.rapidapi.com");
    }

    #[test]
    fn test_missing_credentials_are_tolerated() {
        let config = ApiConfig::from_lookup(|_| None);
        assert!(config.api_key.is_empty());
        assert_eq!(config.base_url, "https://");
    }
}
