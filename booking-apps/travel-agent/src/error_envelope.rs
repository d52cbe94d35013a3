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

//! # Error Envelope
//!
//! The single failure shape returned by the transport, both search adapters
//! and the MCP tools. Failures travel as data and are never raised past the
//! adapter boundary.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Longest slice of a non-JSON error body kept in the message
pub const MAX_ERROR_BODY_CHARS: usize = 500;

pub const NO_DESTINATIONS_MESSAGE: &str = "No destinations found matching your query.";
pub const NO_HOTELS_MESSAGE: &str = "No hotels found for these dates.";
pub const UNEXPECTED_FORMAT_MESSAGE: &str = "Unexpected response format from the API.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[error("{error_message}")]
pub struct ErrorEnvelope {
    error: bool,
    error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_data: Option<Map<String, Value>>,
}

impl ErrorEnvelope {
    fn new(
        error_message: String,
        status_code: Option<u16>,
        error_data: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            error: true,
            error_message,
            status_code,
            error_data,
        }
    }

    /// Connection, timeout, DNS or body-read failure. Carries no status.
    pub fn transport(error_message: impl Into<String>) -> Self {
        Self::new(error_message.into(), None, None)
    }

    /// Upstream answered with a non-2xx status.
    ///
    /// A JSON object body is kept as `error_data` and its `message`, `error`
    /// or `detail` entry (first present wins) is appended to the message.
    /// Any other body is appended raw, cut to [`MAX_ERROR_BODY_CHARS`].
    pub fn from_http_status(http_error: &str, status_code: u16, body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(error_data)) => {
                let api_message = ["message", "error", "detail"]
                    .iter()
                    .find_map(|key| error_data.get(*key))
                    .map(display_value)
                    .unwrap_or_else(|| http_error.to_string());
                Self::new(
                    format!("{} | API Error: {}", http_error, api_message),
                    Some(status_code),
                    Some(error_data),
                )
            }
            _ => {
                let preview: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
                Self::new(
                    format!("{} | Response: {}", http_error, preview),
                    Some(status_code),
                    None,
                )
            }
        }
    }

    pub fn not_found(error_message: impl Into<String>) -> Self {
        Self::new(error_message.into(), Some(404), None)
    }

    pub fn unexpected_format() -> Self {
        Self::new(UNEXPECTED_FORMAT_MESSAGE.to_string(), Some(500), None)
    }

    pub fn message(&self) -> &str {
        &self.error_message
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn error_data(&self) -> Option<&Map<String, Value>> {
        self.error_data.as_ref()
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| {
            serde_json::json!({ "error": true, "error_message": self.error_message })
        })
    }
}

/// `Client error '404 Not Found' for url '...'`
pub fn http_error_text(status_code: u16, reason: Option<&str>, url: &str) -> String {
    let kind = match status_code {
        100..=199 => "Informational response",
        300..=399 => "Redirect response",
        400..=499 => "Client error",
        500..=599 => "Server error",
        _ => "HTTP error",
    };
    match reason {
        Some(reason) => format!("{} '{} {}' for url '{}'", kind, status_code, reason, url),
        None => format!("{} '{}' for url '{}'", kind, status_code, url),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
