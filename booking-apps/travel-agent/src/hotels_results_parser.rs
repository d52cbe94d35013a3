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

//! # Hotels Results Parser
//!
//! Side-effect free mapping of `/v1/hotels/search` payloads into [`Hotel`]s.
//! Projects the raw upstream record into a stable shape: derived price
//! string, pre-filled booking link, best available photo and a maps link.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error_envelope::{ErrorEnvelope, NO_HOTELS_MESSAGE};
use crate::hotels_query_builder::HotelSearchParams;
use crate::upstream_fields::{display, first_non_empty_text, float, text};

/// Only the head of the first page is returned
pub const MAX_HOTELS: usize = 10;

const PHOTO_KEYS: [&str; 3] = ["max_1440_photo_url", "max_photo_url", "main_photo_url"];
const CURRENCY_KEYS: [&str; 2] = ["currency_code", "currencycode"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct Hotel {
    pub hotel_name: Option<String>,
    pub review_score: Option<f64>,
    /// Star class of the property, not a guest rating
    pub rating: Option<f64>,
    pub address: Option<String>,
    /// `"<amount> <currency>"`
    pub price: Option<String>,
    pub maps_url: String,
    pub main_image_url: Option<String>,
    pub booking_url: Option<String>,
}

impl Hotel {
    pub fn from_record(record: &Value, params: &HotelSearchParams) -> Self {
        // gross_price is always null upstream, min_total_price carries the stay total
        let price = display(record, "min_total_price").map(|amount| {
            let currency = first_non_empty_text(record, &CURRENCY_KEYS).unwrap_or_default();
            format!("{} {}", amount, currency).trim_end().to_string()
        });

        let booking_url = first_non_empty_text(record, &["url"]).map(|url| params.booking_url(&url));

        Self {
            hotel_name: text(record, "hotel_name"),
            review_score: float(record, "review_score"),
            rating: float(record, "class"),
            address: text(record, "address"),
            price,
            maps_url: maps_url(record),
            main_image_url: first_non_empty_text(record, &PHOTO_KEYS),
            booking_url,
        }
    }
}

/// Always built, with empty coordinates when upstream has none
pub fn maps_url(record: &Value) -> String {
    format!(
        "https://www.google.com/maps?q={},{}",
        display(record, "latitude").unwrap_or_default(),
        display(record, "longitude").unwrap_or_default()
    )
}

/// Maps the first [`MAX_HOTELS`] entries of `result`, in upstream order.
///
/// A missing `result` counts as empty. No hotels becomes a 404 envelope; a
/// non-object payload or a non-list `result` a 500 one.
pub fn hotels_from_response(
    payload: &Value,
    params: &HotelSearchParams,
) -> Result<Vec<Hotel>, ErrorEnvelope> {
    let Value::Object(body) = payload else {
        return Err(ErrorEnvelope::unexpected_format());
    };

    let records = match body.get("result") {
        None => &[][..],
        Some(Value::Array(records)) => records.as_slice(),
        Some(_) => return Err(ErrorEnvelope::unexpected_format()),
    };

    tracing::debug!("Upstream returned {} hotel records", records.len());

    let hotels: Vec<Hotel> = records
        .iter()
        .take(MAX_HOTELS)
        .map(|record| Hotel::from_record(record, params))
        .collect();

    if hotels.is_empty() {
        return Err(ErrorEnvelope::not_found(NO_HOTELS_MESSAGE));
    }
    Ok(hotels)
}
