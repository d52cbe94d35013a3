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

//! # Hotels Query Builder
//!
//! Side-effect free construction of the `/v1/hotels/search` query and of the
//! per-hotel booking links.
//!
//! Dates are opaque strings here. The upstream API is the only validator of
//! their format and of the future-date constraint.

use serde::{Deserialize, Serialize};

use crate::destinations_search::LOCALE;
use crate::rapidapi_client::QueryParams;

pub const DEFAULT_ADULTS: u32 = 2;
pub const ROOM_COUNT: u32 = 1;
pub const CHILDREN_COUNT: u32 = 0;
pub const CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HotelSearchParams {
    pub destination_id: String,
    pub checkin_date: String,
    pub checkout_date: String,
    pub adults: u32,
}

impl HotelSearchParams {
    pub fn new(
        destination_id: impl Into<String>,
        checkin_date: impl Into<String>,
        checkout_date: impl Into<String>,
    ) -> Self {
        Self {
            destination_id: destination_id.into(),
            checkin_date: checkin_date.into(),
            checkout_date: checkout_date.into(),
            adults: DEFAULT_ADULTS,
        }
    }

    pub fn adults(self, adults: u32) -> Self {
        Self { adults, ..self }
    }

    /// First page of city results, most popular first, priced in USD.
    pub fn to_query(&self) -> QueryParams {
        vec![
            ("adults_number", self.adults.into()),
            ("units", "metric".into()),
            ("page_number", 0i64.into()),
            ("checkin_date", self.checkin_date.as_str().into()),
            ("checkout_date", self.checkout_date.as_str().into()),
            ("dest_type", "city".into()),
            ("dest_id", self.destination_id.as_str().into()),
            ("order_by", "popularity".into()),
            ("include_adjacency", true.into()),
            ("room_number", ROOM_COUNT.into()),
            ("filter_by_currency", CURRENCY.into()),
            ("locale", LOCALE.into()),
        ]
    }

    /// Hotel page link with the stay pre-filled
    pub fn booking_url(&self, base_url: &str) -> String {
        format!(
            "{}?checkin={}&checkout={}&group_adults={}&no_rooms={}&group_children={}",
            base_url,
            self.checkin_date,
            self.checkout_date,
            self.adults,
            ROOM_COUNT,
            CHILDREN_COUNT
        )
    }
}
