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

//! # Booking.com Hotels Search
//!
//! Effectful (network) hotel search for a destination id.

use crate::error_envelope::ErrorEnvelope;
use crate::hotels_query_builder::HotelSearchParams;
use crate::hotels_results_parser::{Hotel, hotels_from_response};
use crate::rapidapi_client::RapidApiClient;

pub const SEARCH_ENDPOINT: &str = "/v1/hotels/search";

impl RapidApiClient {
    pub async fn search_hotels(self, params: &HotelSearchParams) -> Result<Vec<Hotel>, ErrorEnvelope> {
        tracing::info!(
            "Getting hotels for destination_id: {}, checkin: {}, checkout: {}, adults: {}",
            params.destination_id,
            params.checkin_date,
            params.checkout_date,
            params.adults
        );

        let start = std::time::Instant::now();
        let payload = self.request(SEARCH_ENDPOINT, &params.to_query()).await?;
        tracing::debug!("Hotel search request completed in {:?}", start.elapsed());

        let result = hotels_from_response(&payload, params);
        match &result {
            Ok(hotels) => tracing::info!(
                "Found {} hotels for destination: {}",
                hotels.len(),
                params.destination_id
            ),
            Err(e) if e.status_code() == Some(500) => tracing::warn!(
                "Unexpected response format from API for destination: {}",
                params.destination_id
            ),
            Err(_) => tracing::info!(
                "No hotels for destination {} between {} and {}",
                params.destination_id,
                params.checkin_date,
                params.checkout_date
            ),
        }
        result
    }
}
