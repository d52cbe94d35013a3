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

//! # Destinations Search
//!
//! Effectful (network) destination lookup by name.

use crate::destinations_results_parser::{Location, locations_from_response};
use crate::error_envelope::ErrorEnvelope;
use crate::rapidapi_client::{QueryParams, RapidApiClient};

pub const LOCATIONS_ENDPOINT: &str = "/v1/hotels/locations";
pub const LOCALE: &str = "en-gb";

pub fn destination_query(name: &str) -> QueryParams {
    vec![("name", name.into()), ("locale", LOCALE.into())]
}

impl RapidApiClient {
    pub async fn search_destinations(self, name: &str) -> Result<Vec<Location>, ErrorEnvelope> {
        tracing::info!("Searching for destinations with query: {}", name);

        let payload = self
            .request(LOCATIONS_ENDPOINT, &destination_query(name))
            .await?;

        match locations_from_response(&payload) {
            Ok(locations) => {
                tracing::info!("Found {} destinations for query: {}", locations.len(), name);
                Ok(locations)
            }
            Err(e) => {
                if e.status_code() == Some(500) {
                    tracing::warn!("Unexpected response format from API for query: {}", name);
                }
                Err(e)
            }
        }
    }
}
