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

// Library for booking-travel-agent
// Booking.com destination and hotel search over RapidAPI

mod config;
mod destinations_results_parser;
mod destinations_search;
mod error_envelope;
mod hotels_query_builder;
mod hotels_results_parser;
mod hotels_search;
mod rapidapi_client;
mod upstream_fields;

pub use config::{
    API_BASE_URL_VAR, API_HOST_VAR, API_KEY_VAR, API_TIMEOUT_VAR, ApiConfig, DEFAULT_TIMEOUT_SECS,
};

pub use error_envelope::{
    ErrorEnvelope, MAX_ERROR_BODY_CHARS, NO_DESTINATIONS_MESSAGE, NO_HOTELS_MESSAGE,
    UNEXPECTED_FORMAT_MESSAGE, http_error_text,
};

pub use rapidapi_client::{QueryParams, QueryValue, RapidApiClient, build_request_url};

pub use destinations_results_parser::{Coordinates, Location, locations_from_response};
pub use destinations_search::{LOCALE, LOCATIONS_ENDPOINT, destination_query};

pub use hotels_query_builder::{DEFAULT_ADULTS, HotelSearchParams};
pub use hotels_results_parser::{Hotel, MAX_HOTELS, hotels_from_response, maps_url};
pub use hotels_search::SEARCH_ENDPOINT;
