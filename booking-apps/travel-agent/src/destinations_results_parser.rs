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

//! # Destinations Results Parser
//!
//! Side-effect free mapping of `/v1/hotels/locations` payloads into [`Location`]s.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error_envelope::{ErrorEnvelope, NO_DESTINATIONS_MESSAGE};
use crate::upstream_fields::{float, integer, text};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct Coordinates {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// A searchable destination. Display fields are passed through from
/// upstream and stay `None` when upstream omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct Location {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub destination_id: Option<i64>,
    pub country: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl Location {
    pub fn from_record(record: &Value) -> Self {
        Self {
            name: text(record, "name"),
            kind: text(record, "dest_type"),
            destination_id: integer(record, "dest_id"),
            country: text(record, "country"),
            coordinates: Some(Coordinates {
                lat: float(record, "latitude"),
                lon: float(record, "longitude"),
            }),
        }
    }
}

/// Maps every record of a locations payload, in upstream order.
///
/// An empty list becomes a 404 envelope; anything but a list a 500 one.
pub fn locations_from_response(payload: &Value) -> Result<Vec<Location>, ErrorEnvelope> {
    let Value::Array(records) = payload else {
        return Err(ErrorEnvelope::unexpected_format());
    };

    let locations: Vec<Location> = records.iter().map(Location::from_record).collect();
    if locations.is_empty() {
        return Err(ErrorEnvelope::not_found(NO_DESTINATIONS_MESSAGE));
    }
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_paris_record() {
        let payload = json!([{
            "name": "Paris",
            "dest_type": "city",
            "dest_id": 42,
            "country": "France",
            "latitude": 48.85,
            "longitude": 2.35
        }]);

        let locations = locations_from_response(&payload).expect("one location");
        assert_eq!(
            locations,
            vec![Location {
                name: Some("Paris".into()),
                kind: Some("city".into()),
                destination_id: Some(42),
                country: Some("France".into()),
                coordinates: Some(Coordinates {
                    lat: Some(48.85),
                    lon: Some(2.35)
                }),
            }]
        );
    }

    #[test]
    fn test_serializes_kind_as_type() {
        let location = Location::from_record(&json!({"name": "Paris", "dest_type": "city"}));
        let value = serde_json::to_value(&location).expect("serialize");
        assert_eq!(value["type"], json!("city"));
        assert_eq!(value["coordinates"], json!({"lat": null, "lon": null}));
    }

    #[test]
    fn test_string_destination_id_is_parsed() {
        let location = Location::from_record(&json!({"dest_id": "-1456928"}));
        assert_eq!(location.destination_id, Some(-1456928));
    }

    #[test]
    fn test_missing_fields_pass_through_as_none() {
        let payload = json!([{"name": "Nowhere"}, "garbage"]);
        let locations = locations_from_response(&payload).expect("records are not filtered");

        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].name.as_deref(), Some("Nowhere"));
        assert_eq!(locations[0].kind, None);
        assert_eq!(locations[0].country, None);
        assert_eq!(locations[1].name, None);
        assert_eq!(locations[1].destination_id, None);
    }

    #[test]
    fn test_empty_list_is_not_found() {
        let err = locations_from_response(&json!([])).unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.message(), NO_DESTINATIONS_MESSAGE);
    }

    #[test]
    fn test_non_list_is_unexpected_format() {
        for payload in [json!({"result": []}), json!("<html>"), json!(null)] {
            let err = locations_from_response(&payload).unwrap_err();
            assert_eq!(err.status_code(), Some(500), "payload = {}", payload);
        }
    }
}
