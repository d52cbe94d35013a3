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

use std::time::Duration;

use booking_travel_agent::{
    ApiConfig, HotelSearchParams, MAX_HOTELS, NO_HOTELS_MESSAGE, RapidApiClient, SEARCH_ENDPOINT,
};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RapidApiClient {
    let config = ApiConfig::new("test-key", "booking-com.p.rapidapi.com")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(2));
    RapidApiClient::new(config).expect("client builds")
}

fn params() -> HotelSearchParams {
    HotelSearchParams::new("-1456928", "2025-01-01", "2025-01-05")
}

async fn upstream_returning(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_ENDPOINT))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn hotel_record(i: usize) -> Value {
    json!({
        "hotel_id": 1000 + i,
        "hotel_name": format!("Hotel {i}"),
        "review_score": 8.1,
        "class": 3,
        "address": format!("{i} Rue de Rivoli"),
        "min_total_price": 100 + i,
        "gross_price": null,
        "currency_code": "USD",
        "url": format!("https://www.booking.com/hotel/fr/h{i}.html"),
        "max_1440_photo_url": format!("https://cf.bstatic.com/{i}.jpg"),
        "latitude": 48.86,
        "longitude": 2.33
    })
}

#[tokio::test]
async fn test_search_sends_fixed_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_ENDPOINT))
        .and(query_param("adults_number", "3"))
        .and(query_param("units", "metric"))
        .and(query_param("page_number", "0"))
        .and(query_param("checkin_date", "2025-01-01"))
        .and(query_param("checkout_date", "2025-01-05"))
        .and(query_param("dest_type", "city"))
        .and(query_param("dest_id", "-1456928"))
        .and(query_param("order_by", "popularity"))
        .and(query_param("include_adjacency", "true"))
        .and(query_param("room_number", "1"))
        .and(query_param("filter_by_currency", "USD"))
        .and(query_param("locale", "en-gb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": [hotel_record(0)]})))
        .expect(1)
        .mount(&server)
        .await;

    let hotels = client_for(&server)
        .search_hotels(&params().adults(3))
        .await
        .expect("hotels");

    assert_eq!(hotels.len(), 1);
    assert_eq!(
        hotels[0].booking_url.as_deref(),
        Some(
            "https://www.booking.com/hotel/fr/h0.html?checkin=2025-01-01&checkout=2025-01-05&group_adults=3&no_rooms=1&group_children=0"
        )
    );
}

#[tokio::test]
async fn test_first_page_is_capped_in_upstream_order() {
    let records: Vec<Value> = (0..15).map(hotel_record).collect();
    let server =
        upstream_returning(ResponseTemplate::new(200).set_body_json(json!({"result": records})))
            .await;

    let hotels = client_for(&server).search_hotels(&params()).await.expect("hotels");

    assert_eq!(hotels.len(), MAX_HOTELS);
    let names: Vec<_> = hotels.iter().filter_map(|h| h.hotel_name.clone()).collect();
    let expected: Vec<_> = (0..MAX_HOTELS).map(|i| format!("Hotel {i}")).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_maps_full_record() {
    let server = upstream_returning(
        ResponseTemplate::new(200).set_body_json(json!({"result": [hotel_record(7)]})),
    )
    .await;

    let hotels = client_for(&server).search_hotels(&params()).await.expect("hotels");
    let value = serde_json::to_value(&hotels[0]).expect("serialize");

    assert_eq!(
        value,
        json!({
            "hotel_name": "Hotel 7",
            "review_score": 8.1,
            "rating": 3.0,
            "address": "7 Rue de Rivoli",
            "price": "107 USD",
            "maps_url": "https://www.google.com/maps?q=48.86,2.33",
            "main_image_url": "https://cf.bstatic.com/7.jpg",
            "booking_url": "https://www.booking.com/hotel/fr/h7.html?checkin=2025-01-01&checkout=2025-01-05&group_adults=2&no_rooms=1&group_children=0"
        })
    );
}

#[tokio::test]
async fn test_sparse_record_keeps_maps_url() {
    let server = upstream_returning(
        ResponseTemplate::new(200)
            .set_body_json(json!({"result": [{"hotel_name": "Bare", "min_total_price": null}]})),
    )
    .await;

    let hotels = client_for(&server).search_hotels(&params()).await.expect("hotels");
    assert_eq!(hotels[0].price, None);
    assert_eq!(hotels[0].booking_url, None);
    assert_eq!(hotels[0].main_image_url, None);
    assert_eq!(hotels[0].maps_url, "https://www.google.com/maps?q=,");
}

#[tokio::test]
async fn test_no_hotels_is_404_envelope() {
    for body in [json!({"result": []}), json!({"count": 0})] {
        let server = upstream_returning(ResponseTemplate::new(200).set_body_json(body)).await;
        let envelope = client_for(&server)
            .search_hotels(&params())
            .await
            .expect_err("no hotels");
        assert_eq!(envelope.status_code(), Some(404));
        assert_eq!(envelope.message(), NO_HOTELS_MESSAGE);
    }
}

#[tokio::test]
async fn test_unexpected_shapes_are_500_envelopes() {
    for template in [
        ResponseTemplate::new(200).set_body_json(json!({"result": null})),
        ResponseTemplate::new(200).set_body_json(json!({"result": {"0": {}}})),
        ResponseTemplate::new(200).set_body_json(json!([hotel_record(0)])),
        ResponseTemplate::new(200).set_body_string("upstream busy"),
    ] {
        let server = upstream_returning(template).await;
        let envelope = client_for(&server)
            .search_hotels(&params())
            .await
            .expect_err("unexpected shape");
        assert_eq!(envelope.status_code(), Some(500));
    }
}

#[tokio::test]
async fn test_past_dates_error_comes_from_upstream() {
    let body = json!({"detail": [{"msg": "checkin_date must be in the future"}]});
    let server = upstream_returning(ResponseTemplate::new(422).set_body_json(body)).await;

    let envelope = client_for(&server)
        .search_hotels(&params())
        .await
        .expect_err("422");
    assert_eq!(envelope.status_code(), Some(422));
    assert!(envelope.message().contains("checkin_date must be in the future"));
    assert!(envelope.error_data().is_some());
}
