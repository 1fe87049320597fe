//! Integration tests for the Mappls client (wiremock-based)

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_mappls::{MappingClient, MapplsClient, MapplsConfig, MapplsError};

const TOKEN: &str = "test-token";

fn client_for(server: &MockServer) -> MapplsClient {
    MapplsClient::new(&MapplsConfig::for_testing(&server.uri()), TOKEN).unwrap()
}

const fn sample_nearby_json() -> &'static str {
    r#"{
        "suggestedLocations": [
            {
                "distance": 87,
                "eLoc": "AAA111",
                "email": "hello@brew.example",
                "keywords": ["FODCOF"],
                "mobileNo": "9999900000",
                "orderIndex": 1,
                "placeAddress": "Block A, Connaught Place, New Delhi, 110001",
                "placeName": "Brew Room",
                "type": "POI",
                "addressTokens": { "locality": "Connaught Place", "city": "New Delhi", "pincode": "110001" }
            },
            {
                "distance": 140,
                "eLoc": "BBB222",
                "orderIndex": 2,
                "placeAddress": "Janpath, New Delhi",
                "placeName": "Tea Point",
                "type": "POI"
            }
        ],
        "pageInfo": { "pageCount": 1, "totalHits": 2, "totalPages": 1, "pageSize": 10 }
    }"#
}

// ============================================================================
// Distance
// ============================================================================

#[tokio::test]
async fn test_distance_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/distance"))
        .and(query_param("from", "13.115,77.607"))
        .and(query_param("to", "12.935,77.624"))
        .and(query_param("unit", "K"))
        .and(query_param("access_token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{ "responseCode": 200, "distance": 20.1849, "unit": "K" }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let distance = client_for(&server)
        .distance("13.115", "77.607", "12.935", " 77.624", "K")
        .await
        .unwrap();

    assert!((distance - 20.18).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_distance_blank_unit_defaults_to_kilometers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/distance"))
        .and(query_param("unit", "K"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{ "responseCode": 200, "distance": 1.0 }"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).distance("1", "2", "3", "4", "  ").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_distance_embedded_error_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/distance"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{ "responseCode": 204, "distance": 0 }"#),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .distance("1", "2", "3", "4", "K")
        .await
        .unwrap_err();

    assert!(matches!(err, MapplsError::ApiError { code: 204 }));
}

#[tokio::test]
async fn test_distance_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/distance"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .distance("1", "2", "3", "4", "K")
        .await
        .unwrap_err();

    match err {
        MapplsError::RequestFailed { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid token");
        },
        other => panic!("Expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_distance_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/distance"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .distance("1", "2", "3", "4", "K")
        .await
        .unwrap_err();

    assert!(matches!(err, MapplsError::ParseError(_)));
}

#[tokio::test]
async fn test_distance_invalid_coordinates_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .distance("1", "2", "three", "4", "K")
        .await
        .unwrap_err();

    assert!(matches!(err, MapplsError::InvalidCoordinates(_)));
}

#[tokio::test]
async fn test_distance_timeout_hides_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/distance"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = MapplsConfig {
        timeout_secs: 1,
        ..MapplsConfig::for_testing(&server.uri())
    };
    let client = MapplsClient::new(&config, TOKEN).unwrap();
    let err = client.distance("1", "2", "3", "4", "K").await.unwrap_err();

    assert!(err.is_transport());
    assert!(!err.to_string().contains(TOKEN));
}

#[tokio::test]
async fn test_connection_refused_hides_token() {
    let config = MapplsConfig::for_testing("http://127.0.0.1:1");
    let client = MapplsClient::new(&config, TOKEN).unwrap();

    let err = client.distance("1", "2", "3", "4", "K").await.unwrap_err();
    assert!(err.is_transport());
    assert!(!err.to_string().contains(TOKEN));
}

// ============================================================================
// Nearby search
// ============================================================================

#[tokio::test]
async fn test_nearby_search_success_keeps_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearby"))
        .and(query_param("keywords", "coffee;tea"))
        .and(query_param("refLocation", "28.631460,77.217423"))
        .and(query_param("access_token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_nearby_json()))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .nearby_search("coffee;tea", "28.631460,77.217423")
        .await
        .unwrap();

    assert_eq!(result.places.len(), 2);
    assert_eq!(result.places[0].name, "Brew Room");
    assert_eq!(result.places[0].distance_meters, 87);
    assert_eq!(result.places[0].email.as_deref(), Some("hello@brew.example"));
    assert_eq!(result.places[1].name, "Tea Point");
    assert!(result.places[1].phone.is_none());
    assert_eq!(result.page_info.map(|p| p.total_hits), Some(2));
}

#[tokio::test]
async fn test_nearby_search_passes_and_operator_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearby"))
        .and(query_param("keywords", "coffee$food"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{ "suggestedLocations": [] }"#))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .nearby_search("coffee$food", "28.6,77.2")
        .await
        .unwrap();

    assert!(result.places.is_empty());
}

#[tokio::test]
async fn test_nearby_search_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearby"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .nearby_search("coffee", "28.6,77.2")
        .await
        .unwrap_err();

    assert!(matches!(err, MapplsError::RequestFailed { status: 500, .. }));
}

#[tokio::test]
async fn test_nearby_search_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearby"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{ "suggestedLocations": "nope" }"#),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .nearby_search("coffee", "28.6,77.2")
        .await
        .unwrap_err();

    assert!(matches!(err, MapplsError::ParseError(_)));
}
