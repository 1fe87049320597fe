//! Integration tests for the Nominatim client (wiremock-based)

use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_nominatim::{GeocodingClient, GeocodingError, NominatimClient, NominatimConfig};

const fn sample_search_json() -> &'static str {
    r#"[
        {
            "lat": "12.9352403",
            "lon": "77.6245149",
            "name": "Koramangala",
            "display_name": "Koramangala, Bengaluru, Bangalore South, Bengaluru Urban, Karnataka, 560034, India"
        },
        {
            "lat": "12.9279",
            "lon": "77.6271",
            "name": "Koramangala 4th Block",
            "display_name": "Koramangala 4th Block, Bengaluru, Karnataka, India"
        }
    ]"#
}

#[tokio::test]
async fn test_geocode_success_returns_first_candidate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Koramangala"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimClient::new(&NominatimConfig::for_testing(server.uri())).unwrap();
    let place = client.geocode("Koramangala").await.unwrap();

    assert_eq!(place.latitude, "12.9352403");
    assert_eq!(place.longitude, "77.6245149");
    assert_eq!(place.name, "Koramangala");
}

#[tokio::test]
async fn test_geocode_sends_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("user-agent", "map-cli/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimClient::new(&NominatimConfig::for_testing(server.uri())).unwrap();
    assert!(client.geocode("Koramangala").await.is_ok());
}

#[tokio::test]
async fn test_geocode_escapes_place_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "MG Road & Brigade Road"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimClient::new(&NominatimConfig::for_testing(server.uri())).unwrap();
    assert!(client.geocode("  MG Road & Brigade Road ").await.is_ok());
}

#[tokio::test]
async fn test_geocode_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&NominatimConfig::for_testing(server.uri())).unwrap();
    let err = client.geocode("Atlantis").await.unwrap_err();

    assert!(matches!(err, GeocodingError::NotFound(_)));
}

#[tokio::test]
async fn test_geocode_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("try later"))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&NominatimConfig::for_testing(server.uri())).unwrap();
    let err = client.geocode("Koramangala").await.unwrap_err();

    match err {
        GeocodingError::RequestFailed { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "try later");
        },
        other => panic!("Expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_geocode_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"error": "oops"}"#))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&NominatimConfig::for_testing(server.uri())).unwrap();
    let err = client.geocode("Koramangala").await.unwrap_err();

    assert!(matches!(err, GeocodingError::ParseError(_)));
}

#[tokio::test]
async fn test_geocode_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sample_search_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = NominatimConfig {
        timeout_secs: 1,
        ..NominatimConfig::for_testing(server.uri())
    };
    let client = NominatimClient::new(&config).unwrap();
    let err = client.geocode("Koramangala").await.unwrap_err();

    assert!(matches!(err, GeocodingError::Timeout { timeout_secs: 1 }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_geocode_connection_refused() {
    let config = NominatimConfig::for_testing("http://127.0.0.1:1");
    let client = NominatimClient::new(&config).unwrap();

    let err = client.geocode("Koramangala").await.unwrap_err();
    assert!(err.is_transport());
}
