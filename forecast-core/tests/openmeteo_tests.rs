//! Integration tests for the Open-Meteo client using WireMock.

use forecast_core::{
    Coordinates, ErrorKind, ForecastError, ForecastProvider, ForecastSession, OpenMeteoClient,
    WeatherRepository, city::City,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 51.5,
        "longitude": -0.12,
        "timezone": "Europe/London",
        "current_weather": {"temperature": 21.0, "windspeed": 3.0, "weathercode": 1},
        "daily": {
            "time": ["2025-10-14", "2025-10-15", "2025-10-16"],
            "temperature_2m_max": [20.0, null, 18.5],
            "temperature_2m_min": [10.0, 12.0, 9.0],
            "precipitation_probability_mean": [30, 10],
            "weathercode": [61, 0, 80]
        }
    })
}

fn client_for(server: &MockServer) -> OpenMeteoClient {
    OpenMeteoClient::new(format!("{}/v1/forecast", server.uri()))
}

#[tokio::test]
async fn fetch_sends_fixed_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "51.5074"))
        .and(query_param("longitude", "-0.1278"))
        .and(query_param("current_weather", "true"))
        .and(query_param("timezone", "auto"))
        .and(query_param(
            "daily",
            "temperature_2m_max,temperature_2m_min,precipitation_probability_mean,weathercode",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let raw = client.fetch(Coordinates::new(51.5074, -0.1278)).await.unwrap();

    assert_eq!(raw.timezone.as_deref(), Some("Europe/London"));
    assert_eq!(raw.current_weather.and_then(|c| c.temperature), Some(21.0));
}

#[tokio::test]
async fn repository_maps_partial_daily_block() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let repo = WeatherRepository::new(client_for(&server));
    let summary = repo.get_weather(Coordinates::new(51.5074, -0.1278)).await.unwrap();

    assert_eq!(summary.current_temp_c, Some(21.0));
    let dates: Vec<&str> = summary.daily.iter().map(|d| d.date_iso.as_str()).collect();
    assert_eq!(dates, vec!["2025-10-14", "2025-10-16"]);
    assert_eq!(summary.daily[1].precip_probability_pct, 0);
    assert_eq!(summary.daily[1].weather_code, 80);
}

#[tokio::test]
async fn non_success_status_is_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch(Coordinates::new(0.0, 0.0))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    match err {
        ForecastError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "service unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch(Coordinates::new(0.0, 0.0))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn wrong_field_type_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"daily": {"time": "2025-10-14"}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch(Coordinates::new(0.0, 0.0))
        .await
        .unwrap_err();

    assert!(matches!(err, ForecastError::Decode(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Nothing listens on the tcpmux port.
    let err = OpenMeteoClient::new("http://127.0.0.1:1/v1/forecast")
        .fetch(Coordinates::new(0.0, 0.0))
        .await
        .unwrap_err();

    assert!(matches!(err, ForecastError::Network { .. }));
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn session_surfaces_errors_and_keeps_last_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("latitude", "35.6762"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("latitude", "-33.8688"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let repo = WeatherRepository::new(client_for(&server));
    let mut session = ForecastSession::with_city(repo, City::find("Tokyo").unwrap().clone());

    let state = session.refresh().await;
    assert!(state.error_message.is_none());
    assert_eq!(state.summary.as_ref().map(|s| s.daily.len()), Some(2));

    let state = session.select_location(City::find("Sydney").unwrap().clone()).await;
    assert!(!state.is_loading);
    assert_eq!(state.selected_city.name, "Sydney");
    assert!(state.error_message.as_deref().unwrap().contains("500"));
    assert!(state.summary.is_some());
}
