//! Integration tests for `OpenWeatherProvider` and the panel driving it.
//!
//! Each test stands up a local `wiremock` server, so no real network
//! traffic is made.

use std::{sync::Arc, time::Duration};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use explorer_core::{
    Credential, LookupError, PanelFeatures, PanelView, RequestState, WeatherPanel, WeatherProvider,
    WeatherQuery, advice::WeatherIcon, provider::openweather::OpenWeatherProvider,
};

fn test_provider(base: &str) -> OpenWeatherProvider {
    test_provider_with_timeout(base, Duration::from_secs(5))
}

fn test_provider_with_timeout(base: &str, timeout: Duration) -> OpenWeatherProvider {
    let credential = Credential::new("TEST_KEY").expect("non-blank key");
    OpenWeatherProvider::new(base, credential, timeout).expect("failed to build test provider")
}

fn light_rain_body() -> serde_json::Value {
    json!({
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
        "main": { "temp": 12.4, "feels_like": 11.9, "humidity": 80 },
        "wind": { "speed": 3.5, "deg": 200 },
        "name": "Bergen"
    })
}

#[tokio::test]
async fn sends_city_credential_and_metric_units() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "São Paulo"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(light_rain_body()))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_provider(&server.uri()).current("São Paulo").await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn maps_successful_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(light_rain_body()))
        .mount(&server)
        .await;

    let result = test_provider(&server.uri()).current("Bergen").await.expect("lookup succeeds");

    assert_eq!(result.temperature_c, 12);
    assert_eq!(result.description, "light rain");
    assert_eq!(result.humidity_pct, 80);
    assert_eq!(result.wind_speed_mps, 3.5);
    assert_eq!(result.condition, "Rain");
    assert_eq!(WeatherIcon::from_condition(&result.condition), WeatherIcon::Rain);
}

#[tokio::test]
async fn rounds_temperature_half_up() {
    let server = MockServer::start().await;

    let mut body = light_rain_body();
    body["main"]["temp"] = json!(15.6);
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let result = test_provider(&server.uri()).current("Lyon").await.expect("lookup succeeds");

    assert_eq!(result.temperature_c, 16);
}

#[tokio::test]
async fn unauthorized_on_401() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"cod": 401})))
        .mount(&server)
        .await;

    let err = test_provider(&server.uri()).current("Paris").await.unwrap_err();

    assert_eq!(err, LookupError::Unauthorized);
}

#[tokio::test]
async fn not_found_names_the_city() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let err = test_provider(&server.uri()).current("Atlantis").await.unwrap_err();

    assert_eq!(err, LookupError::NotFound { city: "Atlantis".into() });
    assert!(err.to_string().contains("Atlantis"));
}

#[tokio::test]
async fn other_status_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_provider(&server.uri()).current("Paris").await.unwrap_err();

    assert_eq!(err, LookupError::Transport { status: 503, reason: "Service Unavailable".into() });
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn malformed_body_is_unknown_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = test_provider(&server.uri()).current("Paris").await.unwrap_err();

    match err {
        LookupError::Unknown(msg) => assert!(msg.contains("parse"), "message was: {msg}"),
        other => panic!("expected Unknown, got {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = test_provider(&format!("http://{addr}")).current("Paris").await.unwrap_err();

    assert_eq!(err, LookupError::Network);
}

#[tokio::test]
async fn timeout_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(light_rain_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let provider = test_provider_with_timeout(&server.uri(), Duration::from_millis(200));
    let err = provider.current("Paris").await.unwrap_err();

    assert_eq!(err, LookupError::Network);
}

#[tokio::test]
async fn panel_issues_one_request_per_search_even_for_same_city() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(light_rain_body()))
        .expect(2)
        .mount(&server)
        .await;

    let provider: Arc<dyn WeatherProvider> = Arc::new(test_provider(&server.uri()));
    let mut panel = WeatherPanel::new(Some(provider), PanelFeatures::full());

    panel.lookup(&WeatherQuery::new("Paris", 1)).await;
    panel.lookup(&WeatherQuery::new("Paris", 2)).await;

    assert!(matches!(panel.state(), RequestState::Success(_)));
    // `expect(2)` is verified when `server` drops.
}

#[tokio::test]
async fn panel_shows_full_success_view() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(light_rain_body()))
        .mount(&server)
        .await;

    let provider: Arc<dyn WeatherProvider> = Arc::new(test_provider(&server.uri()));
    let mut panel = WeatherPanel::new(Some(provider), PanelFeatures::full());
    panel.lookup(&WeatherQuery::new("Bergen", 1)).await;

    let PanelView::Weather(view) = panel.view() else {
        panic!("expected weather view, got {:?}", panel.view());
    };
    assert_eq!(view.result.temperature_c, 12);
    assert_eq!(view.result.description, "light rain");
    assert_eq!(view.result.humidity_pct, 80);
    assert_eq!(view.result.wind_speed_mps, 3.5);
    assert_eq!(view.icon, WeatherIcon::Rain);
}

#[tokio::test]
async fn panel_without_credential_never_calls_provider() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(light_rain_body()))
        .expect(0)
        .mount(&server)
        .await;

    let mut panel = WeatherPanel::new(None, PanelFeatures::full());
    let state = panel.lookup(&WeatherQuery::new("Paris", 1)).await;

    assert_eq!(state, &RequestState::Error(LookupError::CredentialMissing));
}
