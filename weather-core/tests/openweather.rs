//! Integration tests for the OpenWeather provider against a mock HTTP server.

use weather_dash_core::provider::openweather::OpenWeatherProvider;
use weather_dash_core::{
    CachedClient, CityRequest, Filter, Page, Units, WeatherCategory, WeatherError, WeatherProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WEATHER_PATH: &str = "/data/2.5/weather";

fn payload(name: &str, country: &str, main: &str, description: &str) -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 2.35, "lat": 48.85},
        "weather": [{"id": 800, "main": main, "description": description, "icon": "01d"}],
        "main": {"temp": 18.3, "feels_like": 17.6, "temp_min": 16.0, "temp_max": 19.9, "pressure": 1018, "humidity": 55},
        "visibility": 10000,
        "wind": {"speed": 3.6, "deg": 250},
        "dt": 1760868000,
        "sys": {"country": country, "sunrise": 1760853600, "sunset": 1760892000},
        "name": name,
        "cod": 200
    })
}

fn provider(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new("TEST_KEY".to_string(), Units::Metric)
        .with_base_url(format!("{}{}", server.uri(), WEATHER_PATH))
}

#[tokio::test]
async fn test_current_weather_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", "Paris"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(payload("Paris", "FR", "Clear", "clear sky")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = provider(&server).current_weather("Paris").await.unwrap();

    assert_eq!(resp.city, "Paris");
    assert_eq!(resp.country, "FR");
    assert_eq!(resp.category, WeatherCategory::Clear);
    assert_eq!(resp.description, "clear sky");
    assert_eq!(resp.humidity_pct, 55);
    assert_eq!(resp.pressure_hpa, 1018);
    assert_eq!(resp.visibility_m, Some(10000));
    assert!((resp.temperature - 18.3).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_city_name_is_url_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", "São Paulo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(payload("São Paulo", "BR", "Clouds", "broken clouds")),
        )
        .mount(&server)
        .await;

    let resp = provider(&server).current_weather("São Paulo").await.unwrap();
    assert_eq!(resp.category, WeatherCategory::Clouds);
}

#[tokio::test]
async fn test_units_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("units", "imperial"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(payload("Seattle", "US", "Rain", "light rain")),
        )
        .mount(&server)
        .await;

    let provider = OpenWeatherProvider::new("TEST_KEY".to_string(), Units::Imperial)
        .with_base_url(format!("{}{}", server.uri(), WEATHER_PATH));
    let resp = provider.current_weather("Seattle").await.unwrap();

    assert_eq!(resp.units, Units::Imperial);
}

#[tokio::test]
async fn test_city_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;

    let err = provider(&server).current_weather("Atlantis").await.unwrap_err();

    assert!(matches!(err, WeatherError::CityNotFound { status: 404, .. }));
    assert_eq!(err.to_string(), "City \"Atlantis\" not found");
}

#[tokio::test]
async fn test_unauthorized_is_reported_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = provider(&server).current_weather("Paris").await.unwrap_err();
    assert!(matches!(err, WeatherError::CityNotFound { status: 401, .. }));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider(&server).current_weather("Paris").await.unwrap_err();
    assert!(matches!(err, WeatherError::Parse(_)));
}

#[tokio::test]
async fn test_cached_client_hits_network_once_per_city() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", "Tokyo"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(payload("Tokyo", "JP", "Rain", "moderate rain")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = CachedClient::new(provider(&server));
    client.fetch("Tokyo").await.unwrap();
    client.fetch("tokyo").await.unwrap();

    assert_eq!(client.cache().len(), 1);
}

#[tokio::test]
async fn test_page_filters_over_http() {
    let server = MockServer::start().await;

    for (name, main) in [("Oslo", "Snow"), ("Lima", "Drizzle"), ("Cairo", "Clear")] {
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .and(query_param("q", name))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(payload(name, "XX", main, "whatever")),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let cities = vec![
        CityRequest::new("Oslo", "NO"),
        CityRequest::new("Lima", "PE"),
        CityRequest::new("Cairo", "EG"),
        CityRequest::new("Atlantis", "XX"),
    ];
    let mut page = Page::new(CachedClient::new(provider(&server)), cities);

    page.select_filter(Filter::parse("Rain")).await;
    let shown: Vec<_> = page.dashboard().cards().iter().map(|c| c.city.as_str()).collect();
    assert_eq!(shown, ["Lima"]);

    page.select_filter(Filter::All).await;
    assert_eq!(page.dashboard().len(), 3);
}
