//! End-to-end tests against mock upstreams.
//!
//! Each test stands up an httpmock server playing the three source sites,
//! points the config at it, and drives the feed either through the
//! aggregator or through the full axum router.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use httpmock::prelude::*;
use tower::ServiceExt;

use home_feed_api::aggregate::build_home_response;
use home_feed_api::fetch::{build_client, fetch_document};
use home_feed_api::models::TIME_UNAVAILABLE;
use home_feed_api::{AppState, SourcesConfig, create_router};

const PRAYERS_HTML: &str = r#"
    <html><body>
      <h3>Baitul Futuh</h3>
      <ul class="timing--shedule">
        <li>5 <span class="time--sep">:</span> 30 <span class="time--name">Fajr</span></li>
        <li>1 <span class="time--sep">:</span> 15 <span class="time--name">Zuhr</span></li>
        <li>6 <span class="time--sep">:</span> 45 <span class="time--name">Asr</span></li>
      </ul>
    </body></html>
"#;

const WEATHER_HTML: &str = r#"
    <html><body>
      <div class="wr-day__details__weather-type-description">Light rain</div>
      <div class="wr-day-temperature__low">
        <span class="wr-value--temperature--c">11</span>
      </div>
      <div class="wr-wind-speed">
        <span class="wr-value--windspeed--mph">19</span>
      </div>
      <div class="wr-time-slot-secondary-content__humidity">
        <span class="wr-value--humidity">82%</span>
      </div>
    </body></html>
"#;

const SCHEDULE_HTML: &str = r#"
    <html><body>
      <div class="qt-part-show-schedule-day-item">
        <span class="qt-day">Monday</span>
        <span class="qt-time">07:00 - 09:00</span>
        <h4><a class="qt-t" href="/shows/breakfast">Breakfast Show</a></h4>
      </div>
      <div class="qt-part-show-schedule-day-item">
        <span class="qt-day">Monday</span>
        <span class="qt-time">16:00 - 18:00</span>
        <h4><a class="qt-t" href="/shows/drive">Drive Time</a></h4>
      </div>
    </body></html>
"#;

/// Config with all three sources redirected to the mock server.
fn sources_for(server: &MockServer) -> SourcesConfig {
    let mut sources = SourcesConfig::default();
    sources.prayers.url = server.url("/salat");
    sources.weather.url = server.url("/weather");
    sources.weather.headers = vec![("User-Agent".to_string(), "integration-test".to_string())];
    sources.schedule.url = server.url("/schedule");
    sources
}

#[tokio::test]
async fn test_full_feed_from_healthy_upstreams() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/salat");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(PRAYERS_HTML);
    });
    let weather_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/weather")
            .header("User-Agent", "integration-test");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(WEATHER_HTML);
    });
    server.mock(|when, then| {
        when.method(GET).path("/schedule");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(SCHEDULE_HTML);
    });

    let client = build_client().unwrap();
    let response = build_home_response(&client, &sources_for(&server)).await;

    let keys: Vec<&String> = response.prayers.keys().collect();
    assert_eq!(keys, ["Fajr", "Zuhr", "Asr"]);
    assert_eq!(response.prayers["Fajr"], "5:30");

    assert_eq!(response.weather.description, "Light rain");
    assert_eq!(response.weather.temperature, "11°");
    assert_eq!(response.weather.wind_speed, "19");
    assert_eq!(response.weather.humidity, "82%");

    assert_eq!(response.schedule.len(), 2);
    assert_eq!(response.schedule[0].title, "Breakfast Show");
    assert_eq!(response.schedule[1].title, "Drive Time");

    assert_ne!(response.current_time, TIME_UNAVAILABLE);
    // configured User-Agent reached the upstream
    weather_mock.assert();
}

#[tokio::test]
async fn test_endpoint_answers_200_when_all_upstreams_fail() {
    let server = MockServer::start();
    for path in ["/salat", "/weather", "/schedule"] {
        server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(500);
        });
    }

    let state = AppState::new(build_client().unwrap(), sources_for(&server));
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/home")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    // fully shaped, every field at its empty value
    assert_eq!(json["prayers"], serde_json::json!({}));
    assert_eq!(json["schedule"], serde_json::json!([]));
    assert_eq!(json["weather"]["description"], "");
    assert!(json["current_time"].is_string());
}

#[tokio::test]
async fn test_cross_origin_requests_are_allowed() {
    let server = MockServer::start();
    for path in ["/salat", "/weather", "/schedule"] {
        server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(404);
        });
    }

    let state = AppState::new(build_client().unwrap(), sources_for(&server));
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/home")
                .header(header::ORIGIN, "https://app.example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_fetch_document_rejects_non_2xx() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gone");
        then.status(404);
    });

    let client = build_client().unwrap();
    let result = fetch_document(&client, &server.url("/gone"), &[]).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_fetch_document_returns_body_on_2xx() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/page");
        then.status(200).body("<html>ok</html>");
    });

    let client = build_client().unwrap();
    let body = fetch_document(&client, &server.url("/page"), &[])
        .await
        .unwrap();
    assert_eq!(body, "<html>ok</html>");
}
