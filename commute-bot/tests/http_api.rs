//! HTTP clients and full invocations against a local fake of the
//! directions and Telegram APIs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use commute_bot::bot;
use commute_bot::config::{
    ENV_BOT_TOKEN, ENV_CHAT_ID, ENV_DIRECTIONS_API_URL, ENV_MAPS_API_KEY,
    ENV_METRO_STATIONS_PATH, ENV_TELEGRAM_API_URL, ENV_USER_MESSAGE,
};
use commute_bot::directions::{DirectionsClient, DirectionsConfig, DirectionsError};
use commute_bot::domain::LatLng;
use commute_bot::message;
use commute_bot::telegram::{Notifier, TelegramClient, TelegramConfig, TelegramError};

const TOKEN: &str = "TESTTOKEN";
const MAPS_KEY: &str = "maps-key";
const GARBLED_BODY: &str = "<html><body>Service temporarily unavailable</body></html>";
const STATIONS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/metro_stations.json");

/// Requests seen by the fake server.
#[derive(Clone, Default)]
struct Recorder {
    directions: Arc<Mutex<Vec<HashMap<String, String>>>>,
    messages: Arc<Mutex<Vec<Value>>>,
}

impl Recorder {
    fn directions_calls(&self) -> usize {
        self.directions.lock().unwrap().len()
    }

    fn texts(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|m| m["text"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

fn route_body() -> Value {
    json!({
        "status": "OK",
        "routes": [{
            "legs": [{
                "duration": {"text": "31 mins", "value": 1860},
                "distance": {"text": "9.8 km", "value": 9800},
                "start_location": {"lat": 12.9784, "lng": 77.6386},
                "end_location": {"lat": 12.9767, "lng": 77.5713},
                "start_address": "Indiranagar, Bengaluru, Karnataka, India",
                "end_address": "Majestic, Bengaluru, Karnataka 560009, India"
            }]
        }]
    })
}

async fn directions(
    State(rec): State<Recorder>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let origin = params.get("origin").cloned().unwrap_or_default();
    rec.directions.lock().unwrap().push(params);

    match origin.as_str() {
        "Nowhere" => (StatusCode::OK, Json(json!({"status": "ZERO_RESULTS", "routes": []})))
            .into_response(),
        "Denied" => (
            StatusCode::OK,
            Json(json!({"status": "REQUEST_DENIED", "error_message": "bad key", "routes": []})),
        )
            .into_response(),
        "Crash" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"})))
            .into_response(),
        "Revoked" => StatusCode::UNAUTHORIZED.into_response(),
        "Blocked" => StatusCode::FORBIDDEN.into_response(),
        "Busy" => StatusCode::TOO_MANY_REQUESTS.into_response(),
        "Garbled" => (StatusCode::OK, GARBLED_BODY).into_response(),
        _ => (StatusCode::OK, Json(route_body())).into_response(),
    }
}

async fn send_message(
    State(rec): State<Recorder>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let chat_id = body["chat_id"].as_str().unwrap_or_default().to_string();
    rec.messages.lock().unwrap().push(body);

    if chat_id == "unknown" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"ok": false, "error_code": 400, "description": "Bad Request: chat not found"})),
        );
    }
    if chat_id == "flooded" {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "ok": false,
                "error_code": 429,
                "description": "Too Many Requests: retry after 5",
                "parameters": {"retry_after": 5}
            })),
        );
    }
    (StatusCode::OK, Json(json!({"ok": true, "result": {"message_id": 1}})))
}

/// Start the fake API server; returns its base URL.
async fn spawn_fake() -> (String, Recorder) {
    let rec = Recorder::default();
    let app = Router::new()
        .route("/maps/api/directions/json", get(directions))
        .route(&format!("/bot{TOKEN}/sendMessage"), post(send_message))
        .with_state(rec.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), rec)
}

fn directions_client(base: &str) -> DirectionsClient {
    DirectionsClient::new(DirectionsConfig::new(MAPS_KEY).with_base_url(base)).unwrap()
}

fn telegram_client(base: &str, token: &str, chat: &str) -> TelegramClient {
    TelegramClient::new(TelegramConfig::new(token, chat).with_base_url(base)).unwrap()
}

fn env(pairs: Vec<(&'static str, String)>) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<&'static str, String> = pairs.into_iter().collect();
    move |key: &str| map.get(key).cloned()
}

fn full_env(base: &str, message: &str) -> Vec<(&'static str, String)> {
    vec![
        (ENV_BOT_TOKEN, TOKEN.to_string()),
        (ENV_MAPS_API_KEY, MAPS_KEY.to_string()),
        (ENV_CHAT_ID, "42".to_string()),
        (ENV_USER_MESSAGE, message.to_string()),
        (ENV_TELEGRAM_API_URL, base.to_string()),
        (ENV_DIRECTIONS_API_URL, base.to_string()),
        (ENV_METRO_STATIONS_PATH, STATIONS.to_string()),
    ]
}

#[tokio::test]
async fn directions_request_and_result() {
    let (base, rec) = spawn_fake().await;

    let result = directions_client(&base)
        .get_driving_directions("Indiranagar", "Majestic")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.duration, "31 mins");
    assert_eq!(result.distance, "9.8 km");
    assert_eq!(result.origin, LatLng::new(12.9784, 77.6386));
    assert_eq!(result.destination, LatLng::new(12.9767, 77.5713));

    let calls = rec.directions.lock().unwrap();
    let params = &calls[0];
    assert_eq!(params["origin"], "Indiranagar");
    assert_eq!(params["destination"], "Majestic");
    assert_eq!(params["mode"], "driving");
    assert_eq!(params["region"], "in");
    assert_eq!(params["departure_time"], "now");
    assert_eq!(params["key"], MAPS_KEY);
}

#[tokio::test]
async fn directions_zero_results() {
    let (base, _rec) = spawn_fake().await;
    let result = directions_client(&base)
        .get_driving_directions("Nowhere", "Majestic")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn directions_denied() {
    let (base, _rec) = spawn_fake().await;
    let result = directions_client(&base)
        .get_driving_directions("Denied", "Majestic")
        .await;
    assert!(matches!(result, Err(DirectionsError::Unauthorized)));
}

#[tokio::test]
async fn directions_server_error() {
    let (base, _rec) = spawn_fake().await;
    let result = directions_client(&base)
        .get_driving_directions("Crash", "Majestic")
        .await;
    assert!(matches!(
        result,
        Err(DirectionsError::HttpStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn directions_rejected_key_status() {
    let (base, _rec) = spawn_fake().await;
    let client = directions_client(&base);

    for origin in ["Revoked", "Blocked"] {
        let result = client.get_driving_directions(origin, "Majestic").await;
        assert!(
            matches!(result, Err(DirectionsError::Unauthorized)),
            "{origin}: {result:?}"
        );
    }
}

#[tokio::test]
async fn directions_too_many_requests() {
    let (base, _rec) = spawn_fake().await;
    let result = directions_client(&base)
        .get_driving_directions("Busy", "Majestic")
        .await;
    assert!(matches!(result, Err(DirectionsError::RateLimited)));
}

#[tokio::test]
async fn directions_non_json_body_is_kept() {
    let (base, _rec) = spawn_fake().await;
    let err = directions_client(&base)
        .get_driving_directions("Garbled", "Majestic")
        .await
        .unwrap_err();

    match err {
        DirectionsError::Json { body, .. } => assert_eq!(body.as_deref(), Some(GARBLED_BODY)),
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[tokio::test]
async fn directions_network_error_hides_key() {
    // Bind then drop to get a port with nothing listening
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = DirectionsClient::new(
        DirectionsConfig::new("SECRET-MAPS-KEY").with_base_url(format!("http://127.0.0.1:{port}")),
    )
    .unwrap();

    let err = client
        .get_driving_directions("Indiranagar", "Majestic")
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::Http(_)), "{err:?}");
    assert!(!err.to_string().contains("SECRET-MAPS-KEY"), "{err}");
    assert!(!format!("{err:?}").contains("SECRET-MAPS-KEY"), "{err:?}");
}

#[tokio::test]
async fn telegram_posts_markdown() {
    let (base, rec) = spawn_fake().await;

    telegram_client(&base, TOKEN, "42")
        .send_message("*hello*")
        .await
        .unwrap();

    let messages = rec.messages.lock().unwrap();
    assert_eq!(
        messages[0],
        json!({"chat_id": "42", "text": "*hello*", "parse_mode": "Markdown"})
    );
}

#[tokio::test]
async fn telegram_api_error_description() {
    let (base, _rec) = spawn_fake().await;

    let err = telegram_client(&base, TOKEN, "unknown")
        .send_message("hi")
        .await
        .unwrap_err();

    match err {
        TelegramError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Bad Request: chat not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn telegram_wrong_token() {
    let (base, _rec) = spawn_fake().await;

    let err = telegram_client(&base, "WRONG", "42")
        .send_message("hi")
        .await
        .unwrap_err();
    assert!(matches!(err, TelegramError::Unauthorized));
}

#[tokio::test]
async fn telegram_too_many_requests() {
    let (base, _rec) = spawn_fake().await;

    let err = telegram_client(&base, TOKEN, "flooded")
        .send_message("hi")
        .await
        .unwrap_err();
    assert!(matches!(err, TelegramError::RateLimited), "{err:?}");
}

#[tokio::test]
async fn notifier_swallows_failures() {
    let (base, rec) = spawn_fake().await;

    // Returns normally even though the API rejects the chat
    telegram_client(&base, TOKEN, "unknown").notify("hi").await;
    assert_eq!(rec.texts(), vec!["hi".to_string()]);
}

#[tokio::test]
async fn run_sends_search_notice_and_report() {
    let (base, rec) = spawn_fake().await;

    bot::run(env(full_env(&base, "indiranagar to majestic"))).await;

    assert_eq!(rec.directions_calls(), 1);

    let texts = rec.texts();
    assert_eq!(texts.len(), 2);
    assert_eq!(
        texts[0],
        "Searching for routes from *Indiranagar* to *Majestic*..."
    );

    let report = &texts[1];
    assert!(report.starts_with("📍 *Route: Indiranagar to Majestic*\n"));
    assert!(report.contains("   - *Travel Time:* 31 mins\n"));
    assert!(report.contains("   - *Distance:* 9.8 km\n"));
    assert!(report.contains("   - *Est. Auto Fare:* ₹177 - ₹207\n"));
    assert!(report.contains("   - *Est. Cab Fare:* ₹266 - ₹316\n"));
    assert!(report.contains("   - *Board at:* Indiranagar (Purple)\n"));
    assert!(report.contains("   - *Alight at:* Nadaprabhu Kempegowda Station, Majestic (Purple/Green)\n"));
    assert!(report.contains("   - *Stops:* 7\n"));
    assert!(report.contains("   - *Est. Travel Time:* ~36 mins\n"));
    assert!(report.contains("   - *Est. Metro Fare:* ₹40\n"));
    assert!(report.ends_with("_(Full Bus data coming soon!)_"));
}

#[tokio::test]
async fn run_without_dataset_omits_metro() {
    let (base, rec) = spawn_fake().await;
    let dir = tempfile::tempdir().unwrap();

    let mut pairs = full_env(&base, "Indiranagar to Majestic");
    pairs.retain(|(k, _)| *k != ENV_METRO_STATIONS_PATH);
    pairs.push((
        ENV_METRO_STATIONS_PATH,
        dir.path().join("absent.json").display().to_string(),
    ));

    bot::run(env(pairs)).await;

    let texts = rec.texts();
    assert_eq!(texts.len(), 2);
    assert!(texts[1].contains("Cab/Auto Estimate"));
    assert!(!texts[1].contains("Metro Estimate"));
}

#[tokio::test]
async fn run_with_bad_input_sends_usage_only() {
    let (base, rec) = spawn_fake().await;

    bot::run(env(full_env(&base, "Majestic"))).await;

    assert_eq!(rec.directions_calls(), 0);
    assert_eq!(rec.texts(), vec![message::USAGE.to_string()]);
}

#[tokio::test]
async fn run_reports_no_route() {
    let (base, rec) = spawn_fake().await;

    bot::run(env(full_env(&base, "Nowhere to Majestic"))).await;

    assert_eq!(rec.texts()[1], message::NO_ROUTE);
}

#[tokio::test]
async fn run_with_missing_config_makes_no_lookup() {
    for missing in [ENV_MAPS_API_KEY, ENV_USER_MESSAGE] {
        let (base, rec) = spawn_fake().await;

        let mut pairs = full_env(&base, "Indiranagar to Majestic");
        pairs.retain(|(k, _)| *k != missing);

        bot::run(env(pairs)).await;

        assert_eq!(rec.directions_calls(), 0, "{missing} unset");
        assert_eq!(rec.texts(), vec![message::CONFIG_ERROR.to_string()]);
    }
}

#[tokio::test]
async fn run_without_chat_settings_sends_nothing() {
    let (base, rec) = spawn_fake().await;

    let mut pairs = full_env(&base, "Indiranagar to Majestic");
    pairs.retain(|(k, _)| *k != ENV_CHAT_ID);

    bot::run(env(pairs)).await;

    assert_eq!(rec.directions_calls(), 0);
    assert!(rec.texts().is_empty());
}
