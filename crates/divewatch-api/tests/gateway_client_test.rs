// Integration tests for `GatewayClient` using wiremock.
#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use divewatch_api::{Error, GatewayClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, GatewayClient) {
    let server = MockServer::start().await;
    let client = GatewayClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, client)
}

fn reading_json(site_id: &str) -> serde_json::Value {
    json!({
        "timestamp": "2025-05-30T12:34:56Z",
        "site_id": site_id,
        "sensor_id": format!("{site_id}_sensor_01"),
        "depth": "deep",
        "temperature": 16.5,
        "current_speed": 1.2,
        "current_direction": 120,
        "visibility": 28.0,
        "luminosity": 65.0,
        "battery_level": 45.0
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_sites() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "site_id": "capo_vaticano",
            "name": "Capo Vaticano",
            "latitude": 38.6878,
            "longitude": 15.8742,
            "depth_category": "shallow",
            "status": "online",
            "last_update": "2025-05-30T12:34:56Z"
        },
        {
            "site_id": "tropea_reef",
            "name": "Tropea Reef",
            "latitude": 38.6767,
            "longitude": 15.8989,
            "depth_category": "deep",
            "status": "warning",
            "last_update": "2025-05-30T12:30:15Z"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/dive/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let sites = client.list_sites().await.unwrap();

    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].site_id, "capo_vaticano");
    assert_eq!(sites[0].depth_category, "shallow");
    assert_eq!(sites[1].name, "Tropea Reef");
    assert_eq!(sites[1].status, "warning");
}

#[tokio::test]
async fn test_current_reading() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dive/sites/tropea_reef/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reading_json("tropea_reef")))
        .mount(&server)
        .await;

    let reading = client.current_reading("tropea_reef").await.unwrap();

    assert_eq!(reading.sensor_id, "tropea_reef_sensor_01");
    assert_eq!(reading.current_direction, 120);
    assert!((reading.battery_level - 45.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_history_sends_hours_param() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dive/sites/capo_vaticano/history"))
        .and(query_param("hours", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            reading_json("capo_vaticano"),
            reading_json("capo_vaticano"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let history = client.history_readings("capo_vaticano", 6).await.unwrap();
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn test_active_alerts_maps_type_field() {
    let (server, client) = setup().await;

    let body = json!([{
        "type": "current",
        "level": "warning",
        "message": "Strong current detected",
        "value": 1.8,
        "threshold": 1.5,
        "site_id": "capo_vaticano",
        "timestamp": "2025-05-30T12:30:00Z"
    }]);

    Mock::given(method("GET"))
        .and(path("/api/dive/alerts/active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let alerts = client.active_alerts().await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, "current");
    assert_eq!(alerts[0].level, "warning");
}

#[tokio::test]
async fn test_site_alerts_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dive/sites/stromboli_east/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let alerts = client.site_alerts("stromboli_east").await.unwrap();
    assert!(alerts.is_empty());
}

// ── Error-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_error_status_carries_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dive/sites"))
        .respond_with(ResponseTemplate::new(503).set_body_string("broker offline"))
        .mount(&server)
        .await;

    let err = client.list_sites().await.unwrap_err();
    match &err {
        Error::Status { status, message } => {
            assert_eq!(*status, 503);
            assert_eq!(message, "broker offline");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert!(err.is_transient());
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_not_found_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dive/sites/atlantis/current"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.current_reading("atlantis").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_transient());
    match err {
        Error::Status { message, .. } => assert!(message.contains("404")),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_null_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dive/alerts/active"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let err = client.active_alerts().await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "null"),
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve an ephemeral port, then release it so nothing is listening.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let uri = format!("http://{addr}/");
    let client = GatewayClient::new(&uri, &TransportConfig::default()).unwrap();

    let err = client.list_sites().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
