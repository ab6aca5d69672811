//! Integration tests for `DashboardClient` using wiremock HTTP mocks.

use brandpulse_client::{ClientError, DashboardClient};
use brandpulse_core::SentimentTrend;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> DashboardClient {
    DashboardClient::new(base_url, 5, "brandpulse-test/0.1")
        .expect("client construction should not fail")
}

fn dashboard_body() -> serde_json::Value {
    serde_json::json!({
        "brands_overview": [
            {
                "brand": "Nike",
                "sentiment_avg": 0.31,
                "sentiment_trend": "rising",
                "total_mentions": 18,
                "engagement_score": 2400,
                "market_share": 21.4
            }
        ],
        "sentiment_trends": { "Nike": [0.2, 0.31] },
        "market_predictions": { "Nike": 21.4 },
        "recent_mentions": [
            {
                "id": "a1",
                "brand": "Nike",
                "source": "news",
                "content": "Nike launches new sustainable fashion line",
                "sentiment_score": 0.5,
                "sentiment_label": "positive",
                "engagement": 640,
                "timestamp": "2025-03-14T09:26:53.589793+00:00"
            }
        ],
        "last_updated": "2025-03-14T09:30:00+00:00"
    })
}

#[tokio::test]
async fn fetch_dashboard_returns_parsed_snapshot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let snapshot = client
        .fetch_dashboard()
        .await
        .expect("should parse dashboard");

    assert_eq!(snapshot.brands_overview.len(), 1);
    assert_eq!(snapshot.brands_overview[0].brand, "Nike");
    assert_eq!(snapshot.brands_overview[0].sentiment_trend, SentimentTrend::Rising);
    assert_eq!(snapshot.recent_mentions.len(), 1);
    assert_eq!(snapshot.recent_mentions[0].id.as_deref(), Some("a1"));
}

#[tokio::test]
async fn fetch_dashboard_surfaces_server_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": "database unavailable"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_dashboard().await;

    assert!(
        matches!(result, Err(ClientError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_dashboard_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "brands_overview": "not-a-list"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_dashboard().await;

    assert!(
        matches!(result, Err(ClientError::Deserialize { ref context, .. }) if context == "dashboard"),
        "expected Deserialize error, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_brands_unwraps_catalog_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "brands": {
                "indian": ["Myntra", "Fabindia", "Nykaa Fashion"],
                "global": ["Zara", "H&M"]
            },
            "total_brands": 5
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let catalog = client.fetch_brands().await.expect("should parse brands");

    assert_eq!(catalog.indian.len(), 3);
    assert!(catalog.is_indian("Nykaa Fashion"));
    assert!(catalog.is_global("H&M"));
}

#[tokio::test]
async fn trigger_collection_posts_and_ignores_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/collect-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Data collected for 14 brands",
            "total_mentions": 230
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .trigger_collection()
        .await
        .expect("collection trigger should succeed");
}

#[tokio::test]
async fn trigger_collection_fails_on_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/collect-data"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.trigger_collection().await;

    assert!(
        matches!(result, Err(ClientError::UnexpectedStatus { status: 503, .. })),
        "expected UnexpectedStatus(503), got: {result:?}"
    );
}
