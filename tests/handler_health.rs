mod common;

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use election_registry::api::handlers::health_handler;
use serde_json::Value;

fn make_server() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let server = make_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body.get("version").is_some());
}
