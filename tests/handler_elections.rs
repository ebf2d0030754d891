mod common;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use axum_test::TestServer;
use election_registry::api::handlers::{
    create_election_handler, delete_election_handler, election_list_handler, get_election_handler,
};
use serde_json::{Value, json};

fn make_server() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route(
            "/api/elections",
            get(election_list_handler).post(create_election_handler),
        )
        .route(
            "/api/elections/{id}",
            get(get_election_handler).delete(delete_election_handler),
        )
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_election_returns_created_dto() {
    let server = make_server();

    let response = server
        .post("/api/elections")
        .json(&json!({ "electionId": 1, "electionYear": 2024 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["electionId"], 1);
    assert_eq!(body["electionYear"], 2024);
}

#[tokio::test]
async fn test_create_then_get_returns_equal_dto() {
    let server = make_server();

    let dto = json!({ "electionId": 1, "electionYear": 2024 });
    server.post("/api/elections").json(&dto).await;

    let response = server.get("/api/elections/1").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), dto);
}

#[tokio::test]
async fn test_get_missing_election_returns_null() {
    let server = make_server();

    let response = server.get("/api/elections/99").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), Value::Null);
}

#[tokio::test]
async fn test_create_same_id_replaces_wholesale() {
    let server = make_server();

    server
        .post("/api/elections")
        .json(&json!({ "electionId": 1, "electionYear": 2020 }))
        .await;
    server
        .post("/api/elections")
        .json(&json!({ "electionId": 1, "electionYear": 2024 }))
        .await;

    let list = server.get("/api/elections").await.json::<Value>();
    let items = list.as_array().unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["electionYear"], 2024);
}

#[tokio::test]
async fn test_list_returns_each_created_exactly_once() {
    let server = make_server();

    for (id, year) in [(1, 2016), (2, 2020), (3, 2024)] {
        server
            .post("/api/elections")
            .json(&json!({ "electionId": id, "electionYear": year }))
            .await;
    }

    let list = server.get("/api/elections").await.json::<Value>();
    let items = list.as_array().unwrap();

    assert_eq!(items.len(), 3);
    for id in [1, 2, 3] {
        assert_eq!(
            items.iter().filter(|item| item["electionId"] == id).count(),
            1
        );
    }
}

#[tokio::test]
async fn test_delete_then_get_returns_null() {
    let server = make_server();

    server
        .post("/api/elections")
        .json(&json!({ "electionId": 1, "electionYear": 2024 }))
        .await;

    server
        .delete("/api/elections/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server.get("/api/elections/1").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), Value::Null);
}

#[tokio::test]
async fn test_delete_missing_election_is_noop() {
    let server = make_server();

    let response = server.delete("/api/elections/99").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

/// Elections carry no update endpoint; the asymmetry with provinces is
/// intentional.
#[tokio::test]
async fn test_put_election_is_method_not_allowed() {
    let server = make_server();

    server
        .post("/api/elections")
        .json(&json!({ "electionId": 1, "electionYear": 2024 }))
        .await;

    let response = server
        .put("/api/elections/1")
        .json(&json!({ "electionYear": 2025 }))
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
