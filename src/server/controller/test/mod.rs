use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router, state::AppState};


fn app(test: &TestContext) -> Router {
    let db = test.db.as_ref().unwrap().clone();
    router::app(AppState::new(db))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 with every routed path documented
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new().build().await.unwrap();
    let app = app(&test);

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    for path in [
        "/api/tournaments",
        "/api/tournaments/{tournament_id}",
        "/api/tournaments/{tournament_id}/points",
        "/api/tournaments/{tournament_id}/teams",
        "/api/tournaments/{tournament_id}/teams/bulk-update",
        "/api/tournaments/{tournament_id}/teams/{team_id}",
        "/api/bill/billdata",
        "/api/bill/billdata/{bill_id}",
    ] {
        assert!(body["paths"].get(path).is_some(), "missing {}", path);
    }
    assert!(body["paths"]["/api/tournaments/{tournament_id}/teams/{team_id}"]
        .get("delete")
        .is_some());
}
