use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use engine::Engine;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::{ServerState, router};
use tower::ServiceExt;

fn app() -> Router {
    router(ServerState {
        engine: Arc::new(Engine::builder().build()),
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Creates a group with the given members and returns (group id, member ids).
async fn seed(app: &Router, names: &[&str]) -> (String, Vec<String>) {
    let members: Vec<Value> = names.iter().map(|n| json!({ "name": n })).collect();
    let (status, group) = send(
        app,
        "POST",
        "/api/groups",
        Some(json!({ "name": "Trip", "members": members })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let group_id = group["id"].as_str().unwrap().to_string();
    let member_ids = group["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap().to_string())
        .collect();
    (group_id, member_ids)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "HappyShare API is running");
}

#[tokio::test]
async fn created_group_is_listed_with_counts() {
    let app = app();
    let (group_id, members) = seed(&app, &["Alice", "Bob"]).await;
    assert_eq!(members.len(), 2);

    let (status, groups) = send(&app, "GET", "/api/groups", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(groups[0]["id"], group_id.as_str());
    assert_eq!(groups[0]["_count"]["expenses"], 0);
    assert_eq!(groups[0]["_count"]["settlements"], 0);
    assert!(groups[0].get("expenses").is_none());

    let (status, group) = send(&app, "GET", &format!("/api/groups/{group_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(group["name"], "Trip");
    assert_eq!(group["expenses"], json!([]));
}

#[tokio::test]
async fn blank_group_name_is_rejected() {
    let app = app();
    let (status, body) = send(&app, "POST", "/api/groups", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn expense_drives_balances_and_suggestions() {
    let app = app();
    let (group_id, members) = seed(&app, &["Alice", "Bob", "Carol"]).await;

    let (status, expense) = send(
        &app,
        "POST",
        &format!("/api/groups/{group_id}/expenses"),
        Some(json!({
            "description": "Dinner",
            "amount": 90,
            "paidById": members[0],
            "splitType": "equal",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(expense["paidBy"]["name"], "Alice");
    assert_eq!(expense["splitType"], "equal");
    assert_eq!(expense["shares"].as_array().unwrap().len(), 3);

    let (status, balances) =
        send(&app, "GET", &format!("/api/groups/{group_id}/balances"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(balances[0]["member"]["name"], "Alice");
    assert_eq!(balances[0]["balance"], 60.0);
    assert_eq!(balances[1]["balance"], -30.0);
    assert_eq!(balances[2]["balance"], -30.0);

    let (status, plan) = send(
        &app,
        "GET",
        &format!("/api/groups/{group_id}/settlements/suggested"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let plan = plan.as_array().unwrap();
    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0]["from"]["name"], "Bob");
    assert_eq!(plan[0]["to"]["name"], "Alice");
    assert_eq!(plan[0]["amount"], 30.0);
    assert_eq!(plan[1]["from"]["name"], "Carol");
}

#[tokio::test]
async fn recorded_settlement_clears_the_plan() {
    let app = app();
    let (group_id, members) = seed(&app, &["Alice", "Bob"]).await;

    send(
        &app,
        "POST",
        &format!("/api/groups/{group_id}/expenses"),
        Some(json!({
            "description": "Taxi",
            "amount": 20,
            "paidById": members[0],
        })),
    )
    .await;

    let (status, settlement) = send(
        &app,
        "POST",
        &format!("/api/groups/{group_id}/settlements"),
        Some(json!({ "fromId": members[1], "toId": members[0], "amount": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(settlement["from"]["name"], "Bob");

    let (_, plan) = send(
        &app,
        "GET",
        &format!("/api/groups/{group_id}/settlements/suggested"),
        None,
    )
    .await;
    assert_eq!(plan, json!([]));
}

#[tokio::test]
async fn self_settlement_is_rejected() {
    let app = app();
    let (group_id, members) = seed(&app, &["Alice"]).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/groups/{group_id}/settlements"),
        Some(json!({ "fromId": members[0], "toId": members[0], "amount": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "cannot settle with yourself");
}

#[tokio::test]
async fn member_in_use_cannot_be_deleted() {
    let app = app();
    let (group_id, members) = seed(&app, &["Alice", "Bob"]).await;

    send(
        &app,
        "POST",
        &format!("/api/groups/{group_id}/expenses"),
        Some(json!({
            "description": "Coffee",
            "amount": 8,
            "paidById": members[0],
            "participantIds": [members[0]],
        })),
    )
    .await;

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/groups/{group_id}/members/{}", members[0]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/groups/{group_id}/members/{}", members[1]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Member removed successfully");
}

#[tokio::test]
async fn unknown_payer_is_unprocessable() {
    let app = app();
    let (group_id, _) = seed(&app, &["Alice"]).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/groups/{group_id}/expenses"),
        Some(json!({
            "description": "Lunch",
            "amount": 12,
            "paidById": uuid::Uuid::new_v4(),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_group_is_not_found() {
    let app = app();
    let missing = uuid::Uuid::new_v4();

    let (status, body) = send(&app, "GET", &format!("/api/groups/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("group"));

    let (status, _) = send(&app, "DELETE", &format!("/api/groups/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_amount_is_rejected() {
    let app = app();
    let (group_id, members) = seed(&app, &["Alice", "Bob"]).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/groups/{group_id}/expenses"),
        Some(json!({
            "description": "Yacht",
            "amount": 1e300,
            "paidById": members[0],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, balances) =
        send(&app, "GET", &format!("/api/groups/{group_id}/balances"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(balances[0]["balance"], 0.0);
}

#[tokio::test]
async fn malformed_body_answers_with_error_json() {
    let app = app();
    let (group_id, members) = seed(&app, &["Alice"]).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/groups/{group_id}/expenses"),
        Some(json!({ "amount": 12, "paidById": members[0] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("description"));
}

#[tokio::test]
async fn malformed_group_id_answers_with_error_json() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/groups/not-a-uuid/balances", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
