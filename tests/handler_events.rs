//! Integration tests for the click event listing endpoint.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::Value;

use common::{create_test_state, test_server};

#[tokio::test]
async fn test_events_unknown_code_is_404() {
    let ctx = create_test_state(None);
    let server = test_server(ctx.state);

    let response = server.get("/api/links/zzzzzzz/events").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_events_ordered_most_recent_first() {
    let ctx = create_test_state(None);
    let link = ctx.link_repo.insert("abc1234", "https://example.com", None);
    let now = Utc::now();
    ctx.analytics_repo
        .insert_click_at(link.id, now - Duration::hours(2), Some("old"));
    ctx.analytics_repo.insert_click_at(link.id, now, Some("new"));
    ctx.analytics_repo
        .insert_click_at(link.id, now - Duration::hours(1), Some("mid"));
    let server = test_server(ctx.state);

    let response = server.get("/api/links/abc1234/events").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["code"], "abc1234");

    let agents: Vec<&str> = body["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["userAgent"].as_str().unwrap())
        .collect();
    assert_eq!(agents, vec!["new", "mid", "old"]);
}

#[tokio::test]
async fn test_events_from_and_to_are_inclusive() {
    let ctx = create_test_state(None);
    let link = ctx.link_repo.insert("abc1234", "https://example.com", None);
    let now = Utc::now();
    let early = now - Duration::hours(3);
    let mid = now - Duration::hours(2);
    let late = now - Duration::hours(1);
    ctx.analytics_repo.insert_click_at(link.id, early, Some("early"));
    ctx.analytics_repo.insert_click_at(link.id, mid, Some("mid"));
    ctx.analytics_repo.insert_click_at(link.id, late, Some("late"));
    let server = test_server(ctx.state);

    let response = server
        .get("/api/links/abc1234/events")
        .add_query_param("from", mid.to_rfc3339())
        .add_query_param("to", late.to_rfc3339())
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let agents: Vec<&str> = body["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["userAgent"].as_str().unwrap())
        .collect();
    assert_eq!(agents, vec!["late", "mid"]);
}

#[tokio::test]
async fn test_events_from_alone_filters() {
    let ctx = create_test_state(None);
    let link = ctx.link_repo.insert("abc1234", "https://example.com", None);
    let now = Utc::now();
    ctx.analytics_repo
        .insert_click_at(link.id, now - Duration::days(2), Some("old"));
    ctx.analytics_repo.insert_click_at(link.id, now, Some("new"));
    let server = test_server(ctx.state);

    let response = server
        .get("/api/links/abc1234/events")
        .add_query_param("from", (now - Duration::days(1)).to_rfc3339())
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["events"].as_array().unwrap().len(), 1);
    assert_eq!(body["events"][0]["userAgent"], "new");
}

#[tokio::test]
async fn test_events_limit_caps_results() {
    let ctx = create_test_state(None);
    let link = ctx.link_repo.insert("abc1234", "https://example.com", None);
    let now = Utc::now();
    for i in 0..5 {
        ctx.analytics_repo
            .insert_click_at(link.id, now - Duration::minutes(i), None);
    }
    let server = test_server(ctx.state);

    let response = server
        .get("/api/links/abc1234/events")
        .add_query_param("limit", "2")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["events"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_events_limit_zero_clamps_to_one() {
    let ctx = create_test_state(None);
    let link = ctx.link_repo.insert("abc1234", "https://example.com", None);
    let now = Utc::now();
    ctx.analytics_repo.insert_click_at(link.id, now, None);
    ctx.analytics_repo
        .insert_click_at(link.id, now - Duration::minutes(1), None);
    let server = test_server(ctx.state);

    let response = server
        .get("/api/links/abc1234/events")
        .add_query_param("limit", "0")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["events"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_events_non_numeric_limit_uses_default() {
    let ctx = create_test_state(None);
    let link = ctx.link_repo.insert("abc1234", "https://example.com", None);
    let now = Utc::now();
    for i in 0..60 {
        ctx.analytics_repo
            .insert_click_at(link.id, now - Duration::seconds(i), None);
    }
    let server = test_server(ctx.state);

    let response = server
        .get("/api/links/abc1234/events")
        .add_query_param("limit", "abc")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["events"].as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn test_events_malformed_from_is_rejected() {
    let ctx = create_test_state(None);
    ctx.link_repo.insert("abc1234", "https://example.com", None);
    let server = test_server(ctx.state);

    let response = server
        .get("/api/links/abc1234/events")
        .add_query_param("from", "yesterday")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_events_carry_ids_and_explicit_nulls() {
    let ctx = create_test_state(None);
    let link = ctx.link_repo.insert("abc1234", "https://example.com", None);
    let click = ctx
        .analytics_repo
        .insert_click_at(link.id, Utc::now(), None);
    let server = test_server(ctx.state);

    let response = server.get("/api/links/abc1234/events").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let event = &body["events"][0];

    assert_eq!(event["id"], click.id);
    assert_eq!(event["linkId"], link.id);
    assert!(event["clickedAt"].is_string());
    // Absent metadata is explicit null, never an omitted key.
    assert!(event["userAgent"].is_null());
    assert!(event["referer"].is_null());
    assert!(event["ipHash"].is_null());
    assert!(event.as_object().unwrap().contains_key("userAgent"));
    assert!(event.as_object().unwrap().contains_key("referer"));
    assert!(event.as_object().unwrap().contains_key("ipHash"));
}

#[tokio::test]
async fn test_events_empty_for_link_without_clicks() {
    let ctx = create_test_state(None);
    ctx.link_repo.insert("abc1234", "https://example.com", None);
    let server = test_server(ctx.state);

    let response = server.get("/api/links/abc1234/events").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["events"].as_array().unwrap().len(), 0);
}
