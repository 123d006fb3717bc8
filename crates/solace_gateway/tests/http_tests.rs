//! Gateway routes driven through `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{Duration, TimeZone, Utc};
use solace_core::config::SessionConfig;
use solace_core::{ManualClock, RngSampler, SolaceConfig};
use solace_gateway::server::router;
use solace_gateway::spawn_cleanup;
use solace_reasoning::ArbitrationEngine;
use std::sync::Arc;
use tower::ServiceExt;

fn engine(clock: &ManualClock) -> Arc<ArbitrationEngine> {
    Arc::new(
        ArbitrationEngine::from_config(&SolaceConfig::default())
            .with_sampler(Arc::new(RngSampler::seeded(4)))
            .with_clock(Arc::new(clock.clone())),
    )
}

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap())
}

fn chat_request(body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn json_body(res: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = router(engine(&clock()));
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = json_body(res).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["sessions"], 0);
}

#[tokio::test]
async fn test_empty_message_is_bad_request() {
    let app = router(engine(&clock()));
    let res = app
        .oneshot(chat_request(r#"{"message":"  "}"#, None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.headers().get(header::SET_COOKIE).is_none());
    let json = json_body(res).await;
    assert_eq!(json, serde_json::json!({ "reply": "Please provide a message." }));
}

#[tokio::test]
async fn test_new_visitor_gets_cookie() {
    let engine = engine(&clock());
    let app = router(engine.clone());
    let res = app
        .oneshot(chat_request(r#"{"message":"I feel amazing today"}"#, None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.contains("Max-Age=86400"));
    let id = cookie
        .trim_start_matches("session_id=")
        .split(';')
        .next()
        .unwrap()
        .to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok());
    assert!(engine.store().get(&id).await.is_some());

    let json = json_body(res).await;
    assert_eq!(json["branch"], "positive_mood");
}

#[tokio::test]
async fn test_returning_visitor_keeps_session() {
    let engine = engine(&clock());
    let cookie = "session_id=returning-1";
    for _ in 0..2 {
        let res = router(engine.clone())
            .oneshot(chat_request(r#"{"message":"hello"}"#, Some(cookie)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let renewed = res.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(renewed.starts_with("session_id=returning-1;"));
        assert!(renewed.contains("Max-Age=86400"));
    }
    let session = engine.store().snapshot("returning-1").await.unwrap();
    assert_eq!(session.messages.len(), 2);
    assert_eq!(engine.store().len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_cleanup_evicts_idle_sessions() {
    let clock = clock();
    let engine = engine(&clock);
    engine.classify(Some("idle"), "hello").await;

    let cfg = SessionConfig {
        idle_ttl_secs: 3600,
        cleanup_interval_secs: 60,
        ..SessionConfig::default()
    };
    let task = spawn_cleanup(engine.store(), engine.clock(), &cfg);

    clock.advance(Duration::hours(2));
    tokio::time::sleep(std::time::Duration::from_secs(61)).await;
    tokio::task::yield_now().await;

    assert!(engine.store().get("idle").await.is_none());
    task.abort();
}
