use crate::types::{ChatRequest, ChatResponse, HealthResponse};
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use solace_core::config::{ServerConfig, SessionConfig};
use solace_core::Clock;
use solace_memory::SessionStore;
use solace_reasoning::prompts::EMPTY_INPUT_REPLY;
use solace_reasoning::ArbitrationEngine;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "session_id";
const COOKIE_MAX_AGE_SECS: i64 = 86_400;

#[derive(Clone)]
struct AppState {
    engine: Arc<ArbitrationEngine>,
}

/// HTTP transport in front of the arbitration engine.
///
/// - `POST /chat` — one turn; the session rides in a `session_id` cookie
/// - `GET /health` — liveness plus the live session count
pub struct GatewayServer {
    engine: Arc<ArbitrationEngine>,
    host: String,
    port: u16,
}

impl GatewayServer {
    pub fn new(engine: Arc<ArbitrationEngine>, cfg: &ServerConfig) -> Self {
        Self {
            engine,
            host: cfg.host.clone(),
            port: cfg.port,
        }
    }

    pub fn router(&self) -> Router {
        router(self.engine.clone())
    }

    /// Bind and serve until the process exits.
    pub async fn serve(self) -> Result<()> {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Gateway failed to bind {addr}"))?;
        tracing::info!("Gateway listening on {}", addr);
        axum::serve(listener, self.router())
            .await
            .context("Gateway server error")
    }
}

pub fn router(engine: Arc<ArbitrationEngine>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
        .layer(CorsLayer::permissive())
        .with_state(AppState { engine })
}

/// Periodically evict sessions idle longer than `idle_ttl_secs`.
pub fn spawn_cleanup(
    store: Arc<SessionStore>,
    clock: Arc<dyn Clock>,
    cfg: &SessionConfig,
) -> tokio::task::JoinHandle<()> {
    let ttl = cfg.idle_ttl();
    let every = Duration::from_secs(cfg.cleanup_interval_secs.max(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let evicted = store.evict_idle(ttl, clock.now()).await;
            tracing::debug!(evicted, "Session cleanup pass");
        }
    })
}

// ============================================================================
// Cookies
// ============================================================================

fn session_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

fn session_cookie(id: &str) -> Option<HeaderValue> {
    let cookie = format!(
        "{SESSION_COOKIE}={id}; Max-Age={COOKIE_MAX_AGE_SECS}; Path=/; HttpOnly; SameSite=Lax"
    );
    HeaderValue::from_str(&cookie).ok()
}

// ============================================================================
// Route handlers
// ============================================================================

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        sessions: state.engine.store().len().await,
    })
}

/// POST /chat — one classification turn.
///
/// A missing cookie gets a fresh UUID. The cookie is re-issued on every
/// reply so its 24h expiry slides with activity.
async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ChatRequest>,
) -> Response {
    let Some(message) = req.text() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatResponse::message(EMPTY_INPUT_REPLY)),
        )
            .into_response();
    };

    let session_id =
        session_from_cookies(&headers).unwrap_or_else(|| Uuid::new_v4().to_string());

    let outcome = state.engine.classify(Some(&session_id), message).await;

    let mut response = Json(ChatResponse::from(outcome)).into_response();
    if let Some(cookie) = session_cookie(&session_id) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}
