use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    body::Bytes,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    clients::telegram::TelegramClient,
    config::Config,
    error::ApiError,
    models::{
        response::{TestResponse, WebhookRequest, WebhookResponse},
        status::ServiceStatus,
    },
    utils::{RelayOutcome, TEST_MESSAGE, process_notification},
};

pub const API_KEY_HEADER: &str = "X-API-Key";

pub struct AppState {
    pub config: Config,
    pub telegram: TelegramClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, Error> {
        let telegram = TelegramClient::new(&config)?;
        Ok(Self { config, telegram })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/webhook/yape", post(yape_webhook))
        .route("/test", post(send_test_message))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/", get(service_status))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_api_server(config: Config) -> Result<(), Error> {
    let addr = format!("0.0.0.0:{}", config.server_port);
    let state = Arc::new(AppState::new(config)?);

    let app = router(state);

    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Yape webhook server started");

    axum::serve(listener, app).await?;

    Ok(())
}

// Runs before any body extractor, so unauthenticated bodies are never read.
async fn require_api_key(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided != Some(state.config.webhook_api_key.as_str()) {
        warn!(path = %request.uri().path(), "Rejected request with invalid API key");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}

async fn service_status() -> impl IntoResponse {
    let timestamp = chrono::Local::now().to_rfc3339();
    Json(ServiceStatus::online(timestamp))
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn yape_webhook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = parse_webhook_request(&body)?;

    let response = match process_notification(&request.texto, &state.telegram).await {
        RelayOutcome::Ignored => (StatusCode::OK, Json(WebhookResponse::ignored())),
        RelayOutcome::Delivered { payment } => {
            (StatusCode::OK, Json(WebhookResponse::success(payment)))
        }
        RelayOutcome::DeliveryFailed { payment, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(WebhookResponse::partial_success(payment)),
        ),
    };

    Ok(response.into_response())
}

fn parse_webhook_request(body: &[u8]) -> Result<WebhookRequest, ApiError> {
    let value = serde_json::from_slice::<serde_json::Value>(body)
        .map_err(|e| ApiError::InvalidJson(e.to_string()))?;

    let has_text = value
        .get("texto")
        .is_some_and(|texto| texto.is_string());

    if !has_text {
        return Err(ApiError::MissingText);
    }

    serde_json::from_value(value).map_err(|e| ApiError::InvalidJson(e.to_string()))
}

async fn send_test_message(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let outcome = state.telegram.send_message(TEST_MESSAGE).await;

    if outcome.is_delivered() {
        info!("Test message delivered");
        (StatusCode::OK, Json(TestResponse::success()))
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(TestResponse::error()))
    }
}
