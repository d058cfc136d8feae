use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
    routing::get,
};
use chrono::Utc;
use chrono_tz::Tz;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    clients::chat::ChatClient, compose::MessageComposer, config::Config, error::RelayError,
    models::destination::Destination,
};

pub struct AppState {
    destinations: Vec<Destination>,
    chat_client: ChatClient,
}

impl AppState {
    pub fn new(destinations: Vec<Destination>, timezone: Tz) -> Result<Self, Error> {
        Ok(Self {
            destinations,
            chat_client: ChatClient::new(timezone)?,
        })
    }
}

pub async fn run_api_server(config: Config) -> Result<(), Error> {
    let destinations = config.load_destinations()?;
    let state = Arc::new(AppState::new(destinations, config.tz()?)?);

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Webhook relay server started");

    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .fallback(relay_webhook)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "destinations": state.destinations.len(),
        "timestamp": Utc::now(),
    }))
}

/// Relays one inbound notification: resolve the destination by request
/// path, parse, then deliver. Filtered and malformed payloads are client
/// errors; failing to reach the chat endpoint is a server error.
async fn relay_webhook(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    payload: Bytes,
) -> (StatusCode, String) {
    let Some(destination) = state
        .destinations
        .iter()
        .find(|destination| destination.path == uri.path())
    else {
        return (
            StatusCode::NOT_FOUND,
            "Webhook config not found.".to_string(),
        );
    };

    let composer = match MessageComposer::new(destination, &payload) {
        Ok(composer) => composer,
        Err(e) => {
            error!(path = %destination.path, error = %e, "Rejected notification payload");
            return (StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    match state.chat_client.deliver(&composer).await {
        Ok(()) => (StatusCode::OK, "OK".to_string()),
        Err(e @ RelayError::FilteredOut(_)) => {
            info!(path = %destination.path, "Notification suppressed by status filter");
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e @ RelayError::MalformedPayload(_)) => {
            error!(path = %destination.path, error = %e, "Rejected notification payload");
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            error!(path = %destination.path, error = %e, "Failed to deliver notification");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
