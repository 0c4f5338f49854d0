//! HTTP adapter: the `POST /predict` endpoint.
//!
//! Request body is a JSON object with a `date` string. Success is `200` with
//! an item → quantity object. Every failure, whether caused by the caller or
//! by inference, is `400` with `{"error": <message>}`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::application::context::ServiceContext;
use crate::domain::error::DomainError;
use crate::domain::forecast::Forecast;
use crate::error::{Error, Result};

/// Error body returned with every `400`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Anything that turns a request into a `400`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error(transparent)]
    Service(#[from] Error),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Service(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        warn!(%error, "Prediction request failed");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
    }
}

/// Build the router with the shared service context.
pub fn create_router(context: Arc<ServiceContext>) -> Router {
    Router::new()
        .route("/predict", post(predict_handler))
        .with_state(context)
}

/// `POST /predict`
pub async fn predict_handler(
    State(context): State<Arc<ServiceContext>>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> std::result::Result<Json<Forecast>, ApiError> {
    let Json(body) = payload?;
    let date = extract_date(&body)?;
    debug!(date, "Prediction request");
    let forecast = context.predict_all(date)?;
    Ok(Json(forecast))
}

/// Pull the `date` string out of a request body.
fn extract_date(body: &Value) -> std::result::Result<&str, DomainError> {
    let value = body
        .as_object()
        .and_then(|object| object.get("date"))
        .ok_or(DomainError::MissingDate)?;
    value.as_str().ok_or(DomainError::DateNotString {
        found: json_type(value),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Bind `addr` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(context: Arc<ServiceContext>, addr: SocketAddr) -> Result<()> {
    let app = create_router(context);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Server(format!("failed to bind {addr}: {e}")))?;
    info!(%addr, "Listening for POST /predict");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .map_err(|e| Error::Server(e.to_string()))
}
