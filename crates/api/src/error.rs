use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use saleslens_core::domain::month::InvalidMonth;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    InvalidMonth(InvalidMonth),
    /// Upstream fetch or storage failure. `context` names the failed operation.
    Failure {
        context: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn failure(context: &'static str, source: anyhow::Error) -> Self {
        Self::Failure { context, source }
    }
}

impl From<InvalidMonth> for ApiError {
    fn from(err: InvalidMonth) -> Self {
        Self::InvalidMonth(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidMonth(err) => {
                tracing::debug!(error = %err, "rejected month parameter");
                let body = Message {
                    message: "Invalid month provided".to_string(),
                    error: Some(err.to_string()),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Failure { context, source } => {
                sentry_anyhow::capture_anyhow(&source);
                tracing::error!(error = %format!("{source:#}"), "{context}");
                let body = Message {
                    message: context.to_string(),
                    error: Some(format!("{source:#}")),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
