use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nbp_market_data::RatesError;
use serde::Serialize;
use thiserror::Error;

/// Message returned for every upstream failure; the cause goes in `detail`.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch rates from NBP API";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Rates(#[from] RatesError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Rates(e) if e.is_client_error() => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: e.to_string(),
                    detail: None,
                },
            ),
            ApiError::Rates(e) => {
                tracing::error!("Rate retrieval failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: UPSTREAM_FAILURE_MESSAGE.to_string(),
                        detail: Some(e.to_string()),
                    },
                )
            }
            ApiError::BadRequest(reason) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: reason.clone(),
                    detail: None,
                },
            ),
            ApiError::Unauthorized(reason) => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    error: reason.clone(),
                    detail: None,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
