use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::{error::ApiError, main_lib::AppState};

/// Header carrying the shared system token.
pub const TOKEN_HEADER: &str = "X-TOKEN-SYSTEM";

/// Path prefix guarded by [`require_system_token`].
pub const PROTECTED_PREFIX: &str = "/api/nbp";

fn token_matches(expected: &str, provided: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Rejects requests under [`PROTECTED_PREFIX`] whose `X-TOKEN-SYSTEM` header
/// is missing or differs from the configured token. Other paths pass through.
pub async fn require_system_token(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path();
    if !path.starts_with(PROTECTED_PREFIX) {
        return Ok(next.run(request).await);
    }

    let Some(header) = request.headers().get(TOKEN_HEADER) else {
        tracing::warn!(path = %path, "Missing {} header", TOKEN_HEADER);
        return Err(ApiError::Unauthorized(format!(
            "Missing required header: {}",
            TOKEN_HEADER
        )));
    };

    let provided = header.to_str().unwrap_or_default();
    if !token_matches(&state.system_token, provided) {
        tracing::warn!(path = %path, "Invalid {} token", TOKEN_HEADER);
        return Err(ApiError::Unauthorized("Invalid system token".to_string()));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_matches() {
        assert!(token_matches("test-secret-token", "test-secret-token"));
        assert!(!token_matches("test-secret-token", "wrong-token"));
        assert!(!token_matches("test-secret-token", "test-secret-toke"));
        assert!(!token_matches("test-secret-token", ""));
    }
}
