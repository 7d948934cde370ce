mod health;
mod rates;

use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    auth::{require_system_token, PROTECTED_PREFIX},
    config::Config,
    main_lib::AppState,
    models::RateResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(health::healthz, health::readyz, rates::get_rates),
    components(schemas(RateResponse)),
    tags((name = "NBP Rates"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    Router::new()
        .nest("/api/v1", health::router())
        .nest(PROTECTED_PREFIX, rates::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_system_token,
        ))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
