use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{RateResponse, RatesQuery},
};

/// Bid/ask rates from NBP table C for one currency and at most 7 days.
#[utoipa::path(
    get,
    path = "/api/nbp/rates",
    tag = "NBP Rates",
    params(
        ("currencyCode" = String, Query, description = "Currency code (EUR, USD, CHF)"),
        ("dateFrom" = String, Query, description = "Start date (YYYY-MM-DD)"),
        ("dateTo" = String, Query, description = "End date (YYYY-MM-DD)"),
        ("X-TOKEN-SYSTEM" = String, Header, description = "Shared system token"),
    ),
    responses(
        (status = 200, description = "Rates ordered by date", body = [RateResponse]),
        (status = 400, description = "Invalid query or date range"),
        (status = 401, description = "Missing or invalid system token"),
        (status = 500, description = "NBP API failure"),
    )
)]
pub async fn get_rates(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RatesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<RateResponse>>> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let rates = state
        .rate_service
        .get_rates(query.currency_code, query.date_from, query.date_to)
        .await?;
    Ok(Json(rates.into_iter().map(RateResponse::from).collect()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/rates", get(get_rates))
}
