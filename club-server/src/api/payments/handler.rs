//! Payment API Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::Created;
use crate::core::ServerState;
use crate::db::repository::payment;
use crate::utils::{AppJson, AppResult};
use shared::models::PaymentCreate;

/// POST /api/payments - register a payment for a member
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<PaymentCreate>,
) -> AppResult<(StatusCode, Json<Created>)> {
    payment::create(&state.pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new("Payment recorded successfully")),
    ))
}
