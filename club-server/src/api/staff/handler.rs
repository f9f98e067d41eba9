//! Staff API Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::Created;
use crate::core::ServerState;
use crate::db::repository::staff;
use crate::utils::{AppJson, AppResult};
use shared::models::{Staff, StaffCreate};

/// GET /api/staff - list all staff
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Staff>>> {
    let staff = staff::find_all(&state.pool).await?;
    Ok(Json(staff))
}

/// POST /api/staff - register a staff member
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<StaffCreate>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let id = staff::create(&state.pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::with_id("Staff member created successfully", id)),
    ))
}
