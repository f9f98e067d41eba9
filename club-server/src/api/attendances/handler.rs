//! Attendance API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::Created;
use crate::core::ServerState;
use crate::db::repository::attendance;
use crate::utils::{AppJson, AppResult};
use shared::models::{Attendance, AttendanceCreate};

/// POST /api/attendances - register a check-in, stamped with server time
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<AttendanceCreate>,
) -> AppResult<(StatusCode, Json<Created>)> {
    attendance::create(&state.pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new("Attendance recorded successfully")),
    ))
}

/// GET /api/attendances/{member_id} - check-ins of one member
///
/// An unknown member yields an empty list, not an error.
pub async fn list_by_member(
    State(state): State<ServerState>,
    Path(member_id): Path<i64>,
) -> AppResult<Json<Vec<Attendance>>> {
    let attendances = attendance::find_by_member(&state.pool, member_id).await?;
    Ok(Json(attendances))
}
