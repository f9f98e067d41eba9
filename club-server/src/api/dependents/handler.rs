//! Dependent API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::Created;
use crate::core::ServerState;
use crate::db::repository::dependent;
use crate::utils::{AppJson, AppResult};
use shared::models::{Dependent, DependentCreate};

/// POST /api/dependents - register a dependent of a member
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<DependentCreate>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let id = dependent::create(&state.pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::with_id("Dependent created successfully", id)),
    ))
}

/// GET /api/dependents/{member_id} - dependents of one member
pub async fn list_by_member(
    State(state): State<ServerState>,
    Path(member_id): Path<i64>,
) -> AppResult<Json<Vec<Dependent>>> {
    let dependents = dependent::find_by_member(&state.pool, member_id).await?;
    Ok(Json(dependents))
}
