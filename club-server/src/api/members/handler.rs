//! Member API Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::Created;
use crate::core::ServerState;
use crate::db::repository::member;
use crate::utils::{AppJson, AppResult};
use shared::models::{Member, MemberCreate};

/// GET /api/members - list all members
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Member>>> {
    let members = member::find_all(&state.pool).await?;
    Ok(Json(members))
}

/// POST /api/members - register a member
///
/// `payment_status` defaults to "Pending" when omitted; the tax id must
/// be unused.
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<MemberCreate>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let id = member::create(&state.pool, payload).await?;
    tracing::info!(member_id = id, "Member registered");
    Ok((
        StatusCode::CREATED,
        Json(Created::with_id("Member created successfully", id)),
    ))
}
