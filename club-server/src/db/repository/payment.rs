//! Payment Repository
//!
//! Insert-only: the surface exposes no payment listing.

use sqlx::SqlitePool;

use super::RepoResult;
use shared::models::PaymentCreate;

/// Insert a payment and return the assigned id.
///
/// The member must exist; the FK constraint rejects everything else.
pub async fn create(pool: &SqlitePool, data: PaymentCreate) -> RepoResult<i64> {
    let now = shared::util::now_millis();
    let status = data.status.unwrap_or_else(|| "Pending".to_string());
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO payment (member_id, amount, payment_date, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
    )
    .bind(data.member_id)
    .bind(data.amount)
    .bind(data.payment_date)
    .bind(&status)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
