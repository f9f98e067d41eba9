//! Member Repository

use sqlx::SqlitePool;

use super::RepoResult;
use shared::models::{Member, MemberCreate};

const MEMBER_SELECT: &str = "SELECT id, name, tax_id, birth_date, postal_code, street, number, city, state, payment_status, created_at FROM member";

/// All members, primary-key ascending
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Member>> {
    let sql = format!("{MEMBER_SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, Member>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Insert a member and return the assigned id
pub async fn create(pool: &SqlitePool, data: MemberCreate) -> RepoResult<i64> {
    let now = shared::util::now_millis();
    let payment_status = data.payment_status.unwrap_or_else(|| "Pending".to_string());
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO member (name, tax_id, birth_date, postal_code, street, number, city, state, payment_status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.tax_id)
    .bind(data.birth_date)
    .bind(&data.postal_code)
    .bind(&data.street)
    .bind(&data.number)
    .bind(&data.city)
    .bind(&data.state)
    .bind(&payment_status)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
