//! Dependent Repository

use sqlx::SqlitePool;

use super::RepoResult;
use shared::models::{Dependent, DependentCreate};

const DEPENDENT_SELECT: &str = "SELECT id, member_id, name, tax_id, birth_date, relationship, created_at FROM dependent";

/// Insert a dependent and return the assigned id.
///
/// tax_id is unique across all dependents; member_id must reference an
/// existing member.
pub async fn create(pool: &SqlitePool, data: DependentCreate) -> RepoResult<i64> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO dependent (member_id, name, tax_id, birth_date, relationship, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id",
    )
    .bind(data.member_id)
    .bind(&data.name)
    .bind(&data.tax_id)
    .bind(data.birth_date)
    .bind(&data.relationship)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Dependents of one member, creation order
pub async fn find_by_member(pool: &SqlitePool, member_id: i64) -> RepoResult<Vec<Dependent>> {
    let sql = format!("{DEPENDENT_SELECT} WHERE member_id = ? ORDER BY id");
    let rows = sqlx::query_as::<_, Dependent>(&sql)
        .bind(member_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
