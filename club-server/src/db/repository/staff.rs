//! Staff Repository

use sqlx::SqlitePool;

use super::RepoResult;
use shared::models::{Staff, StaffCreate};

const STAFF_SELECT: &str = "SELECT id, name, tax_id, role, postal_code, street, number, city, state, created_at FROM staff";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Staff>> {
    let sql = format!("{STAFF_SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, Staff>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, data: StaffCreate) -> RepoResult<i64> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO staff (name, tax_id, role, postal_code, street, number, city, state, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.tax_id)
    .bind(&data.role)
    .bind(&data.postal_code)
    .bind(&data.street)
    .bind(&data.number)
    .bind(&data.city)
    .bind(&data.state)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
