//! Attendance Repository

use sqlx::SqlitePool;

use super::RepoResult;
use shared::models::{Attendance, AttendanceCreate};

/// Insert a check-in stamped with the current server time, returning the id
pub async fn create(pool: &SqlitePool, data: AttendanceCreate) -> RepoResult<i64> {
    let entry_at = chrono::Utc::now().naive_utc();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO attendance (member_id, entry_at) VALUES (?1, ?2) RETURNING id",
    )
    .bind(data.member_id)
    .bind(entry_at)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Check-ins for one member, creation order. Unknown members yield an
/// empty list, not an error.
pub async fn find_by_member(pool: &SqlitePool, member_id: i64) -> RepoResult<Vec<Attendance>> {
    let rows = sqlx::query_as::<_, Attendance>(
        "SELECT id, member_id, entry_at FROM attendance WHERE member_id = ? ORDER BY id",
    )
    .bind(member_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
