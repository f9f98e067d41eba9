//! Attendance Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::util::datetime_format;

/// Attendance entity — a timestamped check-in (frequência)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Attendance {
    pub id: i64,
    pub member_id: i64,
    /// Entry timestamp, server-assigned at creation
    #[serde(with = "datetime_format")]
    pub entry_at: NaiveDateTime,
}

/// Create attendance payload — the entry time is never client-supplied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub member_id: i64,
}
