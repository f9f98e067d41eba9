//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff entity (funcionário) — standalone, unrelated to members
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Staff {
    pub id: i64,
    pub name: String,
    /// CPF, globally unique
    pub tax_id: String,
    pub role: String,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub created_at: i64,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub name: String,
    pub tax_id: String,
    pub role: String,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}
