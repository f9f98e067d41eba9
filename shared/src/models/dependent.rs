//! Dependent Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dependent entity — a person linked to a member (child, spouse, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Dependent {
    pub id: i64,
    pub member_id: i64,
    pub name: String,
    /// CPF, globally unique
    pub tax_id: String,
    pub birth_date: NaiveDate,
    /// Free-text relationship to the member, e.g. "Filha", "Cônjuge"
    pub relationship: String,
    pub created_at: i64,
}

/// Create dependent payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependentCreate {
    pub member_id: i64,
    pub name: String,
    pub tax_id: String,
    pub birth_date: NaiveDate,
    pub relationship: String,
}
