//! Member Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Member entity (associado)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    pub name: String,
    /// CPF, globally unique
    pub tax_id: String,
    pub birth_date: NaiveDate,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// "Pending" until the club marks dues as paid
    pub payment_status: String,
    pub created_at: i64,
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    pub name: String,
    pub tax_id: String,
    pub birth_date: NaiveDate,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub payment_status: Option<String>,
}
