//! Payment Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment entity — one dues payment by a member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub member_id: i64,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub status: String,
    pub created_at: i64,
}

/// Create payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub member_id: i64,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub status: Option<String>,
}
