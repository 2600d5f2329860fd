//! Property model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Property database model
///
/// `attributes` holds the free-form fields accepted on creation that are not
/// part of the typed column set.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub property_id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub price: Option<i64>,
    pub attributes: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
