//! Property feature model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single feature attached to a property ("3 bedrooms", "pool", ...)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PropertyFeature {
    pub feature_id: String,
    pub property_id: String,
    pub name: String,
    pub value: Option<String>,
    pub created_at: DateTime<Utc>,
}
