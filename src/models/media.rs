//! Property media model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An uploaded image associated with a property.
///
/// `property_id` is nullable: the media-upload endpoint can record an image
/// before it is linked to a property (see the handler for the path-binding
/// quirk that produces these rows). `file_path` points into the image store
/// and is only exposed through response DTOs that omit it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PropertyMedia {
    pub media_id: String,
    pub property_id: Option<String>,
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: i64,
    pub file_path: String,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}
