//! Property response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{PropertyFeature, PropertyMedia, PropertyRecord};

/// Full property representation with its features and medias stitched in
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub property_id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub price: Option<i64>,
    pub attributes: serde_json::Value,
    pub features: Vec<FeatureResponse>,
    pub medias: Vec<MediaResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PropertyResponse {
    /// Assemble the aggregate view from its stored parts
    pub fn from_parts(
        record: PropertyRecord,
        features: Vec<PropertyFeature>,
        medias: Vec<PropertyMedia>,
    ) -> Self {
        Self {
            property_id: record.property_id,
            name: record.name,
            description: record.description,
            address: record.address,
            price: record.price,
            attributes: record.attributes,
            features: features.into_iter().map(FeatureResponse::from).collect(),
            medias: medias.into_iter().map(MediaResponse::from).collect(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Envelope for get-property-by-id
#[derive(Debug, Clone, Serialize)]
pub struct GetPropertyResponse {
    pub property: PropertyResponse,
}

/// Property feature response
#[derive(Debug, Clone, Serialize)]
pub struct FeatureResponse {
    pub feature_id: String,
    pub property_id: String,
    pub name: String,
    pub value: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PropertyFeature> for FeatureResponse {
    fn from(feature: PropertyFeature) -> Self {
        Self {
            feature_id: feature.feature_id,
            property_id: feature.property_id,
            name: feature.name,
            value: feature.value,
            created_at: feature.created_at,
        }
    }
}

/// Property media response
///
/// `property_id` stays optional on the wire: media uploaded through the
/// media endpoint is stored unlinked (see the handler) and serializes as
/// `"property_id": null`. The internal storage path is never exposed.
#[derive(Debug, Clone, Serialize)]
pub struct MediaResponse {
    pub media_id: String,
    pub property_id: Option<String>,
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: i64,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PropertyMedia> for MediaResponse {
    fn from(media: PropertyMedia) -> Self {
        Self {
            media_id: media.media_id,
            property_id: media.property_id,
            file_name: media.file_name,
            content_type: media.content_type,
            size_bytes: media.size_bytes,
            is_primary: media.is_primary,
            created_at: media.created_at,
        }
    }
}

/// Outcome of a delete operation
///
/// Delete endpoints answer 200 regardless of how many rows went away; the
/// body carries the count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteResult {
    pub deleted_count: u64,
}

/// Outcome of a basic-data update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
}
