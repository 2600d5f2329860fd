//! Property service contract

use async_trait::async_trait;

use crate::{
    error::AppResult,
    handlers::properties::{
        request::{CreateFeatureRequest, CreatePropertyRequest, UpdateBasicDataRequest},
        response::{DeleteResult, FeatureResponse, MediaResponse, PropertyResponse, UpdateResult},
    },
    models::UploadedImage,
};

/// Business operations over properties, their features and their media
///
/// Handlers receive an implementation through `AppState` and stay free of
/// persistence concerns; tests substitute a mock or the in-memory variant.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyService: Send + Sync {
    /// Create a property from the multipart payload; a bundled image is
    /// stored and recorded as the primary media.
    async fn create_new_property(&self, dto: CreatePropertyRequest) -> AppResult<PropertyResponse>;

    /// All properties with their features and medias
    async fn get_properties(&self) -> AppResult<Vec<PropertyResponse>>;

    /// `None` signals an absent property; the handler decides the status.
    async fn get_property_by_id(&self, property_id: &str) -> AppResult<Option<PropertyResponse>>;

    /// Delete a property together with its features and linked media
    async fn delete_property(&self, property_id: &str) -> AppResult<DeleteResult>;

    /// Partial update of name/description/address/price. An absent id
    /// matches nothing and reports `matched_count: 0`.
    async fn update_basic_data(
        &self,
        property_id: Option<String>,
        dto: UpdateBasicDataRequest,
    ) -> AppResult<UpdateResult>;

    /// Attach a feature to an existing property
    async fn create_new_property_feature(
        &self,
        dto: CreateFeatureRequest,
    ) -> AppResult<FeatureResponse>;

    /// Delete a feature, scoped to its owning property
    async fn delete_property_feature(
        &self,
        feature_id: &str,
        property_id: &str,
    ) -> AppResult<DeleteResult>;

    /// Record an uploaded image. A missing image is rejected; a missing
    /// property id stores the media unlinked.
    async fn create_new_property_media(
        &self,
        image: Option<UploadedImage>,
        property_id: Option<String>,
    ) -> AppResult<MediaResponse>;

    /// Delete a media row, scoped to its owning property
    async fn delete_property_media(
        &self,
        media_id: &str,
        property_id: &str,
    ) -> AppResult<DeleteResult>;
}
