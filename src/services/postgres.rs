//! PostgreSQL-backed property service

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::PropertyRepository,
    error::{AppError, AppResult},
    handlers::properties::{
        request::{CreateFeatureRequest, CreatePropertyRequest, UpdateBasicDataRequest},
        response::{DeleteResult, FeatureResponse, MediaResponse, PropertyResponse, UpdateResult},
    },
    models::{PropertyFeature, PropertyMedia, UploadedImage},
    services::{checked_feature_name, NewPropertyData, PropertyService},
    storage::{media_key, ImageStore},
};

/// Production property service persisting to PostgreSQL
pub struct PgPropertyService {
    pool: PgPool,
    images: Arc<dyn ImageStore>,
}

impl PgPropertyService {
    pub fn new(pool: PgPool, images: Arc<dyn ImageStore>) -> Self {
        Self { pool, images }
    }

    /// Write the image bytes to the store, returning the recorded file name
    /// and the stored path
    async fn store_image(
        &self,
        image: &UploadedImage,
        media_id: &str,
    ) -> AppResult<(String, String)> {
        let file_name = image
            .file_name
            .clone()
            .unwrap_or_else(|| "image".to_string());
        let key = media_key(media_id, &file_name);
        let path = self.images.put(&key, &image.data).await?;
        Ok((file_name, path.to_string_lossy().into_owned()))
    }

    /// Best-effort removal of the stored file behind a media row
    async fn remove_stored_image(&self, media: &PropertyMedia) {
        let key = media_key(&media.media_id, &media.file_name);
        if let Err(e) = self.images.remove(&key).await {
            tracing::warn!("Failed to remove stored image {}: {}", key, e);
        }
    }
}

#[async_trait]
impl PropertyService for PgPropertyService {
    async fn create_new_property(&self, dto: CreatePropertyRequest) -> AppResult<PropertyResponse> {
        let data = NewPropertyData::from_request(&dto)?;
        let property_id = Uuid::new_v4().to_string();

        let record = PropertyRepository::create(
            &self.pool,
            &property_id,
            &data.name,
            data.description.as_deref(),
            data.address.as_deref(),
            data.price,
            data.attributes,
        )
        .await?;

        let mut medias = Vec::new();
        if let Some(image) = &dto.image {
            let media_id = Uuid::new_v4().to_string();
            let (file_name, file_path) = self.store_image(image, &media_id).await?;
            let media = PropertyRepository::create_media(
                &self.pool,
                &media_id,
                Some(&property_id),
                &file_name,
                image.content_type.as_deref(),
                image.size_bytes() as i64,
                &file_path,
                true,
            )
            .await?;
            medias.push(media);
        }

        Ok(PropertyResponse::from_parts(record, Vec::new(), medias))
    }

    async fn get_properties(&self) -> AppResult<Vec<PropertyResponse>> {
        let records = PropertyRepository::list(&self.pool).await?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = records.iter().map(|r| r.property_id.clone()).collect();
        let (features, medias) = futures::try_join!(
            PropertyRepository::features_for_properties(&self.pool, &ids),
            PropertyRepository::medias_for_properties(&self.pool, &ids),
        )?;

        let mut features_by_property: HashMap<String, Vec<PropertyFeature>> = HashMap::new();
        for feature in features {
            features_by_property
                .entry(feature.property_id.clone())
                .or_default()
                .push(feature);
        }

        let mut medias_by_property: HashMap<String, Vec<PropertyMedia>> = HashMap::new();
        for media in medias {
            if let Some(property_id) = &media.property_id {
                medias_by_property
                    .entry(property_id.clone())
                    .or_default()
                    .push(media);
            }
        }

        Ok(records
            .into_iter()
            .map(|record| {
                let features = features_by_property
                    .remove(&record.property_id)
                    .unwrap_or_default();
                let medias = medias_by_property
                    .remove(&record.property_id)
                    .unwrap_or_default();
                PropertyResponse::from_parts(record, features, medias)
            })
            .collect())
    }

    async fn get_property_by_id(&self, property_id: &str) -> AppResult<Option<PropertyResponse>> {
        let Some(record) = PropertyRepository::find_by_id(&self.pool, property_id).await? else {
            return Ok(None);
        };

        let ids = [property_id.to_string()];
        let (features, medias) = futures::try_join!(
            PropertyRepository::features_for_properties(&self.pool, &ids),
            PropertyRepository::medias_for_property(&self.pool, property_id),
        )?;

        Ok(Some(PropertyResponse::from_parts(record, features, medias)))
    }

    async fn delete_property(&self, property_id: &str) -> AppResult<DeleteResult> {
        // Snapshot linked media before the cascade wipes the rows.
        let medias = PropertyRepository::medias_for_property(&self.pool, property_id).await?;
        let deleted = PropertyRepository::delete(&self.pool, property_id).await?;

        if deleted > 0 {
            for media in &medias {
                self.remove_stored_image(media).await;
            }
        }

        Ok(DeleteResult {
            deleted_count: deleted,
        })
    }

    async fn update_basic_data(
        &self,
        property_id: Option<String>,
        dto: UpdateBasicDataRequest,
    ) -> AppResult<UpdateResult> {
        let Some(property_id) = property_id else {
            return Ok(UpdateResult {
                matched_count: 0,
                modified_count: 0,
            });
        };

        let matched = PropertyRepository::update_basic(
            &self.pool,
            &property_id,
            dto.name.as_deref(),
            dto.description.as_deref(),
            dto.address.as_deref(),
            dto.price,
        )
        .await?;

        Ok(UpdateResult {
            matched_count: matched,
            modified_count: matched,
        })
    }

    async fn create_new_property_feature(
        &self,
        dto: CreateFeatureRequest,
    ) -> AppResult<FeatureResponse> {
        let name = checked_feature_name(&dto)?;

        if PropertyRepository::find_by_id(&self.pool, &dto.property_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Property with ID {} not found",
                dto.property_id
            )));
        }

        let feature_id = Uuid::new_v4().to_string();
        let feature = PropertyRepository::create_feature(
            &self.pool,
            &feature_id,
            &dto.property_id,
            &name,
            dto.value.as_deref(),
        )
        .await?;

        Ok(FeatureResponse::from(feature))
    }

    async fn delete_property_feature(
        &self,
        feature_id: &str,
        property_id: &str,
    ) -> AppResult<DeleteResult> {
        let deleted =
            PropertyRepository::delete_feature(&self.pool, feature_id, property_id).await?;

        Ok(DeleteResult {
            deleted_count: deleted,
        })
    }

    async fn create_new_property_media(
        &self,
        image: Option<UploadedImage>,
        property_id: Option<String>,
    ) -> AppResult<MediaResponse> {
        let image =
            image.ok_or_else(|| AppError::InvalidInput("No image file uploaded".to_string()))?;

        if let Some(property_id) = &property_id {
            if PropertyRepository::find_by_id(&self.pool, property_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(format!(
                    "Property with ID {} not found",
                    property_id
                )));
            }
        }

        let media_id = Uuid::new_v4().to_string();
        let (file_name, file_path) = self.store_image(&image, &media_id).await?;
        let media = PropertyRepository::create_media(
            &self.pool,
            &media_id,
            property_id.as_deref(),
            &file_name,
            image.content_type.as_deref(),
            image.size_bytes() as i64,
            &file_path,
            false,
        )
        .await?;

        Ok(MediaResponse::from(media))
    }

    async fn delete_property_media(
        &self,
        media_id: &str,
        property_id: &str,
    ) -> AppResult<DeleteResult> {
        match PropertyRepository::delete_media(&self.pool, media_id, property_id).await? {
            Some(media) => {
                self.remove_stored_image(&media).await;
                Ok(DeleteResult { deleted_count: 1 })
            }
            None => Ok(DeleteResult { deleted_count: 0 }),
        }
    }
}
