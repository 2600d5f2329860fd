//! In-memory property service
//!
//! Backs handler and service tests; keeps the full contract of
//! [`PropertyService`] without a database or a file store.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    handlers::properties::{
        request::{CreateFeatureRequest, CreatePropertyRequest, UpdateBasicDataRequest},
        response::{DeleteResult, FeatureResponse, MediaResponse, PropertyResponse, UpdateResult},
    },
    models::{PropertyFeature, PropertyMedia, PropertyRecord, UploadedImage},
    services::{checked_feature_name, NewPropertyData, PropertyService},
    storage::media_key,
};

#[derive(Default)]
struct MemoryState {
    properties: Vec<PropertyRecord>,
    features: Vec<PropertyFeature>,
    medias: Vec<PropertyMedia>,
}

/// Property service over process-local collections
#[derive(Default)]
pub struct InMemoryPropertyService {
    state: RwLock<MemoryState>,
}

impl InMemoryPropertyService {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_media(
        image: &UploadedImage,
        property_id: Option<String>,
        is_primary: bool,
    ) -> PropertyMedia {
        let media_id = Uuid::new_v4().to_string();
        let file_name = image
            .file_name
            .clone()
            .unwrap_or_else(|| "image".to_string());
        PropertyMedia {
            file_path: media_key(&media_id, &file_name),
            media_id,
            property_id,
            file_name,
            content_type: image.content_type.clone(),
            size_bytes: image.size_bytes() as i64,
            is_primary,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl PropertyService for InMemoryPropertyService {
    async fn create_new_property(&self, dto: CreatePropertyRequest) -> AppResult<PropertyResponse> {
        let data = NewPropertyData::from_request(&dto)?;
        let now = Utc::now();
        let record = PropertyRecord {
            property_id: Uuid::new_v4().to_string(),
            name: data.name,
            description: data.description,
            address: data.address,
            price: data.price,
            attributes: data.attributes,
            created_at: now,
            updated_at: now,
        };

        let medias: Vec<PropertyMedia> = dto
            .image
            .as_ref()
            .map(|image| Self::build_media(image, Some(record.property_id.clone()), true))
            .into_iter()
            .collect();

        let mut state = self.state.write().expect("state lock poisoned");
        state.properties.push(record.clone());
        state.medias.extend(medias.iter().cloned());

        Ok(PropertyResponse::from_parts(record, Vec::new(), medias))
    }

    async fn get_properties(&self) -> AppResult<Vec<PropertyResponse>> {
        let state = self.state.read().expect("state lock poisoned");
        Ok(state
            .properties
            .iter()
            .rev()
            .map(|record| {
                let features = state
                    .features
                    .iter()
                    .filter(|f| f.property_id == record.property_id)
                    .cloned()
                    .collect();
                let medias = state
                    .medias
                    .iter()
                    .filter(|m| m.property_id.as_deref() == Some(record.property_id.as_str()))
                    .cloned()
                    .collect();
                PropertyResponse::from_parts(record.clone(), features, medias)
            })
            .collect())
    }

    async fn get_property_by_id(&self, property_id: &str) -> AppResult<Option<PropertyResponse>> {
        let state = self.state.read().expect("state lock poisoned");
        let Some(record) = state
            .properties
            .iter()
            .find(|p| p.property_id == property_id)
        else {
            return Ok(None);
        };

        let features = state
            .features
            .iter()
            .filter(|f| f.property_id == property_id)
            .cloned()
            .collect();
        let medias = state
            .medias
            .iter()
            .filter(|m| m.property_id.as_deref() == Some(property_id))
            .cloned()
            .collect();

        Ok(Some(PropertyResponse::from_parts(
            record.clone(),
            features,
            medias,
        )))
    }

    async fn delete_property(&self, property_id: &str) -> AppResult<DeleteResult> {
        let mut state = self.state.write().expect("state lock poisoned");
        let before = state.properties.len();
        state.properties.retain(|p| p.property_id != property_id);
        let deleted = (before - state.properties.len()) as u64;

        if deleted > 0 {
            state.features.retain(|f| f.property_id != property_id);
            state
                .medias
                .retain(|m| m.property_id.as_deref() != Some(property_id));
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

        let mut state = self.state.write().expect("state lock poisoned");
        let Some(record) = state
            .properties
            .iter_mut()
            .find(|p| p.property_id == property_id)
        else {
            return Ok(UpdateResult {
                matched_count: 0,
                modified_count: 0,
            });
        };

        let modified = if dto.is_empty() { 0 } else { 1 };
        if let Some(name) = dto.name {
            record.name = name;
        }
        if let Some(description) = dto.description {
            record.description = Some(description);
        }
        if let Some(address) = dto.address {
            record.address = Some(address);
        }
        if let Some(price) = dto.price {
            record.price = Some(price);
        }
        record.updated_at = Utc::now();

        Ok(UpdateResult {
            matched_count: 1,
            modified_count: modified,
        })
    }

    async fn create_new_property_feature(
        &self,
        dto: CreateFeatureRequest,
    ) -> AppResult<FeatureResponse> {
        let name = checked_feature_name(&dto)?;

        let mut state = self.state.write().expect("state lock poisoned");
        if !state
            .properties
            .iter()
            .any(|p| p.property_id == dto.property_id)
        {
            return Err(AppError::NotFound(format!(
                "Property with ID {} not found",
                dto.property_id
            )));
        }

        let feature = PropertyFeature {
            feature_id: Uuid::new_v4().to_string(),
            property_id: dto.property_id,
            name,
            value: dto.value,
            created_at: Utc::now(),
        };
        state.features.push(feature.clone());

        Ok(FeatureResponse::from(feature))
    }

    async fn delete_property_feature(
        &self,
        feature_id: &str,
        property_id: &str,
    ) -> AppResult<DeleteResult> {
        let mut state = self.state.write().expect("state lock poisoned");
        let before = state.features.len();
        state
            .features
            .retain(|f| !(f.feature_id == feature_id && f.property_id == property_id));

        Ok(DeleteResult {
            deleted_count: (before - state.features.len()) as u64,
        })
    }

    async fn create_new_property_media(
        &self,
        image: Option<UploadedImage>,
        property_id: Option<String>,
    ) -> AppResult<MediaResponse> {
        let image =
            image.ok_or_else(|| AppError::InvalidInput("No image file uploaded".to_string()))?;

        let mut state = self.state.write().expect("state lock poisoned");
        if let Some(property_id) = &property_id {
            if !state
                .properties
                .iter()
                .any(|p| p.property_id == *property_id)
            {
                return Err(AppError::NotFound(format!(
                    "Property with ID {} not found",
                    property_id
                )));
            }
        }

        let media = Self::build_media(&image, property_id, false);
        state.medias.push(media.clone());

        Ok(MediaResponse::from(media))
    }

    async fn delete_property_media(
        &self,
        media_id: &str,
        property_id: &str,
    ) -> AppResult<DeleteResult> {
        let mut state = self.state.write().expect("state lock poisoned");
        let before = state.medias.len();
        state.medias.retain(|m| {
            !(m.media_id == media_id && m.property_id.as_deref() == Some(property_id))
        });

        Ok(DeleteResult {
            deleted_count: (before - state.medias.len()) as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value};

    use super::*;

    fn creation_payload(pairs: &[(&str, &str)]) -> CreatePropertyRequest {
        let mut fields = Map::new();
        for (key, value) in pairs {
            fields.insert(key.to_string(), Value::String(value.to_string()));
        }
        CreatePropertyRequest {
            fields,
            image: None,
        }
    }

    fn sample_image() -> UploadedImage {
        UploadedImage {
            file_name: Some("front.jpg".to_string()),
            content_type: Some("image/jpeg".to_string()),
            data: vec![0xFF, 0xD8, 0xFF, 0xE0],
        }
    }

    #[tokio::test]
    async fn create_parses_basic_columns_and_attributes() {
        let service = InMemoryPropertyService::new();
        let created = service
            .create_new_property(creation_payload(&[
                ("name", "Lakeside Villa"),
                ("description", "Quiet lake view"),
                ("price", "450000"),
                ("garden", "yes"),
            ]))
            .await
            .unwrap();

        assert_eq!(created.name, "Lakeside Villa");
        assert_eq!(created.description.as_deref(), Some("Quiet lake view"));
        assert_eq!(created.price, Some(450000));
        assert_eq!(created.attributes["garden"], "yes");
        assert!(created.features.is_empty());
        assert!(created.medias.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_missing_name() {
        let service = InMemoryPropertyService::new();
        let err = service
            .create_new_property(creation_payload(&[("price", "1000")]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_with_image_records_primary_media() {
        let service = InMemoryPropertyService::new();
        let mut dto = creation_payload(&[("name", "Villa")]);
        dto.image = Some(sample_image());

        let created = service.create_new_property(dto).await.unwrap();

        assert_eq!(created.medias.len(), 1);
        let media = &created.medias[0];
        assert!(media.is_primary);
        assert_eq!(media.property_id.as_deref(), Some(created.property_id.as_str()));
        assert_eq!(media.file_name, "front.jpg");
        assert_eq!(media.size_bytes, 4);
    }

    #[tokio::test]
    async fn get_by_id_roundtrip_and_absence() {
        let service = InMemoryPropertyService::new();
        let created = service
            .create_new_property(creation_payload(&[("name", "Villa")]))
            .await
            .unwrap();

        let found = service
            .get_property_by_id(&created.property_id)
            .await
            .unwrap();
        assert_eq!(found.unwrap().property_id, created.property_id);

        let missing = service.get_property_by_id("real-id-999").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn list_is_newest_first_with_children_stitched() {
        let service = InMemoryPropertyService::new();
        let first = service
            .create_new_property(creation_payload(&[("name", "First")]))
            .await
            .unwrap();
        let second = service
            .create_new_property(creation_payload(&[("name", "Second")]))
            .await
            .unwrap();

        service
            .create_new_property_feature(CreateFeatureRequest {
                property_id: first.property_id.clone(),
                name: "pool".to_string(),
                value: Some("heated".to_string()),
            })
            .await
            .unwrap();

        let all = service.get_properties().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].property_id, second.property_id);
        assert_eq!(all[1].features.len(), 1);
        assert_eq!(all[1].features[0].name, "pool");
    }

    #[tokio::test]
    async fn update_with_absent_id_matches_nothing() {
        let service = InMemoryPropertyService::new();
        service
            .create_new_property(creation_payload(&[("name", "Villa")]))
            .await
            .unwrap();

        let result = service
            .update_basic_data(
                None,
                UpdateBasicDataRequest {
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(result.matched_count, 0);
        assert_eq!(result.modified_count, 0);
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let service = InMemoryPropertyService::new();
        let created = service
            .create_new_property(creation_payload(&[
                ("name", "Villa"),
                ("address", "1 Lake Rd"),
            ]))
            .await
            .unwrap();

        let result = service
            .update_basic_data(
                Some(created.property_id.clone()),
                UpdateBasicDataRequest {
                    price: Some(500000),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.modified_count, 1);

        let updated = service
            .get_property_by_id(&created.property_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.price, Some(500000));
        assert_eq!(updated.name, "Villa");
        assert_eq!(updated.address.as_deref(), Some("1 Lake Rd"));
    }

    #[tokio::test]
    async fn delete_property_cascades_and_repeats_report_zero() {
        let service = InMemoryPropertyService::new();
        let mut dto = creation_payload(&[("name", "Villa")]);
        dto.image = Some(sample_image());
        let created = service.create_new_property(dto).await.unwrap();

        let feature = service
            .create_new_property_feature(CreateFeatureRequest {
                property_id: created.property_id.clone(),
                name: "pool".to_string(),
                value: None,
            })
            .await
            .unwrap();

        let result = service.delete_property(&created.property_id).await.unwrap();
        assert_eq!(result.deleted_count, 1);
        assert!(service
            .get_property_by_id(&created.property_id)
            .await
            .unwrap()
            .is_none());

        // Children went with the property.
        let orphan_delete = service
            .delete_property_feature(&feature.feature_id, &created.property_id)
            .await
            .unwrap();
        assert_eq!(orphan_delete.deleted_count, 0);

        let again = service.delete_property(&created.property_id).await.unwrap();
        assert_eq!(again.deleted_count, 0);
    }

    #[tokio::test]
    async fn feature_requires_existing_property() {
        let service = InMemoryPropertyService::new();
        let err = service
            .create_new_property_feature(CreateFeatureRequest {
                property_id: "real-id-999".to_string(),
                name: "pool".to_string(),
                value: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Property with ID real-id-999 not found");
    }

    #[tokio::test]
    async fn feature_delete_is_scoped_to_owner() {
        let service = InMemoryPropertyService::new();
        let owner = service
            .create_new_property(creation_payload(&[("name", "Owner")]))
            .await
            .unwrap();
        let other = service
            .create_new_property(creation_payload(&[("name", "Other")]))
            .await
            .unwrap();

        let feature = service
            .create_new_property_feature(CreateFeatureRequest {
                property_id: owner.property_id.clone(),
                name: "pool".to_string(),
                value: None,
            })
            .await
            .unwrap();

        let wrong_scope = service
            .delete_property_feature(&feature.feature_id, &other.property_id)
            .await
            .unwrap();
        assert_eq!(wrong_scope.deleted_count, 0);

        let right_scope = service
            .delete_property_feature(&feature.feature_id, &owner.property_id)
            .await
            .unwrap();
        assert_eq!(right_scope.deleted_count, 1);
    }

    #[tokio::test]
    async fn media_requires_an_image() {
        let service = InMemoryPropertyService::new();
        let err = service
            .create_new_property_media(None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn media_with_unknown_property_is_rejected() {
        let service = InMemoryPropertyService::new();
        let err = service
            .create_new_property_media(Some(sample_image()), Some("real-id-999".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn media_without_property_is_stored_unlinked() {
        let service = InMemoryPropertyService::new();
        let media = service
            .create_new_property_media(Some(sample_image()), None)
            .await
            .unwrap();

        assert!(media.property_id.is_none());
        assert!(!media.is_primary);

        // A scoped delete can never reach an unlinked row.
        let result = service
            .delete_property_media(&media.media_id, "real-id-999")
            .await
            .unwrap();
        assert_eq!(result.deleted_count, 0);
    }

    #[tokio::test]
    async fn media_delete_is_scoped_to_owner() {
        let service = InMemoryPropertyService::new();
        let owner = service
            .create_new_property(creation_payload(&[("name", "Owner")]))
            .await
            .unwrap();

        let media = service
            .create_new_property_media(Some(sample_image()), Some(owner.property_id.clone()))
            .await
            .unwrap();

        let wrong_scope = service
            .delete_property_media(&media.media_id, "real-id-999")
            .await
            .unwrap();
        assert_eq!(wrong_scope.deleted_count, 0);

        let right_scope = service
            .delete_property_media(&media.media_id, &owner.property_id)
            .await
            .unwrap();
        assert_eq!(right_scope.deleted_count, 1);
    }
}
