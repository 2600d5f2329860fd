//! Property repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{PropertyFeature, PropertyMedia, PropertyRecord},
};

/// Repository for property database operations
pub struct PropertyRepository;

impl PropertyRepository {
    /// Create a new property
    pub async fn create(
        pool: &PgPool,
        property_id: &str,
        name: &str,
        description: Option<&str>,
        address: Option<&str>,
        price: Option<i64>,
        attributes: serde_json::Value,
    ) -> AppResult<PropertyRecord> {
        let property = sqlx::query_as::<_, PropertyRecord>(
            r#"
            INSERT INTO properties (property_id, name, description, address, price, attributes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(name)
        .bind(description)
        .bind(address)
        .bind(price)
        .bind(attributes)
        .fetch_one(pool)
        .await?;

        Ok(property)
    }

    /// Find property by ID
    pub async fn find_by_id(pool: &PgPool, property_id: &str) -> AppResult<Option<PropertyRecord>> {
        let property = sqlx::query_as::<_, PropertyRecord>(
            r#"SELECT * FROM properties WHERE property_id = $1"#,
        )
        .bind(property_id)
        .fetch_optional(pool)
        .await?;

        Ok(property)
    }

    /// List all properties, newest first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<PropertyRecord>> {
        let properties = sqlx::query_as::<_, PropertyRecord>(
            r#"SELECT * FROM properties ORDER BY created_at DESC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(properties)
    }

    /// Partial update of a property's basic data, returning the number of
    /// rows matched
    pub async fn update_basic(
        pool: &PgPool,
        property_id: &str,
        name: Option<&str>,
        description: Option<&str>,
        address: Option<&str>,
        price: Option<i64>,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE properties
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                address = COALESCE($4, address),
                price = COALESCE($5, price),
                updated_at = NOW()
            WHERE property_id = $1
            "#,
        )
        .bind(property_id)
        .bind(name)
        .bind(description)
        .bind(address)
        .bind(price)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete property (features and linked media cascade)
    pub async fn delete(pool: &PgPool, property_id: &str) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM properties WHERE property_id = $1"#)
            .bind(property_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Create a feature for a property
    pub async fn create_feature(
        pool: &PgPool,
        feature_id: &str,
        property_id: &str,
        name: &str,
        value: Option<&str>,
    ) -> AppResult<PropertyFeature> {
        let feature = sqlx::query_as::<_, PropertyFeature>(
            r#"
            INSERT INTO property_features (feature_id, property_id, name, value)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(feature_id)
        .bind(property_id)
        .bind(name)
        .bind(value)
        .fetch_one(pool)
        .await?;

        Ok(feature)
    }

    /// Features belonging to any of the given properties
    pub async fn features_for_properties(
        pool: &PgPool,
        property_ids: &[String],
    ) -> AppResult<Vec<PropertyFeature>> {
        let features = sqlx::query_as::<_, PropertyFeature>(
            r#"
            SELECT * FROM property_features
            WHERE property_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(property_ids)
        .fetch_all(pool)
        .await?;

        Ok(features)
    }

    /// Delete a feature scoped to its owning property, returning the number
    /// of rows deleted
    pub async fn delete_feature(
        pool: &PgPool,
        feature_id: &str,
        property_id: &str,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            r#"DELETE FROM property_features WHERE feature_id = $1 AND property_id = $2"#,
        )
        .bind(feature_id)
        .bind(property_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Record a media row, linked or unlinked
    #[allow(clippy::too_many_arguments)]
    pub async fn create_media(
        pool: &PgPool,
        media_id: &str,
        property_id: Option<&str>,
        file_name: &str,
        content_type: Option<&str>,
        size_bytes: i64,
        file_path: &str,
        is_primary: bool,
    ) -> AppResult<PropertyMedia> {
        let media = sqlx::query_as::<_, PropertyMedia>(
            r#"
            INSERT INTO property_medias (
                media_id, property_id, file_name, content_type,
                size_bytes, file_path, is_primary
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(media_id)
        .bind(property_id)
        .bind(file_name)
        .bind(content_type)
        .bind(size_bytes)
        .bind(file_path)
        .bind(is_primary)
        .fetch_one(pool)
        .await?;

        Ok(media)
    }

    /// Media belonging to any of the given properties
    pub async fn medias_for_properties(
        pool: &PgPool,
        property_ids: &[String],
    ) -> AppResult<Vec<PropertyMedia>> {
        let medias = sqlx::query_as::<_, PropertyMedia>(
            r#"
            SELECT * FROM property_medias
            WHERE property_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(property_ids)
        .fetch_all(pool)
        .await?;

        Ok(medias)
    }

    /// Media linked to a single property
    pub async fn medias_for_property(
        pool: &PgPool,
        property_id: &str,
    ) -> AppResult<Vec<PropertyMedia>> {
        let medias = sqlx::query_as::<_, PropertyMedia>(
            r#"SELECT * FROM property_medias WHERE property_id = $1 ORDER BY created_at"#,
        )
        .bind(property_id)
        .fetch_all(pool)
        .await?;

        Ok(medias)
    }

    /// Delete a media row scoped to its owning property, handing back the
    /// deleted row so the stored file can be removed
    pub async fn delete_media(
        pool: &PgPool,
        media_id: &str,
        property_id: &str,
    ) -> AppResult<Option<PropertyMedia>> {
        let media = sqlx::query_as::<_, PropertyMedia>(
            r#"
            DELETE FROM property_medias
            WHERE media_id = $1 AND property_id = $2
            RETURNING *
            "#,
        )
        .bind(media_id)
        .bind(property_id)
        .fetch_optional(pool)
        .await?;

        Ok(media)
    }
}
