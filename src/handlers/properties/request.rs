//! Property request DTOs

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::constants::MAX_PROPERTY_ID_LENGTH;
use crate::models::UploadedImage;
use crate::utils::validate_property_id;

/// Create property request, assembled from the multipart form
///
/// Every text field of the form lands in `fields` under its original name;
/// the uploaded `image` file, when one was sent, rides alongside. Nothing
/// from the raw body is dropped by the merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatePropertyRequest {
    pub fields: Map<String, Value>,
    pub image: Option<UploadedImage>,
}

impl CreatePropertyRequest {
    /// Look up a text field by name
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Path payload for get-property-by-id
///
/// The only endpoint that validates its input before the service is
/// consulted; a shape failure is reported as `Validation failed`.
#[derive(Debug, Validate)]
pub struct GetPropertyByIdRequest {
    #[validate(
        length(min = 1, max = MAX_PROPERTY_ID_LENGTH),
        custom(function = "property_id_shape")
    )]
    pub property_id: String,
}

fn property_id_shape(value: &str) -> Result<(), validator::ValidationError> {
    validate_property_id(value).map_err(|violation| {
        let mut err = validator::ValidationError::new("property_id_shape");
        err.message = Some(violation.to_string().into());
        err
    })
}

/// Partial update of a property's basic data
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateBasicDataRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub price: Option<i64>,
}

impl UpdateBasicDataRequest {
    /// True when no field was supplied at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.price.is_none()
    }
}

/// Create property feature request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateFeatureRequest {
    pub property_id: String,
    pub name: String,
    pub value: Option<String>,
}
