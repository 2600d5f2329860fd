//! Business logic services

pub mod memory;
pub mod postgres;
pub mod property_service;

pub use memory::InMemoryPropertyService;
pub use postgres::PgPropertyService;
pub use property_service::PropertyService;

#[cfg(test)]
pub use property_service::MockPropertyService;

use crate::constants::{MAX_FEATURE_NAME_LENGTH, MAX_FEATURE_VALUE_LENGTH};
use crate::error::{AppError, AppResult};
use crate::handlers::properties::request::{CreateFeatureRequest, CreatePropertyRequest};
use crate::utils::{parse_price, sanitize_string, validate_property_name};

/// Basic-data fields recognized on creation. Everything else in the
/// multipart payload lands in `attributes`.
const BASIC_FIELDS: [&str; 4] = ["name", "description", "address", "price"];

/// Property columns extracted from a creation payload
pub(crate) struct NewPropertyData {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub price: Option<i64>,
    pub attributes: serde_json::Value,
}

impl NewPropertyData {
    /// Split a creation payload into known columns and leftover attributes
    pub fn from_request(dto: &CreatePropertyRequest) -> AppResult<Self> {
        let name = validate_property_name(dto.text_field("name").unwrap_or_default())
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        let price = match dto.text_field("price") {
            Some(raw) => {
                Some(parse_price(raw).map_err(|msg| AppError::Validation(msg.to_string()))?)
            }
            None => None,
        };

        let attributes: serde_json::Map<String, serde_json::Value> = dto
            .fields
            .iter()
            .filter(|(key, _)| !BASIC_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            name,
            description: dto.text_field("description").map(str::to_string),
            address: dto.text_field("address").map(str::to_string),
            price,
            attributes: serde_json::Value::Object(attributes),
        })
    }
}

/// Structural checks shared by the feature-creating implementations
pub(crate) fn checked_feature_name(dto: &CreateFeatureRequest) -> AppResult<String> {
    let name = sanitize_string(&dto.name);
    if name.is_empty() {
        return Err(AppError::Validation(
            "Feature name cannot be empty".to_string(),
        ));
    }
    if name.len() as u64 > MAX_FEATURE_NAME_LENGTH {
        return Err(AppError::Validation(
            "Feature name must be at most 128 characters".to_string(),
        ));
    }
    if let Some(value) = &dto.value {
        if value.len() as u64 > MAX_FEATURE_VALUE_LENGTH {
            return Err(AppError::Validation(
                "Feature value must be at most 1024 characters".to_string(),
            ));
        }
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

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

    #[test]
    fn splits_known_columns_from_attributes() {
        let dto = creation_payload(&[
            ("name", "Lakeside Villa"),
            ("price", "450000"),
            ("garden", "yes"),
        ]);

        let data = NewPropertyData::from_request(&dto).unwrap();
        assert_eq!(data.name, "Lakeside Villa");
        assert_eq!(data.price, Some(450000));
        assert_eq!(data.attributes["garden"], "yes");
        assert!(data.attributes.get("name").is_none());
    }

    #[test]
    fn rejects_missing_name() {
        let dto = creation_payload(&[("price", "1000")]);
        assert!(NewPropertyData::from_request(&dto).is_err());
    }

    #[test]
    fn rejects_unparseable_price() {
        let dto = creation_payload(&[("name", "Villa"), ("price", "a lot")]);
        assert!(NewPropertyData::from_request(&dto).is_err());
    }

    #[test]
    fn feature_name_is_trimmed_and_required() {
        let dto = CreateFeatureRequest {
            property_id: "real-id-999".to_string(),
            name: "  pool  ".to_string(),
            value: None,
        };
        assert_eq!(checked_feature_name(&dto).unwrap(), "pool");

        let blank = CreateFeatureRequest {
            property_id: "real-id-999".to_string(),
            name: "   ".to_string(),
            value: None,
        };
        assert!(checked_feature_name(&blank).is_err());
    }
}
