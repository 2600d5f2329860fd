//! Utility functions

pub mod validation;

pub use validation::{
    parse_price, property_id_violations, sanitize_string, validate_property_id,
    validate_property_name,
};
