//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{MAX_PROPERTY_ID_LENGTH, MAX_PROPERTY_NAME_LENGTH};

/// Shape of an acceptable property id: lowercase alphanumeric segments
/// joined by single hyphens, at least two segments. UUID v4 strings satisfy
/// this, single bare words ("abc123") do not.
static PROPERTY_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)+$").unwrap());

/// A single way in which a candidate property id fails shape validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdViolation {
    /// The id is empty
    Empty,
    /// The id exceeds the maximum length
    TooLong,
    /// The id contains a character outside `[a-z0-9-]`
    InvalidCharacter,
    /// The id has no hyphen-separated segments
    MissingSeparator,
    /// Segments are malformed (leading/trailing or doubled hyphen)
    MalformedSegment,
}

impl std::fmt::Display for IdViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "id is empty"),
            Self::TooLong => write!(f, "id exceeds {} characters", MAX_PROPERTY_ID_LENGTH),
            Self::InvalidCharacter => {
                write!(f, "id may only contain lowercase letters, digits, and hyphens")
            }
            Self::MissingSeparator => write!(f, "id must contain at least two segments"),
            Self::MalformedSegment => write!(f, "id segments must be non-empty"),
        }
    }
}

/// Collect every shape violation for a candidate property id.
///
/// Returns an empty vector for a well-shaped id.
pub fn property_id_violations(id: &str) -> Vec<IdViolation> {
    let mut violations = Vec::new();

    if id.is_empty() {
        violations.push(IdViolation::Empty);
        return violations;
    }

    if id.len() as u64 > MAX_PROPERTY_ID_LENGTH {
        violations.push(IdViolation::TooLong);
    }

    if id
        .chars()
        .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
    {
        violations.push(IdViolation::InvalidCharacter);
    }

    if !id.contains('-') {
        violations.push(IdViolation::MissingSeparator);
    }

    if violations.is_empty() && !PROPERTY_ID_RE.is_match(id) {
        violations.push(IdViolation::MalformedSegment);
    }

    violations
}

/// Validate a property id, reporting the first violation
pub fn validate_property_id(id: &str) -> Result<(), IdViolation> {
    match property_id_violations(id).first() {
        Some(v) => Err(*v),
        None => Ok(()),
    }
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize a property name
pub fn validate_property_name(name: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(name);
    if sanitized.is_empty() {
        return Err("Property name cannot be empty");
    }
    if sanitized.len() as u64 > MAX_PROPERTY_NAME_LENGTH {
        return Err("Property name must be at most 256 characters");
    }
    Ok(sanitized)
}

/// Parse a price that arrived as a multipart text field
pub fn parse_price(raw: &str) -> Result<i64, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Price cannot be empty");
    }
    let price: i64 = trimmed.parse().map_err(|_| "Price must be a whole number")?;
    if price < 0 {
        return Err("Price cannot be negative");
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_shaped_ids() {
        assert!(property_id_violations("real-id-999").is_empty());
        assert!(property_id_violations("lakeside-villa").is_empty());
        assert!(property_id_violations("550e8400-e29b-41d4-a716-446655440000").is_empty());
    }

    #[test]
    fn test_single_segment_is_rejected() {
        assert_eq!(
            property_id_violations("abc123"),
            vec![IdViolation::MissingSeparator]
        );
    }

    #[test]
    fn test_empty_id() {
        assert_eq!(property_id_violations(""), vec![IdViolation::Empty]);
    }

    #[test]
    fn test_invalid_characters() {
        assert!(property_id_violations("Lakeside-Villa").contains(&IdViolation::InvalidCharacter));
        assert!(property_id_violations("lake_side-1").contains(&IdViolation::InvalidCharacter));
        assert!(property_id_violations("lake side-1").contains(&IdViolation::InvalidCharacter));
    }

    #[test]
    fn test_malformed_segments() {
        assert_eq!(
            property_id_violations("-lakeside"),
            vec![IdViolation::MalformedSegment]
        );
        assert_eq!(
            property_id_violations("lakeside-"),
            vec![IdViolation::MalformedSegment]
        );
        assert_eq!(
            property_id_violations("lake--side"),
            vec![IdViolation::MalformedSegment]
        );
    }

    #[test]
    fn test_too_long_id() {
        let id = format!("a-{}", "b".repeat(80));
        assert!(property_id_violations(&id).contains(&IdViolation::TooLong));
    }

    #[test]
    fn test_validate_reports_first_violation() {
        assert_eq!(validate_property_id("abc123"), Err(IdViolation::MissingSeparator));
        assert!(validate_property_id("real-id-999").is_ok());
    }

    #[test]
    fn test_validate_property_name() {
        assert_eq!(validate_property_name("  Lakeside Villa "), Ok("Lakeside Villa".to_string()));
        assert!(validate_property_name("   ").is_err());
        assert!(validate_property_name(&"x".repeat(300)).is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("250000"), Ok(250_000));
        assert_eq!(parse_price(" 42 "), Ok(42));
        assert!(parse_price("").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("12.50").is_err());
        assert!(parse_price("-5").is_err());
    }
}
