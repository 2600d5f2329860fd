//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// STORAGE DEFAULTS
// =============================================================================

/// Default directory for stored property images
pub const DEFAULT_MEDIA_PATH: &str = "/data/media";

// =============================================================================
// UPLOADS
// =============================================================================

/// Default cap on a multipart request body in bytes (10 MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum property id length
pub const MAX_PROPERTY_ID_LENGTH: u64 = 64;

/// Maximum property name length
pub const MAX_PROPERTY_NAME_LENGTH: u64 = 256;

/// Maximum feature name length
pub const MAX_FEATURE_NAME_LENGTH: u64 = 128;

/// Maximum feature value length
pub const MAX_FEATURE_VALUE_LENGTH: u64 = 1024;
