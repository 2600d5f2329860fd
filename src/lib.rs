//! PropertyHub - Real-Estate Property API
//!
//! This library provides the core functionality for the PropertyHub service,
//! a CRUD HTTP API over real-estate properties, their features, and their
//! uploaded media.
//!
//! # Features
//!
//! - Multipart property creation with an optional bundled image
//! - Feature records attached to properties
//! - Image uploads stored on disk and tracked in PostgreSQL
//! - Strict property-id shape validation on lookups
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic behind the `PropertyService` trait
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
