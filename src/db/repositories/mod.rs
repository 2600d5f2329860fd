//! Database repositories
//!
//! All SQL for properties and their sub-resources lives here; the service
//! layer stays free of inline queries.

pub mod property_repo;

pub use property_repo::PropertyRepository;
