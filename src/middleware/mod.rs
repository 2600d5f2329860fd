//! HTTP middleware
//!
//! Request-scoped concerns applied around the router in `main`.

pub mod logging;

pub use logging::logging_middleware;
