//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod feature;
pub mod image;
pub mod media;
pub mod property;

pub use feature::*;
pub use image::*;
pub use media::*;
pub use property::*;
