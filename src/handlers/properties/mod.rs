//! Property management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::state::AppState;

/// Property routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_property))
        .route("/", get(handler::list_properties))
        // A literal segment, not a placeholder; see update_basic_data.
        .route("/id", patch(handler::update_basic_data))
        .route("/features", post(handler::create_property_feature))
        .route("/{propertyId}", get(handler::get_property_by_id))
        .route("/{propertyId}", delete(handler::delete_property))
        .route(
            "/{propertyId}/features/{featureId}",
            delete(handler::delete_property_feature),
        )
        .route("/{propertyId}/medias", post(handler::create_property_media))
        .route(
            "/{propertyId}/medias/{mediaId}",
            delete(handler::delete_property_media),
        )
}
