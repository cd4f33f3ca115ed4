use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod designers;
pub mod designs;
pub mod doc;
pub mod health;
pub mod listings;
pub mod messages;
pub mod orders;
pub mod producers;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/producers", producers::router())
        .nest("/designers", designers::router())
        .nest("/designs", designs::router())
        .nest("/listings", listings::router())
        .nest("/orders", orders::router())
        .nest("/messages", messages::router())
}
