use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::listings::{CreateListingRequest, UpdateListingRequest},
    error::AppResult,
    models::ProductListing,
    response::ApiMessage,
    services::listing_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_listing))
        .route("/{id}", get(get_listing))
        .route("/{id}", put(update_listing))
}

#[utoipa::path(
    post,
    path = "/api/listings",
    request_body = CreateListingRequest,
    responses(
        (status = 200, description = "Create listing", body = ProductListing),
        (status = 400, description = "Unknown design or SKU already in use", body = ApiMessage)
    ),
    tag = "Listings"
)]
pub async fn create_listing(
    State(state): State<AppState>,
    Json(payload): Json<CreateListingRequest>,
) -> AppResult<Json<ProductListing>> {
    let resp = listing_service::create_listing(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(get, path = "/api/listings/{id}", tag = "Listings")]
pub async fn get_listing(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> AppResult<Json<ProductListing>> {
    let resp = listing_service::get_listing(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(put, path = "/api/listings/{id}", tag = "Listings")]
pub async fn update_listing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateListingRequest>,
) -> AppResult<Json<ProductListing>> {
    let resp = listing_service::update_listing(&state, id, payload).await?;
    Ok(Json(resp))
}
