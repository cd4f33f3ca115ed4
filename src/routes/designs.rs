use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::designs::{CreateDesignRequest, DesignQuery, UpdateDesignRequest},
    error::AppResult,
    models::{Design, ProductListing},
    response::ApiMessage,
    services::{design_service, listing_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_design))
        .route("/", get(list_designs))
        .route("/{id}", get(get_design))
        .route("/{id}", put(update_design))
        .route("/{id}", delete(delete_design))
        .route("/{id}/listings", get(design_listings))
}

#[utoipa::path(
    post,
    path = "/api/designs",
    request_body = CreateDesignRequest,
    responses(
        (status = 200, description = "Create design", body = Design),
        (status = 400, description = "Designer not found", body = ApiMessage)
    ),
    tag = "Designs"
)]
pub async fn create_design(
    State(state): State<AppState>,
    Json(payload): Json<CreateDesignRequest>,
) -> AppResult<Json<Design>> {
    let resp = design_service::create_design(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/designs",
    params(
        ("designerId" = Option<Uuid>, Query, description = "Filter by designer"),
        ("status" = Option<String>, Query, description = "Filter by status"),
    ),
    responses(
        (status = 200, description = "List designs", body = Vec<Design>)
    ),
    tag = "Designs"
)]
pub async fn list_designs(
    State(state): State<AppState>,
    Query(query): Query<DesignQuery>,
) -> AppResult<Json<Vec<Design>>> {
    let resp = design_service::list_designs(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(get, path = "/api/designs/{id}", tag = "Designs")]
pub async fn get_design(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> AppResult<Json<Design>> {
    let resp = design_service::get_design(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(put, path = "/api/designs/{id}", tag = "Designs")]
pub async fn update_design(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDesignRequest>,
) -> AppResult<Json<Design>> {
    let resp = design_service::update_design(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(delete, path = "/api/designs/{id}", tag = "Designs")]
pub async fn delete_design(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiMessage>> {
    design_service::delete_design(&state, id).await?;
    Ok(Json(ApiMessage::ok("Design deleted")))
}

#[utoipa::path(get, path = "/api/designs/{id}/listings", tag = "Designs")]
pub async fn design_listings(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductListing>>> {
    let resp = listing_service::list_for_design(&state, id).await?;
    Ok(Json(resp))
}
