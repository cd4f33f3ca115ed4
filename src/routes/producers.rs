use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::producers::{ProducerSearchRequest, UpdateProducerRequest},
    error::AppResult,
    models::ProducerProfile,
    services::producer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_producers))
        .route("/featured", get(featured_producers))
        .route("/search", post(search_producers))
        .route("/{id}", get(get_producer))
        .route("/{id}", put(update_producer))
}

#[utoipa::path(
    get,
    path = "/api/producers",
    responses(
        (status = 200, description = "All producers joined to their user accounts", body = Vec<ProducerProfile>)
    ),
    tag = "Producers"
)]
pub async fn list_producers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProducerProfile>>> {
    let resp = producer_service::list_producers(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/producers/featured",
    responses(
        (status = 200, description = "Verified producers by rating", body = Vec<ProducerProfile>)
    ),
    tag = "Producers"
)]
pub async fn featured_producers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProducerProfile>>> {
    let resp = producer_service::featured_producers(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/producers/{id}",
    params(
        ("id" = Uuid, Path, description = "Producer ID")
    ),
    responses(
        (status = 200, description = "Get producer", body = ProducerProfile),
        (status = 404, description = "Producer not found"),
    ),
    tag = "Producers"
)]
pub async fn get_producer(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> AppResult<Json<ProducerProfile>> {
    let resp = producer_service::get_producer(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/producers/search",
    request_body = ProducerSearchRequest,
    responses(
        (status = 200, description = "Producers matching the search", body = Vec<ProducerProfile>)
    ),
    tag = "Producers"
)]
pub async fn search_producers(
    State(state): State<AppState>,
    Json(payload): Json<ProducerSearchRequest>,
) -> AppResult<Json<Vec<ProducerProfile>>> {
    let resp = producer_service::search_producers(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/producers/{id}",
    params(
        ("id" = Uuid, Path, description = "Producer ID")
    ),
    request_body = UpdateProducerRequest,
    responses(
        (status = 200, description = "Updated producer", body = ProducerProfile),
        (status = 404, description = "Producer not found"),
    ),
    tag = "Producers"
)]
pub async fn update_producer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProducerRequest>,
) -> AppResult<Json<ProducerProfile>> {
    let resp = producer_service::update_producer(&state, id, payload).await?;
    Ok(Json(resp))
}
