use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::designers::UpdateDesignerRequest,
    error::AppResult,
    models::DesignerProfile,
    services::designer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_designers))
        .route("/{id}", get(get_designer))
        .route("/{id}", put(update_designer))
}

#[utoipa::path(get, path = "/api/designers", tag = "Designers")]
pub async fn list_designers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DesignerProfile>>> {
    let resp = designer_service::list_designers(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(get, path = "/api/designers/{id}", tag = "Designers")]
pub async fn get_designer(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> AppResult<Json<DesignerProfile>> {
    let resp = designer_service::get_designer(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(put, path = "/api/designers/{id}", tag = "Designers")]
pub async fn update_designer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDesignerRequest>,
) -> AppResult<Json<DesignerProfile>> {
    let resp = designer_service::update_designer(&state, id, payload).await?;
    Ok(Json(resp))
}
