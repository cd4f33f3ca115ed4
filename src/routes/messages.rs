use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::messages::{MessageQuery, SendMessageRequest},
    error::AppResult,
    models::Message,
    response::ApiMessage,
    services::message_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(send_message))
        .route("/", get(list_messages))
        .route("/{id}/read", patch(mark_message_read))
}

#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Send message", body = Message),
        (status = 400, description = "Unknown sender, receiver or order", body = ApiMessage)
    ),
    tag = "Messages"
)]
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<SendMessageRequest>,
) -> AppResult<Json<Message>> {
    let resp = message_service::send_message(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/messages",
    params(
        ("userId" = Uuid, Query, description = "Messages sent or received by this user"),
    ),
    responses(
        (status = 200, description = "List messages", body = Vec<Message>)
    ),
    tag = "Messages"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> AppResult<Json<Vec<Message>>> {
    let resp = message_service::list_for_user(&state, query.user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(patch, path = "/api/messages/{id}/read", tag = "Messages")]
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Message>> {
    let resp = message_service::mark_read(&state, id).await?;
    Ok(Json(resp))
}
