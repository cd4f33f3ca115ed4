use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::messages::SendMessageRequest,
    entity::{
        messages::{ActiveModel, Column, Entity as Messages, Model as MessageModel},
        orders::Entity as Orders,
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    models::Message,
    state::AppState,
};

pub async fn send_message(state: &AppState, payload: SendMessageRequest) -> AppResult<Message> {
    let sender = Users::find_by_id(payload.sender_id).one(&state.orm).await?;
    if sender.is_none() {
        return Err(AppError::BadRequest("Sender not found".to_string()));
    }
    let receiver = Users::find_by_id(payload.receiver_id)
        .one(&state.orm)
        .await?;
    if receiver.is_none() {
        return Err(AppError::BadRequest("Receiver not found".to_string()));
    }
    if let Some(order_id) = payload.order_id {
        let order = Orders::find_by_id(order_id).one(&state.orm).await?;
        if order.is_none() {
            return Err(AppError::BadRequest("Order not found".to_string()));
        }
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        sender_id: Set(payload.sender_id),
        receiver_id: Set(payload.receiver_id),
        order_id: Set(payload.order_id),
        content: Set(payload.content),
        is_read: NotSet,
        sent_at: NotSet,
    };
    let message = active.insert(&state.orm).await?;

    Ok(message_from_entity(message))
}

/// Everything the user sent or received, newest first.
pub async fn list_for_user(state: &AppState, user_id: Uuid) -> AppResult<Vec<Message>> {
    let condition = Condition::any()
        .add(Column::SenderId.eq(user_id))
        .add(Column::ReceiverId.eq(user_id));

    let messages = Messages::find()
        .filter(condition)
        .order_by_desc(Column::SentAt)
        .all(&state.orm)
        .await?;

    Ok(messages.into_iter().map(message_from_entity).collect())
}

pub async fn mark_read(state: &AppState, id: Uuid) -> AppResult<Message> {
    let existing = Messages::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(m) => m,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    active.is_read = Set(true);
    let message = active.update(&state.orm).await?;

    Ok(message_from_entity(message))
}

fn message_from_entity(model: MessageModel) -> Message {
    Message {
        id: model.id,
        sender_id: model.sender_id,
        receiver_id: model.receiver_id,
        order_id: model.order_id,
        content: model.content,
        is_read: model.is_read,
        sent_at: model.sent_at.with_timezone(&Utc),
    }
}
