use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    dto::producers::{ProducerSearchRequest, UpdateProducerRequest},
    entity::{
        producers::{ActiveModel, Column, Entity as Producers, Model as ProducerModel},
        users::{Entity as Users, Model as UserModel},
    },
    error::{AppError, AppResult},
    models::ProducerProfile,
    state::AppState,
};

pub async fn list_producers(state: &AppState) -> AppResult<Vec<ProducerProfile>> {
    let rows = Producers::find()
        .find_also_related(Users)
        .all(&state.orm)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(producer, user)| profile_from_entity(producer, user))
        .collect())
}

pub async fn featured_producers(state: &AppState) -> AppResult<Vec<ProducerProfile>> {
    let rows = Producers::find()
        .filter(Column::Verified.eq(true))
        .order_by_desc(Column::Rating)
        .limit(6)
        .find_also_related(Users)
        .all(&state.orm)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(producer, user)| profile_from_entity(producer, user))
        .collect())
}

pub async fn get_producer(state: &AppState, id: Uuid) -> AppResult<ProducerProfile> {
    let row = Producers::find_by_id(id)
        .find_also_related(Users)
        .one(&state.orm)
        .await?;

    match row {
        Some((producer, user)) => Ok(profile_from_entity(producer, user)),
        None => Err(AppError::NotFound),
    }
}

pub async fn search_producers(
    state: &AppState,
    payload: ProducerSearchRequest,
) -> AppResult<Vec<ProducerProfile>> {
    let mut condition = Condition::all();

    if let Some(query) = payload.query.as_ref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", query);
        condition = condition.add(
            Condition::any()
                .add(Expr::col(Column::BusinessName).ilike(pattern.clone()))
                .add(Expr::col(Column::Description).ilike(pattern)),
        );
    }

    let wanted = payload.capabilities.unwrap_or_default();

    let rows = Producers::find()
        .filter(condition)
        .find_also_related(Users)
        .all(&state.orm)
        .await?;

    Ok(rows
        .into_iter()
        .filter(|(producer, _)| {
            capability_matches(producer.production_capabilities.as_ref(), &wanted)
        })
        .map(|(producer, user)| profile_from_entity(producer, user))
        .collect())
}

pub async fn update_producer(
    state: &AppState,
    id: Uuid,
    payload: UpdateProducerRequest,
) -> AppResult<ProducerProfile> {
    let existing = Producers::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(business_name) = payload.business_name {
        active.business_name = Set(business_name);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(capabilities) = payload.capabilities {
        active.production_capabilities = Set(Some(capabilities));
    }
    let updated = active.update(&state.orm).await?;

    let user = Users::find_by_id(updated.user_id).one(&state.orm).await?;
    Ok(profile_from_entity(updated, user))
}

// The capability filter only applies to producers whose document carries a
// `capabilities` list; producers without one are kept.
fn capability_matches(doc: Option<&Value>, wanted: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    match doc
        .and_then(|d| d.get("capabilities"))
        .and_then(|v| v.as_array())
    {
        Some(have) => wanted
            .iter()
            .any(|w| have.iter().any(|c| c.as_str() == Some(w.as_str()))),
        None => true,
    }
}

fn profile_from_entity(producer: ProducerModel, user: Option<UserModel>) -> ProducerProfile {
    let (email, full_name, phone) = match user {
        Some(u) => (Some(u.email), Some(u.full_name), u.phone),
        None => (None, None, None),
    };

    ProducerProfile {
        id: producer.id,
        business_name: producer.business_name,
        description: producer.description,
        capabilities: producer.production_capabilities,
        rating: producer.rating,
        verified: producer.verified,
        joined_at: producer.joined_at.with_timezone(&Utc),
        email,
        full_name,
        phone,
    }
}
