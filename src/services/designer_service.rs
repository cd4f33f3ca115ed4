use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::{
    dto::designers::UpdateDesignerRequest,
    entity::{
        designers::{ActiveModel, Entity as Designers, Model as DesignerModel},
        users::{Entity as Users, Model as UserModel},
    },
    error::{AppError, AppResult},
    models::DesignerProfile,
    state::AppState,
};

pub async fn list_designers(state: &AppState) -> AppResult<Vec<DesignerProfile>> {
    let rows = Designers::find()
        .find_also_related(Users)
        .all(&state.orm)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(designer, user)| profile_from_entity(designer, user))
        .collect())
}

pub async fn get_designer(state: &AppState, id: Uuid) -> AppResult<DesignerProfile> {
    let row = Designers::find_by_id(id)
        .find_also_related(Users)
        .one(&state.orm)
        .await?;

    match row {
        Some((designer, user)) => Ok(profile_from_entity(designer, user)),
        None => Err(AppError::NotFound),
    }
}

pub async fn update_designer(
    state: &AppState,
    id: Uuid,
    payload: UpdateDesignerRequest,
) -> AppResult<DesignerProfile> {
    let existing = Designers::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(d) => d,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(brand_name) = payload.brand_name {
        active.brand_name = Set(Some(brand_name));
    }
    if let Some(bio) = payload.bio {
        active.bio = Set(Some(bio));
    }
    if let Some(portfolio_url) = payload.portfolio_url {
        active.portfolio_url = Set(Some(portfolio_url));
    }
    if let Some(preferences) = payload.preferences {
        active.design_preferences = Set(Some(preferences));
    }
    let updated = active.update(&state.orm).await?;

    let user = Users::find_by_id(updated.user_id).one(&state.orm).await?;
    Ok(profile_from_entity(updated, user))
}

fn profile_from_entity(designer: DesignerModel, user: Option<UserModel>) -> DesignerProfile {
    let (email, full_name, phone) = match user {
        Some(u) => (Some(u.email), Some(u.full_name), u.phone),
        None => (None, None, None),
    };

    DesignerProfile {
        id: designer.id,
        brand_name: designer.brand_name,
        bio: designer.bio,
        portfolio_url: designer.portfolio_url,
        preferences: designer.design_preferences,
        rating: designer.rating,
        joined_at: designer.joined_at.with_timezone(&Utc),
        email,
        full_name,
        phone,
    }
}
