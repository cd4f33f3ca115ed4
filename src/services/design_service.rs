use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::designs::{CreateDesignRequest, DesignQuery, UpdateDesignRequest},
    entity::{
        designers::Entity as Designers,
        designs::{ActiveModel, Column, Entity as Designs, Model as DesignModel},
    },
    error::{AppError, AppResult},
    models::Design,
    state::AppState,
};

pub async fn create_design(state: &AppState, payload: CreateDesignRequest) -> AppResult<Design> {
    let designer = Designers::find_by_id(payload.designer_id)
        .one(&state.orm)
        .await?;
    if designer.is_none() {
        return Err(AppError::BadRequest("Designer not found".to_string()));
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        designer_id: Set(payload.designer_id),
        title: Set(payload.title),
        description: Set(payload.description),
        specifications: Set(payload.specifications),
        status: Set("draft".to_string()),
        licensing_terms: Set(payload.licensing_terms),
        file_path: Set(payload.file_path),
        is_active: NotSet,
        created_at: NotSet,
        updated_at: NotSet,
    };
    let design = active.insert(&state.orm).await?;

    Ok(design_from_entity(design))
}

pub async fn list_designs(state: &AppState, query: DesignQuery) -> AppResult<Vec<Design>> {
    let mut condition = Condition::all();
    if let Some(designer_id) = query.designer_id {
        condition = condition.add(Column::DesignerId.eq(designer_id));
    }
    if let Some(status) = query.status.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Column::Status.eq(status.clone()));
    }

    let designs = Designs::find()
        .filter(condition)
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?;

    Ok(designs.into_iter().map(design_from_entity).collect())
}

pub async fn get_design(state: &AppState, id: Uuid) -> AppResult<Design> {
    let design = Designs::find_by_id(id).one(&state.orm).await?;
    match design {
        Some(d) => Ok(design_from_entity(d)),
        None => Err(AppError::NotFound),
    }
}

pub async fn update_design(
    state: &AppState,
    id: Uuid,
    payload: UpdateDesignRequest,
) -> AppResult<Design> {
    if let Some(status) = payload.status.as_ref() {
        validate_design_status(status)?;
    }

    let existing = Designs::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(d) => d,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(title) = payload.title {
        active.title = Set(title);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(specifications) = payload.specifications {
        active.specifications = Set(Some(specifications));
    }
    if let Some(licensing_terms) = payload.licensing_terms {
        active.licensing_terms = Set(Some(licensing_terms));
    }
    if let Some(file_path) = payload.file_path {
        active.file_path = Set(Some(file_path));
    }
    if let Some(status) = payload.status {
        active.status = Set(status);
    }
    active.updated_at = Set(Utc::now().into());
    let design = active.update(&state.orm).await?;

    Ok(design_from_entity(design))
}

pub async fn delete_design(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Designs::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

fn validate_design_status(status: &str) -> Result<(), AppError> {
    const VALID: [&str; 3] = ["draft", "active", "archived"];
    if VALID.contains(&status) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid design status".to_string()))
    }
}

fn design_from_entity(model: DesignModel) -> Design {
    Design {
        id: model.id,
        designer_id: model.designer_id,
        title: model.title,
        description: model.description,
        specifications: model.specifications,
        status: model.status,
        licensing_terms: model.licensing_terms,
        file_path: model.file_path,
        is_active: model.is_active,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
