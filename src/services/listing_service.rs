use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::listings::{CreateListingRequest, UpdateListingRequest},
    entity::{
        designs::Entity as Designs,
        product_listings::{ActiveModel, Column, Entity as ProductListings, Model as ListingModel},
    },
    error::{AppError, AppResult},
    models::ProductListing,
    state::AppState,
};

pub async fn create_listing(
    state: &AppState,
    payload: CreateListingRequest,
) -> AppResult<ProductListing> {
    let design = Designs::find_by_id(payload.design_id).one(&state.orm).await?;
    if design.is_none() {
        return Err(AppError::BadRequest("Design not found".to_string()));
    }

    let taken = ProductListings::find()
        .filter(Column::Sku.eq(payload.sku.clone()))
        .one(&state.orm)
        .await?;
    if taken.is_some() {
        return Err(AppError::BadRequest("SKU already in use".to_string()));
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        design_id: Set(payload.design_id),
        sku: Set(payload.sku),
        base_price: Set(payload.base_price),
        available_sizes: Set(payload.available_sizes),
        available_colors: Set(payload.available_colors),
        printing_requirements: Set(payload.printing_requirements),
        is_active: NotSet,
        created_at: NotSet,
        updated_at: NotSet,
    };
    let listing = active.insert(&state.orm).await?;

    Ok(listing_from_entity(listing))
}

pub async fn list_for_design(state: &AppState, design_id: Uuid) -> AppResult<Vec<ProductListing>> {
    let design = Designs::find_by_id(design_id).one(&state.orm).await?;
    if design.is_none() {
        return Err(AppError::NotFound);
    }

    let listings = ProductListings::find()
        .filter(Column::DesignId.eq(design_id))
        .all(&state.orm)
        .await?;

    Ok(listings.into_iter().map(listing_from_entity).collect())
}

pub async fn get_listing(state: &AppState, id: Uuid) -> AppResult<ProductListing> {
    let listing = ProductListings::find_by_id(id).one(&state.orm).await?;
    match listing {
        Some(l) => Ok(listing_from_entity(l)),
        None => Err(AppError::NotFound),
    }
}

pub async fn update_listing(
    state: &AppState,
    id: Uuid,
    payload: UpdateListingRequest,
) -> AppResult<ProductListing> {
    let existing = ProductListings::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(l) => l,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(base_price) = payload.base_price {
        active.base_price = Set(base_price);
    }
    if let Some(available_sizes) = payload.available_sizes {
        active.available_sizes = Set(Some(available_sizes));
    }
    if let Some(available_colors) = payload.available_colors {
        active.available_colors = Set(Some(available_colors));
    }
    if let Some(printing_requirements) = payload.printing_requirements {
        active.printing_requirements = Set(Some(printing_requirements));
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(Utc::now().into());
    let listing = active.update(&state.orm).await?;

    Ok(listing_from_entity(listing))
}

fn listing_from_entity(model: ListingModel) -> ProductListing {
    ProductListing {
        id: model.id,
        design_id: model.design_id,
        sku: model.sku,
        base_price: model.base_price,
        available_sizes: model.available_sizes,
        available_colors: model.available_colors,
        printing_requirements: model.printing_requirements,
        is_active: model.is_active,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
