use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::orders::{CreateOrderRequest, OrderQuery, UpdateOrderStatusRequest},
    entity::{
        orders::{ActiveModel, Column, Entity as Orders, Model as OrderModel},
        producers::Entity as Producers,
        product_listings::Entity as ProductListings,
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    models::Order,
    state::AppState,
};

pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Order> {
    // Referential pre-checks so a dangling id comes back as a 400 rather
    // than a constraint violation.
    let customer = Users::find_by_id(payload.customer_id).one(&state.orm).await?;
    if customer.is_none() {
        return Err(AppError::BadRequest("Customer not found".to_string()));
    }
    let producer = Producers::find_by_id(payload.producer_id)
        .one(&state.orm)
        .await?;
    if producer.is_none() {
        return Err(AppError::BadRequest("Producer not found".to_string()));
    }
    let listing = ProductListings::find_by_id(payload.product_listing_id)
        .one(&state.orm)
        .await?;
    if listing.is_none() {
        return Err(AppError::BadRequest("Product listing not found".to_string()));
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        customer_id: Set(payload.customer_id),
        producer_id: Set(payload.producer_id),
        product_listing_id: Set(payload.product_listing_id),
        total_amount: Set(payload.total_amount),
        status: Set("pending".to_string()),
        shipping_details: Set(payload.shipping_details),
        payment_details: Set(payload.payment_details),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let order = active.insert(&state.orm).await?;

    tracing::info!(order_id = %order.id, producer_id = %order.producer_id, "order created");

    Ok(order_from_entity(order))
}

pub async fn list_orders(state: &AppState, query: OrderQuery) -> AppResult<Vec<Order>> {
    let mut condition = Condition::all();
    if let Some(customer_id) = query.customer_id {
        condition = condition.add(Column::CustomerId.eq(customer_id));
    }
    if let Some(producer_id) = query.producer_id {
        condition = condition.add(Column::ProducerId.eq(producer_id));
    }
    if let Some(status) = query.status.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Column::Status.eq(status.clone()));
    }

    let orders = Orders::find()
        .filter(condition)
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?;

    Ok(orders.into_iter().map(order_from_entity).collect())
}

pub async fn get_order(state: &AppState, id: Uuid) -> AppResult<Order> {
    let order = Orders::find_by_id(id).one(&state.orm).await?;
    match order {
        Some(o) => Ok(order_from_entity(o)),
        None => Err(AppError::NotFound),
    }
}

pub async fn update_order_status(
    state: &AppState,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<Order> {
    validate_order_status(&payload.status)?;

    let existing = Orders::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    active.status = Set(payload.status);
    active.updated_at = Set(Utc::now().into());
    let order = active.update(&state.orm).await?;

    tracing::info!(order_id = %order.id, status = %order.status, "order status updated");

    Ok(order_from_entity(order))
}

fn validate_order_status(status: &str) -> Result<(), AppError> {
    const VALID: [&str; 5] = [
        "pending",
        "in_production",
        "shipped",
        "delivered",
        "dispute",
    ];
    if VALID.contains(&status) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid order status".to_string()))
    }
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        customer_id: model.customer_id,
        producer_id: model.producer_id,
        product_listing_id: model.product_listing_id,
        total_amount: model.total_amount,
        status: model.status,
        shipping_details: model.shipping_details,
        payment_details: model.payment_details,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
