use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Database row for the auth path; never serialized to clients because it
/// carries the password hash.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub user_type: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Producer joined to its user account, flattened for the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerProfile {
    pub id: Uuid,
    pub business_name: String,
    pub description: Option<String>,
    pub capabilities: Option<Value>,
    pub rating: f64,
    pub verified: bool,
    pub joined_at: DateTime<Utc>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

/// Designer joined to its user account, flattened for the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignerProfile {
    pub id: Uuid,
    pub brand_name: Option<String>,
    pub bio: Option<String>,
    pub portfolio_url: Option<String>,
    pub preferences: Option<Value>,
    pub rating: f64,
    pub joined_at: DateTime<Utc>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: Uuid,
    pub designer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub specifications: Option<Value>,
    pub status: String,
    pub licensing_terms: Option<Value>,
    pub file_path: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub id: Uuid,
    pub design_id: Uuid,
    pub sku: String,
    pub base_price: i64,
    pub available_sizes: Option<Value>,
    pub available_colors: Option<Value>,
    pub printing_requirements: Option<Value>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub producer_id: Uuid,
    pub product_listing_id: Uuid,
    pub total_amount: i64,
    pub status: String,
    pub shipping_details: Option<Value>,
    pub payment_details: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub order_id: Option<Uuid>,
    pub content: String,
    pub is_read: bool,
    pub sent_at: DateTime<Utc>,
}
