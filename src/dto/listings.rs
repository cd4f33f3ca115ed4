use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub design_id: Uuid,
    pub sku: String,
    pub base_price: i64,
    pub available_sizes: Option<Value>,
    pub available_colors: Option<Value>,
    pub printing_requirements: Option<Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingRequest {
    pub base_price: Option<i64>,
    pub available_sizes: Option<Value>,
    pub available_colors: Option<Value>,
    pub printing_requirements: Option<Value>,
    pub is_active: Option<bool>,
}
