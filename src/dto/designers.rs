use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDesignerRequest {
    pub brand_name: Option<String>,
    pub bio: Option<String>,
    pub portfolio_url: Option<String>,
    pub preferences: Option<Value>,
}
