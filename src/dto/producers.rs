use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProducerSearchRequest {
    pub query: Option<String>,
    pub capabilities: Option<Vec<String>>,
    /// Accepted for contract compatibility; never filtered on.
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProducerRequest {
    pub business_name: Option<String>,
    pub description: Option<String>,
    pub capabilities: Option<Value>,
}
