use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDesignRequest {
    pub designer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub specifications: Option<Value>,
    pub licensing_terms: Option<Value>,
    pub file_path: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDesignRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub specifications: Option<Value>,
    pub licensing_terms: Option<Value>,
    pub file_path: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignQuery {
    pub designer_id: Option<Uuid>,
    pub status: Option<String>,
}
