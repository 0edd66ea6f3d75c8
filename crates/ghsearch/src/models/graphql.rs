use serde::{Deserialize, Serialize};

/// Envelope shared by every GraphQL response.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
