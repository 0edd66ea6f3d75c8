use reqwest::StatusCode;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("request to GraphQL endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("GraphQL endpoint rejected the token ({status})")]
    Unauthorized { status: StatusCode },
    #[error("GraphQL endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("GraphQL errors: {}", .0.join("; "))]
    Graphql(Vec<String>),
    #[error("malformed GraphQL response: {0}")]
    Malformed(String),
    #[error("invalid JSON in GraphQL response: {0}")]
    Json(#[from] serde_json::Error),
}
