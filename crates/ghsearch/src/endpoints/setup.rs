use reqwest::{Client as ReqwestClient, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Endpoint;
use crate::error::{Error, Result};
use crate::models::GraphqlResponse;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GraphQL client bound to one endpoint and token for one invocation.
#[derive(Debug, Clone)]
pub struct GithubClient {
    endpoint: Endpoint,
    http: ReqwestClient,
}

impl GithubClient {
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("bearer {}", endpoint.token))
            .map_err(|_| {
                Error::Config(crate::config::ConfigError::InvalidValue {
                    field: "token",
                    reason: "token contains characters not allowed in a header".to_string(),
                })
            })?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        let http = ReqwestClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;
        debug!(
            "graphql endpoint {} for host {}",
            endpoint.graphql_url, endpoint.hostname
        );
        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Post one GraphQL document and return its `data` payload.
    pub(crate) async fn execute<T>(&self, document: &str, variables: serde_json::Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = serde_json::json!({
            "query": document,
            "variables": variables,
        });
        let response = self
            .http
            .post(&self.endpoint.graphql_url)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        debug!("graphql response status: {}", status);
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized { status });
        }
        let json_str = response.text().await?;
        if !status.is_success() {
            return Err(Error::Status {
                status,
                body: json_str,
            });
        }
        decode(&json_str)
    }
}

/// Unwrap a GraphQL envelope, turning `errors` into an error.
pub(crate) fn decode<T>(json_str: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let res: GraphqlResponse<T> = serde_json::from_str(json_str)?;
    if let Some(errors) = res.errors.filter(|errors| !errors.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        warn!("graphql response carried {} error(s)", messages.len());
        return Err(Error::Graphql(messages));
    }
    res.data
        .ok_or_else(|| Error::Malformed("response has no `data`".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ViewerData;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_returns_data() {
        let data: ViewerData = decode(r#"{"data":{"viewer":{"login":"octocat"}}}"#).unwrap();
        assert_eq!(data.viewer.unwrap().login, "octocat");
    }

    #[test]
    fn decode_surfaces_graphql_errors() {
        let err = decode::<ViewerData>(
            r#"{"data":null,"errors":[{"message":"Bad credentials"},{"message":"again"}]}"#,
        )
        .unwrap_err();
        match err {
            Error::Graphql(messages) => assert_eq!(messages, vec!["Bad credentials", "again"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_missing_data() {
        let err = decode::<ViewerData>("{}").unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let err = decode::<ViewerData>("<html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn client_rejects_token_with_newline() {
        let err = GithubClient::new(Endpoint::github("bad\ntoken")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
