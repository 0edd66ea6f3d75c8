use tracing::debug;

use super::setup::GithubClient;
use crate::error::{Error, Result};
use crate::models::{Repository, RepositorySearchData};

/// Repository search, first page only.
pub const SEARCH_REPOSITORIES: &str = r#"
query SearchRepositories($query: String!) {
  search(query: $query, type: REPOSITORY, first: 10) {
    nodes {
      ... on Repository {
        nameWithOwner
        description
      }
    }
  }
}
"#;

impl GithubClient {
    /// Search repositories. Results come back in the order the API returns them.
    pub async fn search_repositories(&self, query: &str) -> Result<Vec<Repository>> {
        debug!("searching repositories: {:?}", query);
        let data: RepositorySearchData = self
            .execute(SEARCH_REPOSITORIES, serde_json::json!({ "query": query }))
            .await?;
        let repos = repositories_from(data)?;
        debug!("search returned {} repositories", repos.len());
        Ok(repos)
    }
}

pub(crate) fn repositories_from(data: RepositorySearchData) -> Result<Vec<Repository>> {
    let nodes = data
        .search
        .ok_or_else(|| Error::Malformed("response has no `search`".to_string()))?
        .nodes
        .ok_or_else(|| Error::Malformed("search has no `nodes`".to_string()))?;
    Ok(nodes.into_iter().flatten().collect())
}
