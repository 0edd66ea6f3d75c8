use serde::{Deserialize, Serialize};

/// `data` payload of the repository search document.
#[derive(Debug, Serialize, Deserialize)]
pub struct RepositorySearchData {
    pub search: Option<SearchConnection>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchConnection {
    pub nodes: Option<Vec<Option<Repository>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(rename = "nameWithOwner")]
    pub name_with_owner: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Repository {
    pub fn new(name_with_owner: &str, description: Option<&str>) -> Self {
        Self {
            name_with_owner: name_with_owner.to_string(),
            description: description.map(str::to_string),
        }
    }
}
