//! Conversion of search results into launcher list items.

use serde::{Deserialize, Serialize};

use crate::models::{MyPage, Repository};

pub const REPO_ICON: &str = "images/repo.png";

/// What the launcher does when an item is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    OpenUrl { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub icon: String,
    pub name: String,
    pub description: Option<String>,
    pub on_enter: Action,
}

impl ResultItem {
    fn new(name: &str, description: Option<String>, url: String) -> Self {
        Self {
            icon: REPO_ICON.to_string(),
            name: name.to_string(),
            description,
            on_enter: Action::OpenUrl { url },
        }
    }

    pub fn url(&self) -> &str {
        match &self.on_enter {
            Action::OpenUrl { url } => url,
        }
    }
}

/// The single render call handed back to the launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename = "render_result_list")]
pub struct RenderResultList {
    pub items: Vec<ResultItem>,
}

impl RenderResultList {
    pub fn new(items: Vec<ResultItem>) -> Self {
        Self { items }
    }
}

pub fn render_repositories(hostname: &str, repos: &[Repository]) -> Vec<ResultItem> {
    repos
        .iter()
        .map(|repo| {
            ResultItem::new(
                &repo.name_with_owner,
                repo.description.clone(),
                format!("https://{}/{}", hostname, repo.name_with_owner),
            )
        })
        .collect()
}

pub fn render_pages(hostname: &str, pages: &[MyPage]) -> Vec<ResultItem> {
    pages
        .iter()
        .map(|page| {
            ResultItem::new(
                page.name(),
                Some(page.description()),
                format!("https://{}/{}", hostname, page.name()),
            )
        })
        .collect()
}
