use tracing::debug;

use crate::config::Endpoint;
use crate::endpoints::GithubClient;
use crate::error::Result;
use crate::models::MyPage;
use crate::query::build_search_query;
use crate::render::{ResultItem, render_pages, render_repositories};

/// Command word that lists account pages instead of searching.
pub const MY_COMMAND: &str = "my";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `my [prefix]`: account pages whose name starts with `filter`.
    MyPages { filter: &'a str },
    /// Anything else: the whole argument is search text.
    Search { text: &'a str },
}

pub fn route(argument: &str) -> Route<'_> {
    let trimmed = argument.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (trimmed, ""),
    };
    if command == MY_COMMAND {
        Route::MyPages { filter: rest }
    } else {
        Route::Search { text: argument }
    }
}

pub fn my_pages(filter: &str) -> Vec<MyPage> {
    MyPage::ALL
        .into_iter()
        .filter(|page| page.name().starts_with(filter))
        .collect()
}

/// Resolve one launcher query into rendered items.
pub async fn run(endpoint: Endpoint, argument: &str) -> Result<Vec<ResultItem>> {
    match route(argument) {
        Route::MyPages { filter } => {
            debug!("listing account pages matching {:?}", filter);
            Ok(render_pages(&endpoint.hostname, &my_pages(filter)))
        }
        Route::Search { text } => {
            let query = build_search_query(text);
            let client = GithubClient::new(endpoint)?;
            let mut repos = client.search_repositories(&query).await?;
            repos.sort_by(|a, b| a.name_with_owner.cmp(&b.name_with_owner));
            Ok(render_repositories(&client.endpoint().hostname, &repos))
        }
    }
}
