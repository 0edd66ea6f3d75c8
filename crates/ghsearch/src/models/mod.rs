mod graphql;
mod my_page;
mod repository_search;
mod viewer;
pub use graphql::*;
pub use my_page::*;
pub use repository_search::*;
pub use viewer::*;

use serde::{Deserialize, Serialize};

/// Output encoding of the rendered result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}
