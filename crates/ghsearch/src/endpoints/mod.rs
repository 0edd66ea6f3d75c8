pub mod repositories;
pub mod setup;
pub mod viewer;

pub use setup::GithubClient;
