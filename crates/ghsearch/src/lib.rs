pub mod cli;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod query;
pub mod render;
pub mod router;

pub use error::{Error, Result};
