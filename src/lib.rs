pub mod cache;
pub mod classify;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod model;
pub mod resolver;

mod api;

pub use api::{CatalogError, TemplateCatalog, TemplateCatalogBuilder};
