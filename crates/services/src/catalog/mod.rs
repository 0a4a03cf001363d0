mod file;
mod service;

pub use service::{CatalogEntry, CatalogService};
