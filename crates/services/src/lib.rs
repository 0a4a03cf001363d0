#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod methodology_service;
pub mod progress_service;

pub use methodo_core::Clock;

pub use app_services::AppServices;
pub use catalog::{CatalogEntry, CatalogService};
pub use error::{AppServicesError, CatalogError, ProgressError};
pub use methodology_service::{MethodologyService, MethodologySheets};
pub use progress_service::ProgressService;
