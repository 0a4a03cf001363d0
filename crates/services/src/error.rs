//! Shared error types for the services crate.

use thiserror::Error;

use methodo_core::model::{FicheError, FicheId, MethodologyError, MethodologyId};

/// Errors emitted while loading or validating a fiche catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog contains no methodology")]
    Empty,
    #[error("methodology {0} is declared more than once")]
    DuplicateMethodology(MethodologyId),
    #[error("fiche {fiche} is declared more than once in methodology {methodology}")]
    DuplicateFiche {
        methodology: MethodologyId,
        fiche: FicheId,
    },
    #[error(transparent)]
    Methodology(#[from] MethodologyError),
    #[error(transparent)]
    Fiche(#[from] FicheError),
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors emitted by `ProgressService` and `MethodologyService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("unknown methodology {0}")]
    UnknownMethodology(MethodologyId),
    #[error("progress ledger lock poisoned")]
    Poisoned,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
