use std::sync::Arc;

use methodo_core::Clock;

use crate::catalog::CatalogService;
use crate::error::AppServicesError;
use crate::methodology_service::MethodologyService;
use crate::progress_service::ProgressService;

/// Assembles app-facing services around a loaded catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    progress: Arc<ProgressService>,
    methodologies: Arc<MethodologyService>,
}

impl AppServices {
    /// Build services and seed the ledger with each methodology's `fichesSeen`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Progress` if seeding the ledger fails.
    pub fn new(catalog: CatalogService, clock: Clock) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(catalog);
        let progress = Arc::new(ProgressService::new(clock));
        for entry in catalog.entries() {
            progress.seed(entry.methodology().id(), entry.initially_seen())?;
        }

        let methodologies = Arc::new(MethodologyService::new(
            Arc::clone(&catalog),
            Arc::clone(&progress),
        ));

        Ok(Self {
            catalog,
            progress,
            methodologies,
        })
    }

    /// Services backed by the bundled sample catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the bundled catalog is invalid.
    pub fn bundled(clock: Clock) -> Result<Self, AppServicesError> {
        Self::new(CatalogService::bundled()?, clock)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn methodologies(&self) -> Arc<MethodologyService> {
        Arc::clone(&self.methodologies)
    }
}
