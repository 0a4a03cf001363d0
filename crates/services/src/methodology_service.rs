use std::sync::Arc;

use methodo_core::model::{Fiche, FicheId, Methodology, MethodologyId};

use crate::catalog::{CatalogEntry, CatalogService};
use crate::error::ProgressError;
use crate::progress_service::ProgressService;

/// A methodology with an up-to-date progress snapshot and its fiches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodologySheets {
    pub methodology: Methodology,
    pub fiches: Vec<Fiche>,
}

/// Joins the static catalog with the progress ledger.
#[derive(Clone)]
pub struct MethodologyService {
    catalog: Arc<CatalogService>,
    progress: Arc<ProgressService>,
}

impl MethodologyService {
    #[must_use]
    pub fn new(catalog: Arc<CatalogService>, progress: Arc<ProgressService>) -> Self {
        Self { catalog, progress }
    }

    /// All methodologies in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Poisoned` if the ledger cannot be read.
    pub fn list_methodologies(&self) -> Result<Vec<Methodology>, ProgressError> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| self.with_progress(entry))
            .collect()
    }

    /// Returns `Ok(None)` when the methodology does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Poisoned` if the ledger cannot be read.
    pub fn get_methodology(
        &self,
        id: MethodologyId,
    ) -> Result<Option<MethodologySheets>, ProgressError> {
        let Some(entry) = self.catalog.get(id) else {
            return Ok(None);
        };

        Ok(Some(MethodologySheets {
            methodology: self.with_progress(entry)?,
            fiches: entry.fiches().to_vec(),
        }))
    }

    /// Record a fiche as seen. Fiche ids are not checked against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownMethodology` if the methodology is not
    /// in the catalog, `ProgressError::Poisoned` if the ledger is unusable.
    pub fn record_progress(
        &self,
        methodology_id: MethodologyId,
        fiche_id: FicheId,
    ) -> Result<bool, ProgressError> {
        let entry = self
            .catalog
            .get(methodology_id)
            .ok_or(ProgressError::UnknownMethodology(methodology_id))?;
        if !entry.contains_fiche(fiche_id) {
            tracing::debug!(%methodology_id, %fiche_id, "recording fiche outside the catalog");
        }
        self.progress.record_seen(methodology_id, fiche_id)
    }

    fn with_progress(&self, entry: &CatalogEntry) -> Result<Methodology, ProgressError> {
        let methodology = entry.methodology();
        let progress = self.progress.progress_for(methodology.id(), entry.fiches())?;
        Ok(methodology.clone().with_progress(progress))
    }
}
