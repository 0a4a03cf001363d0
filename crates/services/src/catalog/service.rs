use std::collections::HashSet;
use std::path::Path;

use methodo_core::model::{
    Fiche, FicheDraft, FicheId, Methodology, MethodologyId, MethodologyProgress, ThemeToken,
};

use super::file::{CatalogFile, MethodologyEntry};
use crate::error::CatalogError;

const BUNDLED_CATALOG: &str = include_str!("sample_catalog.json");

/// A methodology together with its ordered fiches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    methodology: Methodology,
    fiches: Vec<Fiche>,
    initially_seen: Vec<FicheId>,
}

impl CatalogEntry {
    /// The methodology with an untouched progress snapshot.
    #[must_use]
    pub fn methodology(&self) -> &Methodology {
        &self.methodology
    }

    #[must_use]
    pub fn fiches(&self) -> &[Fiche] {
        &self.fiches
    }

    /// Fiches the catalog declares as already seen (`fichesSeen`).
    #[must_use]
    pub fn initially_seen(&self) -> &[FicheId] {
        &self.initially_seen
    }

    #[must_use]
    pub fn contains_fiche(&self, id: FicheId) -> bool {
        self.fiches.iter().any(|fiche| fiche.id() == id)
    }
}

/// Read-only catalog of methodologies and their fiches.
#[derive(Debug, Clone)]
pub struct CatalogService {
    entries: Vec<CatalogEntry>,
}

impl CatalogService {
    /// Parse and validate a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed input, `CatalogError::Empty`
    /// when no methodology is declared, and the duplicate/validation variants
    /// for inconsistent content.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let service = Self::from_file(file).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected catalog");
        })?;
        tracing::info!(
            methodologies = service.entries.len(),
            fiches = service.entries.iter().map(|e| e.fiches.len()).sum::<usize>(),
            "catalog loaded"
        );
        Ok(service)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// same errors as [`CatalogService::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "reading catalog");
        Self::from_json(&json)
    }

    /// The sample PCSI catalog shipped with the application.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file itself is broken.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: MethodologyId) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.methodology.id() == id)
    }

    fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        if file.methodologies.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen_ids = HashSet::new();
        let mut entries = Vec::with_capacity(file.methodologies.len());
        for entry in file.methodologies {
            if !seen_ids.insert(entry.id) {
                return Err(CatalogError::DuplicateMethodology(entry.id));
            }
            entries.push(build_entry(entry)?);
        }

        Ok(Self { entries })
    }
}

fn build_entry(entry: MethodologyEntry) -> Result<CatalogEntry, CatalogError> {
    let methodology_id = entry.id;

    let mut fiche_ids = HashSet::new();
    let mut fiches = Vec::with_capacity(entry.fiches.len());
    for fiche in entry.fiches {
        if !fiche_ids.insert(fiche.id) {
            return Err(CatalogError::DuplicateFiche {
                methodology: methodology_id,
                fiche: fiche.id,
            });
        }
        fiches.push(FicheDraft::from(fiche).validate()?);
    }

    let total = u32::try_from(fiches.len()).unwrap_or(u32::MAX);
    let methodology = Methodology::new(
        methodology_id,
        entry.title,
        entry.description,
        ThemeToken::new(entry.color),
        MethodologyProgress::untouched(total),
    )?;

    Ok(CatalogEntry {
        methodology,
        fiches,
        initially_seen: entry.fiches_seen,
    })
}
