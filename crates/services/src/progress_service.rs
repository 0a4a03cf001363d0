use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use methodo_core::Clock;
use methodo_core::model::{Fiche, FicheId, MethodologyId, MethodologyProgress};

use crate::error::ProgressError;

type Ledger = HashMap<MethodologyId, BTreeMap<FicheId, DateTime<Utc>>>;

/// In-memory record of which fiches were seen, and when.
///
/// Lives for the process only; nothing is written to disk.
#[derive(Debug)]
pub struct ProgressService {
    clock: Clock,
    ledger: Mutex<Ledger>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            ledger: Mutex::new(HashMap::new()),
        }
    }

    /// Mark the given fiches as seen without reporting them as new.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Poisoned` if the ledger lock is poisoned.
    pub fn seed(
        &self,
        methodology_id: MethodologyId,
        seen: &[FicheId],
    ) -> Result<(), ProgressError> {
        let now = self.clock.now();
        let mut ledger = self.ledger.lock().map_err(|_| ProgressError::Poisoned)?;
        let fiches = ledger.entry(methodology_id).or_default();
        for fiche_id in seen {
            fiches.entry(*fiche_id).or_insert(now);
        }
        Ok(())
    }

    /// Record that a fiche was seen. Returns `true` only the first time.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Poisoned` if the ledger lock is poisoned.
    pub fn record_seen(
        &self,
        methodology_id: MethodologyId,
        fiche_id: FicheId,
    ) -> Result<bool, ProgressError> {
        let now = self.clock.now();
        let mut ledger = self.ledger.lock().map_err(|_| ProgressError::Poisoned)?;
        let fiches = ledger.entry(methodology_id).or_default();
        if fiches.contains_key(&fiche_id) {
            tracing::debug!(%methodology_id, %fiche_id, "fiche already recorded");
            return Ok(false);
        }
        fiches.insert(fiche_id, now);
        tracing::debug!(%methodology_id, %fiche_id, "fiche recorded as seen");
        Ok(true)
    }

    /// Seen fiches of a methodology, in id order.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Poisoned` if the ledger lock is poisoned.
    pub fn seen(&self, methodology_id: MethodologyId) -> Result<Vec<FicheId>, ProgressError> {
        let ledger = self.ledger.lock().map_err(|_| ProgressError::Poisoned)?;
        Ok(ledger
            .get(&methodology_id)
            .map(|fiches| fiches.keys().copied().collect())
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Poisoned` if the ledger lock is poisoned.
    pub fn seen_at(
        &self,
        methodology_id: MethodologyId,
        fiche_id: FicheId,
    ) -> Result<Option<DateTime<Utc>>, ProgressError> {
        let ledger = self.ledger.lock().map_err(|_| ProgressError::Poisoned)?;
        Ok(ledger
            .get(&methodology_id)
            .and_then(|fiches| fiches.get(&fiche_id))
            .copied())
    }

    /// Progress snapshot for a methodology.
    ///
    /// `fiches_seen` lists every recorded id, including ids that are not part
    /// of `fiches`; `completed` only counts fiches present in `fiches`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Poisoned` if the ledger lock is poisoned.
    pub fn progress_for(
        &self,
        methodology_id: MethodologyId,
        fiches: &[Fiche],
    ) -> Result<MethodologyProgress, ProgressError> {
        let fiches_seen = self.seen(methodology_id)?;
        let completed = fiches
            .iter()
            .filter(|fiche| fiches_seen.contains(&fiche.id()))
            .count();

        Ok(MethodologyProgress {
            completed: u32::try_from(completed).unwrap_or(u32::MAX),
            total: u32::try_from(fiches.len()).unwrap_or(u32::MAX),
            fiches_seen,
        })
    }
}
