use std::collections::BTreeSet;

use crate::model::ids::FicheId;

/// Fiches the learner has marked as seen during the current session.
///
/// No removal: once a fiche is in the set it stays there for the lifetime
/// of the value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionSet {
    seen: BTreeSet<FicheId>,
}

impl CompletionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a progress snapshot's `fiches_seen`.
    #[must_use]
    pub fn from_seen<'a>(seen: impl IntoIterator<Item = &'a FicheId>) -> Self {
        Self {
            seen: seen.into_iter().copied().collect(),
        }
    }

    /// Returns `true` if the fiche was not already present.
    pub fn insert(&mut self, id: FicheId) -> bool {
        self.seen.insert(id)
    }

    #[must_use]
    pub fn contains(&self, id: FicheId) -> bool {
        self.seen.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FicheId> + '_ {
        self.seen.iter().copied()
    }
}
