use methodo_core::model::{CompletionSet, FicheId, Methodology, MethodologyId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FicheIntent {
    ToggleExpansion(FicheId),
    MarkComplete(FicheId),
}

/// The single fiche whose detail panel is open, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpansionCursor(Option<FicheId>);

impl ExpansionCursor {
    #[must_use]
    pub fn current(&self) -> Option<FicheId> {
        self.0
    }

    #[must_use]
    pub fn is_expanded(&self, id: FicheId) -> bool {
        self.0 == Some(id)
    }

    /// Collapse if `id` is open, otherwise open `id` and close anything else.
    pub fn toggle(&mut self, id: FicheId) {
        self.0 = if self.is_expanded(id) { None } else { Some(id) };
    }
}

/// Session-local state of a methodology's fiche list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodologyVm {
    methodology_id: MethodologyId,
    completed: CompletionSet,
    expanded: ExpansionCursor,
}

impl MethodologyVm {
    /// Seeds the completion set from `methodology.progress().fiches_seen`.
    #[must_use]
    pub fn new(methodology: &Methodology) -> Self {
        Self {
            methodology_id: methodology.id(),
            completed: CompletionSet::from_seen(&methodology.progress().fiches_seen),
            expanded: ExpansionCursor::default(),
        }
    }

    #[must_use]
    pub fn methodology_id(&self) -> MethodologyId {
        self.methodology_id
    }

    #[must_use]
    pub fn completed(&self) -> &CompletionSet {
        &self.completed
    }

    #[must_use]
    pub fn expanded(&self) -> Option<FicheId> {
        self.expanded.current()
    }

    #[must_use]
    pub fn is_completed(&self, id: FicheId) -> bool {
        self.completed.contains(id)
    }

    #[must_use]
    pub fn is_expanded(&self, id: FicheId) -> bool {
        self.expanded.is_expanded(id)
    }

    /// Mark a fiche as seen. `on_progress` runs only when the fiche was not
    /// already completed; returns whether it ran.
    pub fn mark_complete(
        &mut self,
        id: FicheId,
        on_progress: impl FnOnce(MethodologyId, FicheId),
    ) -> bool {
        if !self.completed.insert(id) {
            return false;
        }
        on_progress(self.methodology_id, id);
        true
    }

    pub fn toggle_expansion(&mut self, id: FicheId) {
        self.expanded.toggle(id);
    }

    /// Apply an intent. Returns the progress event to forward, if any.
    pub fn apply(&mut self, intent: FicheIntent) -> Option<(MethodologyId, FicheId)> {
        match intent {
            FicheIntent::ToggleExpansion(id) => {
                self.toggle_expansion(id);
                None
            }
            FicheIntent::MarkComplete(id) => {
                let mut reported = None;
                self.mark_complete(id, |methodology_id, fiche_id| {
                    reported = Some((methodology_id, fiche_id));
                });
                reported
            }
        }
    }
}
