use thiserror::Error;

use crate::model::ids::{FicheId, MethodologyId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MethodologyError {
    #[error("methodology title cannot be empty")]
    EmptyTitle,
}

//
// ─── THEME ─────────────────────────────────────────────────────────────────────
//

/// Opaque display token (a CSS class list) used to tint a methodology banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeToken(String);

impl ThemeToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().trim().to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Aggregate progress of a methodology, computed by whoever owns the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MethodologyProgress {
    pub completed: u32,
    pub total: u32,
    pub fiches_seen: Vec<FicheId>,
}

impl MethodologyProgress {
    /// Progress with nothing seen yet.
    #[must_use]
    pub fn untouched(total: u32) -> Self {
        Self {
            completed: 0,
            total,
            fiches_seen: Vec::new(),
        }
    }

    /// Label shown in the methodology header, e.g. `2 / 5 fiches vues`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {} fiches vues", self.completed, self.total)
    }
}

//
// ─── METHODOLOGY ───────────────────────────────────────────────────────────────
//

/// A named collection of fiches, with the progress snapshot it was rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Methodology {
    id: MethodologyId,
    title: String,
    description: String,
    color: ThemeToken,
    progress: MethodologyProgress,
}

impl Methodology {
    /// # Errors
    ///
    /// Returns `MethodologyError::EmptyTitle` if the title is blank.
    pub fn new(
        id: MethodologyId,
        title: impl Into<String>,
        description: impl Into<String>,
        color: ThemeToken,
        progress: MethodologyProgress,
    ) -> Result<Self, MethodologyError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(MethodologyError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            color,
            progress,
        })
    }

    /// Same methodology with a fresh progress snapshot.
    #[must_use]
    pub fn with_progress(mut self, progress: MethodologyProgress) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub fn id(&self) -> MethodologyId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn color(&self) -> &ThemeToken {
        &self.color
    }

    #[must_use]
    pub fn progress(&self) -> &MethodologyProgress {
        &self.progress
    }
}
