use thiserror::Error;

use crate::model::ids::FicheId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FicheError {
    #[error("fiche {id} has an empty title")]
    EmptyTitle { id: FicheId },
}

//
// ─── FICHE TYPES ───────────────────────────────────────────────────────────────
//

/// One titled block of the detailed development of a fiche.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedSection {
    pub title: String,
    pub content: String,
}

impl DetailedSection {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Unvalidated fiche fields, as read from a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FicheDraft {
    pub id: FicheId,
    pub group: String,
    pub title: String,
    pub summary: String,
    pub concepts: Vec<String>,
    pub numero: Option<u32>,
    pub detailed_sections: Vec<DetailedSection>,
    pub questions: Vec<String>,
}

impl FicheDraft {
    /// # Errors
    ///
    /// Returns `FicheError::EmptyTitle` if the title is blank.
    pub fn validate(self) -> Result<Fiche, FicheError> {
        if self.title.trim().is_empty() {
            return Err(FicheError::EmptyTitle { id: self.id });
        }

        Ok(Fiche {
            id: self.id,
            group: self.group,
            title: self.title,
            summary: self.summary,
            concepts: self.concepts,
            numero: self.numero,
            detailed_sections: self.detailed_sections,
            questions: self.questions,
        })
    }
}

/// A study sheet covering one methodological topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fiche {
    id: FicheId,
    group: String,
    title: String,
    summary: String,
    concepts: Vec<String>,
    numero: Option<u32>,
    detailed_sections: Vec<DetailedSection>,
    questions: Vec<String>,
}

impl Fiche {
    #[must_use]
    pub fn id(&self) -> FicheId {
        self.id
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    #[must_use]
    pub fn numero(&self) -> Option<u32> {
        self.numero
    }

    #[must_use]
    pub fn detailed_sections(&self) -> &[DetailedSection] {
        &self.detailed_sections
    }

    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}
