//! On-disk shape of a catalog. Field names follow the JSON the content team
//! writes (`fichesSeen`, `fiche_numero`, `detailedSections`).

use serde::Deserialize;

use methodo_core::model::{DetailedSection, FicheDraft, FicheId, MethodologyId};

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogFile {
    #[serde(default)]
    pub methodologies: Vec<MethodologyEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MethodologyEntry {
    pub id: MethodologyId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "fichesSeen", default)]
    pub fiches_seen: Vec<FicheId>,
    #[serde(default)]
    pub fiches: Vec<FicheEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FicheEntry {
    pub id: FicheId,
    #[serde(default)]
    pub group: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub concepts: Vec<String>,
    #[serde(rename = "fiche_numero", default)]
    pub numero: Option<u32>,
    #[serde(rename = "detailedSections", default)]
    pub detailed_sections: Vec<SectionEntry>,
    #[serde(default)]
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SectionEntry {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl From<FicheEntry> for FicheDraft {
    fn from(entry: FicheEntry) -> Self {
        FicheDraft {
            id: entry.id,
            group: entry.group,
            title: entry.title,
            summary: entry.summary,
            concepts: entry.concepts,
            numero: entry.numero,
            detailed_sections: entry
                .detailed_sections
                .into_iter()
                .map(|section| DetailedSection::new(section.title, section.content))
                .collect(),
            questions: entry.questions,
        }
    }
}
