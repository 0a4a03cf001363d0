use methodo_core::model::{DetailedSection, Fiche, FicheId};

use super::methodology_vm::MethodologyVm;

pub const SHOW_DETAIL_LABEL: &str = "Voir le détail";
pub const HIDE_DETAIL_LABEL: &str = "Masquer le détail";
pub const MARK_SEEN_LABEL: &str = "Marquer comme vue";

/// UI-ready state of one fiche card. Derived, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FicheCardVm {
    pub id: FicheId,
    pub group: String,
    pub title: String,
    pub summary: String,
    pub concepts: Vec<String>,
    pub numero_label: Option<String>,
    pub is_completed: bool,
    pub is_expanded: bool,
    pub card_class: &'static str,
    pub toggle_label: &'static str,
    pub show_mark_seen: bool,
    pub detail: Option<FicheDetailVm>,
}

/// Content of the open detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FicheDetailVm {
    pub sections: Vec<DetailedSection>,
    pub questions: Vec<String>,
}

/// Map fiches, in order, to card view models for the current state.
#[must_use]
pub fn map_fiche_cards(fiches: &[Fiche], vm: &MethodologyVm) -> Vec<FicheCardVm> {
    fiches
        .iter()
        .map(|fiche| {
            let id = fiche.id();
            build_fiche_card(fiche, vm.is_completed(id), vm.is_expanded(id))
        })
        .collect()
}

#[must_use]
pub fn build_fiche_card(fiche: &Fiche, is_completed: bool, is_expanded: bool) -> FicheCardVm {
    let detail = is_expanded.then(|| FicheDetailVm {
        sections: fiche.detailed_sections().to_vec(),
        questions: fiche.questions().to_vec(),
    });

    FicheCardVm {
        id: fiche.id(),
        group: fiche.group().to_owned(),
        title: fiche.title().to_owned(),
        summary: fiche.summary().to_owned(),
        concepts: fiche.concepts().to_vec(),
        numero_label: fiche.numero().map(|n| format!("#{n}")),
        is_completed,
        is_expanded,
        card_class: if is_completed {
            "fiche-card fiche-card--completed"
        } else {
            "fiche-card"
        },
        toggle_label: if is_expanded {
            HIDE_DETAIL_LABEL
        } else {
            SHOW_DETAIL_LABEL
        },
        show_mark_seen: !is_completed,
        detail,
    }
}
