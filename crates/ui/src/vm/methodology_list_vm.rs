use methodo_core::model::{Methodology, MethodologyId};

/// Row of the methodology list on the home screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodologyListItemVm {
    pub id: MethodologyId,
    pub title: String,
    pub description: String,
    pub color_class: String,
    pub progress_label: String,
    pub is_finished: bool,
}

#[must_use]
pub fn map_methodology_list(methodologies: &[Methodology]) -> Vec<MethodologyListItemVm> {
    methodologies
        .iter()
        .map(|methodology| {
            let progress = methodology.progress();
            MethodologyListItemVm {
                id: methodology.id(),
                title: methodology.title().to_owned(),
                description: methodology.description().to_owned(),
                color_class: methodology.color().as_str().to_owned(),
                progress_label: progress.label(),
                is_finished: progress.total > 0 && progress.completed >= progress.total,
            }
        })
        .collect()
}
