mod fiche_card_vm;
mod methodology_list_vm;
mod methodology_vm;

pub use fiche_card_vm::{
    FicheCardVm, FicheDetailVm, HIDE_DETAIL_LABEL, MARK_SEEN_LABEL, SHOW_DETAIL_LABEL,
    build_fiche_card, map_fiche_cards,
};
pub use methodology_list_vm::{MethodologyListItemVm, map_methodology_list};
pub use methodology_vm::{ExpansionCursor, FicheIntent, MethodologyVm};
