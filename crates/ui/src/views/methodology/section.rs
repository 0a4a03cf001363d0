use dioxus::prelude::*;
use methodo_core::model::{Fiche, FicheId, Methodology, MethodologyId};

use crate::vm::{FicheIntent, MethodologyVm, map_fiche_cards};

use super::fiche_card::FicheCard;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Fiche list of one methodology.
///
/// Completion and expansion state is seeded from `methodology` on mount and
/// kept locally afterwards; later `methodology` props only refresh the header.
/// `on_progress` fires once per newly completed fiche.
#[component]
pub fn MethodologySection(
    methodology: Methodology,
    fiches: Vec<Fiche>,
    on_back: EventHandler<()>,
    on_progress: EventHandler<(MethodologyId, FicheId)>,
) -> Element {
    let seed = methodology.clone();
    let mut vm = use_signal(move || MethodologyVm::new(&seed));

    let dispatch_intent = use_callback(move |intent: FicheIntent| {
        tracing::debug!(?intent, "fiche intent");
        // The write guard must be released before the parent handler runs.
        let reported = vm.write().apply(intent);
        if let Some(event) = reported {
            on_progress.call(event);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<MethodologyTestHandles>() {
                handles.register(dispatch_intent, on_back, vm);
            }
        }
    }

    let cards = map_fiche_cards(&fiches, &vm.read());
    let title = methodology.title();
    let description = methodology.description();
    let banner_class = methodology.color().as_str();
    let progress_label = methodology.progress().label();

    rsx! {
        div { class: "page methodology-page",
            header { class: "view-header methodology-header",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "← Retour"
                }
                div { class: "methodology-heading",
                    h1 { class: "view-title", "{title}" }
                    p { class: "view-subtitle", "{description}" }
                }
                span { class: "badge badge-secondary methodology-progress", "{progress_label}" }
            }
            div { class: "banner {banner_class}",
                h3 { class: "banner-title", "🎓 Fiches méthodologiques pour le programme PCSI" }
            }
            section { class: "fiche-list",
                h2 { class: "section-title", "Fiches méthodologiques" }
                for card in cards {
                    FicheCard { key: "{card.id}", card, on_intent: dispatch_intent }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct MethodologyTestHandles {
    dispatch: Rc<RefCell<Option<Callback<FicheIntent>>>>,
    back: Rc<RefCell<Option<EventHandler<()>>>>,
    vm: Rc<RefCell<Option<Signal<MethodologyVm>>>>,
}

#[cfg(test)]
impl MethodologyTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<FicheIntent>,
        back: EventHandler<()>,
        vm: Signal<MethodologyVm>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.back.borrow_mut() = Some(back);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<FicheIntent> {
        (*self.dispatch.borrow()).expect("fiche dispatch registered")
    }

    pub(crate) fn back(&self) -> EventHandler<()> {
        (*self.back.borrow()).expect("back handler registered")
    }

    pub(crate) fn vm(&self) -> Signal<MethodologyVm> {
        (*self.vm.borrow()).expect("methodology vm registered")
    }
}
