use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use methodo_core::model::{FicheId, MethodologyId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

use super::section::MethodologySection;

/// Route-level screen: resolves the methodology and wires the section's
/// callbacks to navigation and the progress ledger.
#[component]
pub fn MethodologyView(methodology_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut revision = use_signal(|| 0_u64);

    // Re-read the ledger whenever a fiche is recorded.
    let _ = revision();

    let methodologies = ctx.methodologies();
    let loaded = methodologies
        .get_methodology(MethodologyId::new(methodology_id))
        .map_err(|err| {
            tracing::warn!(error = %err, methodology_id, "failed to load methodology");
            ViewError::Unknown
        })
        .and_then(|sheets| sheets.ok_or(ViewError::NotFound));

    match loaded {
        Ok(sheets) => {
            let recorder = ctx.methodologies();
            rsx! {
                MethodologySection {
                    key: "{methodology_id}",
                    methodology: sheets.methodology,
                    fiches: sheets.fiches,
                    on_back: move |()| {
                        let _ = navigator.push(Route::Home {});
                    },
                    on_progress: move |(methodology_id, fiche_id): (MethodologyId, FicheId)| {
                        match recorder.record_progress(methodology_id, fiche_id) {
                            Ok(_) => *revision.write() += 1,
                            Err(err) => {
                                tracing::warn!(error = %err, %methodology_id, %fiche_id, "failed to record progress");
                            }
                        }
                    },
                }
            }
        }
        Err(err) => rsx! {
            div { class: "page",
                p { "{err.message()}" }
                Link { to: Route::Home {}, class: "btn btn-secondary", "Retour" }
            }
        },
    }
}
