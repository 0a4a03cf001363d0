use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{MethodologyListItemVm, map_methodology_list};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let launch_ctx = ctx.clone();
    use_effect(move || {
        if let Some(methodology_id) = launch_ctx.take_initial_methodology() {
            let _ = navigator.replace(Route::Methodology { methodology_id });
        }
    });

    let items = ctx
        .methodologies()
        .list_methodologies()
        .map(|methodologies| map_methodology_list(&methodologies))
        .map_err(|err| {
            tracing::warn!(error = %err, "failed to list methodologies");
            ViewError::Unknown
        });

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "{ctx.app_name()}" }
                p { class: "view-subtitle", "Choisis une méthodologie pour parcourir ses fiches." }
            }
            div { class: "view-divider" }
            match items {
                Ok(items) if items.is_empty() => rsx! {
                    p { class: "empty", "Aucune méthodologie dans le catalogue." }
                },
                Ok(items) => rsx! {
                    ul { class: "methodology-list",
                        for item in items {
                            MethodologyRow { key: "{item.id}", item }
                        }
                    }
                },
                Err(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn MethodologyRow(item: MethodologyListItemVm) -> Element {
    let methodology_id = item.id.value();
    let row_class = if item.is_finished {
        "methodology-row methodology-row--finished"
    } else {
        "methodology-row"
    };

    rsx! {
        li { class: "{row_class} {item.color_class}",
            Link { to: Route::Methodology { methodology_id },
                div { class: "methodology-row__text",
                    h3 { "{item.title}" }
                    p { class: "muted", "{item.description}" }
                }
                span { class: "badge badge-secondary", "{item.progress_label}" }
            }
        }
    }
}
