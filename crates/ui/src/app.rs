use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;

/// Window root: stylesheet, window title from the catalog's app name, and the
/// router behind an error boundary.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.app_name().to_string();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    tracing::error!(?errors, "view crashed");
                    rsx! { FatalView { details: format!("{errors:?}") } }
                },
                Router::<Route> {}
            }
        }
    }
}

#[component]
pub fn FatalView(details: String) -> Element {
    rsx! {
        div { class: "page fatal",
            h1 { class: "view-title", "Impossible d'afficher les fiches" }
            p { class: "empty", "Relance l'application ; ta progression de la session est perdue." }
            pre { class: "fatal-details", "{details}" }
        }
    }
}
