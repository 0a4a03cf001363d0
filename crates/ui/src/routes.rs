use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, MethodologyView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/methodology/:methodology_id", MethodologyView)] Methodology { methodology_id: u64 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "topbar",
                Link { to: Route::Home {}, class: "topbar-title", "Fiches PCSI" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
