use dioxus::prelude::*;

use crate::vm::{FicheCardVm, FicheDetailVm, FicheIntent, MARK_SEEN_LABEL};

#[component]
pub(super) fn FicheCard(card: FicheCardVm, on_intent: EventHandler<FicheIntent>) -> Element {
    let id = card.id;
    let (indicator, indicator_class) = if card.is_completed {
        ("●", "fiche-indicator fiche-indicator--filled")
    } else {
        ("○", "fiche-indicator")
    };
    let title_class = if card.is_completed {
        "fiche-card__title fiche-card__title--completed"
    } else {
        "fiche-card__title"
    };

    rsx! {
        article { class: "{card.card_class}", "data-fiche": "{id}",
            header { class: "fiche-card__header",
                div { class: "fiche-card__heading",
                    div { class: "fiche-card__meta",
                        button {
                            class: "{indicator_class}",
                            r#type: "button",
                            title: MARK_SEEN_LABEL,
                            onclick: move |_| on_intent.call(FicheIntent::MarkComplete(id)),
                            "{indicator}"
                        }
                        span { class: "badge badge-outline", "{card.group}" }
                        if card.is_completed {
                            span { class: "badge badge-success fiche-completed-badge", "Vue" }
                        }
                    }
                    h3 { class: "{title_class}", "{card.title}" }
                    p { class: "fiche-card__summary", "{card.summary}" }
                }
                if let Some(numero) = card.numero_label.clone() {
                    span { class: "badge badge-secondary fiche-numero", "{numero}" }
                }
            }
            div { class: "fiche-card__body",
                div { class: "fiche-concepts",
                    h4 { "💡 Concepts clés" }
                    div { class: "pill-row",
                        for concept in card.concepts.iter() {
                            span { class: "badge badge-secondary", "{concept}" }
                        }
                    }
                }
                div { class: "fiche-actions",
                    button {
                        class: "btn btn-outline fiche-toggle",
                        r#type: "button",
                        onclick: move |_| on_intent.call(FicheIntent::ToggleExpansion(id)),
                        "📖 {card.toggle_label}"
                    }
                    if card.show_mark_seen {
                        button {
                            class: "btn btn-primary fiche-mark-seen",
                            r#type: "button",
                            onclick: move |_| on_intent.call(FicheIntent::MarkComplete(id)),
                            "{MARK_SEEN_LABEL}"
                        }
                    }
                }
                if let Some(detail) = card.detail.clone() {
                    FicheDetail { detail }
                }
            }
        }
    }
}

#[component]
fn FicheDetail(detail: FicheDetailVm) -> Element {
    rsx! {
        div { class: "fiche-detail",
            h4 { "Développement détaillé" }
            for section in detail.sections.iter() {
                div { class: "fiche-detail__section",
                    h5 { "{section.title}" }
                    p { class: "muted", "{section.content}" }
                }
            }
            div { class: "fiche-detail__questions",
                h5 { "📝 Questions de réflexion" }
                ul {
                    for question in detail.questions.iter() {
                        li { class: "muted", "• {question}" }
                    }
                }
            }
        }
    }
}
