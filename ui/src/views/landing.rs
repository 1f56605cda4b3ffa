use dioxus::prelude::*;

use crate::components::{DashboardLink, Feature};
use crate::core::landing::LandingContent;
use crate::i18n;

/// Marketing landing page: hero, feature grid and closing call to action,
/// all read from the bundle for `language`.
///
/// Unknown codes render the fallback bundle in full (see
/// [`i18n::TranslationTable::resolve`]).
#[component]
pub fn LandingPage(language: String) -> Element {
    let bundle = i18n::translations().resolve(&language);
    let LandingContent {
        hero,
        features,
        call_to_action,
    } = LandingContent::compose(bundle);

    tracing::debug!(lang = %language, "LandingPage render");

    rsx! {
        div { class: "landing",
            section { class: "landing__hero",
                div { class: "landing__container",
                    h1 { class: "landing__headline",
                        span { class: "landing__headline-title", "{hero.title}" }
                        span { class: "landing__headline-subtitle", "{hero.subtitle}" }
                    }
                    p { class: "landing__lead", "{hero.description}" }
                    div { class: "landing__actions",
                        DashboardLink {
                            label: hero.action.label.clone(),
                            class: "button button--primary".to_string(),
                        }
                    }
                }
            }

            section { class: "landing__features",
                div { class: "landing__container",
                    div { class: "landing__section-header",
                        h2 { class: "landing__eyebrow", "{features.title}" }
                        p { class: "landing__section-title", "{features.subtitle}" }
                    }
                    div { class: "feature-grid",
                        for (id, item) in features.items.into_iter().map(|item| (item.icon.id(), item)) {
                            Feature {
                                key: "{id}",
                                icon: item.icon,
                                title: item.title,
                                description: item.description,
                            }
                        }
                    }
                }
            }

            section { class: "landing__cta",
                div { class: "landing__container",
                    h2 { class: "landing__cta-title", "{call_to_action.title}" }
                    p { class: "landing__cta-text", "{call_to_action.description}" }
                    DashboardLink {
                        label: call_to_action.action.label,
                        class: "button button--inverse".to_string(),
                    }
                }
            }
        }
    }
}
