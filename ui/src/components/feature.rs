use dioxus::prelude::*;

use crate::components::IconGlyph;
use crate::core::icon::Icon;

/// One cell of the feature grid: icon badge, title and description, stacked
/// and centered.
#[component]
pub fn Feature(icon: Icon, title: String, description: String) -> Element {
    rsx! {
        div { class: "feature",
            div { class: "feature__icon",
                IconGlyph { icon }
            }
            h3 { class: "feature__title", "{title}" }
            p { class: "feature__description", "{description}" }
        }
    }
}
