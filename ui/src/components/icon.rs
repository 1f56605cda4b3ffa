use dioxus::prelude::*;

use crate::core::icon::Icon;

/// Inline SVG rendering of a feature glyph. Purely decorative.
#[component]
pub fn IconGlyph(icon: Icon) -> Element {
    rsx! {
        svg {
            class: "icon",
            "data-icon": "{icon.id()}",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon.paths() {
                path { d: "{d}" }
            }
        }
    }
}
