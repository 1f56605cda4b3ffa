use dioxus::prelude::*;

use crate::components::use_language_code;
use crate::i18n;

/// Placeholder target of the landing page call to action.
#[component]
pub fn Dashboard() -> Element {
    let language = use_language_code();
    let text = i18n::translations().resolve(&language).dashboard.clone();

    rsx! {
        section { class: "page page-dashboard",
            h1 { "{text.title}" }
            p { "{text.body}" }
        }
    }
}
