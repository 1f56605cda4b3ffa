use dioxus::prelude::*;

use crate::components::use_language_code;
use crate::views::LandingPage;

/// Route-level wrapper: subscribes to the shell's language signal so a
/// language change re-renders the landing page.
#[component]
pub fn Home() -> Element {
    let language = use_language_code();
    rsx! {
        LandingPage { language }
    }
}
