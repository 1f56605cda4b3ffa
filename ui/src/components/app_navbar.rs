use crate::core::landing::DASHBOARD_ROUTE;
use crate::i18n::{self, DEFAULT_LANGUAGE};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` producing router `Link` elements, so
/// `ui` never needs to know each platform's `Route` enum.
///
/// If no builder is registered, [`DashboardLink`] degrades to a plain anchor
/// pointing at [`DASHBOARD_ROUTE`] (this is what server-side rendering and
/// tests see).
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// fn nav_dashboard(label: &str, class: &str) -> Element {
///     rsx!(Link { class: "{class}", to: Route::Dashboard {}, "{label}" })
/// }
/// register_nav(NavBuilder { dashboard: nav_dashboard });
/// ```
pub struct NavBuilder {
    /// Returns a link to the dashboard whose only child is `label`.
    pub dashboard: fn(label: &str, class: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered");
    }
}

/// Affordance that requests the dashboard route. Navigation itself is left to
/// the router.
#[component]
pub fn DashboardLink(label: String, class: String) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.dashboard)(&label, &class),
        None => rsx! {
            a {
                class: "{class}",
                href: DASHBOARD_ROUTE,
                "data-route": DASHBOARD_ROUTE,
                "{label}"
            }
        },
    }
}

/// Current language code from the shared `Signal<String>` context, or
/// [`DEFAULT_LANGUAGE`] when no shell provided one.
pub fn use_language_code() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

#[component]
pub fn AppNavbar() -> Element {
    let table = i18n::translations();
    let langs: Vec<String> = table.codes().map(str::to_owned).collect();
    let show_switcher = langs.len() > 1;

    // Global language code signal provided by the platform shell.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current = lang_code_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    tracing::debug!(lang = %current, "AppNavbar render");

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        if let Some(mut code) = lang_code_ctx {
            code.set(val);
        }
    };

    let bundle = table.resolve(&current);
    let tagline = bundle.nav.brand_tagline.clone();
    let language_label = bundle.nav.language_label.clone();
    let dashboard_label = bundle.dashboard.title.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Spendwise" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                nav { class: "navbar__links",
                    DashboardLink { label: dashboard_label, class: "navbar__link".to_string() }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            "{language_label}"
                        }
                        select {
                            id: "locale-select",
                            value: "{current}",
                            oninput: on_change,
                            for code in langs {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == current,
                                    "{code}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
