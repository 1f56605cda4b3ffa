//! Shared UI crate for Spendwise. The landing page, its translation table and
//! the navbar live here; platform crates only own routing and launch.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar and navigation registration (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::use_language_code;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::DashboardLink;
    pub use app_navbar::NavBuilder;

    mod feature;
    pub use feature::Feature;

    mod icon;
    pub use icon::IconGlyph;
}
