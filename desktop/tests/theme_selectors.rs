#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Ensures the classes emitted by the shared landing components (`ui/src/views/landing.rs`,
`ui/src/components/feature.rs`) keep a matching rule in `ui/assets/theme/main.css`.
If you rename a class in the markup, adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--inverse",
    // Landing regions
    ".landing {",
    ".landing__hero",
    ".landing__headline",
    ".landing__headline-subtitle",
    ".landing__lead",
    ".landing__actions",
    ".landing__features",
    ".landing__eyebrow",
    ".landing__section-title",
    ".landing__cta",
    ".landing__cta-title",
    ".landing__cta-text",
    // Feature grid
    ".feature-grid",
    ".feature {",
    ".feature__icon",
    ".feature__title",
    ".feature__description",
    // Responsive grid collapse
    "@media (max-width: 1024px)",
    "@media (max-width: 640px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.iter().map(|s| s.to_string()).collect::<Vec<_>>().join("\n")
        );
    }
}

#[test]
fn feature_grid_has_responsive_breakpoints() {
    let grid_rules = THEME_CSS.matches(".feature-grid {").count();
    assert!(
        grid_rules >= 3,
        "Expected base + two responsive `.feature-grid` rules, found {grid_rules}"
    );
}
