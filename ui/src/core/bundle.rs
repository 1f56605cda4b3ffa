//! Strongly typed translation bundle: the display strings for one language.

/// Hero copy. `title` and `description` are also reused by the closing
/// call-to-action section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeroText {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta: String,
}

/// One title/description pair of the feature grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureText {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeaturesText {
    pub title: String,
    pub subtitle: String,
    pub ai_powered: FeatureText,
    pub real_time: FeatureText,
    pub privacy: FeatureText,
    pub user_friendly: FeatureText,
}

/// Strings used by the application shell around the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavText {
    pub brand_tagline: String,
    pub language_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardText {
    pub title: String,
    pub body: String,
}

/// Read-only record of every string the landing page and its shell display
/// for a single language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationBundle {
    pub hero: HeroText,
    pub features: FeaturesText,
    pub nav: NavText,
    pub dashboard: DashboardText,
}
