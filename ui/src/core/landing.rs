//! Landing page content, composed from a single bundle.
//!
//! The view in `views::landing` maps these regions to markup one-to-one, so
//! everything the page displays is decided here.

use super::bundle::TranslationBundle;
use super::features::{feature_items, FeatureItem};

/// Route requested by both call-to-action affordances.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// An interactive element that requests a route transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub label: String,
    pub route: &'static str,
}

impl Affordance {
    pub fn dashboard(label: &str) -> Self {
        Self {
            label: label.to_owned(),
            route: DASHBOARD_ROUTE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRegion {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub action: Affordance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturesRegion {
    pub title: String,
    pub subtitle: String,
    pub items: [FeatureItem; 4],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToActionRegion {
    pub title: String,
    pub description: String,
    pub action: Affordance,
}

/// The three stacked regions, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingContent {
    pub hero: HeroRegion,
    pub features: FeaturesRegion,
    pub call_to_action: CallToActionRegion,
}

impl LandingContent {
    pub fn compose(bundle: &TranslationBundle) -> Self {
        let hero = &bundle.hero;
        let action = Affordance::dashboard(&hero.cta);

        Self {
            hero: HeroRegion {
                title: hero.title.clone(),
                subtitle: hero.subtitle.clone(),
                description: hero.description.clone(),
                action: action.clone(),
            },
            features: FeaturesRegion {
                title: bundle.features.title.clone(),
                subtitle: bundle.features.subtitle.clone(),
                items: feature_items(&bundle.features),
            },
            call_to_action: CallToActionRegion {
                title: hero.title.clone(),
                description: hero.description.clone(),
                action,
            },
        }
    }

    /// Both affordances, hero first.
    pub fn affordances(&self) -> [&Affordance; 2] {
        [&self.hero.action, &self.call_to_action.action]
    }
}
