//! Fixed ordering of the feature grid.

use super::bundle::{FeatureText, FeaturesText};
use super::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    AiPowered,
    RealTime,
    Privacy,
    UserFriendly,
}

impl FeatureKind {
    /// Display order of the grid. Independent of bundle content.
    pub const ORDER: [FeatureKind; 4] = [
        FeatureKind::AiPowered,
        FeatureKind::RealTime,
        FeatureKind::Privacy,
        FeatureKind::UserFriendly,
    ];

    pub fn icon(self) -> Icon {
        match self {
            FeatureKind::AiPowered => Icon::Brain,
            FeatureKind::RealTime => Icon::TrendingUp,
            FeatureKind::Privacy => Icon::Shield,
            FeatureKind::UserFriendly => Icon::Users,
        }
    }

    /// The bundle pair that supplies this feature's title and description.
    pub fn text(self, features: &FeaturesText) -> &FeatureText {
        match self {
            FeatureKind::AiPowered => &features.ai_powered,
            FeatureKind::RealTime => &features.real_time,
            FeatureKind::Privacy => &features.privacy,
            FeatureKind::UserFriendly => &features.user_friendly,
        }
    }
}

/// One cell of the feature grid, rebuilt on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureItem {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

impl FeatureItem {
    pub fn new(kind: FeatureKind, features: &FeaturesText) -> Self {
        let text = kind.text(features);
        Self {
            icon: kind.icon(),
            title: text.title.clone(),
            description: text.description.clone(),
        }
    }
}

/// All four items, in [`FeatureKind::ORDER`].
pub fn feature_items(features: &FeaturesText) -> [FeatureItem; 4] {
    FeatureKind::ORDER.map(|kind| FeatureItem::new(kind, features))
}
