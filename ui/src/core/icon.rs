//! The four decorative glyphs of the feature grid.
//!
//! Path data follows the Lucide icon set (24x24 viewbox, stroke based).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Brain,
    TrendingUp,
    Shield,
    Users,
}

impl Icon {
    /// Stable identifier, exposed in markup as `data-icon`.
    pub fn id(self) -> &'static str {
        match self {
            Icon::Brain => "brain",
            Icon::TrendingUp => "trending-up",
            Icon::Shield => "shield",
            Icon::Users => "users",
        }
    }

    /// SVG `d` attributes drawn with `stroke="currentColor"`.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Brain => &[
                "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
                "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
                "M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4",
                "M12 5v13",
            ],
            Icon::TrendingUp => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
            Icon::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0a4 4 0 1 1 8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 4] = [Icon::Brain, Icon::TrendingUp, Icon::Shield, Icon::Users];

    #[test]
    fn ids_are_distinct_kebab_case() {
        let mut ids: Vec<_> = ALL.iter().map(|i| i.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ALL.len());
        for id in ids {
            assert!(id.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{id}");
        }
    }

    #[test]
    fn every_icon_has_path_data() {
        for icon in ALL {
            assert!(!icon.paths().is_empty(), "{icon} has no paths");
            assert!(icon.paths().iter().all(|d| d.starts_with('M')));
        }
    }
}
