//! Navigation Links
//!
//! Projects the configured navigation targets into active-aware links for
//! the current location. Nothing here is stored; the projection is
//! recomputed whenever the location changes.

use super::router::Router;

/// A label and the path it links to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub label: String,
    pub path: String,
}

impl NavigationTarget {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// The entry represented by the brand mark
    pub fn is_home(&self) -> bool {
        self.path.trim_end_matches('/').is_empty()
    }
}

/// Primary navigation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    pub targets: Vec<NavigationTarget>,
    /// Leave the Home entry out of the rendered list (the logo links there)
    pub hide_home: bool,
}

impl NavConfig {
    /// Home, TV Shows, Movies
    pub fn standard() -> Self {
        Self {
            targets: vec![
                NavigationTarget::new("Home", "/"),
                NavigationTarget::new("TV Shows", "/tv"),
                NavigationTarget::new("Movies", "/movie"),
            ],
            hide_home: false,
        }
    }

    pub fn hide_home(mut self, hide: bool) -> Self {
        self.hide_home = hide;
        self
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// A rendered navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLink {
    pub label: String,
    pub path: String,
    pub active: bool,
}

impl ActiveLink {
    pub fn css_class(&self) -> &'static str {
        if self.active {
            "text-red-500"
        } else {
            "text-gray-300 hover:text-white"
        }
    }
}

/// Mark each visible target active or not. The router decides; nothing
/// here matches paths itself.
pub fn project_links(config: &NavConfig, router: &impl Router) -> Vec<ActiveLink> {
    config
        .targets
        .iter()
        .filter(|target| !(config.hide_home && target.is_home()))
        .map(|target| ActiveLink {
            label: target.label.clone(),
            path: target.path.clone(),
            active: router.is_active(&target.path),
        })
        .collect()
}

/// Secondary bar: genres and featured listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub label: &'static str,
    pub path: &'static str,
    pub highlighted: bool,
}

pub const GENRE_LINKS: [QuickLink; 8] = [
    QuickLink {
        label: "Action",
        path: "/genre/action",
        highlighted: false,
    },
    QuickLink {
        label: "Comedy",
        path: "/genre/comedy",
        highlighted: false,
    },
    QuickLink {
        label: "Drama",
        path: "/genre/drama",
        highlighted: false,
    },
    QuickLink {
        label: "Horror",
        path: "/genre/horror",
        highlighted: false,
    },
    QuickLink {
        label: "Sci-Fi",
        path: "/genre/sci-fi",
        highlighted: false,
    },
    QuickLink {
        label: "Documentary",
        path: "/genre/documentary",
        highlighted: false,
    },
    QuickLink {
        label: "New Releases",
        path: "/new",
        highlighted: true,
    },
    QuickLink {
        label: "Trending",
        path: "/trending",
        highlighted: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::testing::RecordingRouter;

    fn active_paths(links: &[ActiveLink]) -> Vec<&str> {
        links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.path.as_str())
            .collect()
    }

    #[test]
    fn test_projection_marks_matching_targets() {
        let router = RecordingRouter::at("/movie/603");
        let links = project_links(&NavConfig::standard(), &router);

        assert_eq!(links.len(), 3);
        assert_eq!(active_paths(&links), vec!["/movie"]);
        assert_eq!(links[2].css_class(), "text-red-500");
        assert_eq!(links[1].css_class(), "text-gray-300 hover:text-white");
    }

    #[test]
    fn test_projection_follows_location() {
        let router = RecordingRouter::at("/tv");
        let config = NavConfig::standard();
        assert_eq!(active_paths(&project_links(&config, &router)), vec!["/tv"]);

        router.visit("/movie");
        assert_eq!(active_paths(&project_links(&config, &router)), vec!["/movie"]);

        router.visit("/search?q=dune");
        assert!(active_paths(&project_links(&config, &router)).is_empty());
    }

    /// Router whose matching rule ignores case
    struct CaseInsensitiveRouter(&'static str);

    impl Router for CaseInsensitiveRouter {
        fn location(&self) -> crate::header::Location {
            crate::header::Location::new(self.0, "")
        }

        fn navigate(&self, _href: &str) {}

        fn is_active(&self, target: &str) -> bool {
            self.0.to_lowercase().starts_with(&target.to_lowercase()) && target != "/"
        }
    }

    #[test]
    fn test_projection_uses_router_answer() {
        let links = project_links(&NavConfig::standard(), &CaseInsensitiveRouter("/Movie"));
        assert_eq!(active_paths(&links), vec!["/movie"]);
        assert_eq!(links[2].css_class(), "text-red-500");
    }

    #[test]
    fn test_projection_asks_router_once_per_visible_target() {
        let router = RecordingRouter::at("/tv");
        project_links(&NavConfig::standard().hide_home(true), &router);
        assert_eq!(router.active_queries(), vec!["/tv", "/movie"]);
    }

    #[test]
    fn test_home_active_only_at_root() {
        let router = RecordingRouter::at("/");
        let links = project_links(&NavConfig::standard(), &router);
        assert_eq!(active_paths(&links), vec!["/"]);
    }

    #[test]
    fn test_hide_home_filters_entry() {
        let router = RecordingRouter::at("/");
        let config = NavConfig::standard().hide_home(true);
        let links = project_links(&config, &router);

        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["TV Shows", "Movies"]);
        assert!(active_paths(&links).is_empty());
        // The configuration itself is untouched.
        assert_eq!(config.targets.len(), 3);
    }

    #[test]
    fn test_genre_links_single_highlight() {
        let highlighted: Vec<_> = GENRE_LINKS.iter().filter(|l| l.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].path, "/new");
    }
}
