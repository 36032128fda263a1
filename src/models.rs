//! Catalogue Models
//!
//! Payloads of The Movie Database API as consumed by the pages. Only the
//! fields the UI renders are modelled; everything else is ignored.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A movie or TV show as returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u64,
    /// Movies carry a title
    #[serde(default)]
    pub title: Option<String>,
    /// TV shows carry a name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub popularity: f64,
}

impl MediaItem {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Untitled")
    }

    /// Year of release (movies) or first air date (shows)
    pub fn release_year(&self) -> Option<i32> {
        let date = self
            .release_date
            .as_deref()
            .or(self.first_air_date.as_deref())?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }

    /// Rating rounded to one decimal
    pub fn rating(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// Route segment for the details page. List endpoints that do not say
    /// fall back to `fallback`.
    pub fn media_segment<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.media_type.as_deref().unwrap_or(fallback)
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `/configuration` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfiguration {
    pub images: ImageConfiguration,
}

/// Image CDN settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfiguration {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub secure_base_url: String,
    #[serde(default)]
    pub backdrop_sizes: Vec<String>,
    #[serde(default)]
    pub poster_sizes: Vec<String>,
}

impl ImageConfiguration {
    /// Prefix for image paths at `size`, e.g. `https://image.tmdb.org/t/p/original`
    pub fn image_url(&self, size: &str) -> String {
        let base = if self.secure_base_url.is_empty() {
            &self.base_url
        } else {
            &self.secure_base_url
        };
        format!("{}/{}", base.trim_end_matches('/'), size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Details endpoint response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDetails {
    #[serde(flatten)]
    pub item: MediaItem,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Movies
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Shows
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl MediaDetails {
    /// Running time as `2h 16m`
    pub fn duration(&self) -> Option<String> {
        let minutes = self
            .runtime
            .or_else(|| self.episode_run_time.first().copied())
            .filter(|m| *m > 0)?;
        Some(match (minutes / 60, minutes % 60) {
            (0, m) => format!("{}m", m),
            (h, 0) => format!("{}h", h),
            (h, m) => format!("{}h {}m", h, m),
        })
    }
}

/// Listings reachable from a single path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreKind {
    Tv,
    Movie,
    NewReleases,
    Trending,
}

impl ExploreKind {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "tv" => Some(Self::Tv),
            "movie" => Some(Self::Movie),
            "new" => Some(Self::NewReleases),
            "trending" => Some(Self::Trending),
            _ => None,
        }
    }

    /// API path for the listing
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Tv => "discover/tv",
            Self::Movie => "discover/movie",
            Self::NewReleases => "movie/now_playing",
            Self::Trending => "trending/all/week",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Tv => "Popular TV Shows",
            Self::Movie => "Popular Movies",
            Self::NewReleases => "New Releases",
            Self::Trending => "Trending This Week",
        }
    }

    /// Media type of items whose payload does not carry one
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Tv => "tv",
            _ => "movie",
        }
    }
}

/// TMDB movie genre id for a secondary-nav slug
pub fn genre_id(slug: &str) -> Option<u32> {
    match slug {
        "action" => Some(28),
        "comedy" => Some(35),
        "drama" => Some(18),
        "horror" => Some(27),
        "sci-fi" => Some(878),
        "documentary" => Some(99),
        _ => None,
    }
}
