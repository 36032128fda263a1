//! Locations and the search query-string convention
//!
//! A search term travels in the address as `/search?q=<term>`. The term is
//! written raw; the browser renders spaces as `%20`, and that is the only
//! escape the decoder undoes.

/// Results page the header navigates to
pub const SEARCH_PATH: &str = "/search";

/// Prefix of a query string carrying a search term
pub const SEARCH_PARAM_PREFIX: &str = "?q=";

/// How a literal space shows up in the address bar
pub const SPACE_ESCAPE: &str = "%20";

/// Current navigable address: a path plus an optional query component
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// Path component, always starting with `/`
    pub path: String,
    /// Query component including its leading `?`, or empty
    pub query: String,
}

impl Location {
    /// Build a location from a path and a search string.
    ///
    /// Routers disagree on whether `search` carries its leading `?`; the
    /// stored query always does when it is non-empty.
    pub fn new(path: impl Into<String>, search: impl AsRef<str>) -> Self {
        let search = search.as_ref();
        let query = if search.is_empty() || search.starts_with('?') {
            search.to_string()
        } else {
            format!("?{}", search)
        };

        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };

        Self { path, query }
    }

    /// Parse an href such as `/search?q=dune#top`
    pub fn parse(href: &str) -> Self {
        let href = href.split('#').next().unwrap_or_default();
        match href.find('?') {
            Some(idx) => Self::new(&href[..idx], &href[idx..]),
            None => Self::new(href, ""),
        }
    }

    /// Search term carried by this location, decoded for display
    pub fn search_term(&self) -> String {
        decode_search_term(&self.query)
    }

    /// Full href for this location
    pub fn href(&self) -> String {
        format!("{}{}", self.path, self.query)
    }
}

/// Decode the search term out of a query string.
///
/// Drops the first three characters (the `?q=` prefix, whatever they
/// actually are) and turns every `%20` back into a space. Nothing else is
/// unescaped. A query shorter than the prefix decodes to an empty string.
pub fn decode_search_term(query: &str) -> String {
    let rest: String = query.chars().skip(SEARCH_PARAM_PREFIX.len()).collect();
    rest.split(SPACE_ESCAPE).collect::<Vec<_>>().join(" ")
}

/// Href of the results page for `term`. The term is not escaped.
pub fn search_href(term: &str) -> String {
    format!("{}{}{}", SEARCH_PATH, SEARCH_PARAM_PREFIX, term)
}
