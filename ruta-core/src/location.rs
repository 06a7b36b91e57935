//! # Location Layer (LocationSource)
//!
//! The capability that owns the current URL. Abstracting it keeps the
//! dispatcher's trigger logic testable without a real browser history object:
//! tests inject an in-memory source, an application shell injects a platform
//! binding.
//!
//! Writes (`push`/`replace`) are programmatic navigation and do **not** emit a
//! [`LocationEvent`]; the router dispatches inline after writing. Events model
//! the out-of-band triggers only: history traversal (the `popstate`
//! counterpart) and activation of router-managed in-page links.

/// A parsed location: pathname, search and fragment, stored without their
/// `?`/`#` delimiters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// The pathname, e.g. `/users/42`.
    pub path: String,
    /// The query string without its leading `?`; empty when absent.
    pub query: String,
    /// The hash fragment without its leading `#`; empty when absent.
    pub hash: String,
}

impl Location {
    /// Split a URL of the form `path?query#hash` into its parts.
    pub fn from_url(url: &str) -> Self {
        let (rest, hash) = match url.split_once('#') {
            Some((rest, hash)) => (rest, hash),
            None => (url, ""),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, query),
            None => (rest, ""),
        };
        Self {
            path: path.to_string(),
            query: query.to_string(),
            hash: hash.to_string(),
        }
    }
}

/// An out-of-band navigation trigger reported by a location source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationEvent {
    /// The history cursor moved (back/forward traversal). The source's
    /// current location already reflects the traversal.
    Popped,
    /// A router-managed in-page link was activated. Default navigation is
    /// suppressed; the href is fed through programmatic navigation instead.
    LinkActivated {
        /// The activated link's target.
        href: String,
    },
}

/// The capability of reading and writing the current location.
///
/// Implementations additionally expose a stream of [`LocationEvent`]s for
/// their out-of-band triggers, which the router's event loop consumes. The
/// stream type is left to the implementation so this crate stays
/// dependency-free.
pub trait LocationSource: Send + Sync + 'static {
    /// The current location.
    fn current(&self) -> Location;

    /// Append `url` to session history and make it current.
    fn push(&self, url: &str);

    /// Overwrite the current history entry with `url`.
    fn replace(&self, url: &str);
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn from_url_splits_all_three_parts() {
        let loc = Location::from_url("/a/b?x=1&y=2#frag");
        assert_eq!(loc.path, "/a/b");
        assert_eq!(loc.query, "x=1&y=2");
        assert_eq!(loc.hash, "frag");
    }

    #[test]
    fn from_url_without_query_or_hash() {
        let loc = Location::from_url("/plain");
        assert_eq!(loc.path, "/plain");
        assert_eq!(loc.query, "");
        assert_eq!(loc.hash, "");
    }

    #[test]
    fn query_inside_hash_belongs_to_the_hash() {
        // A '#' ends the searchable part of the URL; the '?' after it is the
        // hash fragment's own query.
        let loc = Location::from_url("/app#/users?id=3");
        assert_eq!(loc.path, "/app");
        assert_eq!(loc.query, "");
        assert_eq!(loc.hash, "/users?id=3");
    }
}
