//! Router configuration.
//!
//! [`RouterConfig`] is fixed at router construction. A route may override
//! individual fields at registration time via [`RouteOverrides`]; the merge is
//! evaluated once, when the route is registered, and the merged value is
//! frozen into that route. There is no global mutable configuration.

/// Configuration for a router instance.
///
/// The effective options a handler sees in its navigation context are this
/// value, overlaid with the route's own [`RouteOverrides`] at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Normalize every path to carry a trailing slash, and compile matchers
    /// to accept one optional trailing slash.
    pub append_slash: bool,
    /// Match paths case-sensitively. When disabled, paths are lowercased
    /// during normalization.
    pub case_sensitive: bool,
    /// Prefix stripped from incoming paths and prepended to outgoing
    /// navigations (path mode only).
    pub base_url: String,
    /// Route against the hash fragment instead of the pathname.
    pub use_hash: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            append_slash: false,
            case_sensitive: false,
            base_url: String::new(),
            use_hash: false,
        }
    }
}

/// Per-route overrides applied on top of the router's [`RouterConfig`].
///
/// Unset fields inherit the router's value. Overrides only affect the options
/// carried in the navigation context; path normalization and matcher
/// compilation always follow the router-wide configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOverrides {
    /// Override [`RouterConfig::append_slash`].
    pub append_slash: Option<bool>,
    /// Override [`RouterConfig::case_sensitive`].
    pub case_sensitive: Option<bool>,
    /// Override [`RouterConfig::base_url`].
    pub base_url: Option<String>,
    /// Override [`RouterConfig::use_hash`].
    pub use_hash: Option<bool>,
}

impl RouteOverrides {
    /// No overrides; the route inherits the router's configuration.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the `append_slash` override.
    pub fn append_slash(mut self, value: bool) -> Self {
        self.append_slash = Some(value);
        self
    }

    /// Set the `case_sensitive` override.
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = Some(value);
        self
    }

    /// Set the `base_url` override.
    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = Some(value.into());
        self
    }

    /// Set the `use_hash` override.
    pub fn use_hash(mut self, value: bool) -> Self {
        self.use_hash = Some(value);
        self
    }

    /// Produce the frozen per-route options by overlaying `self` on `base`.
    pub fn merge_into(&self, base: &RouterConfig) -> RouterConfig {
        RouterConfig {
            append_slash: self.append_slash.unwrap_or(base.append_slash),
            case_sensitive: self.case_sensitive.unwrap_or(base.case_sensitive),
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| base.base_url.clone()),
            use_hash: self.use_hash.unwrap_or(base.use_hash),
        }
    }
}

/// Options for a programmatic navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Overwrite the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    /// Navigation that replaces the current history entry.
    pub fn replace() -> Self {
        Self { replace: true }
    }
}
