//! Per-dispatch navigation context.
//!
//! A [`NavigationContext`] is constructed fresh for every dispatch and handed
//! first to the gate pipeline and then to the matched handler. It is not
//! retained between dispatches.

use crate::error::BoxError;
use crate::options::RouterConfig;
use std::collections::HashMap;

/// The per-dispatch bundle passed to gates and the matched handler.
#[derive(Debug, Clone, Default)]
pub struct NavigationContext {
    /// Parameters captured by the matched path template, keyed by placeholder
    /// name. A wildcard capture is stored under the `"*"` key.
    pub params: HashMap<String, String>,
    /// Decoded query-string pairs; for repeated keys the last occurrence wins.
    pub query: HashMap<String, String>,
    /// The normalized path that was matched.
    pub path: String,
    /// The matched route's effective options (router configuration overlaid
    /// with the route's registration-time overrides).
    pub options: RouterConfig,
}

impl NavigationContext {
    /// Look up a captured path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Look up a decoded query value.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

/// The reason the default route is being invoked.
#[derive(Debug)]
pub enum Fallback {
    /// No registered route matched the normalized path.
    NotFound {
        /// The normalized path that failed to match.
        path: String,
    },
    /// A matched handler (or a gate) returned an error.
    Failed {
        /// The error produced by the handler or gate.
        error: BoxError,
    },
}

impl Fallback {
    /// The unmatched path, if this fallback was caused by a missed match.
    pub fn path(&self) -> Option<&str> {
        match self {
            Fallback::NotFound { path } => Some(path),
            Fallback::Failed { .. } => None,
        }
    }

    /// The attached error, if this fallback was caused by a failure.
    pub fn error(&self) -> Option<&BoxError> {
        match self {
            Fallback::NotFound { .. } => None,
            Fallback::Failed { error } => Some(error),
        }
    }
}
