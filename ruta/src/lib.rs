//! # ruta - Client-Side Navigation Router
//!
//! `ruta` resolves a location to a handler invocation. It is the routing core
//! of a single-page application shell: path templates compile to matchers,
//! routes are scanned first-match-wins in registration order, an asynchronous
//! gate pipeline runs before every dispatch, and navigation history is
//! abstracted behind a swappable location source.
//!
//! The router renders nothing itself. Registered handlers receive a resolved
//! [`NavigationContext`] and own everything user-visible from there.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ruta::{MemoryLocation, NavigateOptions, Router, RouterConfig};
//!
//! let router = Router::new(RouterConfig::default(), MemoryLocation::new());
//! router
//!     .add_route("/users/:id", |ctx| async move {
//!         render_user(ctx.param("id"));
//!         Ok(())
//!     })?
//!     .set_default_route(|fallback| async move { render_missing(fallback) });
//!
//! router.navigate("/users/42", NavigateOptions::default()).await;
//! ```
//!
//! ## Dispatch policy
//!
//! - First match in registration order wins; there is no specificity ranking.
//! - A gate returning [`GateOutcome::Block`] ends the dispatch silently.
//! - A failing handler (or gate) is caught, logged, and delegated to the
//!   default route; nothing escapes [`Router::navigate`].
//! - Absence of a default route is a no-op, not an error.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use ruta_core::{
    // Errors
    BoxError,
    // Fallback
    DynFallback,
    // Gate
    DynGate,
    // Handler
    DynHandler,
    Fallback,
    FallbackHandler,
    Gate,
    GateOutcome,
    Handler,
    // Location
    Location,
    LocationEvent,
    LocationSource,
    // Configuration
    NavigateOptions,
    NavigationContext,
    RouteOverrides,
    RouterConfig,
    RouterError,
    TemplateError,
};

pub use ruta_std::{MemoryLocation, PathPattern, gates, parse_query, query_of, testing};

mod router;

pub use router::{DispatchOutcome, Router};
