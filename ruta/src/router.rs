//! The router: route table, middleware pipeline, dispatcher and navigation.
//!
//! # Dispatch lifecycle
//!
//! Each location change runs one dispatch: normalize the raw location, scan
//! the route table in registration order, run the gate pipeline against a
//! fresh [`NavigationContext`], then invoke the matched handler. Every
//! dispatch settles in exactly one [`DispatchOutcome`].
//!
//! # Setup vs dispatch
//!
//! Registration (`add_route`, `use_gate`, `set_default_route`) is expected to
//! happen once at startup. The tables live behind a lock so the router handle
//! stays cheaply clonable; the dispatcher snapshots them before its first
//! await point and never holds the lock across handler or gate work.

use futures::{Stream, StreamExt};
use ruta_core::{
    DynFallback, DynGate, DynHandler, Fallback, FallbackHandler, Gate, GateOutcome, Handler,
    LocationEvent, LocationSource, NavigateOptions, NavigationContext, RouteOverrides,
    RouterConfig, RouterError,
};
use ruta_std::{PathPattern, query_of};
use std::sync::{
    Arc, PoisonError, RwLock,
    atomic::{AtomicU64, Ordering},
};

/// The terminal state of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A route matched and its handler completed.
    Handled,
    /// A gate vetoed the navigation; no handler and no default route ran.
    Blocked,
    /// No route matched; the default route (if any) ran with the path.
    Defaulted,
    /// The handler or a gate failed; the default route (if any) ran with the
    /// error.
    Errored,
    /// A newer navigation started before this dispatch reached its handler;
    /// the handler was skipped.
    Superseded,
}

/// One entry in the route table. Never mutated after registration.
///
/// The handler is erased behind `Arc<dyn DynHandler>`, not `Box`: the blanket
/// `DynHandler` impl would apply to a `Box` (which itself implements
/// `Handler`) and shadow the inner trait object on method resolution.
struct Route {
    pattern: PathPattern,
    handler: Arc<dyn DynHandler>,
    options: RouterConfig,
}

#[derive(Default)]
struct Tables {
    routes: Vec<Arc<Route>>,
    gates: Vec<Arc<dyn DynGate>>,
    fallback: Option<Arc<dyn DynFallback>>,
}

struct Inner<S> {
    config: RouterConfig,
    source: S,
    tables: RwLock<Tables>,
    /// Monotonic dispatch token; see [`DispatchOutcome::Superseded`].
    epoch: AtomicU64,
}

/// A client-side navigation router.
///
/// The handle is cheaply clonable and all methods take `&self`, so handlers
/// and gates may hold their own clone and trigger further navigation (this is
/// how [`redirect`](Router::redirect) is built).
pub struct Router<S: LocationSource> {
    inner: Arc<Inner<S>>,
}

impl<S: LocationSource> Clone for Router<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: LocationSource> Router<S> {
    /// Create a router over the given location source.
    ///
    /// The configuration is fixed for the life of the router; individual
    /// routes may override fields of it at registration time.
    pub fn new(config: RouterConfig, source: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                source,
                tables: RwLock::new(Tables::default()),
                epoch: AtomicU64::new(0),
            }),
        }
    }

    /// The router's location source.
    pub fn source(&self) -> &S {
        &self.inner.source
    }

    /// The router-wide configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.inner.config
    }

    /// Register a route.
    ///
    /// The template is compiled now; a malformed template fails this call and
    /// leaves the table untouched. Registration order is permanent and
    /// semantically significant: the first matching route wins every dispatch.
    pub fn add_route(&self, path: &str, handler: impl Handler) -> Result<&Self, RouterError> {
        self.add_route_with(path, handler, RouteOverrides::none())
    }

    /// Register a route with per-route configuration overrides.
    ///
    /// The overrides are merged over the router's configuration once, here,
    /// and the merged value is frozen into the route. It surfaces again as
    /// [`NavigationContext::options`].
    pub fn add_route_with(
        &self,
        path: &str,
        handler: impl Handler,
        overrides: RouteOverrides,
    ) -> Result<&Self, RouterError> {
        let pattern = PathPattern::compile(path, self.inner.config.append_slash)?;
        let options = overrides.merge_into(&self.inner.config);
        let route = Arc::new(Route {
            pattern,
            handler: Arc::new(handler),
            options,
        });
        self.tables_mut().routes.push(route);
        Ok(self)
    }

    /// Append a gate to the middleware pipeline.
    ///
    /// Gates run on every dispatch, strictly in registration order.
    pub fn use_gate(&self, gate: impl Gate) -> &Self {
        self.tables_mut().gates.push(Arc::new(gate));
        self
    }

    /// Set the default route, replacing any previous one.
    pub fn set_default_route(&self, fallback: impl FallbackHandler) -> &Self {
        self.tables_mut().fallback = Some(Arc::new(fallback));
        self
    }

    /// Register `from` as a route that immediately navigates to `to`.
    pub fn redirect(&self, from: &str, to: &str) -> Result<&Self, RouterError> {
        let router = self.clone();
        let target = to.to_string();
        self.add_route(from, move |_ctx: NavigationContext| {
            let router = router.clone();
            let target = target.clone();
            async move {
                router.navigate(&target, NavigateOptions::default()).await;
                Ok::<(), ruta_core::BoxError>(())
            }
        })
    }

    /// Navigate programmatically.
    ///
    /// Computes the effective URL (hash-prefixed in hash mode, otherwise
    /// `base_url` + `path`), writes it to history as a push or replace, then
    /// immediately dispatches the new location. Failures inside handlers are
    /// contained; this method never returns an error.
    pub async fn navigate(&self, path: &str, options: NavigateOptions) -> DispatchOutcome {
        let url = if self.inner.config.use_hash {
            format!("#{path}")
        } else {
            format!("{}{}", self.inner.config.base_url, path)
        };
        if options.replace {
            self.inner.source.replace(&url);
        } else {
            self.inner.source.push(&url);
        }
        self.handle_change().await
    }

    /// Dispatch the source's current location.
    ///
    /// This is the entry point for out-of-band triggers (history traversal,
    /// initial load); [`navigate`](Router::navigate) calls it after writing.
    pub async fn handle_change(&self) -> DispatchOutcome {
        let token = self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let location = self.inner.source.current();
        let raw_path = if self.inner.config.use_hash {
            location
                .hash
                .split_once('?')
                .map_or(location.hash.as_str(), |(path, _)| path)
        } else {
            location.path.as_str()
        };
        let path = normalize_path(&self.inner.config, raw_path);

        // Snapshot before the first await point; the lock is never held
        // across gate or handler work.
        let (routes, gates, fallback) = {
            let tables = self
                .inner
                .tables
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            (
                tables.routes.clone(),
                tables.gates.clone(),
                tables.fallback.clone(),
            )
        };

        let Some(route) = routes.iter().find(|route| route.pattern.matches(&path)) else {
            tracing::warn!(%path, "no route matched");
            if let Some(fallback) = fallback {
                fallback.call_dyn(Fallback::NotFound { path }).await;
            }
            return DispatchOutcome::Defaulted;
        };
        tracing::debug!(%path, template = route.pattern.template(), "route matched");

        let ctx = NavigationContext {
            params: route.pattern.capture(&path).unwrap_or_default(),
            query: query_of(&location, self.inner.config.use_hash),
            path,
            options: route.options.clone(),
        };

        for gate in &gates {
            match gate.check_dyn(&ctx).await {
                Ok(GateOutcome::Pass) => {}
                Ok(GateOutcome::Block) => {
                    tracing::debug!(path = %ctx.path, "navigation vetoed by gate");
                    return DispatchOutcome::Blocked;
                }
                Err(error) => {
                    tracing::error!(path = %ctx.path, %error, "gate failed");
                    if let Some(fallback) = fallback {
                        fallback.call_dyn(Fallback::Failed { error }).await;
                    }
                    return DispatchOutcome::Errored;
                }
            }
        }

        // A dispatch that lost the race to a newer navigation settles without
        // invoking its handler.
        if self.inner.epoch.load(Ordering::SeqCst) != token {
            tracing::debug!(path = %ctx.path, "dispatch superseded");
            return DispatchOutcome::Superseded;
        }

        match route.handler.call_dyn(ctx).await {
            Ok(()) => DispatchOutcome::Handled,
            Err(error) => {
                tracing::error!(%error, "route handler failed");
                if let Some(fallback) = fallback {
                    fallback.call_dyn(Fallback::Failed { error }).await;
                }
                DispatchOutcome::Errored
            }
        }
    }

    /// Drive the router from a stream of location events.
    ///
    /// Performs the initial-load dispatch, then consumes the stream:
    /// [`LocationEvent::Popped`] re-dispatches the current location,
    /// [`LocationEvent::LinkActivated`] feeds the href through
    /// [`navigate`](Router::navigate). Returns when the stream ends.
    pub async fn run(&self, mut events: impl Stream<Item = LocationEvent> + Unpin) {
        self.handle_change().await;
        while let Some(event) = events.next().await {
            match event {
                LocationEvent::Popped => {
                    self.handle_change().await;
                }
                LocationEvent::LinkActivated { href } => {
                    self.navigate(&href, NavigateOptions::default()).await;
                }
            }
        }
    }

    fn tables_mut(&self) -> std::sync::RwLockWriteGuard<'_, Tables> {
        self.inner
            .tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Normalize a raw path under the router configuration: strip the `base_url`
/// prefix, lowercase unless case-sensitive, then enforce the trailing-slash
/// policy.
fn normalize_path(config: &RouterConfig, raw: &str) -> String {
    let stripped = if config.base_url.is_empty() {
        raw
    } else {
        raw.strip_prefix(config.base_url.as_str()).unwrap_or(raw)
    };
    let mut path = if config.case_sensitive {
        stripped.to_string()
    } else {
        stripped.to_lowercase()
    };
    if config.append_slash {
        if !path.ends_with('/') {
            path.push('/');
        }
    } else if path.ends_with('/') {
        path.pop();
    }
    path
}
