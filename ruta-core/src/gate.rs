//! # Middleware Layer (Gate)
//!
//! Gates are asynchronous checks run before every handler invocation. They
//! are the designed mechanism for auth gating and redirect-and-stop patterns:
//! a gate that returns [`GateOutcome::Block`] ends the dispatch silently — no
//! handler runs and the default route is not consulted.
//!
//! # Ordering
//!
//! Gates run strictly sequentially in registration order; no gate begins
//! before its predecessor has resolved.
//!
//! # Failure
//!
//! A gate that returns `Err` is treated exactly like a failing handler: the
//! dispatch ends and the default route (if any) receives the error.

use crate::context::NavigationContext;
use crate::error::BoxError;
use std::{future::Future, pin::Pin};

/// Result of a gate check: proceed with the dispatch or veto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// The navigation may proceed to the next gate (or the handler).
    Pass,
    /// The navigation is vetoed; the dispatch ends silently.
    Block,
}

impl From<bool> for GateOutcome {
    fn from(pass: bool) -> Self {
        if pass { GateOutcome::Pass } else { GateOutcome::Block }
    }
}

/// An asynchronous pre-dispatch check.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` for static dispatch. The middleware
/// pipeline stores gates through the object-safe [`DynGate`] twin, which every
/// `Gate` implements automatically.
///
/// # Closures
///
/// Plain closures work as gates. The returned future cannot borrow the
/// context, so inspect it synchronously and move the verdict into the future:
///
/// ```rust,ignore
/// router.use_gate(|ctx: &NavigationContext| {
///     let allowed = !ctx.path.starts_with("/admin");
///     async move { Ok(GateOutcome::from(allowed)) }
/// });
/// ```
pub trait Gate: Send + Sync + 'static {
    /// Inspect the navigation context and decide whether dispatch proceeds.
    fn check(
        &self,
        ctx: &NavigationContext,
    ) -> impl Future<Output = Result<GateOutcome, BoxError>> + Send;
}

impl<F, Fut> Gate for F
where
    F: Fn(&NavigationContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<GateOutcome, BoxError>> + Send + 'static,
{
    fn check(
        &self,
        ctx: &NavigationContext,
    ) -> impl Future<Output = Result<GateOutcome, BoxError>> + Send {
        (self)(ctx)
    }
}

/// Dynamic object-safe version of [`Gate`].
///
/// Use this trait when gates of different concrete types live in one
/// collection, as in the router's middleware pipeline.
pub trait DynGate: Send + Sync + 'static {
    /// Inspect the navigation context (dynamic dispatch version).
    fn check_dyn<'a>(
        &'a self,
        ctx: &'a NavigationContext,
    ) -> Pin<Box<dyn Future<Output = Result<GateOutcome, BoxError>> + Send + 'a>>;
}

// Blanket implementation: any Gate implements DynGate automatically.
impl<T: Gate> DynGate for T {
    fn check_dyn<'a>(
        &'a self,
        ctx: &'a NavigationContext,
    ) -> Pin<Box<dyn Future<Output = Result<GateOutcome, BoxError>> + Send + 'a>> {
        Box::pin(self.check(ctx))
    }
}

// Allow Box<dyn DynGate> to be used where Gate is expected. Dispatch goes
// through `as_ref()` so it reaches the erased object; calling `check_dyn` on
// the `Box` itself would re-enter this impl through the blanket and loop.
impl Gate for Box<dyn DynGate> {
    async fn check(&self, ctx: &NavigationContext) -> Result<GateOutcome, BoxError> {
        self.as_ref().check_dyn(ctx).await
    }
}
