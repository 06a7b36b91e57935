//! # Endpoint Layer (Handler)
//!
//! Handlers are the terminal point of a dispatch: the matched route's handler
//! receives a fully owned [`NavigationContext`] and performs the navigation's
//! side effects (rendering, data loading, further navigation).
//!
//! A handler may fail by returning an error. The dispatcher catches the
//! failure, logs it, and delegates to the default route — handler errors never
//! escape the router.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|ctx| async move { ... }`
//! 2. **Struct implementation**: `impl Handler for MyView`

use crate::context::{Fallback, NavigationContext};
use crate::error::BoxError;
use std::{future::Future, pin::Pin};

/// The terminal endpoint of a matched route.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` for static dispatch. The route table
/// stores handlers through the object-safe [`DynHandler`] twin, which every
/// `Handler` implements automatically.
pub trait Handler: Send + Sync + 'static {
    /// Executes the handler for one navigation.
    fn call(&self, ctx: NavigationContext) -> impl Future<Output = Result<(), BoxError>> + Send;
}

// Blanket impl for closures.
impl<F, Fut> Handler for F
where
    F: Fn(NavigationContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), BoxError>> + Send,
{
    fn call(&self, ctx: NavigationContext) -> impl Future<Output = Result<(), BoxError>> + Send {
        (self)(ctx)
    }
}

/// Dynamic object-safe version of [`Handler`].
///
/// Use this trait when you need runtime polymorphism, as in the route table.
pub trait DynHandler: Send + Sync + 'static {
    /// Executes the handler (dynamic dispatch version).
    fn call_dyn(
        &self,
        ctx: NavigationContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + '_>>;
}

// Blanket implementation: any Handler implements DynHandler automatically.
impl<T: Handler> DynHandler for T {
    fn call_dyn(
        &self,
        ctx: NavigationContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + '_>> {
        Box::pin(self.call(ctx))
    }
}

// Allow Box<dyn DynHandler> to be used where Handler is expected. The call
// must go through `as_ref()`: the `Box` itself satisfies the blanket
// `DynHandler` impl via this very impl, so an unqualified `self.call_dyn(..)`
// would resolve to the `Box` and loop instead of reaching the inner object.
impl Handler for Box<dyn DynHandler> {
    async fn call(&self, ctx: NavigationContext) -> Result<(), BoxError> {
        self.as_ref().call_dyn(ctx).await
    }
}

/// The default route: invoked when no route matches or a handler fails.
///
/// Fallback handlers are deliberately infallible; whatever they render is the
/// end of the line for a dispatch.
pub trait FallbackHandler: Send + Sync + 'static {
    /// Executes the fallback with the reason it was reached.
    fn call(&self, fallback: Fallback) -> impl Future<Output = ()> + Send;
}

impl<F, Fut> FallbackHandler for F
where
    F: Fn(Fallback) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send,
{
    fn call(&self, fallback: Fallback) -> impl Future<Output = ()> + Send {
        (self)(fallback)
    }
}

/// Dynamic object-safe version of [`FallbackHandler`].
pub trait DynFallback: Send + Sync + 'static {
    /// Executes the fallback (dynamic dispatch version).
    fn call_dyn(&self, fallback: Fallback) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

// Blanket implementation: any FallbackHandler implements DynFallback.
impl<T: FallbackHandler> DynFallback for T {
    fn call_dyn(&self, fallback: Fallback) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(self.call(fallback))
    }
}
