//! # ruta-core
//!
//! Core traits and types for the Ruta client-side navigation router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! adapters and extensions that don't need the full `ruta-std` implementation.
//!
//! # Anatomy of a dispatch
//!
//! A navigation dispatch flows through four seams, each defined here as a
//! trait or plain type:
//!
//! ## Location ([`LocationSource`])
//!
//! The capability that owns the current URL. It can be polled for the current
//! [`Location`] and written to via push/replace. Change notifications
//! ([`LocationEvent`]) arrive out of band — back/forward traversal and
//! activation of router-managed links — and are fed to the dispatcher by
//! whatever adapter wraps the platform (an in-memory source in tests, a
//! browser binding in an application shell).
//!
//! ## Gate ([`Gate`])
//!
//! An asynchronous middleware run before every handler. Gates execute
//! strictly in registration order and can veto a navigation by returning
//! [`GateOutcome::Block`], which ends the dispatch silently.
//!
//! ## Handler ([`Handler`])
//!
//! The terminal endpoint of a matched route. Receives an owned
//! [`NavigationContext`] (extracted params, parsed query, normalized path,
//! effective options) and performs the navigation's side effects.
//!
//! ## Fallback ([`FallbackHandler`])
//!
//! The single default route. Invoked with [`Fallback::NotFound`] when no
//! route matches and with [`Fallback::Failed`] when a matched handler (or a
//! gate) returns an error. Its absence is a documented no-op, not a fault.
//!
//! # Static vs dynamic dispatch
//!
//! Each trait uses native `async fn` for zero-cost static dispatch and has an
//! object-safe `Dyn*` twin ([`DynHandler`], [`DynGate`], [`DynFallback`]) with
//! a blanket implementation, so route tables can store heterogeneous entries.
//!
//! # Error types
//!
//! - [`RouterError`] - Top-level error type
//! - [`TemplateError`] - Registration-time path-template errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod gate;
mod handler;
mod location;
mod options;

// Re-exports
pub use context::{Fallback, NavigationContext};
pub use error::{BoxError, RouterError, TemplateError};
pub use gate::{DynGate, Gate, GateOutcome};
pub use handler::{DynFallback, DynHandler, FallbackHandler, Handler};
pub use location::{Location, LocationEvent, LocationSource};
pub use options::{NavigateOptions, RouteOverrides, RouterConfig};
