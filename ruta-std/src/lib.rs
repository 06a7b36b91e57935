//! # ruta-std
//!
//! Standard implementations for the Ruta client-side navigation router:
//!
//! - **Path templates**: [`PathPattern`] compiles literal/`:name`/`*`
//!   templates into matchers that own their parameter-name lists.
//! - **Query parsing**: [`parse_query`] and [`query_of`] turn a location's
//!   search string (or hash-fragment query) into a decoded map.
//! - **In-memory history**: [`MemoryLocation`] is a `LocationSource` with a
//!   real history stack, back/forward traversal and link-activation events,
//!   so dispatch logic runs and tests without a browser.
//! - **Gates**: ready-made middleware such as [`gates::LoggingGate`].
//! - **Testing utilities**: recording handlers, programmable gates and
//!   fallback spies in [`testing`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod gates;
mod memory;
mod pattern;
mod query;
pub mod testing;

pub use memory::MemoryLocation;
pub use pattern::PathPattern;
pub use query::{parse_query, query_of};
