//! Error types for Ruta.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RouterError`] - Top-level error type for all router operations
//! - [`TemplateError`] - Errors raised while compiling a path template
//!
//! Handler and gate failures are not part of this hierarchy: they travel as
//! [`BoxError`] values, are caught by the dispatcher, and are delegated to the
//! default route. The router itself never propagates them to the caller.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all router operations.
#[derive(Error, Debug)]
pub enum RouterError {
    /// A path template failed to compile during route registration.
    #[error("invalid route template: {0}")]
    Template(#[from] TemplateError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised while compiling a path template.
///
/// These are registration-time errors: they abort the `add_route` call that
/// produced them and leave the route table untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template string was empty.
    #[error("route template is empty")]
    Empty,

    /// A `:` placeholder was not followed by a parameter name.
    #[error("unterminated parameter placeholder at byte {position}")]
    UnterminatedPlaceholder {
        /// Byte offset of the offending `:` within the template.
        position: usize,
    },
}

impl From<BoxError> for RouterError {
    fn from(err: BoxError) -> Self {
        RouterError::Custom(err)
    }
}
