//! Ready-made gates for the middleware pipeline.

mod logging;

pub use logging::LoggingGate;
