//! Logging gate for navigation observation.

use ruta_core::{BoxError, Gate, GateOutcome, NavigationContext};

/// A gate that logs every navigation it sees and always passes.
pub struct LoggingGate;

impl Gate for LoggingGate {
    async fn check(&self, ctx: &NavigationContext) -> Result<GateOutcome, BoxError> {
        tracing::info!(path = %ctx.path, params = ?ctx.params, "navigating");
        Ok(GateOutcome::Pass)
    }
}
