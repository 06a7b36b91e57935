//! Testing utilities for Ruta.
//!
//! This module provides spies and programmable doubles for the router's
//! collaborator seams:
//!
//! - [`RecordingHandler`]: a handler that records every context it receives
//! - [`FailingHandler`]: a handler that always fails with a fixed message
//! - [`StaticGate`]: a gate programmed with a fixed outcome
//! - [`CountingGate`]: a gate that counts invocations and always passes
//! - [`RecordingFallback`]: a default route that records why it was reached

use ruta_core::{
    BoxError, Fallback, FallbackHandler, Gate, GateOutcome, Handler, NavigationContext,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every navigation context it is invoked with.
///
/// Clones share the same backing storage, so a clone kept by the test can
/// inspect what the router-held instance received.
pub struct RecordingHandler {
    contexts: Arc<Mutex<Vec<NavigationContext>>>,
}

impl RecordingHandler {
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self {
            contexts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded contexts.
    pub fn contexts(&self) -> Vec<NavigationContext> {
        self.contexts.lock().unwrap().clone()
    }

    /// The paths of the recorded contexts, in invocation order.
    pub fn paths(&self) -> Vec<String> {
        self.contexts
            .lock()
            .unwrap()
            .iter()
            .map(|ctx| ctx.path.clone())
            .collect()
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.contexts.lock().unwrap().len()
    }
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingHandler {
    fn clone(&self) -> Self {
        Self {
            contexts: self.contexts.clone(),
        }
    }
}

impl Handler for RecordingHandler {
    async fn call(&self, ctx: NavigationContext) -> Result<(), BoxError> {
        self.contexts.lock().unwrap().push(ctx);
        Ok(())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that always fails with a fixed message.
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a failing handler with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Handler for FailingHandler {
    async fn call(&self, _ctx: NavigationContext) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}

// ============================================================================
// Static Gate
// ============================================================================

/// A gate programmed with a fixed outcome.
pub struct StaticGate {
    outcome: GateOutcome,
}

impl StaticGate {
    /// A gate that always passes.
    pub fn pass() -> Self {
        Self {
            outcome: GateOutcome::Pass,
        }
    }

    /// A gate that always blocks.
    pub fn block() -> Self {
        Self {
            outcome: GateOutcome::Block,
        }
    }
}

impl Gate for StaticGate {
    async fn check(&self, _ctx: &NavigationContext) -> Result<GateOutcome, BoxError> {
        Ok(self.outcome)
    }
}

// ============================================================================
// Counting Gate
// ============================================================================

/// A gate that counts invocations and always passes.
pub struct CountingGate {
    count: Arc<AtomicUsize>,
}

impl CountingGate {
    /// Create a new counting gate.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Default for CountingGate {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingGate {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl Gate for CountingGate {
    async fn check(&self, _ctx: &NavigationContext) -> Result<GateOutcome, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(GateOutcome::Pass)
    }
}

// ============================================================================
// Recording Fallback
// ============================================================================

/// A default route that records why it was reached.
pub struct RecordingFallback {
    reasons: Arc<Mutex<Vec<Fallback>>>,
}

impl RecordingFallback {
    /// Create a new recording fallback.
    pub fn new() -> Self {
        Self {
            reasons: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.reasons.lock().unwrap().len()
    }

    /// The paths of recorded `NotFound` invocations.
    pub fn not_found_paths(&self) -> Vec<String> {
        self.reasons
            .lock()
            .unwrap()
            .iter()
            .filter_map(|reason| reason.path().map(str::to_string))
            .collect()
    }

    /// Rendered messages of recorded `Failed` invocations.
    pub fn error_messages(&self) -> Vec<String> {
        self.reasons
            .lock()
            .unwrap()
            .iter()
            .filter_map(|reason| reason.error().map(ToString::to_string))
            .collect()
    }
}

impl Default for RecordingFallback {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingFallback {
    fn clone(&self) -> Self {
        Self {
            reasons: self.reasons.clone(),
        }
    }
}

impl FallbackHandler for RecordingFallback {
    async fn call(&self, fallback: Fallback) {
        self.reasons.lock().unwrap().push(fallback);
    }
}
