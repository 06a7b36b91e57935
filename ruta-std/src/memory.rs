//! In-memory location source.
//!
//! [`MemoryLocation`] models the platform history a browser would provide: a
//! stack of entries with a cursor, push/replace writes, back/forward
//! traversal, and link activation. It exists so the dispatcher's trigger
//! logic is exercisable (and testable) without a real browser history object.

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use ruta_core::{Location, LocationEvent, LocationSource};
use std::sync::{Mutex, PoisonError};

struct History {
    entries: Vec<Location>,
    cursor: usize,
}

/// An in-memory [`LocationSource`] with a history stack.
///
/// Writes via [`push`](LocationSource::push) and
/// [`replace`](LocationSource::replace) do not emit events (the router
/// dispatches inline after a programmatic navigation). [`back`],
/// [`forward`] and [`activate_link`] emit the out-of-band
/// [`LocationEvent`]s a browser would.
///
/// [`back`]: MemoryLocation::back
/// [`forward`]: MemoryLocation::forward
/// [`activate_link`]: MemoryLocation::activate_link
pub struct MemoryLocation {
    history: Mutex<History>,
    subscribers: Mutex<Vec<UnboundedSender<LocationEvent>>>,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLocation {
    /// Create a source positioned at `/`.
    pub fn new() -> Self {
        Self::with_url("/")
    }

    /// Create a source positioned at the given URL.
    pub fn with_url(url: &str) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![Location::from_url(url)],
                cursor: 0,
            }),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe to out-of-band location events.
    pub fn changes(&self) -> UnboundedReceiver<LocationEvent> {
        let (tx, rx) = mpsc::unbounded();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    /// Move the history cursor one entry back, emitting
    /// [`LocationEvent::Popped`]. At the oldest entry this is a no-op.
    pub fn back(&self) {
        let moved = {
            let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            if history.cursor > 0 {
                history.cursor -= 1;
                true
            } else {
                false
            }
        };
        if moved {
            self.emit(LocationEvent::Popped);
        }
    }

    /// Move the history cursor one entry forward, emitting
    /// [`LocationEvent::Popped`]. At the newest entry this is a no-op.
    pub fn forward(&self) {
        let moved = {
            let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            if history.cursor + 1 < history.entries.len() {
                history.cursor += 1;
                true
            } else {
                false
            }
        };
        if moved {
            self.emit(LocationEvent::Popped);
        }
    }

    /// Simulate activation of a router-managed in-page link.
    ///
    /// Emits [`LocationEvent::LinkActivated`]; default navigation is
    /// considered suppressed, the location itself does not change until the
    /// router navigates to the href.
    pub fn activate_link(&self, href: &str) {
        self.emit(LocationEvent::LinkActivated {
            href: href.to_string(),
        });
    }

    /// Number of entries currently in the history stack.
    pub fn depth(&self) -> usize {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    fn emit(&self, event: LocationEvent) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|tx| tx.unbounded_send(event.clone()).is_ok());
    }

    /// A hash-only URL rewrites the fragment of the current entry; anything
    /// else replaces the location wholesale.
    fn resolve(current: &Location, url: &str) -> Location {
        match url.strip_prefix('#') {
            Some(hash) => Location {
                path: current.path.clone(),
                query: current.query.clone(),
                hash: hash.to_string(),
            },
            None => Location::from_url(url),
        }
    }
}

impl LocationSource for MemoryLocation {
    fn current(&self) -> Location {
        let history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        history.entries[history.cursor].clone()
    }

    fn push(&self, url: &str) {
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        let next = Self::resolve(&history.entries[history.cursor], url);
        let cut = history.cursor + 1;
        history.entries.truncate(cut);
        history.entries.push(next);
        history.cursor += 1;
    }

    fn replace(&self, url: &str) {
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        let next = Self::resolve(&history.entries[history.cursor], url);
        let cursor = history.cursor;
        history.entries[cursor] = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn push_truncates_the_forward_branch() {
        let source = MemoryLocation::new();
        source.push("/a");
        source.push("/b");
        source.back();
        source.push("/c");
        assert_eq!(source.current().path, "/c");
        assert_eq!(source.depth(), 3); // "/", "/a", "/c"
    }

    #[test]
    fn replace_keeps_depth() {
        let source = MemoryLocation::new();
        source.push("/a");
        source.replace("/b");
        assert_eq!(source.current().path, "/b");
        assert_eq!(source.depth(), 2);
        source.back();
        assert_eq!(source.current().path, "/");
    }

    #[test]
    fn hash_push_rewrites_only_the_fragment() {
        let source = MemoryLocation::with_url("/index.html");
        source.push("#/users?id=1");
        let loc = source.current();
        assert_eq!(loc.path, "/index.html");
        assert_eq!(loc.hash, "/users?id=1");
    }

    #[tokio::test]
    async fn traversal_emits_popped_events() {
        let source = MemoryLocation::new();
        source.push("/a");
        let mut changes = source.changes();
        source.back();
        source.forward();
        source.back();
        // Oldest entry: no further event.
        source.back();
        drop(source);
        let mut seen = Vec::new();
        while let Some(event) = changes.next().await {
            seen.push(event);
        }
        assert_eq!(
            seen,
            vec![
                LocationEvent::Popped,
                LocationEvent::Popped,
                LocationEvent::Popped
            ]
        );
    }

    #[tokio::test]
    async fn link_activation_carries_the_href() {
        let source = MemoryLocation::new();
        let mut changes = source.changes();
        source.activate_link("/profile");
        assert_eq!(
            changes.next().await,
            Some(LocationEvent::LinkActivated {
                href: "/profile".to_string()
            })
        );
        // The location itself is untouched until the router navigates.
        assert_eq!(source.current().path, "/");
    }
}
