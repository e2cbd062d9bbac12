//! Release event notifications.
//!
//! The registry publishes a structured event per successful release to an
//! injected sink. The sink is a collaborator behind a trait so it can be a
//! no-op in production wiring or a recorder in tests; it is notified after
//! the state transition commits and is never awaited.

use std::sync::Mutex;

/// Notification emitted exactly once per successful release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRelease {
    /// Name of the released package.
    pub package_name: String,

    /// Released version.
    pub version: String,

    /// Manifest locator recorded for the release.
    pub manifest_uri: String,
}

/// Receiver for release notifications.
pub trait EventSink: Send + Sync {
    /// Called once per successful release, after the registry state changed.
    fn version_release(&self, event: &VersionRelease);
}

/// Sink that drops every event.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn version_release(&self, _event: &VersionRelease) {}
}

/// Sink that records every event, for tests and inspection.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<VersionRelease>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far, in emission order.
    pub fn recorded(&self) -> Vec<VersionRelease> {
        self.events.lock().unwrap().clone()
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl EventSink for RecordingSink {
    fn version_release(&self, event: &VersionRelease) {
        self.events.lock().unwrap().push(event.clone());
    }
}
