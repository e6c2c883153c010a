//! In-memory host used by tests, demos, and non-browser consumers.

use std::sync::Mutex;

use crate::platform::page::{ContentLoadedCallback, DocumentReadiness, HostPage};
use crate::platform::scope::GlobalScope;

/// A scriptable [`HostPage`]: readiness is settable, the content-loaded
/// signal is fired by hand, and the global scope can be absent entirely to
/// model hosts without a global execution context.
pub struct SimulatedPage {
    readiness: Mutex<DocumentReadiness>,
    pending: Mutex<Vec<ContentLoadedCallback>>,
    scope: Option<GlobalScope>,
}

impl SimulatedPage {
    /// A page still parsing its document.
    pub fn loading() -> Self {
        Self::with_readiness(DocumentReadiness::Loading)
    }

    /// A page whose document has already been parsed.
    pub fn parsed() -> Self {
        Self::with_readiness(DocumentReadiness::Complete)
    }

    pub fn with_readiness(readiness: DocumentReadiness) -> Self {
        Self {
            readiness: Mutex::new(readiness),
            pending: Mutex::new(Vec::new()),
            scope: Some(GlobalScope::new()),
        }
    }

    /// A host with no global execution context at all.
    pub fn detached() -> Self {
        Self {
            readiness: Mutex::new(DocumentReadiness::Complete),
            pending: Mutex::new(Vec::new()),
            scope: None,
        }
    }

    pub fn set_readiness(&self, readiness: DocumentReadiness) {
        *self.readiness.lock().unwrap() = readiness;
    }

    /// Number of callbacks still waiting for the content-loaded signal.
    pub fn pending_content_loaded(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Marks the document as parsed and delivers the signal to every queued
    /// callback, consuming them. Returns how many callbacks ran. Subsequent
    /// calls deliver nothing, matching the one-shot nature of the event.
    pub fn fire_content_loaded(&self) -> usize {
        self.set_readiness(DocumentReadiness::Complete);
        // Drain before running so a callback registering a new subscription
        // does not observe a half-delivered queue.
        let drained: Vec<ContentLoadedCallback> =
            self.pending.lock().unwrap().drain(..).collect();
        let count = drained.len();
        for callback in drained {
            callback();
        }
        count
    }
}

impl HostPage for SimulatedPage {
    fn readiness(&self) -> DocumentReadiness {
        *self.readiness.lock().unwrap()
    }

    fn on_content_loaded(&self, callback: ContentLoadedCallback) {
        self.pending.lock().unwrap().push(callback);
    }

    fn global_scope(&self) -> Option<&GlobalScope> {
        self.scope.as_ref()
    }
}
