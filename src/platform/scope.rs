//! Explicit stand-in for the host's global namespace.
//!
//! The upstream snippet hangs its entry point directly on `window`; here each
//! host owns a `GlobalScope` registry instead, so publication is an explicit,
//! testable operation rather than ambient mutation.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::analytics::error::{invalid_argument, AnalyticsResult};

/// A callable published on the global scope.
pub type EntryPoint = Arc<dyn Fn() + 'static>;

#[derive(Default)]
pub struct GlobalScope {
    entries: Mutex<BTreeMap<String, EntryPoint>>,
}

impl GlobalScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `entry` under `name`. Re-publishing overwrites the previous
    /// binding, matching the overwrite-safe semantics of a global property
    /// assignment.
    pub fn publish<F>(&self, name: impl Into<String>, entry: F) -> AnalyticsResult<()>
    where
        F: Fn() + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(invalid_argument("Entry point name must not be empty"));
        }
        self.entries.lock().unwrap().insert(name, Arc::new(entry));
        Ok(())
    }

    pub fn entry_point(&self, name: &str) -> Option<EntryPoint> {
        self.entries.lock().unwrap().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.lock().unwrap().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.lock().unwrap().keys().cloned().collect()
    }

    pub fn reset(&self) {
        self.entries.lock().unwrap().clear();
    }
}
