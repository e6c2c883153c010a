//! Host-page abstraction the bootstrap is written against.
//!
//! Instead of probing an ambient global the way the upstream snippet checks
//! `typeof window`, consumers inject an implementation of [`HostPage`]. A
//! host without a [`GlobalScope`] models a non-browser-like environment in
//! which the bootstrap silently does nothing.

use crate::platform::scope::GlobalScope;

/// Parsing state of the host document, mirroring the DOM `readyState` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentReadiness {
    Loading,
    Interactive,
    Complete,
}

impl DocumentReadiness {
    /// Whether structural content is available, i.e. anything past `loading`.
    pub fn is_parsed(self) -> bool {
        !matches!(self, DocumentReadiness::Loading)
    }

    /// Maps a raw `readyState` string. Unknown values are treated as
    /// `Complete`, which degrades to immediate initialization.
    pub fn from_ready_state(state: &str) -> Self {
        match state {
            "loading" => DocumentReadiness::Loading,
            "interactive" => DocumentReadiness::Interactive,
            _ => DocumentReadiness::Complete,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentReadiness::Loading => "loading",
            DocumentReadiness::Interactive => "interactive",
            DocumentReadiness::Complete => "complete",
        }
    }
}

/// One-shot callback invoked when the host signals that document parsing has
/// completed.
pub type ContentLoadedCallback = Box<dyn FnOnce() + 'static>;

/// Capabilities the bootstrap needs from its host environment: a readiness
/// query, a one-shot "content loaded" subscription, and (for browser-like
/// hosts) a global scope to publish the manual entry point into.
///
/// Implementations are single-threaded by design; browser hosts cannot cross
/// threads, so the trait does not ask for `Send` or `Sync`.
pub trait HostPage {
    fn readiness(&self) -> DocumentReadiness;

    /// Registers `callback` to run once, after parsing completes. Hosts whose
    /// document has already been parsed never deliver the signal again, so
    /// callers are expected to check [`HostPage::readiness`] first.
    fn on_content_loaded(&self, callback: ContentLoadedCallback);

    /// The global scope of this host, or `None` when no global execution
    /// context exists.
    fn global_scope(&self) -> Option<&GlobalScope>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_state_strings_map_to_readiness() {
        assert_eq!(
            DocumentReadiness::from_ready_state("loading"),
            DocumentReadiness::Loading
        );
        assert_eq!(
            DocumentReadiness::from_ready_state("interactive"),
            DocumentReadiness::Interactive
        );
        assert_eq!(
            DocumentReadiness::from_ready_state("complete"),
            DocumentReadiness::Complete
        );
        assert_eq!(
            DocumentReadiness::from_ready_state("garbage"),
            DocumentReadiness::Complete
        );
    }

    #[test]
    fn only_loading_counts_as_unparsed() {
        assert!(!DocumentReadiness::Loading.is_parsed());
        assert!(DocumentReadiness::Interactive.is_parsed());
        assert!(DocumentReadiness::Complete.is_parsed());
    }
}
