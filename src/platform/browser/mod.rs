//! Browser-backed host for wasm targets.

#![cfg(all(target_arch = "wasm32", feature = "wasm-web"))]

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::analytics::error::{invalid_argument, unsupported_environment, AnalyticsResult};
use crate::platform::page::{ContentLoadedCallback, DocumentReadiness, HostPage};
use crate::platform::scope::GlobalScope;

/// [`HostPage`] backed by the real page: readiness comes from
/// `document.readyState` and the content-loaded signal from a one-shot
/// `DOMContentLoaded` listener.
pub struct BrowserPage {
    document: web_sys::Document,
    scope: GlobalScope,
}

impl BrowserPage {
    pub fn new() -> AnalyticsResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| unsupported_environment("Window not available"))?;
        let document = window
            .document()
            .ok_or_else(|| unsupported_environment("Document not available"))?;
        Ok(Self {
            document,
            scope: GlobalScope::new(),
        })
    }

    /// Mirrors an entry point already published on the Rust-side scope onto
    /// the JS global, so page scripts and the devtools console can call it.
    pub fn expose_entry_point(&self, name: &str) -> AnalyticsResult<()> {
        let entry = self
            .scope
            .entry_point(name)
            .ok_or_else(|| invalid_argument(format!("No entry point published as {name}")))?;
        let closure = Closure::wrap(Box::new(move || entry()) as Box<dyn FnMut()>);
        js_sys::Reflect::set(
            &js_sys::global(),
            &JsValue::from_str(name),
            closure.as_ref().unchecked_ref(),
        )
        .map_err(|err| {
            unsupported_environment(format!("Failed to expose {name} on the global: {err:?}"))
        })?;
        closure.forget();
        Ok(())
    }
}

impl HostPage for BrowserPage {
    fn readiness(&self) -> DocumentReadiness {
        DocumentReadiness::from_ready_state(&self.document.ready_state())
    }

    fn on_content_loaded(&self, callback: ContentLoadedCallback) {
        let closure = Closure::once(callback);
        let registered = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        if registered.is_ok() {
            // The listener fires at most once per page load; leaking the
            // closure is the usual way to keep it alive until then.
            closure.forget();
        }
    }

    fn global_scope(&self) -> Option<&GlobalScope> {
        Some(&self.scope)
    }
}
