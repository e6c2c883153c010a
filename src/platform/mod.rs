mod page;
mod scope;
mod simulated;

#[cfg(all(target_arch = "wasm32", feature = "wasm-web"))]
pub mod browser;

pub use page::{ContentLoadedCallback, DocumentReadiness, HostPage};
pub use scope::{EntryPoint, GlobalScope};
pub use simulated::SimulatedPage;
