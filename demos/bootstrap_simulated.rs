//! Walks through both scheduling paths of the bootstrap on a simulated host.
//! Run with `cargo run --example bootstrap_simulated`.

use std::sync::Arc;

use vercel_analytics_rs::analytics::{schedule_initialize, ENTRY_POINT_NAME};
use vercel_analytics_rs::platform::{HostPage, SimulatedPage};

fn main() {
    // Deferred path: the document is still parsing when the module loads.
    let page = Arc::new(SimulatedPage::loading());
    let bootstrap = schedule_initialize(page.clone());
    println!("scheduled while loading, init_count = {}", bootstrap.init_count());

    page.fire_content_loaded();
    println!("content loaded, init_count = {}", bootstrap.init_count());

    // Manual path: the published hook can be re-invoked at any time.
    let manual = page
        .global_scope()
        .expect("simulated page has a global scope")
        .entry_point(ENTRY_POINT_NAME)
        .expect("entry point published during scheduling");
    manual();
    println!("after manual re-run, init_count = {}", bootstrap.init_count());

    // Immediate path: an already-parsed document initializes synchronously.
    let parsed = Arc::new(SimulatedPage::parsed());
    let immediate = schedule_initialize(parsed);
    println!("immediate path, init_count = {}", immediate.init_count());
}
