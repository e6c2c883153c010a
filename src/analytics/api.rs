use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::analytics::constants::{ANALYTICS_LOGGER_NAME, ENTRY_POINT_NAME, INITIALIZED_MESSAGE};
use crate::logger::Logger;
use crate::platform::HostPage;

/// Readiness-gated bootstrap for the Vercel Web Analytics integration.
///
/// The handle is cheap to clone; clones share the injected host, the logger,
/// and the initialization counter. The vendor pipeline itself is assumed to
/// be loaded separately and is never touched from here.
#[derive(Clone)]
pub struct AnalyticsBootstrap {
    inner: Arc<BootstrapInner>,
}

struct BootstrapInner {
    host: Arc<dyn HostPage>,
    logger: Logger,
    init_count: AtomicUsize,
}

impl fmt::Debug for AnalyticsBootstrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyticsBootstrap")
            .field("readiness", &self.inner.host.readiness())
            .field("init_count", &self.init_count())
            .finish()
    }
}

impl AnalyticsBootstrap {
    pub fn new(host: Arc<dyn HostPage>) -> Self {
        Self::with_logger(host, Logger::new(ANALYTICS_LOGGER_NAME))
    }

    pub fn with_logger(host: Arc<dyn HostPage>, logger: Logger) -> Self {
        Self {
            inner: Arc::new(BootstrapInner {
                host,
                logger,
                init_count: AtomicUsize::new(0),
            }),
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.inner.logger
    }

    /// How many times [`AnalyticsBootstrap::initialize`] has taken effect.
    pub fn init_count(&self) -> usize {
        self.inner.init_count.load(Ordering::SeqCst)
    }

    /// Runs initialization. Total and synchronous: on a host without a global
    /// execution context this is a silent no-op, otherwise it emits the
    /// diagnostic line. Calling it again is not suppressed; N calls log N
    /// times.
    pub fn initialize(&self) {
        if self.inner.host.global_scope().is_none() {
            return;
        }
        self.inner.init_count.fetch_add(1, Ordering::SeqCst);
        self.inner.logger.info(INITIALIZED_MESSAGE);
    }

    /// The module entry behavior: publishes the manual hook under the fixed
    /// entry-point name, then either initializes immediately (document
    /// already parsed) or defers to a one-shot content-loaded callback.
    pub fn schedule(&self) {
        let scope = match self.inner.host.global_scope() {
            Some(scope) => scope,
            None => return,
        };

        let manual = self.clone();
        // The fixed name is never empty, so publication cannot fail here.
        let _ = scope.publish(ENTRY_POINT_NAME, move || manual.initialize());

        if self.inner.host.readiness().is_parsed() {
            self.initialize();
        } else {
            let deferred = self.clone();
            self.inner
                .host
                .on_content_loaded(Box::new(move || deferred.initialize()));
        }
    }
}

/// Builds a bootstrap for `host` and schedules it, mirroring the snippet's
/// module-evaluation behavior. The returned handle allows manual re-runs and
/// inspection.
pub fn schedule_initialize(host: Arc<dyn HostPage>) -> AnalyticsBootstrap {
    let bootstrap = AnalyticsBootstrap::new(host);
    bootstrap.schedule();
    bootstrap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::render_message;
    use crate::platform::SimulatedPage;
    use std::sync::{Arc, LazyLock, Mutex};

    static LOG_TEST_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    fn recording_bootstrap(host: Arc<SimulatedPage>) -> (AnalyticsBootstrap, Arc<Mutex<Vec<String>>>) {
        let bootstrap = AnalyticsBootstrap::new(host);
        let records = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&records);
        bootstrap.logger().set_log_handler(move |logger, level, args| {
            if level < logger.log_level() {
                return;
            }
            sink.lock().unwrap().push(render_message(args));
        });
        (bootstrap, records)
    }

    #[test]
    fn parsed_document_initializes_synchronously() {
        let _guard = LOG_TEST_MUTEX.lock().unwrap();
        let page = Arc::new(SimulatedPage::parsed());
        let (bootstrap, records) = recording_bootstrap(Arc::clone(&page));

        bootstrap.schedule();

        assert_eq!(records.lock().unwrap().as_slice(), [INITIALIZED_MESSAGE]);
        assert_eq!(bootstrap.init_count(), 1);
        // No subscription is created on the immediate path.
        assert_eq!(page.pending_content_loaded(), 0);
    }

    #[test]
    fn loading_document_defers_until_content_loaded() {
        let _guard = LOG_TEST_MUTEX.lock().unwrap();
        let page = Arc::new(SimulatedPage::loading());
        let (bootstrap, records) = recording_bootstrap(Arc::clone(&page));

        bootstrap.schedule();
        assert!(records.lock().unwrap().is_empty());
        assert_eq!(bootstrap.init_count(), 0);
        assert_eq!(page.pending_content_loaded(), 1);

        page.fire_content_loaded();
        assert_eq!(records.lock().unwrap().as_slice(), [INITIALIZED_MESSAGE]);
        assert_eq!(bootstrap.init_count(), 1);

        // The subscription was one-shot; re-firing changes nothing.
        page.fire_content_loaded();
        assert_eq!(bootstrap.init_count(), 1);
    }

    #[test]
    fn entry_point_is_published_and_matches_the_automatic_path() {
        let _guard = LOG_TEST_MUTEX.lock().unwrap();
        let page = Arc::new(SimulatedPage::parsed());
        let (bootstrap, records) = recording_bootstrap(Arc::clone(&page));

        bootstrap.schedule();

        let scope = page.global_scope().unwrap();
        let manual = scope.entry_point(ENTRY_POINT_NAME).unwrap();
        manual();
        manual();

        assert_eq!(
            records.lock().unwrap().as_slice(),
            [INITIALIZED_MESSAGE, INITIALIZED_MESSAGE, INITIALIZED_MESSAGE]
        );
        assert_eq!(bootstrap.init_count(), 3);
    }

    #[test]
    fn manual_invocation_before_content_loaded_is_not_suppressed() {
        let _guard = LOG_TEST_MUTEX.lock().unwrap();
        let page = Arc::new(SimulatedPage::loading());
        let (bootstrap, records) = recording_bootstrap(Arc::clone(&page));

        bootstrap.schedule();
        let manual = page
            .global_scope()
            .unwrap()
            .entry_point(ENTRY_POINT_NAME)
            .unwrap();

        // Manual call works even before parsing finishes...
        manual();
        assert_eq!(bootstrap.init_count(), 1);

        // ...and the automatic deferred run still happens exactly once.
        page.fire_content_loaded();
        assert_eq!(bootstrap.init_count(), 2);
        assert_eq!(records.lock().unwrap().len(), 2);
    }

    #[test]
    fn detached_host_never_logs_and_never_panics() {
        let _guard = LOG_TEST_MUTEX.lock().unwrap();
        let page = Arc::new(SimulatedPage::detached());
        let (bootstrap, records) = recording_bootstrap(Arc::clone(&page));

        bootstrap.schedule();
        for _ in 0..3 {
            bootstrap.initialize();
        }

        assert!(records.lock().unwrap().is_empty());
        assert_eq!(bootstrap.init_count(), 0);
    }

    #[test]
    fn schedule_initialize_covers_the_whole_entry_behavior() {
        let _guard = LOG_TEST_MUTEX.lock().unwrap();
        let page = Arc::new(SimulatedPage::parsed());
        let bootstrap = schedule_initialize(page.clone());

        assert_eq!(bootstrap.init_count(), 1);
        assert!(page.global_scope().unwrap().contains(ENTRY_POINT_NAME));
    }
}
