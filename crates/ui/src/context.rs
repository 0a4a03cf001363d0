use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use services::MethodologyService;

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn initial_methodology(&self) -> Option<u64>;

    fn methodologies(&self) -> Arc<MethodologyService>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    initial_methodology: Option<u64>,
    initial_methodology_pending: Arc<AtomicBool>,
    methodologies: Arc<MethodologyService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let initial_methodology = app.initial_methodology();
        Self {
            app_name: app.app_name().to_owned(),
            initial_methodology,
            initial_methodology_pending: Arc::new(AtomicBool::new(initial_methodology.is_some())),
            methodologies: app.methodologies(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Methodology requested on the command line. Yields it once, then `None`.
    #[must_use]
    pub fn take_initial_methodology(&self) -> Option<u64> {
        if self.initial_methodology_pending.swap(false, Ordering::AcqRel) {
            self.initial_methodology
        } else {
            None
        }
    }

    #[must_use]
    pub fn methodologies(&self) -> Arc<MethodologyService> {
        Arc::clone(&self.methodologies)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
