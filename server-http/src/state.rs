use std::sync::Arc;
use vortex::facade::CacheFacade;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CacheFacade>,
}

impl AppState {
    pub fn new(cache: Arc<CacheFacade>) -> Self {
        Self { cache }
    }
}
