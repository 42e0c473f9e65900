use std::sync::Arc;

use crate::optimization::optimizer::ResumeOptimizer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable: every request builds its own form state.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable optimizer. Default: GeminiOptimizer.
    pub optimizer: Arc<dyn ResumeOptimizer>,
}
